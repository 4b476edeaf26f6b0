//! Grid sampling of the playfield
//!
//! Each cell of a fixed-size grid is mapped to a point of the normalized
//! plane and classified by querying the game state. No terminal I/O here.

use glam::Vec2;

use crate::sim::{Entity, GameState, Intensity};

/// What a single cell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Obstacle rim
    Half,
    /// Obstacle body
    Full,
    /// Bullet marker (live shot or aim preview)
    Bullet,
    /// Centre of the playfield
    Crosshair,
}

/// A sampled view of the playfield
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub level: u32,
    pub width: u16,
    pub height: u16,
    /// Row-major cells
    pub cells: Vec<Cell>,
}

impl Frame {
    pub fn cell(&self, x: u16, y: u16) -> Cell {
        self.cells[y as usize * self.width as usize + x as usize]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.width as usize)
    }
}

/// Normalized-plane point for a grid cell
#[inline]
pub fn cell_to_point(x: u16, y: u16, width: u16, height: u16) -> Vec2 {
    Vec2::new(
        2.0 * x as f32 / (width - 1) as f32 - 1.0,
        2.0 * y as f32 / (height - 1) as f32 - 1.0,
    )
}

/// Sample the whole grid
///
/// `width` and `height` must both be at least 2.
pub fn sample(state: &GameState, width: u16, height: u16) -> Frame {
    debug_assert!(width >= 2 && height >= 2, "grid too small: {width}x{height}");

    let marker = state.marker_bullet();
    let mut cells = Vec::with_capacity(width as usize * height as usize);

    for y in 0..height {
        for x in 0..width {
            let p = cell_to_point(x, y, width, height);

            let cell = match state.obstacle_intensity(p) {
                Intensity::Full => Cell::Full,
                Intensity::Half => Cell::Half,
                Intensity::None if marker.pixel_test(p).is_hit() => Cell::Bullet,
                Intensity::None if p == Vec2::ZERO => Cell::Crosshair,
                Intensity::None => Cell::Empty,
            };
            cells.push(cell);
        }
    }

    Frame {
        level: state.level,
        width,
        height,
        cells,
    }
}
