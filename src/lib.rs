//! Ring Shot - a terminal arcade game
//!
//! The player sits at the centre of the playfield and fires a single bullet
//! outward through a ring of rotating obstacles. Clearing the ring advances
//! the level; touching an obstacle resets progress.
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, ring generation, game state)
//! - `renderer`: Grid sampling and terminal drawing
//! - `input`: Key event to action mapping
//! - `app`: Fixed-rate scheduler that drives the simulation
//! - `settings`: Runtime configuration and its validation

pub mod app;
pub mod error;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::Error;
pub use settings::Settings;

use glam::Vec2;

/// Game configuration constants
///
/// Angles are in turns (1.0 = one full revolution). Positions live in the
/// normalized plane, where the visible playfield spans `[-1, 1]` on both axes.
pub mod consts {
    /// Default tick rate of the scheduler
    pub const DEFAULT_FPS: f32 = 30.0;
    /// Elapsed time is scaled by this before moving anything
    pub const TIME_SCALE: f32 = 1.0 / 3.0;

    /// Radius at which obstacle rings are placed
    pub const RING_DISTANCE: f32 = 0.7;
    /// Levels above this use the medium generator tier
    pub const MEDIUM_DIFFICULTY_AFTER_LEVEL: u32 = 6;

    /// Ball radii
    pub const BALL_RADIUS: f32 = 0.3;
    pub const SMALL_BALL_RADIUS: f32 = 0.15;
    /// Fraction of a ball's radius drawn at full intensity
    pub const BALL_CORE: f32 = 0.9;

    /// Half-thickness of a bar
    pub const BAR_RADIUS: f32 = 0.06;
    /// Fraction of a bar's half-thickness drawn at full intensity
    pub const BAR_CORE: f32 = 0.7;

    /// Angular offset of companion balls (turns)
    pub const COMPANION_OFFSET: f32 = 0.08;
    pub const COMPANION_CHANCE: f64 = 0.3;
    /// Chance that a bar gets a small ball on each end
    pub const BAR_CAP_CHANCE: f64 = 0.5;

    /// Bullet launch parameters
    pub const BULLET_SPAWN_DISTANCE: f32 = 0.1;
    pub const BULLET_SPEED: f32 = 10.0;
    /// Radius of the drawn bullet marker
    pub const BULLET_MARKER_RADIUS: f32 = 0.05;
    /// A bullet further than this from the centre has left the playfield
    pub const PLAYFIELD_EXIT_RADIUS: f32 = 1.6;

    /// Ticks a level-transition highlight stays up
    pub const HIGHLIGHT_TICKS: u32 = 4;

    /// Sampled playfield size (cells)
    pub const GRID_WIDTH: u16 = 53;
    pub const GRID_HEIGHT: u16 = 25;
}

/// Reduce an angle in turns to `[0, 1)`
#[inline]
pub fn normalize_turns(turns: f32) -> f32 {
    let t = turns.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if t >= 1.0 { 0.0 } else { t }
}

#[inline]
pub fn turns_to_radians(turns: f32) -> f32 {
    turns * std::f32::consts::TAU
}

/// Convert polar (distance, turns) to cartesian (x, y)
#[inline]
pub fn polar_to_cartesian(distance: f32, turns: f32) -> Vec2 {
    let theta = turns_to_radians(turns);
    Vec2::new(theta.cos() * distance, theta.sin() * distance)
}

/// Angle of a cartesian point around the origin, in turns within `[0, 1)`
#[inline]
pub fn cartesian_to_turns(pos: Vec2) -> f32 {
    let mut theta = pos.y.atan2(pos.x);
    if theta < 0.0 {
        theta += std::f32::consts::TAU;
    }
    normalize_turns(theta / std::f32::consts::TAU)
}
