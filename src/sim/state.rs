//! Game state and level progression
//!
//! All gameplay state lives here and is only mutated through the methods
//! below. The ring is never edited in place: every transition throws the
//! old one away and generates a fresh one.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::entity::{Bullet, Entity, Intensity, Obstacle};
use super::ring::{Difficulty, generate_inner_ring};
use crate::consts::*;

/// Transient feedback shown after a transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum Highlight {
    #[default]
    None,
    /// A ring was cleared
    Next,
    /// The bullet struck an obstacle
    Hit,
}

/// Level transitions reported by a hit test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The bullet left the playfield; `level` is the new level
    LevelCleared { level: u32 },
    /// The bullet struck an obstacle at `from_level`
    ProgressionReset { from_level: u32 },
}

/// Complete game state
#[derive(Debug, Clone, Serialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    #[serde(skip)]
    rng: Pcg32,
    /// Current level (0-based)
    pub level: u32,
    /// Player aim (turns, not normalized)
    pub player_angle: f32,
    /// Obstacles of the active ring
    pub items: Vec<Obstacle>,
    /// The in-flight bullet, if any
    pub bullet: Option<Bullet>,
    pub highlight: Highlight,
    /// Ticks until `highlight` clears
    pub highlight_timer: u32,
    /// Bumped every time the ring is regenerated
    pub ring_generation: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game with a freshly generated first ring
    pub fn new(seed: u64) -> Self {
        let mut state = Self::with_items(seed, Vec::new());
        state.start();
        state
    }

    /// Create a game around a prepared ring, without generating one
    pub fn with_items(seed: u64, items: Vec<Obstacle>) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            level: 0,
            player_angle: 0.0,
            items,
            bullet: None,
            highlight: Highlight::None,
            highlight_timer: 0,
            ring_generation: 0,
            time_ticks: 0,
        }
    }

    /// Regenerate the ring for the current level
    pub fn start(&mut self) {
        let difficulty = Difficulty::for_level(self.level);
        self.items = generate_inner_ring(&mut self.rng, difficulty, RING_DISTANCE);
        self.ring_generation += 1;
    }

    /// Ring cleared: move up one level
    pub fn next_level(&mut self) {
        self.bullet = None;
        self.level += 1;
        self.start();
        self.set_highlight(Highlight::Next);
    }

    /// Obstacle hit: back to level 0
    pub fn reset_progression(&mut self) {
        self.bullet = None;
        self.level = 0;
        self.start();
        self.set_highlight(Highlight::Hit);
    }

    fn set_highlight(&mut self, highlight: Highlight) {
        self.highlight = highlight;
        self.highlight_timer = HIGHLIGHT_TICKS;
    }

    /// Fire along the current aim. Returns false if a bullet is already out.
    pub fn shoot(&mut self) -> bool {
        if self.bullet.is_some() {
            return false;
        }

        let bullet = Bullet::aimed(self.player_angle, BULLET_SPEED);
        log::debug!("Shot fired from {:?} at level {}", bullet.pos, self.level);
        self.bullet = Some(bullet);
        true
    }

    /// Resolve the bullet against the ring and the playfield edge
    ///
    /// At most one transition fires per call.
    pub fn hit_test(&mut self) -> Option<GameEvent> {
        let pos = self.bullet.as_ref()?.pos;

        if self.items.iter().any(|item| item.pixel_test(pos).is_hit()) {
            let from_level = self.level;
            self.reset_progression();
            log::info!("Hit an obstacle at level {}, progression reset", from_level);
            Some(GameEvent::ProgressionReset { from_level })
        } else if pos.length() > PLAYFIELD_EXIT_RADIUS {
            self.next_level();
            log::info!("Ring cleared, now at level {}", self.level);
            Some(GameEvent::LevelCleared { level: self.level })
        } else {
            None
        }
    }

    /// Move everything forward by `dt` seconds of wall time
    pub fn advance(&mut self, dt: f32) {
        let dt = dt * TIME_SCALE;

        for item in &mut self.items {
            item.advance(dt);
        }
        if let Some(bullet) = &mut self.bullet {
            bullet.advance(dt);
        }

        // Aim turns against the ring so the two drift past each other
        self.player_angle -= dt;
    }

    /// Count the highlight down by one tick
    pub fn decay_highlight(&mut self) {
        if self.highlight_timer == 0 {
            return;
        }
        self.highlight_timer -= 1;
        if self.highlight_timer == 0 {
            log::trace!("Highlight {:?} expired", self.highlight);
            self.highlight = Highlight::None;
        }
    }

    /// Strongest obstacle coverage of `p`
    pub fn obstacle_intensity(&self, p: Vec2) -> Intensity {
        self.items
            .iter()
            .map(|item| item.pixel_test(p))
            .max()
            .unwrap_or_default()
    }

    /// The bullet to draw: the live one, or a resting one showing the aim
    pub fn marker_bullet(&self) -> Bullet {
        match &self.bullet {
            Some(bullet) => bullet.clone(),
            None => Bullet::aimed(self.player_angle, 0.0),
        }
    }
}
