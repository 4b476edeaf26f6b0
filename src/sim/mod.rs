//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Time only enters through `tick`/`advance`
//! - Seeded RNG only, owned by the game state
//! - No rendering, terminal or platform dependencies

pub mod arc;
pub mod entity;
pub mod ring;
pub mod state;
pub mod tick;

pub use arc::ArcSegment;
pub use entity::{Ball, Bar, Bullet, Entity, Intensity, Obstacle};
pub use ring::{Difficulty, generate_angle_arrangement, generate_inner_ring};
pub use state::{GameEvent, GameState, Highlight};
pub use tick::tick;
