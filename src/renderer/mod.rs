//! Rendering module
//!
//! The playfield is sampled into a grid of cells, then drawn with crossterm.

pub mod sample;
pub mod terminal;

pub use sample::{Cell, Frame, sample};
