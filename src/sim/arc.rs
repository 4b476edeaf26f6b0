//! Angular window geometry for bars
//!
//! An arc segment is an angular extent measured in turns:
//! - start: where the arc begins, normalized to [0, 1)
//! - span: how far it extends counterclockwise
//!
//! The end may land past the 0/1 seam, in which case membership wraps.

use serde::{Deserialize, Serialize};

use crate::normalize_turns;

/// An angular window in turns
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcSegment {
    /// Start angle (turns, normalized to [0, 1))
    pub start: f32,
    /// End angle (turns, normalized to [0, 1))
    pub end: f32,
}

impl ArcSegment {
    pub fn new(start: f32, span: f32) -> Self {
        let start = normalize_turns(start);
        Self {
            start,
            end: (start + span) % 1.0,
        }
    }

    /// Whether the arc crosses the 0/1 seam
    #[inline]
    pub fn wraps(&self) -> bool {
        self.end <= self.start
    }

    /// Angular span of the arc (handles wraparound)
    pub fn angular_span(&self) -> f32 {
        let mut span = self.end - self.start;
        if span < 0.0 {
            span += 1.0;
        }
        span
    }

    /// Check if an angle (turns, already in [0, 1)) is within the arc
    pub fn contains_turn(&self, turn: f32) -> bool {
        if self.wraps() {
            turn >= self.start || turn <= self.end
        } else {
            turn >= self.start && turn <= self.end
        }
    }
}
