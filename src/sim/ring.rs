//! Procedural ring generation
//!
//! A ring is a handful of slots spread evenly around the circle. Each slot
//! holds either a ball or a bar that bridges to the next slot, optionally
//! decorated with smaller balls. Higher tiers mean more slots and more
//! decorations, not new shapes.

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::entity::{Ball, Bar, Obstacle};
use crate::consts::*;
use crate::normalize_turns;

/// Generator tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Numeric tier (1-3)
    pub fn tier(self) -> u32 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Medium => 2,
            Difficulty::Hard => 3,
        }
    }

    /// Tier used for a given level. Hard is never selected here.
    pub fn for_level(level: u32) -> Self {
        if level > MEDIUM_DIFFICULTY_AFTER_LEVEL {
            Difficulty::Medium
        } else {
            Difficulty::Easy
        }
    }

    /// Base slot count before the random bonus
    fn base_slots<R: Rng + ?Sized>(self, rng: &mut R) -> usize {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => rng.random_range(2..=3),
            Difficulty::Hard => 4,
        }
    }
}

/// Evenly spaced slot angles (turns) with a small asymmetric nudge
///
/// Four-slot rings nudge every odd slot; six-slot rings that are not small
/// nudge slots `i % 3 == 0` and `i % 3 == 1` in opposite directions. The
/// direction is picked once per ring. Output is in slot order, each value
/// in `[0, 1)`.
pub fn generate_angle_arrangement<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    is_small: bool,
    _is_easy: bool,
) -> Vec<f32> {
    let angle_between = 1.0 / n as f32;
    let shift = angle_between / 3.0;
    let sign = if rng.random_bool(0.5) { 1.0 } else { -1.0 };

    (0..n)
        .map(|i| {
            let mut angle = i as f32 * angle_between;

            if n == 4 && i % 2 == 1 {
                angle += sign * shift;
            } else if n == 6 && !is_small {
                match i % 3 {
                    0 => angle += sign * shift,
                    1 => angle -= sign * shift,
                    _ => {}
                }
            }

            normalize_turns(angle)
        })
        .collect()
}

/// Random 0-2 extra slots, weighted toward one
fn bonus_slots<R: Rng + ?Sized>(rng: &mut R) -> usize {
    (rng.random::<f32>() * 2.0).round() as usize
}

/// Generate one ring of obstacles at `distance` from the centre
pub fn generate_inner_ring<R: Rng + ?Sized>(
    rng: &mut R,
    difficulty: Difficulty,
    distance: f32,
) -> Vec<Obstacle> {
    let n = difficulty.base_slots(rng) + bonus_slots(rng);
    let angles = generate_angle_arrangement(rng, n, true, difficulty < Difficulty::Hard);

    let mut items: Vec<Obstacle> = Vec::with_capacity(n * 3);

    for (i, &angle) in angles.iter().enumerate() {
        // Slot 0 is always a ball so a bar never has to bridge from nothing
        let is_ball = rng.random_bool(0.5) || i == 0;

        if is_ball {
            items.push(Ball::new(angle, distance, BALL_RADIUS).into());

            if rng.random_bool(COMPANION_CHANCE) && difficulty > Difficulty::Easy && i > 0 {
                items.push(Ball::new(angle + COMPANION_OFFSET, distance, SMALL_BALL_RADIUS).into());
                items.push(Ball::new(angle - COMPANION_OFFSET, distance, SMALL_BALL_RADIUS).into());
            }
        } else {
            let mut angle_length = angles[(i + 1) % n] - angle;
            if angle_length < 0.0 {
                angle_length += 1.0;
            }

            items.push(Bar::new(angle, angle_length, distance, BAR_RADIUS).into());

            if rng.random_bool(BAR_CAP_CHANCE) {
                items.push(Ball::new(angle, distance, SMALL_BALL_RADIUS).into());
                items.push(Ball::new(angle + angle_length, distance, SMALL_BALL_RADIUS).into());
            }
        }
    }

    log::debug!(
        "Generated ring: tier={}, slots={}, entities={}",
        difficulty.tier(),
        n,
        items.len()
    );

    items
}
