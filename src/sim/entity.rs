//! Obstacles and the projectile
//!
//! Every entity answers two questions: how it moves over time, and how
//! strongly it covers a point of the normalized plane. Entities never look
//! at each other; the game state does all the cross-checking.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::arc::ArcSegment;
use crate::consts::*;
use crate::{cartesian_to_turns, polar_to_cartesian};

/// How strongly an entity covers a sampled point
///
/// Ordered so that the strongest coverage wins when compositing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub enum Intensity {
    #[default]
    None,
    /// Anti-aliased rim
    Half,
    Full,
}

impl Intensity {
    /// Any coverage counts as a collision
    #[inline]
    pub fn is_hit(self) -> bool {
        self != Intensity::None
    }
}

/// Shared behaviour of everything on the playfield
pub trait Entity {
    /// Move forward by `dt` (already time-scaled)
    fn advance(&mut self, dt: f32);

    /// Coverage of the point `p`
    fn pixel_test(&self, p: Vec2) -> Intensity;
}

/// A disc orbiting the centre at a fixed distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    /// Orbit angle (turns, not normalized)
    pub angle: f32,
    pub distance: f32,
    pub radius: f32,
}

impl Ball {
    pub fn new(angle: f32, distance: f32, radius: f32) -> Self {
        Self {
            angle,
            distance,
            radius,
        }
    }

    /// Current centre in the normalized plane
    pub fn center(&self) -> Vec2 {
        polar_to_cartesian(self.distance, self.angle)
    }
}

impl Entity for Ball {
    fn advance(&mut self, dt: f32) {
        self.angle += dt;
    }

    fn pixel_test(&self, p: Vec2) -> Intensity {
        let d = self.center().distance(p);

        if d > self.radius {
            Intensity::None
        } else if d > self.radius * BALL_CORE {
            Intensity::Half
        } else {
            Intensity::Full
        }
    }
}

/// An arc-shaped wall at a fixed distance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Start of the arc (turns, not normalized)
    pub angle_start: f32,
    /// Angular span (turns)
    pub angle_length: f32,
    /// Centreline distance from the origin
    pub distance: f32,
    /// Radial half-thickness
    pub radius: f32,
}

impl Bar {
    pub fn new(angle_start: f32, angle_length: f32, distance: f32, radius: f32) -> Self {
        Self {
            angle_start,
            angle_length,
            distance,
            radius,
        }
    }

    pub fn arc(&self) -> ArcSegment {
        ArcSegment::new(self.angle_start, self.angle_length)
    }
}

impl Entity for Bar {
    fn advance(&mut self, dt: f32) {
        self.angle_start += dt;
    }

    fn pixel_test(&self, p: Vec2) -> Intensity {
        if !self.arc().contains_turn(cartesian_to_turns(p)) {
            return Intensity::None;
        }

        let r = (p.length() - self.distance).abs();

        if r > self.radius {
            Intensity::None
        } else if r > self.radius * BAR_CORE {
            Intensity::Half
        } else {
            Intensity::Full
        }
    }
}

/// The player's projectile, the only entity that moves in a straight line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bullet {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Bullet {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// A bullet leaving the centre along `turns` at the given speed
    pub fn aimed(turns: f32, speed: f32) -> Self {
        let dir = polar_to_cartesian(1.0, turns);
        Self {
            pos: dir * BULLET_SPAWN_DISTANCE,
            vel: dir * speed,
        }
    }
}

impl Entity for Bullet {
    fn advance(&mut self, dt: f32) {
        self.pos += self.vel * dt;
    }

    /// Marker shape only; collisions are always tested from the obstacle side
    fn pixel_test(&self, p: Vec2) -> Intensity {
        if self.pos.distance(p) <= BULLET_MARKER_RADIUS {
            Intensity::Full
        } else {
            Intensity::None
        }
    }
}

/// One member of a ring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Obstacle {
    Ball(Ball),
    Bar(Bar),
}

impl Entity for Obstacle {
    fn advance(&mut self, dt: f32) {
        match self {
            Obstacle::Ball(ball) => ball.advance(dt),
            Obstacle::Bar(bar) => bar.advance(dt),
        }
    }

    fn pixel_test(&self, p: Vec2) -> Intensity {
        match self {
            Obstacle::Ball(ball) => ball.pixel_test(p),
            Obstacle::Bar(bar) => bar.pixel_test(p),
        }
    }
}

impl From<Ball> for Obstacle {
    fn from(ball: Ball) -> Self {
        Obstacle::Ball(ball)
    }
}

impl From<Bar> for Obstacle {
    fn from(bar: Bar) -> Self {
        Obstacle::Bar(bar)
    }
}
