//! The player's ship
//!
//! One call to any operation is one frame's worth of change; there is no
//! delta time. Heading is in degrees, 0 = up, increasing clockwise, and the
//! field is toroidal.

use glam::Vec2;
use serde::Serialize;

use super::star::Star;
use crate::consts::*;
use crate::render::{Renderer, SpriteId, ZLayer};
use crate::{heading_to_vector, normalize_degrees, wrap_coordinate};

/// Ship handling, fixed for a session
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlayerTuning {
    pub field_width: f32,
    pub field_height: f32,
    /// Degrees per turn call
    pub turn_step: f32,
    /// Speed added per accelerate call
    pub accel: f32,
    /// Velocity multiplier after each move (1.0 = none)
    pub friction: f32,
    /// Speed clamp after accelerate (None = unbounded)
    pub max_speed: Option<f32>,
    /// Stars strictly closer than this are collected
    pub collect_radius: f32,
}

impl Default for PlayerTuning {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            turn_step: TURN_STEP,
            accel: ACCEL,
            friction: 1.0,
            max_speed: None,
            collect_radius: COLLECT_RADIUS,
        }
    }
}

/// The controlled ship
#[derive(Debug, Clone, Serialize)]
pub struct Player {
    pub pos: Vec2,
    /// Degrees in [0, 360)
    pub heading: f32,
    pub vel: Vec2,
    pub score: u64,
    #[serde(skip)]
    tuning: PlayerTuning,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(PlayerTuning::default())
    }
}

impl Player {
    pub fn new(tuning: PlayerTuning) -> Self {
        Self {
            pos: Vec2::ZERO,
            heading: 0.0,
            vel: Vec2::ZERO,
            score: 0,
            tuning,
        }
    }

    pub fn tuning(&self) -> &PlayerTuning {
        &self.tuning
    }

    /// Place the ship, wrapped into the field
    pub fn warp(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(
            wrap_coordinate(x, self.tuning.field_width),
            wrap_coordinate(y, self.tuning.field_height),
        );
    }

    pub fn turn_left(&mut self) {
        self.heading = normalize_degrees(self.heading - self.tuning.turn_step);
    }

    pub fn turn_right(&mut self) {
        self.heading = normalize_degrees(self.heading + self.tuning.turn_step);
    }

    /// Add one thrust impulse along the current heading
    pub fn accelerate(&mut self) {
        self.vel += heading_to_vector(self.heading) * self.tuning.accel;
        if let Some(max_speed) = self.tuning.max_speed {
            self.vel = self.vel.clamp_length_max(max_speed);
        }
    }

    /// Integrate velocity, wrap each axis, then apply friction
    pub fn move_ship(&mut self) {
        let next = self.pos + self.vel;
        self.warp(next.x, next.y);
        self.vel *= self.tuning.friction;
    }

    /// Current speed (units per tick)
    pub fn speed(&self) -> f32 {
        self.vel.length()
    }

    /// Remove every star within the collection radius, in insertion order.
    ///
    /// Returns the ids of the collected stars; score grows by one per star.
    pub fn collect_stars(&mut self, stars: &mut Vec<Star>) -> Vec<u32> {
        let radius = self.tuning.collect_radius;
        let pos = self.pos;
        let mut collected = Vec::new();
        stars.retain(|star| {
            if pos.distance(star.pos) < radius {
                collected.push(star.id);
                false
            } else {
                true
            }
        });
        self.score += collected.len() as u64;
        collected
    }

    pub fn draw<D: Renderer + ?Sized>(&self, renderer: &mut D) {
        renderer.draw_rotated(SpriteId::Ship, self.pos.x, self.pos.y, ZLayer::Player, self.heading);
    }
}
