//! Demo-mode pilot that flies toward the nearest star
//!
//! Works on velocity error rather than position: it wants to be moving toward
//! the target at cruise speed, so the same rule also brakes and corrects
//! drift. With no stars around the desired velocity is zero.

use glam::Vec2;

use super::input::TickInput;
use super::random::RandomSource;
use super::world::World;
use crate::{heading_delta, vector_to_heading, wrap_coordinate};

#[derive(Debug, Clone, Copy)]
pub struct Autopilot {
    /// Speed the pilot tries to hold while chasing (units per tick)
    pub cruise_speed: f32,
    /// Thrust only when facing within this many degrees of the wanted direction
    pub thrust_cone: f32,
}

impl Default for Autopilot {
    fn default() -> Self {
        Self {
            cruise_speed: 4.0,
            thrust_cone: 20.0,
        }
    }
}

impl Autopilot {
    /// Decide which keys to hold this tick
    pub fn steer<R: RandomSource>(&self, world: &World<R>) -> TickInput {
        let player = world.player();
        let tuning = player.tuning();
        let field = Vec2::new(tuning.field_width, tuning.field_height);

        let desired = world
            .stars()
            .iter()
            .map(|star| toroidal_offset(player.pos, star.pos, field))
            .min_by(|a, b| {
                a.length_squared()
                    .partial_cmp(&b.length_squared())
                    .unwrap_or(std::cmp::Ordering::Equal)
            })
            .map(|offset| offset.normalize_or_zero() * self.cruise_speed)
            .unwrap_or(Vec2::ZERO);

        let error = desired - player.vel;
        if error.length() < tuning.accel * 0.5 {
            return TickInput::default();
        }

        let delta = heading_delta(player.heading, vector_to_heading(error));
        let dead_zone = tuning.turn_step * 0.5;
        TickInput {
            left: delta < -dead_zone,
            right: delta > dead_zone,
            up: delta.abs() < self.thrust_cone,
            escape: false,
        }
    }
}

/// Shortest vector from `from` to `to` on the wrapped field
fn toroidal_offset(from: Vec2, to: Vec2, field: Vec2) -> Vec2 {
    let wrap_axis = |d: f32, extent: f32| wrap_coordinate(d + extent / 2.0, extent) - extent / 2.0;
    let d = to - from;
    Vec2::new(wrap_axis(d.x, field.x), wrap_axis(d.y, field.y))
}
