//! Stargrab - a toroidal star-collecting arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (player physics, stars, spawn policy)
//! - `render`: Renderer contract and a draw-command recorder
//! - `driver`: Fixed-timestep loop driver and input sources
//! - `settings`: Data-driven game tuning

pub mod driver;
pub mod render;
pub mod settings;
pub mod sim;

pub use settings::{Settings, SettingsError};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, one tick per host frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest host frame (seconds) fed to the accumulator
    pub const MAX_FRAME_TIME: f32 = 0.25;

    /// Play field dimensions
    pub const FIELD_WIDTH: f32 = 640.0;
    pub const FIELD_HEIGHT: f32 = 480.0;
    /// Where the ship is warped at session start
    pub const START_X: f32 = 320.0;
    pub const START_Y: f32 = 240.0;

    /// Ship handling (per tick)
    pub const TURN_STEP: f32 = 4.5; // degrees
    pub const ACCEL: f32 = 0.5;

    /// Stars closer than this to the ship are collected (strict)
    pub const COLLECT_RADIUS: f32 = 35.0;

    /// Spawn policy: roll in [0, SPAWN_ROLL_BOUND), spawn if below SPAWN_CHANCE
    pub const MAX_STARS: usize = 5;
    pub const SPAWN_ROLL_BOUND: u32 = 100;
    pub const SPAWN_CHANCE: u32 = 4;

    /// Lowest value a star tint channel can take
    pub const STAR_TINT_MIN: u8 = 40;
    /// Milliseconds each star animation frame stays on screen
    pub const STAR_FRAME_MS: u64 = 120;
    /// Star sprite tile size
    pub const STAR_TILE_SIZE: f32 = 16.0;
    pub const STAR_FRAME_COUNT: u16 = 10;

    /// HUD score text placement
    pub const SCORE_TEXT_X: f32 = 10.0;
    pub const SCORE_TEXT_Y: f32 = 10.0;
}

/// Wrap a coordinate into [0, extent)
///
/// `rem_euclid` can round up to exactly `extent` for tiny negative inputs,
/// so that case folds back to zero.
#[inline]
pub fn wrap_coordinate(value: f32, extent: f32) -> f32 {
    let wrapped = value.rem_euclid(extent);
    if wrapped >= extent { 0.0 } else { wrapped }
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    wrap_coordinate(angle, 360.0)
}

/// Unit vector for a heading in degrees (0 = up, clockwise, +y is down)
#[inline]
pub fn heading_to_vector(heading_degrees: f32) -> Vec2 {
    let rad = heading_degrees.to_radians();
    Vec2::new(rad.sin(), -rad.cos())
}

/// Heading in degrees pointing along `dir` (inverse of [`heading_to_vector`])
#[inline]
pub fn vector_to_heading(dir: Vec2) -> f32 {
    normalize_degrees(dir.x.atan2(-dir.y).to_degrees())
}

/// Signed shortest rotation from `from` to `to`, in (-180, 180]
#[inline]
pub fn heading_delta(from: f32, to: f32) -> f32 {
    let delta = normalize_degrees(to - from);
    if delta > 180.0 { delta - 360.0 } else { delta }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_coordinate() {
        assert_eq!(wrap_coordinate(650.0, 640.0), 10.0);
        assert_eq!(wrap_coordinate(-10.0, 640.0), 630.0);
        assert_eq!(wrap_coordinate(640.0, 640.0), 0.0);
        assert_eq!(wrap_coordinate(0.0, 640.0), 0.0);
        // Tiny negative values must not land on the extent itself
        let w = wrap_coordinate(-1.0e-8, 640.0);
        assert!((0.0..640.0).contains(&w));
    }

    #[test]
    fn test_heading_to_vector() {
        let up = heading_to_vector(0.0);
        assert_eq!(up.x, 0.0);
        assert_eq!(up.y, -1.0);

        let right = heading_to_vector(90.0);
        assert!((right.x - 1.0).abs() < 1e-6);
        assert!(right.y.abs() < 1e-6);

        let down = heading_to_vector(180.0);
        assert!((down.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_vector_to_heading_roundtrip() {
        for heading in [0.0, 45.0, 90.0, 135.0, 270.0, 359.0] {
            let back = vector_to_heading(heading_to_vector(heading));
            assert!(heading_delta(heading, back).abs() < 1e-3, "{heading} -> {back}");
        }
    }

    #[test]
    fn test_heading_delta() {
        assert_eq!(heading_delta(10.0, 20.0), 10.0);
        assert_eq!(heading_delta(350.0, 10.0), 20.0);
        assert_eq!(heading_delta(10.0, 350.0), -20.0);
        assert_eq!(heading_delta(0.0, 180.0), 180.0);
    }
}
