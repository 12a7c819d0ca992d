//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One update call = one tick, no delta time
//! - Injected RNG only
//! - Stable iteration order (star insertion order)
//! - Rendering only through the `Renderer` trait, read-only

pub mod autopilot;
pub mod input;
pub mod player;
pub mod random;
pub mod star;
pub mod world;

pub use autopilot::Autopilot;
pub use input::{InputState, Key, TickInput};
pub use player::{Player, PlayerTuning};
pub use random::{Clock, FixedClock, RandomSource, ScriptedRandom, SeededRandom, SystemClock};
pub use star::{Star, StarAnimation, Tint};
pub use world::{GameEvent, World, WorldSnapshot};
