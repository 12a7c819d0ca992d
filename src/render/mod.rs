//! Rendering contract
//!
//! The simulation never touches a graphics API. Draw passes issue calls against
//! [`Renderer`]; a windowing backend implements it for real, and
//! [`RecordingRenderer`] keeps the calls in order for headless runs and tests.

pub mod recorder;

pub use recorder::{DrawCommand, RecordingRenderer};

use serde::{Deserialize, Serialize};

/// Image handles known to the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpriteId {
    Background,
    Ship,
    /// Tile index into the star animation sheet
    StarFrame(u16),
}

/// Depth layers, back to front
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ZLayer {
    Background = 0,
    Stars = 1,
    Player = 2,
    Ui = 3,
}

/// How a quad combines with what is already drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BlendMode {
    #[default]
    Default,
    Additive,
}

/// RGBA tint, one byte per channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Side-effecting draw calls; nothing is returned to the caller
pub trait Renderer {
    /// Draw an image with its top-left corner at (x, y)
    #[allow(clippy::too_many_arguments)]
    fn draw_quad(
        &mut self,
        image: SpriteId,
        x: f32,
        y: f32,
        layer: ZLayer,
        scale_x: f32,
        scale_y: f32,
        tint: Color,
        blend: BlendMode,
    );

    /// Draw an image centered on (x, y), rotated clockwise by `angle` degrees
    fn draw_rotated(&mut self, image: SpriteId, x: f32, y: f32, layer: ZLayer, angle: f32);

    #[allow(clippy::too_many_arguments)]
    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        layer: ZLayer,
        scale_x: f32,
        scale_y: f32,
        color: Color,
    );
}
