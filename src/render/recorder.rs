//! Draw-command recorder

use serde::Serialize;

use super::{BlendMode, Color, Renderer, SpriteId, ZLayer};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum DrawCommand {
    Quad {
        image: SpriteId,
        x: f32,
        y: f32,
        layer: ZLayer,
        scale_x: f32,
        scale_y: f32,
        tint: Color,
        blend: BlendMode,
    },
    Rotated {
        image: SpriteId,
        x: f32,
        y: f32,
        layer: ZLayer,
        angle: f32,
    },
    Text {
        text: String,
        x: f32,
        y: f32,
        layer: ZLayer,
        scale_x: f32,
        scale_y: f32,
        color: Color,
    },
}

impl DrawCommand {
    pub fn layer(&self) -> ZLayer {
        match self {
            DrawCommand::Quad { layer, .. }
            | DrawCommand::Rotated { layer, .. }
            | DrawCommand::Text { layer, .. } => *layer,
        }
    }
}

/// Renderer that keeps every call of the current frame, in issue order
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
    frames: u64,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the previous frame's commands
    pub fn begin_frame(&mut self) {
        self.commands.clear();
        self.frames += 1;
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Frames begun so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Commands drawn on a given layer
    pub fn on_layer(&self, layer: ZLayer) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter().filter(move |c| c.layer() == layer)
    }
}

impl Renderer for RecordingRenderer {
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
    ) {
        self.commands.push(DrawCommand::Quad {
            image,
            x,
            y,
            layer,
            scale_x,
            scale_y,
            tint,
            blend,
        });
    }

    fn draw_rotated(&mut self, image: SpriteId, x: f32, y: f32, layer: ZLayer, angle: f32) {
        self.commands.push(DrawCommand::Rotated {
            image,
            x,
            y,
            layer,
            angle,
        });
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        layer: ZLayer,
        scale_x: f32,
        scale_y: f32,
        color: Color,
    ) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            y,
            layer,
            scale_x,
            scale_y,
            color,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_issue_order() {
        let mut renderer = RecordingRenderer::new();
        renderer.begin_frame();
        renderer.draw_text("hi", 1.0, 2.0, ZLayer::Ui, 1.0, 1.0, Color::WHITE);
        renderer.draw_rotated(SpriteId::Ship, 5.0, 6.0, ZLayer::Player, 90.0);

        let commands = renderer.commands();
        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].layer(), ZLayer::Ui);
        assert!(matches!(
            commands[1],
            DrawCommand::Rotated { image: SpriteId::Ship, angle, .. } if angle == 90.0
        ));
    }

    #[test]
    fn test_begin_frame_clears_previous_commands() {
        let mut renderer = RecordingRenderer::new();
        renderer.begin_frame();
        renderer.draw_rotated(SpriteId::Ship, 0.0, 0.0, ZLayer::Player, 0.0);
        renderer.begin_frame();
        assert!(renderer.commands().is_empty());
        assert_eq!(renderer.frames(), 2);
    }

    #[test]
    fn test_on_layer_filters_commands() {
        let mut renderer = RecordingRenderer::new();
        renderer.draw_rotated(SpriteId::Ship, 0.0, 0.0, ZLayer::Player, 0.0);
        renderer.draw_quad(
            SpriteId::StarFrame(0),
            1.0,
            1.0,
            ZLayer::Stars,
            1.0,
            1.0,
            Color::WHITE,
            BlendMode::Additive,
        );
        renderer.draw_text("Score: 0", 10.0, 10.0, ZLayer::Ui, 1.0, 1.0, Color::WHITE);

        assert_eq!(renderer.on_layer(ZLayer::Stars).count(), 1);
        assert_eq!(renderer.on_layer(ZLayer::Background).count(), 0);
    }

    #[test]
    fn test_layers_order_back_to_front() {
        assert!(ZLayer::Background < ZLayer::Stars);
        assert!(ZLayer::Stars < ZLayer::Player);
        assert!(ZLayer::Player < ZLayer::Ui);
    }
}
