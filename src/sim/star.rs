//! Collectible stars and their shared animation

use std::rc::Rc;

use glam::Vec2;
use serde::Serialize;

use super::random::{Clock, RandomSource};
use crate::consts::*;
use crate::render::{BlendMode, Color, Renderer, SpriteId, ZLayer};

/// Animation frame table shared by every star of a session
#[derive(Debug, Clone, PartialEq)]
pub struct StarAnimation {
    frames: Vec<SpriteId>,
    frame_width: f32,
    frame_height: f32,
    frame_ms: u64,
}

impl Default for StarAnimation {
    fn default() -> Self {
        Self::from_tiles(STAR_FRAME_COUNT, STAR_TILE_SIZE, STAR_TILE_SIZE, STAR_FRAME_MS)
    }
}

impl StarAnimation {
    pub fn new(frames: Vec<SpriteId>, frame_width: f32, frame_height: f32, frame_ms: u64) -> Self {
        Self {
            frames,
            frame_width,
            frame_height,
            frame_ms: frame_ms.max(1),
        }
    }

    /// Consecutive tiles 0..count of the star sheet
    pub fn from_tiles(count: u16, frame_width: f32, frame_height: f32, frame_ms: u64) -> Self {
        Self::new(
            (0..count).map(SpriteId::StarFrame).collect(),
            frame_width,
            frame_height,
            frame_ms,
        )
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Frame index shown at `ms`: (ms / frame_ms) mod frame count
    pub fn phase_at(&self, ms: u64) -> Option<usize> {
        if self.frames.is_empty() {
            return None;
        }
        Some(((ms / self.frame_ms) % self.frames.len() as u64) as usize)
    }

    pub fn frame_at(&self, ms: u64) -> Option<SpriteId> {
        self.phase_at(ms).map(|i| self.frames[i])
    }

    pub fn frame_size(&self) -> Vec2 {
        Vec2::new(self.frame_width, self.frame_height)
    }
}

/// Star tint; every channel is at least the configured floor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Tint {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl From<Tint> for Color {
    fn from(t: Tint) -> Self {
        Color::rgb(t.r, t.g, t.b)
    }
}

/// A collectible star. Position and tint never change after creation.
#[derive(Debug, Clone, Serialize)]
pub struct Star {
    pub id: u32,
    pub pos: Vec2,
    pub tint: Tint,
    #[serde(skip)]
    animation: Rc<StarAnimation>,
}

impl Star {
    /// Roll a new star: red, green, blue, then x, y, in that order
    pub fn spawn<R: RandomSource + ?Sized>(
        id: u32,
        animation: Rc<StarAnimation>,
        rng: &mut R,
        field: Vec2,
        tint_min: u8,
    ) -> Self {
        let span = 256 - u32::from(tint_min);
        let mut channel = || (u32::from(tint_min) + rng.next_int(span)) as u8;
        let tint = Tint {
            r: channel(),
            g: channel(),
            b: channel(),
        };
        let x = rng.next_int(field_bound(field.x)) as f32;
        let y = rng.next_int(field_bound(field.y)) as f32;
        Self::at(id, Vec2::new(x, y), tint, animation)
    }

    /// Star with explicit attributes
    pub fn at(id: u32, pos: Vec2, tint: Tint, animation: Rc<StarAnimation>) -> Self {
        Self {
            id,
            pos,
            tint,
            animation,
        }
    }

    pub fn animation(&self) -> &Rc<StarAnimation> {
        &self.animation
    }

    /// Draw the current animation frame centered on the star, additively
    pub fn draw<D: Renderer + ?Sized>(&self, renderer: &mut D, clock: &dyn Clock) {
        let Some(frame) = self.animation.frame_at(clock.milliseconds()) else {
            return;
        };
        let top_left = self.pos - self.animation.frame_size() / 2.0;
        renderer.draw_quad(
            frame,
            top_left.x,
            top_left.y,
            ZLayer::Stars,
            1.0,
            1.0,
            self.tint.into(),
            BlendMode::Additive,
        );
    }
}

/// Integer bound for placing stars on a field axis
fn field_bound(extent: f32) -> u32 {
    (extent.ceil() as u32).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{DrawCommand, RecordingRenderer};
    use crate::sim::random::{FixedClock, ScriptedRandom, SeededRandom};

    fn field() -> Vec2 {
        Vec2::new(FIELD_WIDTH, FIELD_HEIGHT)
    }

    #[test]
    fn test_spawn_draw_order() {
        let mut rng = ScriptedRandom::new(vec![0, 100, 215, 320, 479]);
        let star = Star::spawn(7, Rc::new(StarAnimation::default()), &mut rng, field(), 40);

        assert_eq!(star.id, 7);
        assert_eq!(star.tint, Tint { r: 40, g: 140, b: 255 });
        assert_eq!(star.pos, Vec2::new(320.0, 479.0));
        assert_eq!(rng.draws(), 5);
    }

    #[test]
    fn test_spawn_attributes_in_range() {
        let mut rng = SeededRandom::new(3);
        let animation = Rc::new(StarAnimation::default());
        for id in 0..500 {
            let star = Star::spawn(id, animation.clone(), &mut rng, field(), STAR_TINT_MIN);
            for channel in [star.tint.r, star.tint.g, star.tint.b] {
                assert!(channel >= STAR_TINT_MIN);
            }
            assert!(star.pos.x >= 0.0 && star.pos.x < FIELD_WIDTH);
            assert!(star.pos.y >= 0.0 && star.pos.y < FIELD_HEIGHT);
        }
    }

    #[test]
    fn test_stars_share_animation() {
        let animation = Rc::new(StarAnimation::default());
        let mut rng = SeededRandom::new(1);
        let a = Star::spawn(1, animation.clone(), &mut rng, field(), 40);
        let b = Star::spawn(2, animation.clone(), &mut rng, field(), 40);
        assert!(Rc::ptr_eq(a.animation(), b.animation()));
        assert_eq!(Rc::strong_count(&animation), 3);
    }

    #[test]
    fn test_phase_follows_clock() {
        let animation = StarAnimation::default();
        assert_eq!(animation.len(), STAR_FRAME_COUNT as usize);
        assert_eq!(animation.phase_at(0), Some(0));
        assert_eq!(animation.phase_at(119), Some(0));
        assert_eq!(animation.phase_at(120), Some(1));
        assert_eq!(animation.phase_at(120 * 10), Some(0));
        assert_eq!(animation.phase_at(120 * 13 + 5), Some(3));
    }

    #[test]
    fn test_empty_animation_draws_nothing() {
        let animation = Rc::new(StarAnimation::new(Vec::new(), 16.0, 16.0, 120));
        assert!(animation.is_empty());
        let star = Star::at(1, Vec2::new(10.0, 10.0), Tint { r: 50, g: 50, b: 50 }, animation);
        let mut renderer = RecordingRenderer::new();
        star.draw(&mut renderer, &FixedClock(500));
        assert!(renderer.commands().is_empty());
    }

    #[test]
    fn test_draw_centered_additive_with_tint() {
        let tint = Tint { r: 60, g: 70, b: 80 };
        let star = Star::at(1, Vec2::new(100.0, 200.0), tint, Rc::new(StarAnimation::default()));
        let mut renderer = RecordingRenderer::new();
        star.draw(&mut renderer, &FixedClock(250));

        assert_eq!(
            renderer.commands(),
            &[DrawCommand::Quad {
                image: SpriteId::StarFrame(2),
                x: 92.0,
                y: 192.0,
                layer: ZLayer::Stars,
                scale_x: 1.0,
                scale_y: 1.0,
                tint: Color::rgb(60, 70, 80),
                blend: BlendMode::Additive,
            }]
        );
    }
}
