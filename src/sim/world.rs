//! The game world: player, live stars, spawn policy
//!
//! `update` is the only place state changes. `draw` is read-only and may run
//! any number of times between updates.

use std::rc::Rc;

use glam::Vec2;
use serde::Serialize;

use super::input::{InputState, Key};
use super::player::Player;
use super::random::{Clock, RandomSource, SeededRandom};
use super::star::{Star, StarAnimation};
use crate::consts::{SCORE_TEXT_X, SCORE_TEXT_Y, STAR_FRAME_COUNT, STAR_TILE_SIZE};
use crate::render::{BlendMode, Color, Renderer, SpriteId, ZLayer};
use crate::settings::Settings;

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum GameEvent {
    StarSpawned { id: u32, pos: Vec2 },
    /// `score` is the player's score after this star was counted
    StarCollected { id: u32, score: u64 },
}

/// Serializable view of the world for telemetry
#[derive(Debug, Serialize)]
pub struct WorldSnapshot<'a> {
    pub tick: u64,
    pub score: u64,
    pub player: &'a Player,
    pub stars: &'a [Star],
}

/// Complete game state for one session
#[derive(Debug)]
pub struct World<R: RandomSource = SeededRandom> {
    player: Player,
    /// Live stars in insertion order
    stars: Vec<Star>,
    rng: R,
    animation: Rc<StarAnimation>,
    settings: Settings,
    /// Completed updates
    tick: u64,
    next_id: u32,
    /// Events from the most recent update only
    events: Vec<GameEvent>,
}

impl World<SeededRandom> {
    /// Create a world driven by a seeded PCG stream
    pub fn new(settings: Settings, seed: u64) -> Self {
        Self::with_random(settings, SeededRandom::new(seed))
    }
}

impl<R: RandomSource> World<R> {
    /// Create a world around any random source; the ship starts at the
    /// configured start position, heading up, at rest.
    ///
    /// Settings that fail [`Settings::validate`] are replaced by the defaults.
    pub fn with_random(settings: Settings, rng: R) -> Self {
        let settings = match settings.validate() {
            Ok(()) => settings,
            Err(e) => {
                log::warn!("{e}; using default settings");
                Settings::default()
            }
        };
        let animation = Rc::new(StarAnimation::from_tiles(
            STAR_FRAME_COUNT,
            STAR_TILE_SIZE,
            STAR_TILE_SIZE,
            settings.star_frame_ms,
        ));
        let mut player = Player::new(settings.player_tuning());
        player.warp(settings.start_x, settings.start_y);

        Self {
            player,
            stars: Vec::with_capacity(settings.max_stars),
            rng,
            animation,
            settings,
            tick: 0,
            next_id: 1,
            events: Vec::new(),
        }
    }

    /// Advance one tick
    pub fn update<I: InputState + ?Sized>(&mut self, input: &I) {
        self.events.clear();

        if input.is_held(Key::Left) {
            self.player.turn_left();
        }
        if input.is_held(Key::Right) {
            self.player.turn_right();
        }
        if input.is_held(Key::Up) {
            self.player.accelerate();
        }

        self.player.move_ship();

        let collected = self.player.collect_stars(&mut self.stars);
        if !collected.is_empty() {
            // Scores are handed out in collection order
            let base = self.player.score - collected.len() as u64;
            for (i, id) in collected.into_iter().enumerate() {
                let score = base + i as u64 + 1;
                log::debug!("tick {}: collected star {} (score {})", self.tick, id, score);
                self.events.push(GameEvent::StarCollected { id, score });
            }
        }

        // The roll is drawn every tick, even when the cap is reached
        let roll = self.rng.next_int(self.settings.spawn_roll_bound);
        if roll < self.settings.spawn_chance && self.stars.len() < self.settings.max_stars {
            self.spawn_star();
        }

        self.tick += 1;
    }

    fn spawn_star(&mut self) {
        let id = self.next_entity_id();
        let field = Vec2::new(self.settings.field_width, self.settings.field_height);
        let star = Star::spawn(
            id,
            Rc::clone(&self.animation),
            &mut self.rng,
            field,
            self.settings.star_tint_min,
        );
        log::debug!("tick {}: spawned star {} at {:?}", self.tick, id, star.pos);
        self.events.push(GameEvent::StarSpawned { id, pos: star.pos });
        self.stars.push(star);
    }

    /// Allocate a new star ID
    fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Background, score, ship, then every star in collection order
    pub fn draw<D: Renderer + ?Sized>(&self, renderer: &mut D, clock: &dyn Clock) {
        renderer.draw_quad(
            SpriteId::Background,
            0.0,
            0.0,
            ZLayer::Background,
            1.0,
            1.0,
            Color::WHITE,
            BlendMode::Default,
        );
        renderer.draw_text(
            &format!("Score: {}", self.player.score),
            SCORE_TEXT_X,
            SCORE_TEXT_Y,
            ZLayer::Ui,
            1.0,
            1.0,
            Color::WHITE,
        );
        self.player.draw(renderer);
        for star in &self.stars {
            star.draw(renderer, clock);
        }
    }

    pub fn player_score(&self) -> u64 {
        self.player.score
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn stars(&self) -> &[Star] {
        &self.stars
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Take the events produced by the most recent update
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> WorldSnapshot<'_> {
        WorldSnapshot {
            tick: self.tick,
            score: self.player.score,
            player: &self.player,
            stars: &self.stars,
        }
    }
}
