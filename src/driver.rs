//! Fixed-timestep loop driver
//!
//! Turns host frames of arbitrary length into whole simulation ticks, then
//! draws once. The host owns the window and the timing; this only decides how
//! many ticks a frame is worth and when the session should close.

use crate::consts::{MAX_FRAME_TIME, MAX_SUBSTEPS, SIM_DT};
use crate::render::Renderer;
use crate::sim::{Autopilot, Clock, GameEvent, InputState, Key, RandomSource, TickInput, World};

/// Per-frame source of key state
pub trait InputSource {
    fn poll<R: RandomSource>(&mut self, world: &World<R>) -> TickInput;
}

impl InputSource for Autopilot {
    fn poll<R: RandomSource>(&mut self, world: &World<R>) -> TickInput {
        self.steer(world)
    }
}

/// Replays recorded inputs, then holds nothing
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    inputs: Vec<TickInput>,
    cursor: usize,
}

impl ScriptedInput {
    pub fn new(inputs: Vec<TickInput>) -> Self {
        Self { inputs, cursor: 0 }
    }
}

impl InputSource for ScriptedInput {
    fn poll<R: RandomSource>(&mut self, _world: &World<R>) -> TickInput {
        let input = self.inputs.get(self.cursor).copied().unwrap_or_default();
        self.cursor += 1;
        input
    }
}

/// What a frame did
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameOutcome {
    pub ticks: u32,
    /// Escape was held; the host should end the session
    pub close_requested: bool,
    pub events: Vec<GameEvent>,
}

/// Owns the world and the time accumulator
#[derive(Debug)]
pub struct LoopDriver<R: RandomSource> {
    world: World<R>,
    accumulator: f32,
    frames: u64,
}

impl<R: RandomSource> LoopDriver<R> {
    pub fn new(world: World<R>) -> Self {
        Self {
            world,
            accumulator: 0.0,
            frames: 0,
        }
    }

    pub fn world(&self) -> &World<R> {
        &self.world
    }

    pub fn into_world(self) -> World<R> {
        self.world
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Run one host frame: tick as many times as `elapsed` covers, then draw
    /// once. Input is polled before every tick (and once up front, so a short
    /// frame still sees Escape). A close request stops ticking and skips the
    /// draw; ticks already run this frame are kept.
    pub fn frame<S, D>(
        &mut self,
        elapsed: f32,
        input: &mut S,
        renderer: &mut D,
        clock: &dyn Clock,
    ) -> FrameOutcome
    where
        S: InputSource,
        D: Renderer + ?Sized,
    {
        self.frames += 1;
        let mut outcome = FrameOutcome::default();

        let mut keys = input.poll(&self.world);
        if keys.is_held(Key::Escape) {
            log::info!("close requested after {} ticks", self.world.tick());
            outcome.close_requested = true;
            return outcome;
        }

        let elapsed = elapsed.clamp(0.0, MAX_FRAME_TIME);
        self.accumulator += elapsed;

        while self.accumulator >= SIM_DT && outcome.ticks < MAX_SUBSTEPS {
            if outcome.ticks > 0 {
                keys = input.poll(&self.world);
                if keys.is_held(Key::Escape) {
                    log::info!("close requested after {} ticks", self.world.tick());
                    outcome.close_requested = true;
                    return outcome;
                }
            }
            self.world.update(&keys);
            outcome.events.extend(self.world.drain_events());
            self.accumulator -= SIM_DT;
            outcome.ticks += 1;
        }
        if outcome.ticks == MAX_SUBSTEPS && self.accumulator >= SIM_DT {
            log::trace!("dropping {:.3}s of backlog", self.accumulator);
            self.accumulator = 0.0;
        }

        self.world.draw(renderer, clock);
        outcome
    }

    /// Run exactly one tick and one draw, independent of wall time
    pub fn step<S, D>(&mut self, input: &mut S, renderer: &mut D, clock: &dyn Clock) -> FrameOutcome
    where
        S: InputSource,
        D: Renderer + ?Sized,
    {
        self.accumulator = 0.0;
        self.frame(SIM_DT, input, renderer, clock)
    }
}
