//! Game instance holding all state
//!
//! Owns the simulation, forwards each frame's events to audio and hands the
//! draw list to the renderer. Frames only run while the game is running;
//! `stop()` or dropping the `Game` ends scheduling.

use crate::audio::{AudioManager, AudioSink};
use crate::platform::InputProvider;
use crate::renderer::{RenderFrame, Renderer};
use crate::settings::Settings;
use crate::sim::{GameEvent, GamePhase, GameState, TickInput, tick};

pub struct Game<S: AudioSink> {
    state: GameState,
    audio: AudioManager<S>,
    running: bool,
    last_phase: GamePhase,
}

impl<S: AudioSink> Game<S> {
    pub fn new(state: GameState, sink: S, settings: Settings) -> Self {
        let last_phase = state.phase;
        Self {
            state,
            audio: AudioManager::new(sink, settings),
            running: true,
            last_phase,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn audio(&self) -> &AudioManager<S> {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut AudioManager<S> {
        &mut self.audio
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Stop scheduling frames
    pub fn stop(&mut self) {
        if self.running {
            log::info!("Stopping after {} frames", self.state.frame);
        }
        self.running = false;
    }

    /// Viewport changed size
    pub fn resize(&mut self, width: f32, height: f32) {
        log::info!("Resize to {}x{}", width, height);
        self.state.resize(width, height);
    }

    /// Run one frame. Returns `None` once stopped.
    pub fn frame(&mut self, input: &TickInput) -> Option<(RenderFrame, Vec<GameEvent>)> {
        if !self.running {
            return None;
        }
        let events = tick(&mut self.state, input);
        self.audio.dispatch(&events);

        if self.state.phase != self.last_phase {
            log::info!("Phase {:?} -> {:?}", self.last_phase, self.state.phase);
            self.last_phase = self.state.phase;
        }

        Some((RenderFrame::from_state(&self.state), events))
    }

    /// Drive frames until stopped, the input source goes away, or `max_frames`
    /// have run. Returns the number of frames run.
    pub fn run<P, R>(&mut self, input: &mut P, renderer: &mut R, max_frames: u64) -> u64
    where
        P: InputProvider,
        R: Renderer,
    {
        let mut frames = 0;
        while self.running && frames < max_frames {
            let Some(snapshot) = input.poll(&self.state) else {
                self.stop();
                break;
            };
            let Some((frame, _events)) = self.frame(&snapshot) else {
                break;
            };
            renderer.draw(&frame);
            frames += 1;
        }
        frames
    }
}
