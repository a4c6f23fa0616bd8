//! Sound cue dispatch
//!
//! The simulation reports `GameEvent`s; this module turns them into named,
//! fire-and-forget cues for whatever sink actually makes noise.

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound cue names understood by the audio collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AudioCue {
    /// Ball leaves the paddle
    Launch,
    /// Ball hits a side or top wall
    Wall,
    /// Ball hits the paddle, or damages a brick without breaking it
    Hit,
    /// Brick breaks
    Brick,
    /// Power-up released
    Item,
    /// Life lost
    Die,
    /// Level complete
    Win,
    /// Extra life
    Bonus,
}

impl AudioCue {
    pub fn name(&self) -> &'static str {
        match self {
            AudioCue::Launch => "launch",
            AudioCue::Wall => "wall",
            AudioCue::Hit => "hit",
            AudioCue::Brick => "brick",
            AudioCue::Item => "item",
            AudioCue::Die => "die",
            AudioCue::Win => "win",
            AudioCue::Bonus => "bonus",
        }
    }

    /// Cue for an event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Launch => Some(AudioCue::Launch),
            GameEvent::WallBounce => Some(AudioCue::Wall),
            GameEvent::PaddleHit | GameEvent::BrickDamaged => Some(AudioCue::Hit),
            GameEvent::BrickDestroyed { .. } => Some(AudioCue::Brick),
            GameEvent::PowerUp(_) => Some(AudioCue::Item),
            GameEvent::LifeLost { .. } => Some(AudioCue::Die),
            GameEvent::LevelComplete { .. } => Some(AudioCue::Win),
            GameEvent::BonusLife { .. } => Some(AudioCue::Bonus),
            GameEvent::GameStarted | GameEvent::BallSplit | GameEvent::GameOver { .. } => None,
        }
    }
}

/// Something that can play a cue. No completion is reported back.
pub trait AudioSink {
    fn play(&mut self, cue: AudioCue, volume: f32);
}

/// Sink that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, cue: AudioCue, volume: f32) {
        log::debug!("♪ {} (vol {:.2})", cue.name(), volume);
    }
}

/// Audio manager for the game
pub struct AudioManager<S: AudioSink> {
    sink: S,
    settings: Settings,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S, settings: Settings) -> Self {
        Self { sink, settings }
    }

    pub fn set_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.settings.muted = muted;
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Play a single cue
    pub fn play(&mut self, cue: AudioCue) {
        let volume = self.settings.effective_volume();
        if volume <= 0.0 {
            return;
        }
        self.sink.play(cue, volume);
    }

    /// Forward a frame's events, in order
    pub fn dispatch(&mut self, events: &[GameEvent]) {
        for cue in events.iter().filter_map(AudioCue::for_event) {
            self.play(cue);
        }
    }
}
