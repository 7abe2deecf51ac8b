//! Sound effects
//!
//! The host plays clips from disk; this module decides which clip goes with
//! which game event and at what volume.

use crate::settings::AudioSettings;
use crate::sim::{GameEvent, UxState};

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Ball hits a paddle
    PaddleHit,
    /// Ball hits top or bottom wall
    WallHit,
    /// Someone scored
    Score,
    /// Match won
    GameOver,
    /// Menu button pressed
    Click,
}

impl SoundEffect {
    /// Clip file for this effect
    pub fn clip_path(&self) -> &'static str {
        match self {
            SoundEffect::PaddleHit => "res/pong/paddle_hit.wav",
            SoundEffect::WallHit => "res/pong/wall_hit.wav",
            SoundEffect::Score => "res/pong/score.wav",
            SoundEffect::GameOver => "res/pong/game_over.wav",
            SoundEffect::Click => "res/pong/click.wav",
        }
    }

    /// Sound for a game event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::PaddleHit { .. } => Some(SoundEffect::PaddleHit),
            GameEvent::WallHit => Some(SoundEffect::WallHit),
            GameEvent::Scored { .. } => Some(SoundEffect::Score),
            GameEvent::GameOver { .. } => Some(SoundEffect::GameOver),
            GameEvent::StateChanged {
                from: UxState::MainMenu | UxState::GameOver,
                to: UxState::Playing,
            } => Some(SoundEffect::Click),
            GameEvent::StateChanged { .. } => None,
        }
    }
}

/// Host audio playback
pub trait AudioSink {
    /// Play a clip once at `volume` (0.0 - 1.0)
    fn play_clip(&mut self, path: &str, volume: f32);
}

/// Sink for headless runs: logs what would have played
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play_clip(&mut self, path: &str, volume: f32) {
        log::debug!("play {} at {:.2}", path, volume);
    }
}

/// Audio manager for the demos
#[derive(Debug)]
pub struct AudioManager<S: AudioSink> {
    sink: S,
    master_volume: f32,
    sfx_volume: f32,
    muted: bool,
}

impl<S: AudioSink> AudioManager<S> {
    pub fn new(sink: S, settings: &AudioSettings) -> Self {
        let mut audio = Self {
            sink,
            master_volume: 1.0,
            sfx_volume: 1.0,
            muted: false,
        };
        audio.set_master_volume(settings.master_volume);
        audio.set_sfx_volume(settings.sfx_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Set SFX volume (0.0 - 1.0)
    pub fn set_sfx_volume(&mut self, vol: f32) {
        self.sfx_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Get effective volume
    fn effective_volume(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.master_volume * self.sfx_volume
        }
    }

    /// Play a sound effect
    pub fn play(&mut self, effect: SoundEffect) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        self.sink.play_clip(effect.clip_path(), vol);
    }

    /// Play whatever sounds a tick's events call for
    pub fn play_events(&mut self, events: &[GameEvent]) {
        for effect in events.iter().filter_map(SoundEffect::for_event) {
            self.play(effect);
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }
}
