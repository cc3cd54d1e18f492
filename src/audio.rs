//! Sound cue selection
//!
//! The simulation never plays audio; it reports events and the shell asks
//! the `SoundBoard` which effects and music changes those events imply.

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SoundEffect {
    /// Hero leaves the ground
    Jump,
    /// Hero loses a life
    Hurt,
    /// Coin picked up
    Coin,
}

impl SoundEffect {
    /// Asset name the shell loads for this effect
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundEffect::Jump => "jump",
            SoundEffect::Hurt => "hurt",
            SoundEffect::Coin => "coin",
        }
    }
}

/// Background music transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MusicCue {
    /// Start the looping track
    Play,
    Stop,
}

/// Cues produced for one batch of events
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cues {
    pub effects: Vec<SoundEffect>,
    pub music: Option<MusicCue>,
}

/// Maps simulation events to audio cues, honouring the toggles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundBoard {
    sound_on: bool,
    music_on: bool,
}

impl Default for SoundBoard {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}

impl SoundBoard {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            sound_on: settings.sound_on,
            music_on: settings.music_on,
        }
    }

    /// Pick up changed toggles (e.g. after the menu's sound button)
    pub fn sync(&mut self, settings: &Settings) {
        self.sound_on = settings.sound_on;
        self.music_on = settings.music_on;
    }

    pub fn sound_on(&self) -> bool {
        self.sound_on
    }

    pub fn music_on(&self) -> bool {
        self.music_on
    }

    /// Effect for a single event, if any
    pub fn effect(&self, event: &GameEvent) -> Option<SoundEffect> {
        if !self.sound_on {
            return None;
        }
        match event {
            GameEvent::Jumped => Some(SoundEffect::Jump),
            GameEvent::Hurt { .. } => Some(SoundEffect::Hurt),
            GameEvent::CoinCollected { .. } => Some(SoundEffect::Coin),
            _ => None,
        }
    }

    /// Music change for a single event, if any
    pub fn music(&self, event: &GameEvent) -> Option<MusicCue> {
        if !self.music_on {
            return None;
        }
        match event {
            GameEvent::RoundStarted => Some(MusicCue::Play),
            GameEvent::GameOver | GameEvent::ReturnedToMenu => Some(MusicCue::Stop),
            _ => None,
        }
    }

    /// Collect every cue for a tick's events. The last music change wins.
    pub fn cues(&self, events: &[GameEvent]) -> Cues {
        let mut cues = Cues::default();
        for event in events {
            if let Some(effect) = self.effect(event) {
                cues.effects.push(effect);
            }
            if let Some(music) = self.music(event) {
                cues.music = Some(music);
            }
        }
        cues
    }
}
