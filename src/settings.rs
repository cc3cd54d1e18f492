//! Game settings and preferences
//!
//! Persisted as a small JSON file next to the binary. Missing fields fall
//! back to their defaults so old files keep loading.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::REFERENCE_FPS;
use crate::error::SimError;

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Audio ===
    /// Sound effects on
    pub sound_on: bool,
    /// Background music on
    pub music_on: bool,

    // === Simulation ===
    /// Fixed tick rate in Hz
    pub tick_rate: f32,
    /// Random coin draws per level
    pub coin_attempts: u32,
    /// Base seed for coin placement
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound_on: true,
            music_on: true,
            tick_rate: REFERENCE_FPS,
            coin_attempts: 10,
            seed: 0x1ed9e,
        }
    }
}

impl Settings {
    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SimError> {
        let json = fs::read_to_string(path)?;
        let settings: Self = serde_json::from_str(&json)?;
        if !(settings.tick_rate.is_finite() && settings.tick_rate > 0.0) {
            return Err(SimError::Settings(format!(
                "tick_rate must be positive, got {}",
                settings.tick_rate
            )));
        }
        Ok(settings)
    }

    /// Read settings, falling back to defaults on any failure
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings ({}: {e})", path.display());
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SimError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!("Settings saved");
        Ok(())
    }

    /// Fixed timestep in seconds
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate
    }

    /// The menu has a single sound button; it drives music too
    pub fn toggle_sound(&mut self) {
        self.sound_on = !self.sound_on;
        self.music_on = self.sound_on;
    }
}
