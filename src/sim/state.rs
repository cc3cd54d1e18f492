//! World state and core simulation types
//!
//! The `World` is the single writer of all simulation data. Input handlers
//! only record intents here; physics runs inside `tick`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::entity::{Character, Hero};
use super::level::{Coin, LevelLayout, Platform, place_coins};
use crate::error::SimError;
use crate::settings::Settings;

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Title menu; the simulation is idle
    Menu,
    /// Active gameplay
    Playing,
    /// Round lost; counts down back to the menu
    GameOver,
}

/// Things that happened during a tick, for sound and UI to react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    RoundStarted,
    Jumped,
    Hurt { lives_left: u32 },
    CoinCollected { score: u32 },
    FellOut,
    Respawned,
    GameOver,
    ReturnedToMenu,
}

/// Complete simulation state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct World {
    /// Base seed for coin placement
    pub seed: u64,
    /// Levels generated so far; mixed into the coin seed
    pub round: u64,
    pub coin_attempts: u32,
    pub layout: LevelLayout,
    pub phase: GamePhase,
    /// Resolution order for every body, as given by the layout
    pub platforms: Vec<Platform>,
    pub hero: Hero,
    pub enemies: Vec<Character>,
    /// Live coins only; collected coins are dropped at the end of a tick
    pub coins: Vec<Coin>,
    /// Seconds spent in `GameOver`
    pub game_over_time: f32,
    /// Simulation tick counter (playing ticks only)
    pub time_ticks: u64,
}

impl World {
    /// Build a world on the standard layout, sitting at the menu
    pub fn new(settings: &Settings) -> Result<Self, SimError> {
        Self::with_layout(LevelLayout::standard()?, settings.seed, settings.coin_attempts)
    }

    /// Build a world on a custom layout, sitting at the menu
    pub fn with_layout(layout: LevelLayout, seed: u64, coin_attempts: u32) -> Result<Self, SimError> {
        let hero = Hero::new(layout.hero_spawn)?;
        let mut world = Self {
            seed,
            round: 0,
            coin_attempts,
            layout,
            phase: GamePhase::Menu,
            platforms: Vec::new(),
            hero,
            enemies: Vec::new(),
            coins: Vec::new(),
            game_over_time: 0.0,
            time_ticks: 0,
        };
        world.setup_level()?;
        Ok(world)
    }

    /// Rebuild platforms, hero, enemies and coins from the layout
    pub fn setup_level(&mut self) -> Result<(), SimError> {
        self.platforms = self.layout.platforms.clone();
        self.hero = Hero::new(self.layout.hero_spawn)?;
        self.enemies = self
            .layout
            .enemies
            .iter()
            .map(Character::enemy)
            .collect::<Result<_, _>>()?;

        let mut rng = Pcg32::seed_from_u64(self.seed.wrapping_add(self.round));
        self.coins = place_coins(&mut rng, &self.platforms, self.coin_attempts)?;
        self.round += 1;
        self.game_over_time = 0.0;

        log::info!(
            "Level {}: {} platforms, {} enemies, {} coins",
            self.round,
            self.platforms.len(),
            self.enemies.len(),
            self.coins.len()
        );
        Ok(())
    }

    /// Regenerate the level and enter `Playing`
    pub fn start_round(&mut self) -> Result<GameEvent, SimError> {
        self.setup_level()?;
        self.phase = GamePhase::Playing;
        log::info!("Round started");
        Ok(GameEvent::RoundStarted)
    }

    /// Hold a direction: -1 left, +1 right, 0 none (clamped)
    pub fn set_horizontal_intent(&mut self, dir: i8) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if let Some(control) = self.hero.character.control_mut() {
            control.horizontal = dir.signum();
        }
    }

    /// Release a direction; only clears the intent if it is the held one
    pub fn release_horizontal(&mut self, dir: i8) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if let Some(control) = self.hero.character.control_mut() {
            if control.horizontal == dir.signum() {
                control.horizontal = 0;
            }
        }
    }

    /// Ask for a jump on the next tick
    pub fn request_jump(&mut self) {
        if self.phase != GamePhase::Playing {
            return;
        }
        if let Some(control) = self.hero.character.control_mut() {
            control.jump_requested = true;
        }
    }

    pub fn hero_spawn(&self) -> Vec2 {
        self.layout.hero_spawn
    }
}
