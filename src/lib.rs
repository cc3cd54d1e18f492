//! Ledge Run - A single-screen platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (rect physics, collisions, animation, game state)
//! - `menu`: Headless title-menu model (buttons, hover, click actions)
//! - `audio`: Sound cue selection from simulation events
//! - `settings`: Runtime preferences loaded from JSON

pub mod audio;
pub mod error;
pub mod menu;
pub mod settings;
pub mod sim;

pub use audio::{MusicCue, SoundBoard, SoundEffect};
pub use error::SimError;
pub use menu::{Menu, MenuAction};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// World (screen) dimensions in world units
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Tick rate that velocities and gravity are expressed against.
    /// Every per-tick delta is scaled by `dt * REFERENCE_FPS`.
    pub const REFERENCE_FPS: f32 = 60.0;
    /// Default fixed simulation timestep
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Downward acceleration per reference tick
    pub const GRAVITY_ACCEL: f32 = 0.5;
    /// Horizontal speed below which a grounded body counts as idle
    pub const MOVE_EPSILON: f32 = 0.1;
    /// Tolerance for the resting-contact probe
    pub const CONTACT_EPSILON: f32 = 1e-3;

    /// Hero defaults
    pub const HERO_WIDTH: f32 = 30.0;
    pub const HERO_HEIGHT: f32 = 50.0;
    pub const HERO_SPEED: f32 = 5.0;
    pub const HERO_JUMP_VELOCITY: f32 = -12.0;
    pub const HERO_LIVES: u32 = 3;
    /// Spawn and respawn anchor on the standard layout
    pub const HERO_RESPAWN_X: f32 = 50.0;
    pub const HERO_RESPAWN_Y: f32 = WORLD_HEIGHT - 90.0;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 40.0;
    pub const ENEMY_HEIGHT: f32 = 40.0;
    pub const ENEMY_SPEED: f32 = 2.0;

    /// Coin defaults
    pub const COIN_SIZE: f32 = 20.0;
    pub const COIN_VALUE: u32 = 10;

    /// Seconds spent on the game-over screen before returning to the menu
    pub const GAME_OVER_DELAY: f32 = 3.0;
}
