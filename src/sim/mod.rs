//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (platforms in layout order, enemies in spawn order)
//! - No rendering, audio or platform dependencies

pub mod animation;
pub mod body;
pub mod collision;
pub mod draw;
pub mod entity;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use animation::{AnimationClip, AnimationState};
pub use body::{AnimationPolicy, AnimationSet, Facing, KinematicBody, Motion};
pub use collision::{CollisionSide, Contact, resolve_platform, resolve_platforms};
pub use draw::{Frame, Sprite};
pub use entity::{Behavior, Character, Hero, Patrol, PlayerControl, Step};
pub use level::{Coin, EnemySpawn, LevelLayout, Platform, place_coins};
pub use rect::Rect;
pub use state::{GameEvent, GamePhase, World};
pub use tick::tick;
