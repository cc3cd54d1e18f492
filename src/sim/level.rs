//! Level data: static platforms, coins, and the default layout
//!
//! Coin placement is seeded so the same seed always yields the same level.

use glam::Vec2;
use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::error::SimError;

/// Immovable platform; never changes after level setup
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    pub rect: Rect,
}

impl Platform {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Result<Self, SimError> {
        Ok(Self {
            rect: Rect::new(x, y, width, height)?,
        })
    }
}

/// A collectible coin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coin {
    pub rect: Rect,
    pub collected: bool,
}

impl Coin {
    pub fn new(x: f32, y: f32) -> Result<Self, SimError> {
        Ok(Self {
            rect: Rect::new(x, y, COIN_SIZE, COIN_SIZE)?,
            collected: false,
        })
    }
}

/// Where an enemy starts and how far right it walks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    /// Top-left corner; `x` is also the left patrol bound
    pub pos: Vec2,
    pub patrol_range: f32,
}

/// Static description of a level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    /// Resolution order for collisions
    pub platforms: Vec<Platform>,
    pub hero_spawn: Vec2,
    pub enemies: Vec<EnemySpawn>,
}

impl LevelLayout {
    /// The classic single-screen layout: a ground strip and five ledges
    pub fn standard() -> Result<Self, SimError> {
        let platforms = vec![
            Platform::new(0.0, WORLD_HEIGHT - 40.0, WORLD_WIDTH, 40.0)?,
            Platform::new(100.0, 450.0, 200.0, 20.0)?,
            Platform::new(400.0, 350.0, 200.0, 20.0)?,
            Platform::new(150.0, 250.0, 150.0, 20.0)?,
            Platform::new(500.0, 200.0, 150.0, 20.0)?,
            Platform::new(300.0, 150.0, 100.0, 20.0)?,
        ];

        // Spawn just above each ledge top
        let enemies = [(200.0, 450.0, 150.0), (450.0, 350.0, 100.0), (200.0, 250.0, 80.0)]
            .into_iter()
            .map(|(x, top, range)| EnemySpawn {
                pos: Vec2::new(x, top - ENEMY_HEIGHT),
                patrol_range: range,
            })
            .collect();

        Ok(Self {
            platforms,
            hero_spawn: Vec2::new(HERO_RESPAWN_X, HERO_RESPAWN_Y),
            enemies,
        })
    }
}

/// Scatter coins onto platform tops.
///
/// Each attempt draws a random point; it becomes a coin only if it lies
/// on or just above some platform's top surface. Failed attempts are
/// dropped, so fewer than `attempts` coins is normal.
pub fn place_coins(rng: &mut Pcg32, platforms: &[Platform], attempts: u32) -> Result<Vec<Coin>, SimError> {
    let mut coins = Vec::new();

    for _ in 0..attempts {
        let x = rng.random_range(50..=(WORLD_WIDTH as i32 - 50)) as f32;
        let y = rng.random_range(50..=(WORLD_HEIGHT as i32 - 100)) as f32;

        let on_platform = platforms.iter().any(|p| {
            let r = &p.rect;
            y >= r.top() - 20.0 && y <= r.top() + 5.0 && x >= r.left() && x <= r.right()
        });
        if on_platform {
            coins.push(Coin::new(x, y)?);
        }
    }

    log::debug!("Placed {} coins from {} attempts", coins.len(), attempts);
    Ok(coins)
}
