//! Render snapshot for the drawing shell
//!
//! The shell blits what it is given; it never reads physics state directly.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::body::{Facing, KinematicBody};
use super::rect::Rect;
use super::state::{GamePhase, World};

/// One animated entity to blit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprite {
    pub image: String,
    /// Top-left corner in world units
    pub position: Vec2,
    /// Mirror horizontally (entity faces left)
    pub flip_x: bool,
}

impl Sprite {
    fn of(body: &KinematicBody) -> Self {
        Self {
            image: body.current_image().to_string(),
            position: body.rect.position(),
            flip_x: body.facing == Facing::Left,
        }
    }
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    pub phase: GamePhase,
    pub platforms: Vec<Rect>,
    pub coins: Vec<Rect>,
    /// Enemies in world order, then the hero last (drawn on top)
    pub sprites: Vec<Sprite>,
    pub lives: u32,
    pub score: u32,
}

impl World {
    /// Snapshot the drawable state. The menu draws no world content.
    pub fn draw(&self) -> Frame {
        let mut frame = Frame {
            phase: self.phase,
            platforms: Vec::new(),
            coins: Vec::new(),
            sprites: Vec::new(),
            lives: self.hero.lives,
            score: self.hero.score,
        };

        if self.phase == GamePhase::Menu {
            return frame;
        }

        frame.platforms = self.platforms.iter().map(|p| p.rect).collect();
        frame.coins = self
            .coins
            .iter()
            .filter(|c| !c.collected)
            .map(|c| c.rect)
            .collect();
        frame.sprites = self
            .enemies
            .iter()
            .map(|e| Sprite::of(&e.body))
            .chain(std::iter::once(Sprite::of(self.hero.body())))
            .collect();

        frame
    }
}
