//! Hero and enemy behaviours on top of the shared kinematic body
//!
//! One physics/animation path for every character; what differs is how
//! horizontal velocity gets chosen before the body steps, captured by the
//! `Behavior` variant.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::animation::{AnimationClip, AnimationState};
use super::body::{AnimationSet, KinematicBody};
use super::collision::Contact;
use super::level::{EnemySpawn, Platform};
use super::rect::Rect;
use crate::consts::*;
use crate::error::SimError;

/// Bang-bang patrol between two x bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Patrol {
    pub start: f32,
    pub end: f32,
    pub speed: f32,
}

impl Patrol {
    pub fn new(start: f32, end: f32, speed: f32) -> Result<Self, SimError> {
        if !(start.is_finite() && end.is_finite()) || end < start {
            return Err(SimError::InvalidPatrol { start, end });
        }
        Ok(Self { start, end, speed })
    }

    /// Turn around at the bounds; between them keep going
    pub fn steer(&self, body: &mut KinematicBody) {
        if body.rect.x >= self.end {
            body.velocity.x = -self.speed;
        } else if body.rect.x <= self.start {
            body.velocity.x = self.speed;
        }
    }
}

/// Intents written by input handlers between ticks
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerControl {
    /// -1 left, 0 none, +1 right
    pub horizontal: i8,
    /// One-shot; consumed by the next step whether or not it fires
    pub jump_requested: bool,
    pub speed: f32,
    pub jump_velocity: f32,
}

impl Default for PlayerControl {
    fn default() -> Self {
        Self {
            horizontal: 0,
            jump_requested: false,
            speed: HERO_SPEED,
            jump_velocity: HERO_JUMP_VELOCITY,
        }
    }
}

impl PlayerControl {
    /// Apply intents to the body. Returns true if a jump started.
    pub fn steer(&mut self, body: &mut KinematicBody) -> bool {
        body.velocity.x = f32::from(self.horizontal) * self.speed;

        let jump = std::mem::take(&mut self.jump_requested);
        if jump && body.on_ground {
            body.velocity.y = self.jump_velocity;
            body.animations.jump.reset();
            return true;
        }
        false
    }
}

/// How a character picks its velocity each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Behavior {
    Player(PlayerControl),
    Patrol(Patrol),
}

/// Result of one character step
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Step {
    pub jumped: bool,
    pub contacts: Vec<Contact>,
}

/// A kinematic body plus the behaviour that drives it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub body: KinematicBody,
    pub behavior: Behavior,
}

impl Character {
    /// A patrolling enemy walking right from its spawn point
    pub fn enemy(spawn: &EnemySpawn) -> Result<Self, SimError> {
        let rect = Rect::new(spawn.pos.x, spawn.pos.y, ENEMY_WIDTH, ENEMY_HEIGHT)?;
        let patrol = Patrol::new(spawn.pos.x, spawn.pos.x + spawn.patrol_range, ENEMY_SPEED)?;
        let mut body = KinematicBody::new(rect, enemy_animations()?);
        body.velocity.x = patrol.speed;
        Ok(Self {
            body,
            behavior: Behavior::Patrol(patrol),
        })
    }

    /// Steer from behaviour, then run the physics/animation step
    pub fn update(&mut self, dt: f32, platforms: &[Platform]) -> Step {
        let jumped = match &mut self.behavior {
            Behavior::Player(control) => control.steer(&mut self.body),
            Behavior::Patrol(patrol) => {
                patrol.steer(&mut self.body);
                false
            }
        };
        let contacts = self.body.update(dt, platforms);
        Step { jumped, contacts }
    }

    pub fn control_mut(&mut self) -> Option<&mut PlayerControl> {
        match &mut self.behavior {
            Behavior::Player(control) => Some(control),
            Behavior::Patrol(_) => None,
        }
    }
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    pub character: Character,
    pub lives: u32,
    pub score: u32,
}

impl Hero {
    pub fn new(spawn: Vec2) -> Result<Self, SimError> {
        let rect = Rect::new(spawn.x, spawn.y, HERO_WIDTH, HERO_HEIGHT)?;
        Ok(Self {
            character: Character {
                body: KinematicBody::new(rect, hero_animations()?),
                behavior: Behavior::Player(PlayerControl::default()),
            },
            lives: HERO_LIVES,
            score: 0,
        })
    }

    pub fn body(&self) -> &KinematicBody {
        &self.character.body
    }

    pub fn body_mut(&mut self) -> &mut KinematicBody {
        &mut self.character.body
    }

    /// Lose one life. Returns true when that was the last one.
    pub fn take_damage(&mut self) -> bool {
        self.lives = self.lives.saturating_sub(1);
        self.lives == 0
    }

    /// Move back to the anchor with vertical speed cleared.
    /// Lives, score and horizontal intent are untouched.
    pub fn respawn(&mut self, anchor: Vec2) {
        let body = self.body_mut();
        body.rect.x = anchor.x;
        body.rect.y = anchor.y;
        body.velocity.y = 0.0;
    }
}

fn clip(frames: &[&str], frame_duration: f32, looping: bool) -> Result<AnimationState, SimError> {
    Ok(AnimationState::new(AnimationClip::new(
        frames.iter().copied(),
        frame_duration,
        looping,
    )?))
}

pub fn hero_animations() -> Result<AnimationSet, SimError> {
    Ok(AnimationSet {
        idle: clip(&["boy_stand", "boy_stand2"], 0.3, true)?,
        run: clip(&["boy_walk1", "boy_walk2", "boy_walk3"], 0.1, true)?,
        jump: clip(&["boy_jump"], 0.1, false)?,
    })
}

pub fn enemy_animations() -> Result<AnimationSet, SimError> {
    Ok(AnimationSet {
        idle: clip(&["enemy_stand1", "enemy_stand2"], 0.3, true)?,
        run: clip(&["enemy_walk1", "enemy_walk2"], 0.15, true)?,
        jump: clip(&["enemy_stand1"], 0.1, true)?,
    })
}
