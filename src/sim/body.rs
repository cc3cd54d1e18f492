//! Kinematic body: gravity, integration and animation-state selection
//!
//! Velocities and gravity are expressed per reference tick (60 Hz). Every
//! delta is scaled by `dt * REFERENCE_FPS`, so a 1/60 s step moves a body by
//! exactly its velocity and other tick rates stay proportional.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::animation::AnimationState;
use super::collision::{self, Contact};
use super::level::Platform;
use super::rect::Rect;
use crate::consts::*;

/// Which way the sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Named animation states, selected from motion every tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Motion {
    #[default]
    Idle,
    Run,
    Jump,
}

impl Motion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Motion::Idle => "idle",
            Motion::Run => "run",
            Motion::Jump => "jump",
        }
    }
}

/// What happens to a clip when its state becomes active again
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AnimationPolicy {
    /// Resume wherever the clip left off; only explicit events reset it
    #[default]
    Continue,
    /// Rewind the clip every time its state is entered
    ResetOnEnter,
}

/// One animation per motion state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimationSet {
    pub idle: AnimationState,
    pub run: AnimationState,
    pub jump: AnimationState,
}

impl AnimationSet {
    pub fn get(&self, motion: Motion) -> &AnimationState {
        match motion {
            Motion::Idle => &self.idle,
            Motion::Run => &self.run,
            Motion::Jump => &self.jump,
        }
    }

    pub fn get_mut(&mut self, motion: Motion) -> &mut AnimationState {
        match motion {
            Motion::Idle => &mut self.idle,
            Motion::Run => &mut self.run,
            Motion::Jump => &mut self.jump,
        }
    }
}

/// An axis-aligned body moved by velocity and gravity, resolved against
/// static platforms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KinematicBody {
    pub rect: Rect,
    /// Units per reference tick (positive y is downward)
    pub velocity: Vec2,
    pub facing: Facing,
    /// Recomputed by collision resolution every update
    pub on_ground: bool,
    pub animations: AnimationSet,
    pub active: Motion,
    pub policy: AnimationPolicy,
}

impl KinematicBody {
    pub fn new(rect: Rect, animations: AnimationSet) -> Self {
        Self {
            rect,
            velocity: Vec2::ZERO,
            facing: Facing::Right,
            on_ground: false,
            animations,
            active: Motion::Idle,
            policy: AnimationPolicy::Continue,
        }
    }

    /// Advance one tick: gravity, move, resolve, pick state, animate.
    ///
    /// Returns the platform contacts resolved this tick, in platform order.
    pub fn update(&mut self, dt: f32, platforms: &[Platform]) -> Vec<Contact> {
        let step = dt * REFERENCE_FPS;

        if !self.on_ground {
            self.velocity.y += GRAVITY_ACCEL * step;
        }

        let old = self.rect.position();
        self.rect.x += self.velocity.x * step;
        self.rect.y += self.velocity.y * step;

        let contacts = collision::resolve_platforms(self, old, platforms);

        self.select_motion();
        self.animations.get_mut(self.active).advance(dt);

        contacts
    }

    /// Pick the active animation from the post-resolution motion
    pub fn select_motion(&mut self) {
        let next = if !self.on_ground {
            Motion::Jump
        } else if self.velocity.x.abs() > MOVE_EPSILON {
            self.facing = if self.velocity.x > 0.0 {
                Facing::Right
            } else {
                Facing::Left
            };
            Motion::Run
        } else {
            Motion::Idle
        };

        if next != self.active && self.policy == AnimationPolicy::ResetOnEnter {
            self.animations.get_mut(next).reset();
        }
        self.active = next;
    }

    /// Current animation playback
    pub fn animation(&self) -> &AnimationState {
        self.animations.get(self.active)
    }

    pub fn current_image(&self) -> &str {
        self.animation().current_image()
    }
}
