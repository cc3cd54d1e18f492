//! Title menu model
//!
//! Headless: tracks button layout, hover state and labels. The shell draws
//! it and forwards pointer positions.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::WORLD_WIDTH;
use crate::error::SimError;
use crate::settings::Settings;
use crate::sim::Rect;

const BUTTON_WIDTH: f32 = 200.0;
const BUTTON_HEIGHT: f32 = 50.0;
const BUTTON_ROWS: [f32; 3] = [200.0, 280.0, 360.0];

/// What a menu click asks the shell to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MenuAction {
    Start,
    ToggleSound,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    pub hovered: bool,
    pub action: MenuAction,
}

impl Button {
    fn new(row: f32, label: &str, action: MenuAction) -> Result<Self, SimError> {
        let x = WORLD_WIDTH / 2.0 - BUTTON_WIDTH / 2.0;
        Ok(Self {
            rect: Rect::new(x, row, BUTTON_WIDTH, BUTTON_HEIGHT)?,
            label: label.to_string(),
            hovered: false,
            action,
        })
    }
}

fn sound_label(sound_on: bool) -> String {
    let label = if sound_on { "Sound: ON" } else { "Sound: OFF" };
    label.to_string()
}

/// Start / Sound / Quit, stacked and centred
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Menu {
    pub buttons: Vec<Button>,
}

impl Menu {
    pub fn new(settings: &Settings) -> Result<Self, SimError> {
        let [start, sound, quit] = BUTTON_ROWS;
        Ok(Self {
            buttons: vec![
                Button::new(start, "Start Game", MenuAction::Start)?,
                Button::new(sound, &sound_label(settings.sound_on), MenuAction::ToggleSound)?,
                Button::new(quit, "Quit", MenuAction::Quit)?,
            ],
        })
    }

    /// The button bound to an action
    pub fn button(&self, action: MenuAction) -> Option<&Button> {
        self.buttons.iter().find(|b| b.action == action)
    }

    /// Refresh hover flags for the pointer position
    pub fn hover(&mut self, pos: Vec2) {
        for button in &mut self.buttons {
            button.hovered = button.rect.contains_point(pos);
        }
    }

    /// Action of the button under the pointer, if any
    pub fn click(&self, pos: Vec2) -> Option<MenuAction> {
        self.buttons
            .iter()
            .find(|b| b.rect.contains_point(pos))
            .map(|b| b.action)
    }

    /// Keep the sound button label in step with the settings
    pub fn sync(&mut self, settings: &Settings) {
        for button in &mut self.buttons {
            if button.action == MenuAction::ToggleSound {
                button.label = sound_label(settings.sound_on);
            }
        }
    }
}
