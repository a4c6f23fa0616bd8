//! Held-button state from keyboard and touch controls
//!
//! Each source keeps its own held flags so lifting a finger off an on-screen
//! button doesn't cancel a key that is still down. The snapshot is the OR of
//! both sources.

use crate::sim::TickInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Left,
    Right,
    Action,
}

impl Button {
    fn index(self) -> usize {
        match self {
            Button::Left => 0,
            Button::Right => 1,
            Button::Action => 2,
        }
    }

    /// Button bound to a DOM-style key code (`KeyboardEvent.code`)
    pub fn for_key(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Button::Left),
            "ArrowRight" => Some(Button::Right),
            "Space" | "KeyA" => Some(Button::Action),
            _ => None,
        }
    }

    /// Button for an on-screen control id
    pub fn for_control(id: &str) -> Option<Self> {
        match id {
            "btn-left" => Some(Button::Left),
            "btn-right" => Some(Button::Right),
            "btn-a" => Some(Button::Action),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputSource {
    Keyboard,
    Touch,
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    keyboard: [bool; 3],
    touch: [bool; 3],
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, source: InputSource, button: Button, held: bool) {
        let slots = match source {
            InputSource::Keyboard => &mut self.keyboard,
            InputSource::Touch => &mut self.touch,
        };
        slots[button.index()] = held;
    }

    /// Key pressed; returns false for keys the game doesn't use
    pub fn key_down(&mut self, code: &str) -> bool {
        self.key(code, true)
    }

    pub fn key_up(&mut self, code: &str) -> bool {
        self.key(code, false)
    }

    fn key(&mut self, code: &str, held: bool) -> bool {
        match Button::for_key(code) {
            Some(button) => {
                self.set(InputSource::Keyboard, button, held);
                true
            }
            None => false,
        }
    }

    /// Touch start / mouse down on an on-screen control
    pub fn control_down(&mut self, id: &str) {
        if let Some(button) = Button::for_control(id) {
            self.set(InputSource::Touch, button, true);
        }
    }

    /// Touch end / mouse up / pointer leaving an on-screen control
    pub fn control_up(&mut self, id: &str) {
        if let Some(button) = Button::for_control(id) {
            self.set(InputSource::Touch, button, false);
        }
    }

    /// Drop everything, e.g. when the window loses focus
    pub fn release_all(&mut self) {
        *self = Self::default();
    }

    pub fn is_held(&self, button: Button) -> bool {
        let i = button.index();
        self.keyboard[i] || self.touch[i]
    }

    pub fn snapshot(&self) -> TickInput {
        TickInput {
            left: self.is_held(Button::Left),
            right: self.is_held(Button::Right),
            action: self.is_held(Button::Action),
        }
    }
}
