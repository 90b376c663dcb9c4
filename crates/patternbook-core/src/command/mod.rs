//! Light remote built on reversible commands.
//!
//! A [`LightCommand`] binds one primitive of a [`Light`] and its inverse.
//! Commands borrow the light rather than own it, so the light must outlive
//! every command and the [`RemoteControl`] holding them.

mod light;
mod remote;

pub use light::{FULL_INTENSITY, Light, LightState};
pub use remote::{InvokerState, RemoteControl};

use derive_more::Display;
use std::cell::RefCell;

///
/// Command
///
/// A self-contained reversible action. Implementations must make `execute`
/// a no-op once applied and `undo` a no-op unless applied.
///

pub trait Command {
    fn execute(&mut self);
    fn undo(&mut self);
    fn name(&self) -> &'static str;
}

///
/// LightAction
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum LightAction {
    #[display("activate")]
    Activate,
    #[display("deactivate")]
    Deactivate,
}

impl LightAction {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Activate => "Turn On Light",
            Self::Deactivate => "Turn Off Light",
        }
    }

    fn forward(self, light: &mut Light) {
        match self {
            Self::Activate => light.activate(),
            Self::Deactivate => light.deactivate(),
        }
    }

    fn inverse(self, light: &mut Light) {
        match self {
            Self::Activate => light.deactivate(),
            Self::Deactivate => light.activate(),
        }
    }
}

///
/// LightCommand
///

#[derive(Debug)]
pub struct LightCommand<'a> {
    action: LightAction,
    light: &'a RefCell<Light>,
    applied: bool,
}

impl<'a> LightCommand<'a> {
    #[must_use]
    pub const fn new(action: LightAction, light: &'a RefCell<Light>) -> Self {
        Self {
            action,
            light,
            applied: false,
        }
    }

    #[must_use]
    pub const fn activate(light: &'a RefCell<Light>) -> Self {
        Self::new(LightAction::Activate, light)
    }

    #[must_use]
    pub const fn deactivate(light: &'a RefCell<Light>) -> Self {
        Self::new(LightAction::Deactivate, light)
    }

    #[must_use]
    pub const fn action(&self) -> LightAction {
        self.action
    }

    #[must_use]
    pub const fn is_applied(&self) -> bool {
        self.applied
    }
}

impl Command for LightCommand<'_> {
    fn execute(&mut self) {
        if self.applied {
            return;
        }

        self.action.forward(&mut self.light.borrow_mut());
        self.applied = true;
    }

    fn undo(&mut self) {
        if !self.applied {
            return;
        }

        self.action.inverse(&mut self.light.borrow_mut());
        self.applied = false;
    }

    fn name(&self) -> &'static str {
        self.action.label()
    }
}

///
/// TESTS
///
