use crate::{log, log::Topic};
use std::fmt::{self, Display};

/// Intensity reported while the light is on.
pub const FULL_INTENSITY: u8 = 100;

///
/// LightState
///

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct LightState {
    pub active: bool,
    pub intensity: u8,
}

impl LightState {
    pub const OFF: Self = Self {
        active: false,
        intensity: 0,
    };

    pub const ON: Self = Self {
        active: true,
        intensity: FULL_INTENSITY,
    };
}

impl Display for LightState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.active {
            write!(f, "ON (intensity: {})", self.intensity)
        } else {
            write!(f, "OFF")
        }
    }
}

///
/// Light
///
/// The receiver. `intensity` is derived from `active` and both change only
/// through `activate` / `deactivate`.
///

#[derive(Debug, Default)]
pub struct Light {
    active: bool,
    intensity: u8,
}

impl Light {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: false,
            intensity: 0,
        }
    }

    pub fn activate(&mut self) {
        self.active = true;
        self.intensity = FULL_INTENSITY;
        log!(Topic::Command, Info, "💡 Light is {}", self.state());
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.intensity = 0;
        log!(Topic::Command, Info, "🌑 Light is {}", self.state());
    }

    pub fn report(&self) {
        let state = self.state();
        let icon = if state.active { "💡" } else { "🌑" };

        log!(Topic::Command, Info, "{icon} Light status: {state}");
    }

    #[must_use]
    pub const fn state(&self) -> LightState {
        LightState {
            active: self.active,
            intensity: self.intensity,
        }
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub const fn intensity(&self) -> u8 {
        self.intensity
    }
}

///
/// TESTS
///
