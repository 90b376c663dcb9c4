use super::Command;
use crate::{log, log::Topic};
use derive_more::Display;

///
/// InvokerState
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
pub enum InvokerState {
    Holding,
    Idle,
}

///
/// RemoteControl
///
/// Invoker with a single-level undo slot.
///
/// - `submit` executes a command and keeps it, dropping whatever was held
/// - `undo_last` reverses the held command and empties the slot
/// - undo with an empty slot is reported and otherwise ignored
///

#[derive(Default)]
pub struct RemoteControl<'a> {
    last_command: Option<Box<dyn Command + 'a>>,
}

impl<'a> RemoteControl<'a> {
    #[must_use]
    pub const fn new() -> Self {
        Self { last_command: None }
    }

    pub fn submit(&mut self, mut command: impl Command + 'a) {
        log!(Topic::Command, Info, "🔘 Pressing button: {}", command.name());
        command.execute();
        self.last_command = Some(Box::new(command));
    }

    pub fn undo_last(&mut self) {
        if let Some(mut command) = self.last_command.take() {
            log!(Topic::Command, Info, "↩️ Pressing UNDO button ({})", command.name());
            command.undo();
        } else {
            log!(Topic::Command, Warn, "❌ No command to undo");
        }
    }

    #[must_use]
    pub const fn state(&self) -> InvokerState {
        if self.last_command.is_some() {
            InvokerState::Holding
        } else {
            InvokerState::Idle
        }
    }

    /// Label of the held command, if any.
    #[must_use]
    pub fn held_name(&self) -> Option<&'static str> {
        self.last_command.as_ref().map(|cmd| cmd.name())
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        command::{Light, LightCommand, LightState},
        log::LogBuffer,
    };
    use std::cell::RefCell;

    #[test]
    fn new_remote_is_idle() {
        let remote = RemoteControl::new();

        assert_eq!(remote.state(), InvokerState::Idle);
        assert_eq!(remote.held_name(), None);
    }

    #[test]
    fn submit_moves_to_holding_and_replaces() {
        let light = RefCell::new(Light::new());
        let mut remote = RemoteControl::new();

        remote.submit(LightCommand::activate(&light));
        assert_eq!(remote.state(), InvokerState::Holding);
        assert_eq!(remote.held_name(), Some("Turn On Light"));

        remote.submit(LightCommand::deactivate(&light));
        assert_eq!(remote.state(), InvokerState::Holding);
        assert_eq!(remote.held_name(), Some("Turn Off Light"));
    }

    #[test]
    fn undo_last_returns_to_idle() {
        let light = RefCell::new(Light::new());
        let mut remote = RemoteControl::new();

        remote.submit(LightCommand::activate(&light));
        remote.undo_last();

        assert_eq!(remote.state(), InvokerState::Idle);
        assert_eq!(light.borrow().state(), LightState::OFF);
    }

    #[test]
    fn undo_on_idle_is_reported_noop() {
        LogBuffer::clear();
        let mut remote = RemoteControl::new();

        remote.undo_last();

        assert_eq!(remote.state(), InvokerState::Idle);
        assert!(LogBuffer::contains(Topic::Command, "No command to undo"));
    }

    #[test]
    fn superseded_command_is_dropped_not_undone() {
        let light = RefCell::new(Light::new());
        let mut remote = RemoteControl::new();

        remote.submit(LightCommand::activate(&light));
        remote.submit(LightCommand::deactivate(&light));
        remote.undo_last();
        remote.undo_last();

        // only the deactivate is reversed; the activate is gone
        assert_eq!(light.borrow().state(), LightState::ON);
    }
}
