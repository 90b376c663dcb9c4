use crate::{ThisError, log, log::Topic};
use derive_more::Display;

///
/// StateError
///

#[derive(Debug, Eq, PartialEq, ThisError)]
pub enum StateError {
    #[error("invalid operation: {reason} ({action} while {from})")]
    InvalidTransition {
        from: PlayerState,
        action: PlayerAction,
        reason: &'static str,
    },
}

///
/// PlayerState
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum PlayerState {
    Paused,
    Playing,
    Stopped,
}

///
/// PlayerAction
///

#[derive(Clone, Copy, Debug, Display, Eq, PartialEq)]
#[remain::sorted]
pub enum PlayerAction {
    #[display("pause")]
    Pause,
    #[display("play")]
    Play,
    #[display("stop")]
    Stop,
}

impl PlayerState {
    /// Next state for `action`, or the reason the action is not allowed here.
    pub const fn transition(self, action: PlayerAction) -> Result<Self, StateError> {
        let reason = match (self, action) {
            (Self::Stopped | Self::Paused, PlayerAction::Play) => return Ok(Self::Playing),
            (Self::Playing, PlayerAction::Pause) => return Ok(Self::Paused),
            (Self::Playing | Self::Paused, PlayerAction::Stop) => return Ok(Self::Stopped),

            (Self::Playing, PlayerAction::Play) => "Already playing",
            (Self::Paused, PlayerAction::Pause) => "Already paused",
            (Self::Stopped, PlayerAction::Pause) => "Cannot pause when stopped",
            (Self::Stopped, PlayerAction::Stop) => "Already stopped",
        };

        Err(StateError::InvalidTransition {
            from: self,
            action,
            reason,
        })
    }

    const fn announcement(self, from: Self) -> &'static str {
        match (from, self) {
            (Self::Paused, Self::Playing) => "▶️ Resuming playback",
            (_, Self::Playing) => "▶️ Starting music playback",
            (_, Self::Paused) => "⏸️ Pausing playback",
            (_, Self::Stopped) => "⏹️ Stopping playback",
        }
    }
}

///
/// MusicPlayer
///
/// Context whose behaviour depends on the current [`PlayerState`]. Rejected
/// actions leave the state untouched.
///

#[derive(Debug)]
pub struct MusicPlayer {
    song: String,
    state: PlayerState,
}

impl MusicPlayer {
    #[must_use]
    pub fn new(song: impl Into<String>) -> Self {
        Self {
            song: song.into(),
            state: PlayerState::Stopped,
        }
    }

    #[must_use]
    pub const fn state(&self) -> PlayerState {
        self.state
    }

    #[must_use]
    pub fn song(&self) -> &str {
        &self.song
    }

    pub fn play(&mut self) -> Result<PlayerState, StateError> {
        self.apply(PlayerAction::Play)
    }

    pub fn pause(&mut self) -> Result<PlayerState, StateError> {
        self.apply(PlayerAction::Pause)
    }

    pub fn stop(&mut self) -> Result<PlayerState, StateError> {
        self.apply(PlayerAction::Stop)
    }

    fn apply(&mut self, action: PlayerAction) -> Result<PlayerState, StateError> {
        log!(
            Topic::State,
            Info,
            "🎵 Song: {} | Current state: {}",
            self.song,
            self.state
        );

        match self.state.transition(action) {
            Ok(next) => {
                log!(Topic::State, Info, "{}", next.announcement(self.state));
                self.state = next;
                log!(Topic::State, Ok, "   ➡️ New state: {next}");

                Ok(next)
            }
            Err(err) => {
                log!(Topic::State, Warn, "   ❌ {err}");

                Err(err)
            }
        }
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normal_playback_cycle() {
        let mut player = MusicPlayer::new("Blue and White Porcelain");

        assert_eq!(player.play(), Ok(PlayerState::Playing));
        assert_eq!(player.pause(), Ok(PlayerState::Paused));
        assert_eq!(player.play(), Ok(PlayerState::Playing));
        assert_eq!(player.stop(), Ok(PlayerState::Stopped));
    }

    #[test]
    fn invalid_actions_leave_state_unchanged() {
        let mut player = MusicPlayer::new("song");

        let err = player.stop().unwrap_err();
        assert_eq!(
            err,
            StateError::InvalidTransition {
                from: PlayerState::Stopped,
                action: PlayerAction::Stop,
                reason: "Already stopped",
            }
        );
        assert_eq!(player.state(), PlayerState::Stopped);

        assert!(player.pause().is_err());
        assert_eq!(player.state(), PlayerState::Stopped);

        player.play().unwrap();
        assert!(player.play().is_err());
        assert_eq!(player.state(), PlayerState::Playing);

        player.pause().unwrap();
        assert!(player.pause().is_err());
        assert_eq!(player.state(), PlayerState::Paused);
    }

    #[test]
    fn paused_can_stop() {
        assert_eq!(
            PlayerState::Paused.transition(PlayerAction::Stop),
            Ok(PlayerState::Stopped)
        );
    }

    #[test]
    fn error_message_names_reason() {
        let err = PlayerState::Stopped
            .transition(PlayerAction::Pause)
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "invalid operation: Cannot pause when stopped (pause while Stopped)"
        );
    }
}
