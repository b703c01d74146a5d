use super::{PlaybackStatus, PlayerError};

/// Something that may move the status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Caller asked to play
    Play,
    /// Caller asked to pause
    Pause,
    /// Caller asked to flip between playing and paused
    Toggle,
    /// Caller asked to stop
    Stop,
    /// Backend ran out of things to play
    Idle,
    /// Backend started loading a playlist entry
    FileStarted,
    /// Backend reported its pause flag
    PauseObserved(bool),
}

impl Trigger {
    fn name(&self) -> &'static str {
        match self {
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Toggle => "toggle",
            Self::Stop => "stop",
            Self::Idle => "handle idle",
            Self::FileStarted => "handle file start",
            Self::PauseObserved(_) => "apply pause change",
        }
    }
}

/// What the player has to do in response to a trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Nothing to do, status unchanged
    Ignore,
    /// Start the playlist, or a random track if it is empty. Playing is
    /// entered once the backend confirms the start.
    StartPlayback,
    /// Set the backend pause flag. The status follows the backend's report.
    SetPause(bool),
    /// Stop the backend and enter Stopped right away
    Stop,
    /// Queue a random track and keep playing
    AutoAdvance,
    /// Enter the given status without touching the backend
    Enter(PlaybackStatus),
}

/// The transition table.
///
/// Pure: decides what a trigger means in `status` without touching any
/// state. Only an unexpected backend report is an error; caller triggers
/// that make no sense in the current status are ignored.
///
/// # Errors
///
/// Returns `PlayerError::InvalidState` for a pause report while stopped.
pub fn plan(status: PlaybackStatus, trigger: Trigger) -> Result<Step, PlayerError> {
    use PlaybackStatus::{Paused, Playing, Stopped};

    let step = match (status, trigger) {
        (Stopped, Trigger::Play) => Step::StartPlayback,
        (Paused, Trigger::Play) => Step::SetPause(false),
        (Playing, Trigger::Play) => Step::Ignore,

        (Playing, Trigger::Pause) => Step::SetPause(true),
        (Paused | Stopped, Trigger::Pause) => Step::Ignore,

        (Playing, Trigger::Toggle) => Step::SetPause(true),
        (Paused, Trigger::Toggle) => Step::SetPause(false),
        (Stopped, Trigger::Toggle) => Step::Ignore,

        (_, Trigger::Stop) => Step::Stop,

        (Stopped, Trigger::Idle) => Step::Ignore,
        (Playing | Paused, Trigger::Idle) => Step::AutoAdvance,

        (Stopped, Trigger::FileStarted) => Step::Enter(Playing),
        (Playing | Paused, Trigger::FileStarted) => Step::Ignore,

        (Playing | Paused, Trigger::PauseObserved(true)) => Step::Enter(Paused),
        (Playing | Paused, Trigger::PauseObserved(false)) => Step::Enter(Playing),
        (Stopped, Trigger::PauseObserved(_)) => {
            return Err(PlayerError::InvalidState {
                operation: trigger.name(),
                status,
            });
        }
    };

    Ok(step)
}

/// Mutable part of the player, guarded by the player lock.
#[derive(Debug, Default)]
pub(crate) struct PlayerState {
    pub status: PlaybackStatus,
    /// Set by the first start-file event, never cleared.
    pub started: bool,
    /// A caller asked for playback while stopped and the backend has not
    /// confirmed it yet.
    pub awaiting_start: bool,
    /// The backend shut down.
    pub terminated: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use PlaybackStatus::{Paused, Playing, Stopped};

    #[test]
    fn play_starts_resumes_or_ignores() {
        assert_eq!(plan(Stopped, Trigger::Play).ok(), Some(Step::StartPlayback));
        assert_eq!(plan(Paused, Trigger::Play).ok(), Some(Step::SetPause(false)));
        assert_eq!(plan(Playing, Trigger::Play).ok(), Some(Step::Ignore));
    }

    #[test]
    fn pause_only_acts_while_playing() {
        assert_eq!(plan(Playing, Trigger::Pause).ok(), Some(Step::SetPause(true)));
        assert_eq!(plan(Paused, Trigger::Pause).ok(), Some(Step::Ignore));
        assert_eq!(plan(Stopped, Trigger::Pause).ok(), Some(Step::Ignore));
    }

    #[test]
    fn toggle_flips_pause_and_ignores_stopped() {
        assert_eq!(plan(Playing, Trigger::Toggle).ok(), Some(Step::SetPause(true)));
        assert_eq!(plan(Paused, Trigger::Toggle).ok(), Some(Step::SetPause(false)));
        assert_eq!(plan(Stopped, Trigger::Toggle).ok(), Some(Step::Ignore));
    }

    #[test]
    fn stop_applies_from_every_status() {
        for status in [Playing, Paused, Stopped] {
            assert_eq!(plan(status, Trigger::Stop).ok(), Some(Step::Stop));
        }
    }

    #[test]
    fn idle_advances_unless_stopped() {
        assert_eq!(plan(Stopped, Trigger::Idle).ok(), Some(Step::Ignore));
        assert_eq!(plan(Playing, Trigger::Idle).ok(), Some(Step::AutoAdvance));
        assert_eq!(plan(Paused, Trigger::Idle).ok(), Some(Step::AutoAdvance));
    }

    #[test]
    fn file_start_only_moves_out_of_stopped() {
        assert_eq!(plan(Stopped, Trigger::FileStarted).ok(), Some(Step::Enter(Playing)));
        assert_eq!(plan(Playing, Trigger::FileStarted).ok(), Some(Step::Ignore));
        assert_eq!(plan(Paused, Trigger::FileStarted).ok(), Some(Step::Ignore));
    }

    #[test]
    fn pause_reports_follow_the_backend() {
        assert_eq!(plan(Playing, Trigger::PauseObserved(true)).ok(), Some(Step::Enter(Paused)));
        assert_eq!(plan(Paused, Trigger::PauseObserved(false)).ok(), Some(Step::Enter(Playing)));
        assert_eq!(plan(Paused, Trigger::PauseObserved(true)).ok(), Some(Step::Enter(Paused)));
    }

    #[test]
    fn pause_report_while_stopped_is_invalid() {
        let result = plan(Stopped, Trigger::PauseObserved(true));

        assert!(matches!(
            result,
            Err(PlayerError::InvalidState { status: Stopped, .. })
        ));
    }
}
