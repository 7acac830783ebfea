//! Session lifecycle phases and valid transitions.

/// Where the questionnaire session is in its lifecycle.
///
/// - `NotStarted`: start screen is showing
/// - `Starting`: session-start request in flight
/// - `AwaitingResponse`: an input widget is active for the pending question
/// - `Submitting`: an answer is in flight; no input is shown
/// - `Stalled`: the service sent neither a question nor completion
/// - `Completed`: every question answered
/// - `Failed`: the session could not be started
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    NotStarted,

    Starting,

    /// `clarification` is set when the pending question is a follow-up to an
    /// answer the service did not accept outright.
    AwaitingResponse { clarification: bool },

    /// Carries the clarification flag of the question being answered so a
    /// failed submission can restore it.
    Submitting { clarification: bool },

    Stalled,

    Completed,

    Failed,
}

impl SessionPhase {
    /// Returns true if an input widget should be shown in this phase.
    pub fn accepts_input(&self) -> bool {
        matches!(self, Self::AwaitingResponse { .. })
    }

    /// Returns true if no further transitions are possible.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Stalled | Self::Completed | Self::Failed)
    }

    pub fn can_transition_to(&self, target: &Self) -> bool {
        use SessionPhase::*;
        matches!(
            (self, target),
            (NotStarted, Starting)
                | (Starting, AwaitingResponse { .. })
                | (Starting, Stalled)
                | (Starting, Completed)
                | (Starting, Failed)
                | (AwaitingResponse { .. }, Submitting { .. })
                | (Submitting { .. }, AwaitingResponse { .. })
                | (Submitting { .. }, Stalled)
                | (Submitting { .. }, Completed)
        )
    }
}
