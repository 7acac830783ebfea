//! Errors raised when the session controller is driven out of order

/// Misuse of the session controller.
///
/// Logged by the page, never shown in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("Session already started")]
    AlreadyStarted,

    #[error("No active session")]
    NotStarted,

    #[error("Questionnaire already completed")]
    Completed,

    #[error("A response is already being submitted")]
    SubmissionInFlight,

    #[error("No question is waiting for an answer")]
    NoPendingQuestion,
}
