//! Questionnaire session state: phases, transcript and the controller that
//! drives them from service responses.

mod controller;
mod error;
mod phase;
mod transcript;

pub use controller::{
    perform, ActiveInput, Effect, Outcome, Progress, SessionController, START_FAILED_MESSAGE,
    SUBMIT_FAILED_MESSAGE,
};
pub use error::SessionError;
pub use phase::SessionPhase;
pub use transcript::{Speaker, Transcript, TranscriptEntry};
