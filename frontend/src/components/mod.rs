mod completion_card;
mod copy_field;
mod progress_bar;
mod question_input;
mod share_dialog;
mod transcript;

pub use progress_bar::ProgressBar;
pub use question_input::QuestionInput;
pub use share_dialog::ShareDialog;
pub use transcript::TranscriptView;
