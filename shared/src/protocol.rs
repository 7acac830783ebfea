/// Transcript rendering of a `true` answer.
pub const YES_LABEL: &str = "Yes";

/// Transcript rendering of a `false` answer.
pub const NO_LABEL: &str = "No";

/// Separator used when a multi-select answer is shown as one line.
pub const CHOICE_SEPARATOR: &str = ", ";

/// Label of the free-text escape option on choice questions.
pub const OTHER_LABEL: &str = "Other";
