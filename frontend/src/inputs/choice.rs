//! Draft state for fixed-choice questions with an optional "Other" escape

use shared::ResponseValue;

/// One entry in a choice list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Choice {
    /// Index into the question's option labels
    Option(usize),
    /// The free-text escape
    Other,
}

/// Radio list: exactly one choice, confirmable once something is picked.
#[derive(Debug, Clone, PartialEq)]
pub struct SingleChoiceDraft {
    options: Vec<String>,
    allow_other: bool,
    selected: Option<Choice>,
    other_text: String,
}

impl SingleChoiceDraft {
    pub fn new(options: Vec<String>, allow_other: bool) -> Self {
        Self {
            options,
            allow_other,
            selected: None,
            other_text: String::new(),
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn allow_other(&self) -> bool {
        self.allow_other
    }

    pub fn selected(&self) -> Option<Choice> {
        self.selected
    }

    pub fn other_text(&self) -> &str {
        &self.other_text
    }

    /// Returns true if the free-text field should be visible
    pub fn other_visible(&self) -> bool {
        self.selected == Some(Choice::Other)
    }

    pub fn can_confirm(&self) -> bool {
        self.selected.is_some()
    }

    /// Select a choice. Returns true if this revealed the "Other" field.
    pub fn select(&mut self, choice: Choice) -> bool {
        let valid = match choice {
            Choice::Option(idx) => idx < self.options.len(),
            Choice::Other => self.allow_other,
        };
        if !valid {
            return false;
        }
        let revealed = choice == Choice::Other && !self.other_visible();
        self.selected = Some(choice);
        revealed
    }

    pub fn set_other_text(&mut self, text: String) {
        self.other_text = text;
    }

    /// The chosen label, or the trimmed "Other" text.
    ///
    /// `None` when nothing is selected or "Other" is selected with blank text;
    /// in both cases nothing must be submitted.
    pub fn confirm(&self) -> Option<ResponseValue> {
        match self.selected? {
            Choice::Option(idx) => self
                .options
                .get(idx)
                .map(|label| ResponseValue::Text(label.clone())),
            Choice::Other => {
                let text = self.other_text.trim();
                (!text.is_empty()).then(|| ResponseValue::Text(text.to_string()))
            }
        }
    }
}

/// Checkbox list: any subset, always confirmable.
#[derive(Debug, Clone, PartialEq)]
pub struct MultiChoiceDraft {
    options: Vec<String>,
    allow_other: bool,
    checked: Vec<bool>,
    other_checked: bool,
    other_text: String,
}

impl MultiChoiceDraft {
    pub fn new(options: Vec<String>, allow_other: bool) -> Self {
        let checked = vec![false; options.len()];
        Self {
            options,
            allow_other,
            checked,
            other_checked: false,
            other_text: String::new(),
        }
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn allow_other(&self) -> bool {
        self.allow_other
    }

    pub fn is_checked(&self, choice: Choice) -> bool {
        match choice {
            Choice::Option(idx) => self.checked.get(idx).copied().unwrap_or(false),
            Choice::Other => self.other_checked,
        }
    }

    pub fn other_text(&self) -> &str {
        &self.other_text
    }

    pub fn other_visible(&self) -> bool {
        self.other_checked
    }

    /// Flip a choice. Returns true if this revealed the "Other" field.
    pub fn toggle(&mut self, choice: Choice) -> bool {
        match choice {
            Choice::Option(idx) => {
                if let Some(flag) = self.checked.get_mut(idx) {
                    *flag = !*flag;
                }
                false
            }
            Choice::Other if self.allow_other => {
                self.other_checked = !self.other_checked;
                self.other_checked
            }
            Choice::Other => false,
        }
    }

    pub fn set_other_text(&mut self, text: String) {
        self.other_text = text;
    }

    /// Checked labels in display order, "Other" last.
    ///
    /// A checked "Other" with blank text is dropped; everything else is kept.
    /// An empty selection is a valid answer.
    pub fn confirm(&self) -> ResponseValue {
        let mut labels: Vec<String> = self
            .options
            .iter()
            .zip(&self.checked)
            .filter(|(_, checked)| **checked)
            .map(|(label, _)| label.clone())
            .collect();

        if self.other_checked {
            let text = self.other_text.trim();
            if !text.is_empty() {
                labels.push(text.to_string());
            }
        }

        ResponseValue::Choices(labels)
    }
}
