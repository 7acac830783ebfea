//! Append-only chat transcript

/// Who a transcript bubble belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    Ai,
    User,
}

impl Speaker {
    pub fn css_class(&self) -> &'static str {
        match self {
            Speaker::Ai => "ai",
            Speaker::User => "user",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TranscriptEntry {
    Message { speaker: Speaker, text: String },
    /// Checkmark card with the share action, appended once on completion
    Completion,
}

/// Ordered conversation history. Entries are never edited or removed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Transcript {
    entries: Vec<TranscriptEntry>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_ai(&mut self, text: impl Into<String>) {
        self.entries.push(TranscriptEntry::Message {
            speaker: Speaker::Ai,
            text: text.into(),
        });
    }

    pub fn push_user(&mut self, text: impl Into<String>) {
        self.entries.push(TranscriptEntry::Message {
            speaker: Speaker::User,
            text: text.into(),
        });
    }

    pub fn push_completion(&mut self) {
        self.entries.push(TranscriptEntry::Completion);
    }

    pub fn entries(&self) -> &[TranscriptEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Texts spoken by `speaker`, in order
    pub fn messages_from(&self, speaker: Speaker) -> Vec<&str> {
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                TranscriptEntry::Message { speaker: s, text } if *s == speaker => {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect()
    }

    pub fn completion_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|entry| matches!(entry, TranscriptEntry::Completion))
            .count()
    }
}
