//! Submission state and prompt buffer

/// Outcome of the most recent submission
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// Nothing submitted yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Generated text of the first candidate
    Succeeded(String),
    /// User-facing failure message
    Failed(String),
}

impl SubmissionState {
    /// Check if idle
    pub fn is_idle(&self) -> bool {
        matches!(self, SubmissionState::Idle)
    }

    /// Check if a request is in flight
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionState::Loading)
    }

    /// Check if the submission has finished, successfully or not
    pub fn is_terminal(&self) -> bool {
        matches!(self, SubmissionState::Succeeded(_) | SubmissionState::Failed(_))
    }

    /// Generated text, if succeeded
    pub fn text(&self) -> Option<&str> {
        match self {
            SubmissionState::Succeeded(text) => Some(text),
            _ => None,
        }
    }

    /// Failure message, if failed
    pub fn error(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

impl std::fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionState::Idle => write!(f, "Idle"),
            SubmissionState::Loading => write!(f, "Loading"),
            SubmissionState::Succeeded(_) => write!(f, "Succeeded"),
            SubmissionState::Failed(_) => write!(f, "Failed"),
        }
    }
}

/// Unsent prompt text.
///
/// Lives independently of the submission: submitting does not clear it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PromptInput {
    text: String,
}

impl PromptInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Mutable buffer for text widgets
    pub fn buffer_mut(&mut self) -> &mut String {
        &mut self.text
    }

    pub fn set(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}
