use chrono::{DateTime, Local};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Warning,
    Error,
}

impl ErrorSeverity {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Warning => " WARNING ",
            Self::Error => " ERROR ",
        }
    }
}

/// A failure shown in the banner. Never blocks input.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorState {
    pub message: String,
    pub severity: ErrorSeverity,
    pub raised_at: DateTime<Local>,
    /// Recovery hints, best first.
    pub suggestions: Vec<String>,
}

impl ErrorState {
    #[must_use]
    pub fn new(message: impl Into<String>, severity: ErrorSeverity) -> Self {
        let message: String = message.into();
        let suggestions = crate::app::recovery::get_suggestions(&message);
        Self {
            message,
            severity,
            raised_at: Local::now(),
            suggestions,
        }
    }
}
