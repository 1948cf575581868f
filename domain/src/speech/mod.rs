//! Speech recognition outcomes.

use serde::{Deserialize, Serialize};

/// Recognized text, guaranteed non-empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecognizedText(String);

impl RecognizedText {
    /// Returns `None` for empty or whitespace-only text.
    pub fn new(text: impl Into<String>) -> Option<Self> {
        let text = text.into();
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Display for RecognizedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a recognition or synthesis request was canceled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CancellationReason {
    Error,
    EndOfStream,
    CancelledByUser,
}

impl CancellationReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            CancellationReason::Error => "Error",
            CancellationReason::EndOfStream => "EndOfStream",
            CancellationReason::CancelledByUser => "CancelledByUser",
        }
    }
}

impl std::fmt::Display for CancellationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CancellationReason.{}", self.as_str())
    }
}

/// Result of a single-utterance recognition: exactly one of three states
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionOutcome {
    Recognized(RecognizedText),
    NoMatch,
    Canceled {
        reason: CancellationReason,
        detail: Option<String>,
    },
}

impl RecognitionOutcome {
    pub fn canceled(reason: CancellationReason, detail: impl Into<String>) -> Self {
        RecognitionOutcome::Canceled {
            reason,
            detail: Some(detail.into()),
        }
    }

    /// Build from raw recognizer text; empty text counts as no match.
    pub fn from_text(text: impl Into<String>) -> Self {
        match RecognizedText::new(text) {
            Some(t) => RecognitionOutcome::Recognized(t),
            None => RecognitionOutcome::NoMatch,
        }
    }

    pub fn text(&self) -> Option<&RecognizedText> {
        match self {
            RecognitionOutcome::Recognized(t) => Some(t),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RecognitionOutcome::Recognized(_) => "recognized",
            RecognitionOutcome::NoMatch => "no_match",
            RecognitionOutcome::Canceled { .. } => "canceled",
        }
    }
}
