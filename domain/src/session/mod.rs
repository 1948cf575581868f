//! Session context.
//!
//! [`SessionContext`] holds everything scoped to one user's session. It is
//! created with defaults at session start and passed explicitly to every use
//! case that reads or mutates it.

use crate::conversation::entities::ConversationLog;
use crate::media::image::ImageParts;
use crate::preferences::entities::Preferences;
use crate::speech::RecognizedText;

/// Session-scoped state (Entity)
#[derive(Debug, Clone, Default)]
pub struct SessionContext {
    conversation: ConversationLog,
    preferences: Preferences,
    transcribed_text: String,
    attached_image: Option<ImageParts>,
}

impl SessionContext {
    pub fn new(preferences: Preferences) -> Self {
        Self {
            preferences,
            ..Self::default()
        }
    }

    pub fn conversation(&self) -> &ConversationLog {
        &self.conversation
    }

    pub fn conversation_mut(&mut self) -> &mut ConversationLog {
        &mut self.conversation
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// Replace the whole preference set. Fields are never merged.
    pub fn replace_preferences(&mut self, preferences: Preferences) {
        self.preferences = preferences;
    }

    /// Last recognized utterance, or empty when nothing was captured.
    pub fn transcribed_text(&self) -> &str {
        &self.transcribed_text
    }

    pub fn set_transcription(&mut self, text: RecognizedText) {
        self.transcribed_text = text.into_inner();
    }

    /// Take the pending transcription, leaving the slot empty.
    pub fn take_transcription(&mut self) -> Option<String> {
        if self.transcribed_text.is_empty() {
            None
        } else {
            Some(std::mem::take(&mut self.transcribed_text))
        }
    }

    pub fn attached_image(&self) -> Option<&ImageParts> {
        self.attached_image.as_ref()
    }

    pub fn attach_image(&mut self, parts: ImageParts) {
        self.attached_image = Some(parts);
    }

    pub fn clear_image(&mut self) {
        self.attached_image = None;
    }
}
