//! Personalization pass over generated text.

use super::entities::Preferences;

/// Placeholder the generated text may contain for the user's display name.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// Substitute the display name for every [`NAME_PLACEHOLDER`].
///
/// Returns the text unchanged when no display name is stored.
pub fn personalize(text: &str, preferences: &Preferences) -> String {
    match preferences.display_name.as_deref() {
        Some(name) => text.replace(NAME_PLACEHOLDER, name),
        None => text.to_string(),
    }
}
