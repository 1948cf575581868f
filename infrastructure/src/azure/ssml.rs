//! SSML document construction for synthesis requests.

use calorie_application::VoiceProfile;
use calorie_domain::{Language, VoiceGender};

/// Neural voice for a language and gender.
pub fn voice_name(language: Language, gender: VoiceGender) -> &'static str {
    match (language, gender) {
        (Language::English, VoiceGender::Male) => "en-US-GuyNeural",
        (Language::English, VoiceGender::Female) => "en-US-JennyNeural",
        (Language::Spanish, VoiceGender::Male) => "es-ES-AlvaroNeural",
        (Language::Spanish, VoiceGender::Female) => "es-ES-ElviraNeural",
        (Language::French, VoiceGender::Male) => "fr-FR-HenriNeural",
        (Language::French, VoiceGender::Female) => "fr-FR-DeniseNeural",
        (Language::German, VoiceGender::Male) => "de-DE-ConradNeural",
        (Language::German, VoiceGender::Female) => "de-DE-KatjaNeural",
    }
}

pub fn build_ssml(text: &str, profile: &VoiceProfile) -> String {
    format!(
        "<speak version=\"1.0\" xmlns=\"http://www.w3.org/2001/10/synthesis\" xml:lang=\"{locale}\">\
<voice name=\"{voice}\"><prosody rate=\"{rate}\">{text}</prosody></voice></speak>",
        locale = profile.language.locale(),
        voice = voice_name(profile.language, profile.voice),
        rate = profile.speed.as_percent_delta(),
        text = quick_xml::escape::escape(text),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use calorie_domain::SpeechSpeed;

    #[test]
    fn test_default_profile_uses_english_male_voice() {
        let ssml = build_ssml("Hello", &VoiceProfile::default());
        assert!(ssml.contains("xml:lang=\"en-US\""));
        assert!(ssml.contains("<voice name=\"en-US-GuyNeural\">"));
        assert!(ssml.contains("<prosody rate=\"+0%\">Hello</prosody>"));
    }

    #[test]
    fn test_profile_selects_voice_and_rate() {
        let profile = VoiceProfile {
            language: Language::French,
            voice: VoiceGender::Female,
            speed: SpeechSpeed::new(1.5).unwrap(),
        };
        let ssml = build_ssml("Bonjour", &profile);
        assert!(ssml.contains("fr-FR-DeniseNeural"));
        assert!(ssml.contains("rate=\"+50%\""));
    }

    #[test]
    fn test_text_is_escaped() {
        let ssml = build_ssml("fish & chips <500 kcal>", &VoiceProfile::default());
        assert!(ssml.contains("fish &amp; chips &lt;500 kcal&gt;"));
    }

    #[test]
    fn test_every_combination_has_a_voice_in_its_locale() {
        for language in Language::ALL {
            for gender in [VoiceGender::Male, VoiceGender::Female] {
                assert!(voice_name(language, gender).starts_with(language.locale()));
            }
        }
    }
}
