//! Console output formatter for Calorie Doctor

use calorie_application::{AudioOutputError, SynthesisError};
use calorie_domain::{
    CancellationReason, ConversationLog, Preferences, RecognitionOutcome, Role, Theme,
};
use colored::{Color, Colorize};

const RESPONSE_HEADER: &str = "Here's What Your Calorie Doctor Says:";
const ANALYSIS_HEADER: &str = "Meal Analysis:";

/// Colors used for one theme
#[derive(Debug, Clone, Copy, PartialEq)]
struct Palette {
    accent: Color,
    heading: Color,
    user: Color,
    bot: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                accent: Color::Blue,
                heading: Color::Black,
                user: Color::Magenta,
                bot: Color::Blue,
            },
            Theme::Dark => Self {
                accent: Color::Cyan,
                heading: Color::BrightWhite,
                user: Color::BrightMagenta,
                bot: Color::BrightCyan,
            },
        }
    }
}

/// Formats answers, statuses and settings for the terminal
#[derive(Debug, Clone)]
pub struct ConsoleFormatter {
    theme: Theme,
    palette: Palette,
}

impl ConsoleFormatter {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            palette: Palette::for_theme(theme),
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        self.palette = Palette::for_theme(theme);
    }

    pub fn welcome(&self, preferences: &Preferences, audio_output: &str) -> String {
        let mut output = String::new();
        output.push('\n');
        output.push_str(&format!(
            "{}\n",
            "╭─────────────────────────────────────────────╮".color(self.palette.accent)
        ));
        output.push_str(&format!(
            "{}\n",
            "│  Welcome to Your Personal Calorie Doctor!   │".color(self.palette.accent)
        ));
        output.push_str(&format!(
            "{}\n\n",
            "╰─────────────────────────────────────────────╯".color(self.palette.accent)
        ));
        if let Some(name) = &preferences.display_name {
            output.push_str(&format!("Hello, {}!\n", name.bold()));
        }
        output.push_str(&format!(
            "{} {} ({}), spoken answers: {}\n\n",
            "Language:".dimmed(),
            preferences.language,
            preferences.language.locale(),
            audio_output
        ));
        output.push_str(&Self::help_text());
        output
    }

    pub fn help_text() -> String {
        [
            "Commands:",
            "  /image <path>     - Attach a meal photo (jpg, jpeg, png)",
            "  /image clear      - Remove the attached photo",
            "  /listen           - Dictate your next question",
            "  /settings         - Show your preferences",
            "  /set <key> <val>  - Change name, language, theme, voice or speed",
            "  /overview         - Summary of this session",
            "  /history          - Show the conversation so far",
            "  /widget           - Print the chat widget embed snippet",
            "  /help, /h, /?     - Show this help",
            "  /quit, /exit, /q  - Exit",
            "",
        ]
        .join("\n")
    }

    /// The personalized answer to a turn.
    pub fn response(&self, text: &str) -> String {
        format!(
            "\n{}\n{}\n",
            RESPONSE_HEADER.color(self.palette.heading).bold(),
            text
        )
    }

    /// The result of the image-based meal analysis.
    pub fn analysis(&self, text: &str) -> String {
        format!(
            "\n{}\n{}\n",
            ANALYSIS_HEADER.color(self.palette.accent).bold(),
            text
        )
    }

    pub fn recognition(&self, outcome: &RecognitionOutcome) -> String {
        match outcome {
            RecognitionOutcome::Recognized(text) => {
                format!("{} {}", "Recognized:".green().bold(), text)
            }
            RecognitionOutcome::NoMatch => "No speech could be recognized".yellow().to_string(),
            RecognitionOutcome::Canceled { reason, detail } => {
                let mut output = format!("{} {}", "Speech Recognition canceled:".red(), reason);
                if *reason == CancellationReason::Error
                    && let Some(detail) = detail
                {
                    output.push_str(&format!("\n{} {}", "Error details:".red(), detail));
                }
                output
            }
        }
    }

    pub fn synthesis_failure(&self, error: &SynthesisError) -> String {
        format!("{} ({})", "Error converting text to speech".red(), error)
    }

    pub fn playback_failure(&self, error: &AudioOutputError) -> String {
        format!("{} {}", "Could not play the answer:".yellow(), error)
    }

    pub fn error(&self, message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    pub fn notice(&self, message: &str) -> String {
        format!("{} {}", "->".color(self.palette.accent), message)
    }

    pub fn settings(&self, preferences: &Preferences) -> String {
        let label = |s: &str| format!("{:<10}", s).color(self.palette.accent).to_string();
        let theme = match preferences.theme() {
            Theme::Light => "light",
            Theme::Dark => "dark",
        };

        let mut output = format!("\n{}\n", "Settings".color(self.palette.heading).bold());
        output.push_str(&format!(
            "  {} {}\n",
            label("name"),
            preferences.display_name.as_deref().unwrap_or("(not set)")
        ));
        output.push_str(&format!(
            "  {} {} ({})\n",
            label("language"),
            preferences.language,
            preferences.language.locale()
        ));
        output.push_str(&format!("  {} {}\n", label("theme"), theme));
        output.push_str(&format!("  {} {}\n", label("voice"), preferences.voice));
        output.push_str(&format!("  {} {}\n", label("speed"), preferences.speed));
        output
    }

    pub fn overview(
        &self,
        log: &ConversationLog,
        attached_image: Option<&str>,
        last_analysis: Option<&str>,
    ) -> String {
        let mut output = format!("\n{}\n", "Overview".color(self.palette.heading).bold());
        output.push_str(&format!("  Questions answered: {}\n", log.turn_count()));
        output.push_str(&format!(
            "  Attached photo:     {}\n",
            attached_image.unwrap_or("none")
        ));
        match last_analysis {
            Some(analysis) => {
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    "Latest meal analysis:".color(self.palette.accent),
                    analysis
                ));
            }
            None => output.push_str("  No meal has been analyzed yet.\n"),
        }
        output
    }

    pub fn history(&self, log: &ConversationLog) -> String {
        if log.is_empty() {
            return "No conversation yet.".dimmed().to_string();
        }
        log.entries()
            .iter()
            .map(|entry| {
                let color = match entry.role() {
                    Role::User => self.palette.user,
                    Role::Bot => self.palette.bot,
                };
                let role = format!("{}:", entry.role());
                format!("{} {}", role.color(color).bold(), entry.text())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for ConsoleFormatter {
    fn default() -> Self {
        Self::new(Theme::Light)
    }
}
