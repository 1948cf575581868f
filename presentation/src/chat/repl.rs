//! REPL (Read-Eval-Print Loop) for the interactive Calorie Doctor

use super::command::{CommandError, ReplCommand, apply_setting};
use super::turn::TurnPipeline;
use crate::output::console::ConsoleFormatter;
use crate::progress::reporter::{SilentProgress, SpinnerProgress};
use crate::widget::WidgetEmbed;
use calorie_application::{
    CaptureSpeechUseCase, ImageSource, TurnProgressNotifier, extract_image_parts,
};
use calorie_domain::{RecognitionOutcome, SessionContext};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, warn};

const PROMPT: &str = ">>> ";

/// What the loop should do after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive chat REPL
pub struct CalorieRepl {
    pipeline: TurnPipeline,
    capture: CaptureSpeechUseCase,
    images: Arc<dyn ImageSource>,
    widget: WidgetEmbed,
    session: SessionContext,
    formatter: ConsoleFormatter,
    show_progress: bool,
    history_path: Option<PathBuf>,
    attached_name: Option<String>,
    last_analysis: Option<String>,
}

impl CalorieRepl {
    pub fn new(
        pipeline: TurnPipeline,
        capture: CaptureSpeechUseCase,
        images: Arc<dyn ImageSource>,
        widget: WidgetEmbed,
        session: SessionContext,
    ) -> Self {
        let formatter = ConsoleFormatter::new(session.preferences().theme());
        Self {
            pipeline,
            capture,
            images,
            widget,
            session,
            formatter,
            show_progress: true,
            history_path: None,
            attached_name: None,
            last_analysis: None,
        }
    }

    /// Set whether to show progress
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    pub fn with_history_path(mut self, path: Option<PathBuf>) -> Self {
        self.history_path = path;
        self
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        if let Some(ref path) = self.history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        println!(
            "{}",
            self.formatter.welcome(
                self.session.preferences(),
                &self.pipeline.audio_destination()
            )
        );

        loop {
            let pending = self.session.take_transcription();
            let readline = match &pending {
                Some(text) => rl.readline_with_initial(PROMPT, (text.as_str(), "")),
                None => rl.readline(PROMPT),
            };

            match readline {
                Ok(line) => {
                    let line = line.trim();
                    let line = match (line.is_empty(), &pending) {
                        (true, Some(text)) => text.as_str(),
                        _ => line,
                    };

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if self.handle_command(line).await == Flow::Quit {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);
                    self.process_turn(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = self.history_path
            && let Err(e) = rl.save_history(path)
        {
            warn!("Could not save history to {}: {}", path.display(), e);
        }

        Ok(())
    }

    fn progress(&self) -> Box<dyn TurnProgressNotifier> {
        if self.show_progress {
            Box::new(SpinnerProgress::new())
        } else {
            Box::new(SilentProgress::new())
        }
    }

    /// Handle slash commands.
    pub async fn handle_command(&mut self, line: &str) -> Flow {
        let command = match ReplCommand::parse(line) {
            Ok(command) => command,
            Err(e @ CommandError::Unknown(_)) => {
                println!("{}", e);
                println!("Type /help for available commands");
                return Flow::Continue;
            }
            Err(e) => {
                println!("{}", self.formatter.error(&e.to_string()));
                return Flow::Continue;
            }
        };
        debug!("REPL command: {:?}", command);

        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return Flow::Quit;
            }
            ReplCommand::Help => println!("\n{}", ConsoleFormatter::help_text()),
            ReplCommand::AttachImage(path) => self.attach_image(&path),
            ReplCommand::ClearImage => {
                self.session.clear_image();
                self.attached_name = None;
                println!("{}", self.formatter.notice("Photo removed"));
            }
            ReplCommand::Listen => {
                self.listen().await;
            }
            ReplCommand::Settings => {
                println!("{}", self.formatter.settings(self.session.preferences()))
            }
            ReplCommand::Set(key, value) => {
                match apply_setting(self.session.preferences(), key, &value) {
                    Ok(preferences) => {
                        self.formatter.set_theme(preferences.theme());
                        self.session.replace_preferences(preferences);
                        println!("{}", self.formatter.settings(self.session.preferences()));
                    }
                    Err(e) => println!("{}", self.formatter.error(&e.to_string())),
                }
            }
            ReplCommand::Overview => println!(
                "{}",
                self.formatter.overview(
                    self.session.conversation(),
                    self.attached_name.as_deref(),
                    self.last_analysis.as_deref()
                )
            ),
            ReplCommand::History => {
                println!("\n{}\n", self.formatter.history(self.session.conversation()))
            }
            ReplCommand::Widget => println!("\n{}\n", self.widget.script()),
        }
        Flow::Continue
    }

    fn attach_image(&mut self, path: &Path) {
        let upload = match self.images.open(path) {
            Ok(upload) => upload,
            Err(e) => {
                println!("{}", self.formatter.error(&e.to_string()));
                return;
            }
        };

        match extract_image_parts(Some(upload.as_ref())) {
            Ok(Some(parts)) => {
                self.session.attach_image(parts);
                self.attached_name = Some(upload.name().to_string());
                println!(
                    "{}",
                    self.formatter
                        .notice(&format!("Attached {} ({})", upload.name(), upload.mime_type()))
                );
            }
            Ok(None) => {}
            Err(e) => println!("{}", self.formatter.error(&e.to_string())),
        }
    }

    /// Capture one utterance; a recognized one pre-fills the next prompt.
    pub async fn listen(&mut self) -> RecognitionOutcome {
        let progress = self.progress();
        let outcome = self.capture.execute(&mut self.session, progress.as_ref()).await;
        println!("{}", self.formatter.recognition(&outcome));
        if matches!(outcome, RecognitionOutcome::Recognized(_)) {
            println!(
                "{}",
                self.formatter
                    .notice("Press Enter to ask it, or edit it first")
            );
        }
        outcome
    }

    /// Run and present one turn.
    pub async fn process_turn(&mut self, text: &str) {
        let progress = self.progress();
        let report = self
            .pipeline
            .run(&mut self.session, text, progress.as_ref())
            .await;
        drop(progress);

        if let Some(analysis) = report.analysis_text() {
            self.last_analysis = Some(analysis.to_string());
        }
        self.pipeline.present(&report, &self.formatter).await;
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::test_support::{
        FakeImageSource, ScriptedGateway, ScriptedRecognizer, SilentSynthesizer,
    };
    use calorie_application::{AnalyzeMealUseCase, ConversationParams, RunTurnUseCase};
    use calorie_domain::{CancellationReason, Language, Preferences};

    fn repl(replies: &[&str], heard: RecognitionOutcome) -> CalorieRepl {
        let gateway = Arc::new(ScriptedGateway::new(replies));
        let pipeline = TurnPipeline::new(
            RunTurnUseCase::new(gateway.clone(), Arc::new(SilentSynthesizer)),
            AnalyzeMealUseCase::new(gateway),
            ConversationParams::default().with_synthesis(false),
        );
        CalorieRepl::new(
            pipeline,
            CaptureSpeechUseCase::new(Arc::new(ScriptedRecognizer(heard))),
            Arc::new(FakeImageSource),
            WidgetEmbed::new("id", "au-syd", "instance"),
            SessionContext::new(Preferences::default().with_display_name("Sam")),
        )
        .with_progress(false)
    }

    #[tokio::test]
    async fn test_quit_and_help() {
        let mut repl = repl(&[], RecognitionOutcome::NoMatch);
        assert_eq!(repl.handle_command("/help").await, Flow::Continue);
        assert_eq!(repl.handle_command("/bogus").await, Flow::Continue);
        assert_eq!(repl.handle_command("/q").await, Flow::Quit);
    }

    #[tokio::test]
    async fn test_image_attach_and_clear() {
        let mut repl = repl(&[], RecognitionOutcome::NoMatch);

        repl.handle_command("/image dinner.gif").await;
        assert!(repl.session().attached_image().is_none());

        repl.handle_command("/image dinner.png").await;
        assert_eq!(repl.session().attached_image().map(|p| p.len()), Some(1));
        assert_eq!(repl.attached_name.as_deref(), Some("dinner.png"));

        repl.handle_command("/image clear").await;
        assert!(repl.session().attached_image().is_none());
        assert!(repl.attached_name.is_none());
    }

    #[tokio::test]
    async fn test_set_replaces_preferences_and_theme() {
        let mut repl = repl(&[], RecognitionOutcome::NoMatch);

        repl.handle_command("/set language german").await;
        repl.handle_command("/set theme dark").await;
        repl.handle_command("/set speed 9").await;

        let prefs = repl.session().preferences();
        assert_eq!(prefs.language, Language::German);
        assert!(prefs.dark_mode);
        assert_eq!(prefs.display_name.as_deref(), Some("Sam"));
        assert_eq!(prefs.speed.value(), 1.0);
        assert_eq!(repl.formatter.theme(), calorie_domain::Theme::Dark);
    }

    #[tokio::test]
    async fn test_listen_stores_transcription() {
        let mut repl = repl(&[], RecognitionOutcome::from_text("a bowl of ramen"));
        let outcome = repl.listen().await;
        assert!(matches!(outcome, RecognitionOutcome::Recognized(_)));
        assert_eq!(repl.session().transcribed_text(), "a bowl of ramen");
    }

    #[tokio::test]
    async fn test_canceled_listen_leaves_input_empty() {
        let mut repl = repl(
            &[],
            RecognitionOutcome::canceled(CancellationReason::Error, "mic unplugged"),
        );
        repl.handle_command("/listen").await;
        assert_eq!(repl.session().transcribed_text(), "");
    }

    #[tokio::test]
    async fn test_turn_with_photo_records_analysis() {
        let mut repl = repl(
            &["Hi {name}, looks hearty.", "Total: 820 kcal"],
            RecognitionOutcome::NoMatch,
        );
        repl.handle_command("/image stew.png").await;
        repl.process_turn("Is this too much?").await;

        let labels = repl.session().conversation().labels();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[1], "Bot: Hi {name}, looks hearty.");
        assert_eq!(repl.last_analysis.as_deref(), Some("Total: 820 kcal"));
    }

    #[tokio::test]
    async fn test_failed_turn_keeps_question_only() {
        let mut repl = repl(&[], RecognitionOutcome::NoMatch);
        repl.process_turn("Anyone there?").await;
        assert_eq!(
            repl.session().conversation().labels(),
            vec!["User: Anyone there?".to_string()]
        );
    }
}
