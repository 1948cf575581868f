//! CLI entrypoint for Calorie Doctor
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use calorie_application::{
    AnalyzeMealUseCase, AudioPlayerPort, CaptureSpeechUseCase, ConversationLogger,
    ImageSource, NoConversationLogger, RunTurnUseCase, SpeechRecognizerPort,
    SpeechSynthesizerPort, TurnProgressNotifier, extract_image_parts,
};
use calorie_domain::{RecognitionOutcome, SessionContext};
use calorie_infrastructure::config::FileConfig;
use calorie_infrastructure::{
    AzureSpeechConfig, AzureSpeechRecognizer, AzureSpeechSynthesizer, ConfigLoader, CpalMicrophone,
    CpalSpeaker, Credentials, FanOutPlayer, GeminiConfig, GeminiGateway, JsonlConversationLogger,
    LocalImageSource, WavFileSink,
};
use calorie_presentation::{
    CalorieRepl, Cli, ConsoleFormatter, ReplConfig, SilentProgress, SpinnerProgress,
    TurnPipeline, WidgetEmbed,
};
use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration first so [logging] can add a file sink
    let mut config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_deref())
            .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?
    };

    let _log_guard = init_tracing(cli.verbose, config.logging.log_dir.as_deref());
    info!("Starting Calorie Doctor");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(());
    }

    let widget = WidgetEmbed::new(
        &config.widget.integration_id,
        &config.widget.region,
        &config.widget.service_instance_id,
    );
    if cli.widget {
        println!("{}", widget.script());
        return Ok(());
    }

    apply_cli_overrides(&cli, &mut config);
    let problems = config.validate();
    if !problems.is_empty() {
        for problem in &problems {
            eprintln!("config: {}", problem);
        }
        bail!("Invalid configuration ({} problem(s))", problems.len());
    }
    let preferences = config.preferences.to_preferences()?;

    if !config.output.color {
        colored::control::set_override(false);
    }

    let credentials = Credentials::from_env()?;

    // === Dependency Injection ===
    let gemini = GeminiConfig::new(credentials.google_api_key.clone(), config.gemini.model.clone())
        .with_timeout(Duration::from_secs(config.gemini.timeout_seconds));
    let gemini = match &config.gemini.base_url {
        Some(url) => gemini.with_base_url(url),
        None => gemini,
    };
    let gateway = Arc::new(GeminiGateway::new(gemini)?);

    let speech = AzureSpeechConfig::from_parts(&credentials, &config.speech);
    let synthesizer: Arc<dyn SpeechSynthesizerPort> =
        Arc::new(AzureSpeechSynthesizer::new(speech.clone())?);
    let recognizer: Arc<dyn SpeechRecognizerPort> = Arc::new(AzureSpeechRecognizer::new(
        speech,
        CpalMicrophone::from_config(&config.audio),
    )?);

    let logger = conversation_logger(&config);
    let run_turn = RunTurnUseCase::new(gateway.clone(), synthesizer)
        .with_conversation_logger(logger.clone());
    let analyze_meal =
        AnalyzeMealUseCase::new(gateway).with_conversation_logger(logger.clone());
    let capture = CaptureSpeechUseCase::new(recognizer).with_conversation_logger(logger);

    let mut pipeline = TurnPipeline::new(run_turn, analyze_meal, config.conversation.to_params());
    if let Some(player) = audio_output(&cli, &config) {
        pipeline = pipeline.with_player(player);
    }

    let images: Arc<dyn ImageSource> = Arc::new(LocalImageSource);
    let mut session = SessionContext::new(preferences);
    let show_progress = !cli.quiet && config.repl.show_progress;

    if let Some(path) = &cli.image {
        let upload = images.open(path)?;
        if let Some(parts) = extract_image_parts(Some(upload.as_ref()))? {
            session.attach_image(parts);
        }
    }

    // Chat mode
    if cli.chat {
        let repl_config = ReplConfig {
            history_file: config.repl.history_file.clone(),
        };
        let mut repl = CalorieRepl::new(pipeline, capture, images, widget, session)
            .with_progress(show_progress)
            .with_history_path(repl_config.history_path());

        repl.run().await?;
        return Ok(());
    }

    let formatter = ConsoleFormatter::new(session.preferences().theme());
    let progress: Box<dyn TurnProgressNotifier> = if show_progress {
        Box::new(SpinnerProgress::new())
    } else {
        Box::new(SilentProgress::new())
    };

    // Single question mode - from the argument or dictated
    let question = match (cli.question.clone(), cli.listen) {
        (Some(q), _) => q,
        (None, true) => {
            let outcome = capture.execute(&mut session, progress.as_ref()).await;
            println!("{}", formatter.recognition(&outcome));
            match outcome {
                RecognitionOutcome::Recognized(_) => {
                    session.take_transcription().unwrap_or_default()
                }
                _ => bail!("No question was recognized."),
            }
        }
        (None, false) => {
            bail!("Question is required. Use --listen to dictate or --chat for interactive mode.")
        }
    };

    let report = pipeline.run(&mut session, &question, progress.as_ref()).await;
    drop(progress);
    pipeline.present(&report, &formatter).await;

    if let Err(e) = &report.turn {
        bail!("Could not get an answer: {}", e);
    }
    Ok(())
}

/// Initialize logging based on verbosity level; `RUST_LOG` wins when set.
fn init_tracing(verbose: u8, log_dir: Option<&str>) -> Option<WorkerGuard> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match log_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(dir, "calorie-doctor.log");
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(file_layer)
        .init();

    guard
}

fn apply_cli_overrides(cli: &Cli, config: &mut FileConfig) {
    let prefs = &mut config.preferences;
    if let Some(name) = &cli.name {
        prefs.name = Some(name.clone());
    }
    if let Some(language) = &cli.language {
        prefs.language = language.clone();
    }
    if let Some(voice) = &cli.voice {
        prefs.voice = voice.clone();
    }
    if let Some(speed) = cli.speed {
        prefs.speed = speed;
    }
    if cli.dark_mode {
        prefs.dark_mode = true;
    }

    if cli.no_speech {
        config.conversation.speak_responses = false;
    }
    if cli.no_playback {
        config.audio.playback = false;
    }
    if let Some(dir) = &cli.save_audio {
        config.audio.save_dir = Some(dir.display().to_string());
    }
}

fn conversation_logger(config: &FileConfig) -> Arc<dyn ConversationLogger> {
    let Some(path) = &config.logging.conversation_log else {
        return Arc::new(NoConversationLogger);
    };
    match JsonlConversationLogger::open(path) {
        Some(logger) => {
            info!("Conversation log: {}", logger.path().display());
            Arc::new(logger)
        }
        None => Arc::new(NoConversationLogger),
    }
}

fn audio_output(cli: &Cli, config: &FileConfig) -> Option<Arc<dyn AudioPlayerPort>> {
    let mut players: Vec<Box<dyn AudioPlayerPort>> = Vec::new();
    if config.audio.playback {
        players.push(Box::new(CpalSpeaker::new(config.audio.output_device.clone())));
    }
    if let Some(dir) = &config.audio.save_dir {
        players.push(Box::new(WavFileSink::new(PathBuf::from(dir))));
    }

    if players.is_empty() {
        if !cli.no_playback {
            warn!("Spoken answers are synthesized but neither played nor saved");
        }
        return None;
    }
    Some(Arc::new(FanOutPlayer::new(players)))
}
