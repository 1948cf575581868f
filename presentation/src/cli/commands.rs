//! CLI command definitions

use clap::Parser;
use std::path::PathBuf;

/// CLI arguments for calorie-doctor
#[derive(Parser, Debug)]
#[command(name = "calorie-doctor")]
#[command(author, version, about = "Your personal Calorie Doctor - meal photos in, nutrition advice out")]
#[command(long_about = r#"
Calorie Doctor answers questions about what you eat. Attach a photo of a meal
to get a healthiness verdict and a per-item calorie breakdown; ask follow-up
questions in chat mode. Answers are read aloud, and questions can be dictated.

Credentials are read from the environment:
  GOOGLE_API_KEY                   Generative model key
  AZURE_SPEECH_SUBSCRIPTION_KEY    Speech service key
  AZURE_SPEECH_SERVICE_REGION      Speech service region

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./calorie.toml      Project-level config
3. ~/.config/calorie-doctor/config.toml   Global config

Example:
  calorie-doctor --image lunch.jpg "Is this healthy?"
  calorie-doctor --listen
  calorie-doctor --chat --name Sam --voice female --speed 1.25
"#)]
pub struct Cli {
    /// The question to ask (not required in chat mode or with --listen)
    pub question: Option<String>,

    /// Start interactive chat mode
    #[arg(short, long)]
    pub chat: bool,

    /// Photo of the meal (jpg, jpeg or png)
    #[arg(short, long, value_name = "PATH")]
    pub image: Option<PathBuf>,

    /// Dictate the question through the microphone
    #[arg(short, long)]
    pub listen: bool,

    /// Name to address you by in answers
    #[arg(long, value_name = "NAME")]
    pub name: Option<String>,

    /// Language for speech (English, Spanish, French, German)
    #[arg(long, value_name = "LANGUAGE")]
    pub language: Option<String>,

    /// Voice for spoken answers (male or female)
    #[arg(long, value_name = "VOICE")]
    pub voice: Option<String>,

    /// Speech speed between 0.5 and 2.0
    #[arg(long, value_name = "SPEED")]
    pub speed: Option<f32>,

    /// Use the dark console palette
    #[arg(long)]
    pub dark_mode: bool,

    /// Do not synthesize spoken answers
    #[arg(long)]
    pub no_speech: bool,

    /// Save spoken answers as WAV files in this directory
    #[arg(long, value_name = "DIR")]
    pub save_audio: Option<PathBuf>,

    /// Do not play spoken answers on the speaker
    #[arg(long)]
    pub no_playback: bool,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Print the chat widget embed snippet and exit
    #[arg(long)]
    pub widget: bool,
}
