//! One turn as the user sees it: answer, speech, then meal analysis.

use crate::output::console::ConsoleFormatter;
use calorie_application::{
    AnalyzeMealError, AnalyzeMealUseCase, AudioOutputError, AudioPlayerPort, ConversationParams,
    RunTurnError, RunTurnUseCase, SpeechResult, TurnOutput, TurnProgressNotifier,
};
use calorie_domain::{SessionContext, SynthesizedAudio};
use std::io::{self, Write};
use std::sync::Arc;
use tracing::warn;

/// Everything a turn produced
#[derive(Debug)]
pub struct TurnReport {
    pub turn: Result<TurnOutput, RunTurnError>,
    /// Present only when a photo was attached
    pub analysis: Option<Result<String, AnalyzeMealError>>,
}

impl TurnReport {
    /// A turn fails when no answer text could be produced.
    pub fn succeeded(&self) -> bool {
        self.turn.is_ok()
    }

    pub fn analysis_text(&self) -> Option<&str> {
        match &self.analysis {
            Some(Ok(text)) => Some(text),
            _ => None,
        }
    }
}

pub struct TurnPipeline {
    run_turn: RunTurnUseCase,
    analyze_meal: AnalyzeMealUseCase,
    params: ConversationParams,
    player: Option<Arc<dyn AudioPlayerPort>>,
}

impl TurnPipeline {
    pub fn new(
        run_turn: RunTurnUseCase,
        analyze_meal: AnalyzeMealUseCase,
        params: ConversationParams,
    ) -> Self {
        Self {
            run_turn,
            analyze_meal,
            params,
            player: None,
        }
    }

    pub fn with_player(mut self, player: Arc<dyn AudioPlayerPort>) -> Self {
        self.player = Some(player);
        self
    }

    pub fn params(&self) -> &ConversationParams {
        &self.params
    }

    /// Where spoken answers go, for the welcome banner.
    pub fn audio_destination(&self) -> String {
        match (&self.player, self.params.synthesize) {
            (_, false) => "off".to_string(),
            (Some(player), true) => player.describe(),
            (None, true) => "synthesized, not played".to_string(),
        }
    }

    pub async fn run(
        &self,
        session: &mut SessionContext,
        text: &str,
        progress: &dyn TurnProgressNotifier,
    ) -> TurnReport {
        let turn = self
            .run_turn
            .execute(session, text, &self.params, progress)
            .await;

        // A failed answer ends the turn before the photo is looked at.
        let analysis = match (&turn, session.attached_image()) {
            (Ok(_), Some(images)) => {
                Some(self.analyze_meal.execute(text, images, progress).await)
            }
            _ => None,
        };

        TurnReport { turn, analysis }
    }

    /// Print the report and deliver the audio, in the order the user expects.
    pub async fn present(&self, report: &TurnReport, formatter: &ConsoleFormatter) {
        let result = self
            .present_to(report, formatter, &mut io::stdout(), &mut io::stderr())
            .await;
        if let Err(e) = result {
            warn!("Could not write turn output: {}", e);
        }
    }

    /// Like [`present`](Self::present), with explicit output and error streams.
    pub async fn present_to<O: Write, E: Write>(
        &self,
        report: &TurnReport,
        formatter: &ConsoleFormatter,
        out: &mut O,
        err: &mut E,
    ) -> io::Result<()> {
        match &report.turn {
            Ok(output) => {
                writeln!(out, "{}", formatter.response(&output.response))?;
                out.flush()?;
                match &output.speech {
                    SpeechResult::Audio(audio) => {
                        if let Some(Err(e)) = self.play(audio).await {
                            writeln!(err, "{}", formatter.playback_failure(&e))?;
                        }
                    }
                    SpeechResult::Failed(e) => {
                        writeln!(err, "{}", formatter.synthesis_failure(e))?
                    }
                    SpeechResult::Skipped => {}
                }
            }
            Err(e) => writeln!(err, "{}", formatter.error(&e.to_string()))?,
        }

        match &report.analysis {
            Some(Ok(text)) => writeln!(out, "{}", formatter.analysis(text))?,
            Some(Err(e)) => writeln!(
                err,
                "{}",
                formatter.error(&format!("Meal analysis failed: {e}"))
            )?,
            None => {}
        }
        Ok(())
    }

    /// Blocks a worker thread until playback ends. `None` without a player.
    pub async fn play(&self, audio: &SynthesizedAudio) -> Option<Result<(), AudioOutputError>> {
        let player = Arc::clone(self.player.as_ref()?);
        let audio = audio.clone();
        let result = tokio::task::spawn_blocking(move || player.play(&audio))
            .await
            .unwrap_or_else(|e| {
                Err(AudioOutputError::Device(format!(
                    "playback task failed: {e}"
                )))
            });
        if let Err(e) = &result {
            warn!("Playback failed: {}", e);
        }
        Some(result)
    }
}
