//! Progress notification port
//!
//! Defines the interface for reporting progress while a blocking external
//! call is in flight.

/// Stage of an interaction waiting on an external service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Listening,
    Processing,
    AnalyzingImage,
    Synthesizing,
}

impl Stage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Listening => "Listening...",
            Stage::Processing => "Processing...",
            Stage::AnalyzingImage => "Processing image and input...",
            Stage::Synthesizing => "Converting text to speech...",
        }
    }
}

/// Callback for progress updates
///
/// Implementations live in the presentation layer.
pub trait TurnProgressNotifier: Send + Sync {
    fn on_stage_start(&self, stage: Stage);

    fn on_stage_complete(&self, stage: Stage, success: bool);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl TurnProgressNotifier for NoProgress {
    fn on_stage_start(&self, _stage: Stage) {}
    fn on_stage_complete(&self, _stage: Stage, _success: bool) {}
}
