//! Microphone capture via cpal.
//!
//! One call records one utterance: capture starts immediately, stops after
//! a stretch of silence following speech, or at the configured hard cap.
//! Audio is converted to 16 kHz mono before it leaves this module.

use super::CAPTURE_SAMPLE_RATE;
use super::dsp::{resample, rms, to_mono};
use crate::config::FileAudioConfig;
use async_trait::async_trait;
use cpal::StreamConfig;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::{debug, error, info};

/// Chunk RMS above which a chunk counts as speech.
const SPEECH_RMS_THRESHOLD: f32 = 0.02;
const POLL_INTERVAL: Duration = Duration::from_millis(50);

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Audio device error: {0}")]
    Device(String),

    #[error("Audio stream error: {0}")]
    Stream(String),

    #[error("Capture task failed: {0}")]
    Task(String),
}

/// Something that can record a single spoken utterance.
#[async_trait]
pub trait UtteranceSource: Send + Sync {
    /// Mono samples at [`CAPTURE_SAMPLE_RATE`]. Empty when nothing was heard.
    async fn capture_utterance(&self) -> Result<Vec<f32>, CaptureError>;

    fn describe(&self) -> String;
}

/// Decides when an utterance is over.
#[derive(Debug, Clone)]
pub struct SilenceDetector {
    started: Instant,
    max_duration: Duration,
    trailing_silence: Duration,
    last_voice: Option<Instant>,
}

impl SilenceDetector {
    pub fn new(started: Instant, max_duration: Duration, trailing_silence: Duration) -> Self {
        Self {
            started,
            max_duration,
            trailing_silence,
            last_voice: None,
        }
    }

    pub fn observe(&mut self, chunk_rms: f32, at: Instant) {
        if chunk_rms >= SPEECH_RMS_THRESHOLD {
            self.last_voice = Some(at);
        }
    }

    pub fn heard_speech(&self) -> bool {
        self.last_voice.is_some()
    }

    pub fn should_stop(&self, now: Instant) -> bool {
        if now.duration_since(self.started) >= self.max_duration {
            return true;
        }
        self.last_voice
            .is_some_and(|last| now.duration_since(last) >= self.trailing_silence)
    }
}

struct CaptureState {
    samples: Vec<f32>,
    detector: SilenceDetector,
}

/// System microphone.
pub struct CpalMicrophone {
    device_name: Option<String>,
    max_duration: Duration,
    trailing_silence: Duration,
}

impl CpalMicrophone {
    pub fn new(
        device_name: Option<String>,
        max_duration: Duration,
        trailing_silence: Duration,
    ) -> Self {
        Self {
            device_name,
            max_duration,
            trailing_silence,
        }
    }

    pub fn from_config(config: &FileAudioConfig) -> Self {
        Self::new(
            config.input_device.clone(),
            Duration::from_secs(config.max_record_seconds),
            Duration::from_millis(config.trailing_silence_ms),
        )
    }

    /// Names of the input devices the host reports.
    pub fn list_input_devices() -> Result<Vec<String>, CaptureError> {
        let host = cpal::default_host();
        let devices = host
            .input_devices()
            .map_err(|e| CaptureError::Device(format!("cannot enumerate devices: {e}")))?;
        Ok(devices
            .filter_map(|d| d.description().ok().map(|desc| desc.name().to_owned()))
            .collect())
    }

    fn open_device(name: Option<&str>) -> Result<cpal::Device, CaptureError> {
        let host = cpal::default_host();
        match name {
            Some(name) => host
                .input_devices()
                .map_err(|e| CaptureError::Device(format!("cannot enumerate devices: {e}")))?
                .find(|d| {
                    d.description()
                        .map(|desc| desc.name() == name)
                        .unwrap_or(false)
                })
                .ok_or_else(|| CaptureError::Device(format!("input device '{name}' not found"))),
            None => host
                .default_input_device()
                .ok_or_else(|| CaptureError::Device("no default input device".into())),
        }
    }

    fn record_blocking(
        device_name: Option<String>,
        max_duration: Duration,
        trailing_silence: Duration,
    ) -> Result<Vec<f32>, CaptureError> {
        let device = Self::open_device(device_name.as_deref())?;
        let default_config = device
            .default_input_config()
            .map_err(|e| CaptureError::Device(format!("no default input config: {e}")))?;

        let native_rate = default_config.sample_rate();
        let native_channels = default_config.channels();
        let stream_config = StreamConfig {
            channels: native_channels,
            sample_rate: native_rate,
            buffer_size: cpal::BufferSize::Default,
        };
        debug!("Input config: {}Hz, {} channels", native_rate, native_channels);

        let state = Arc::new(Mutex::new(CaptureState {
            samples: Vec::new(),
            detector: SilenceDetector::new(Instant::now(), max_duration, trailing_silence),
        }));
        let callback_state = Arc::clone(&state);

        let stream = device
            .build_input_stream(
                &stream_config,
                move |data: &[f32], _info: &cpal::InputCallbackInfo| {
                    let mono = to_mono(data, native_channels);
                    let chunk_rms = rms(&mono);
                    let samples = resample(&mono, native_rate, CAPTURE_SAMPLE_RATE);
                    if let Ok(mut state) = callback_state.lock() {
                        state.detector.observe(chunk_rms, Instant::now());
                        state.samples.extend_from_slice(&samples);
                    }
                },
                move |err| {
                    error!("audio input stream error: {err}");
                },
                None,
            )
            .map_err(|e| CaptureError::Stream(format!("failed to build input stream: {e}")))?;

        stream
            .play()
            .map_err(|e| CaptureError::Stream(format!("failed to start input stream: {e}")))?;

        loop {
            std::thread::sleep(POLL_INTERVAL);
            let state = state
                .lock()
                .map_err(|e| CaptureError::Stream(format!("capture buffer lock poisoned: {e}")))?;
            if state.detector.should_stop(Instant::now()) {
                break;
            }
        }
        drop(stream);

        let mut state = state
            .lock()
            .map_err(|e| CaptureError::Stream(format!("capture buffer lock poisoned: {e}")))?;
        if !state.detector.heard_speech() {
            info!("No speech detected before the capture limit");
        }
        Ok(std::mem::take(&mut state.samples))
    }
}

#[async_trait]
impl UtteranceSource for CpalMicrophone {
    async fn capture_utterance(&self) -> Result<Vec<f32>, CaptureError> {
        let device_name = self.device_name.clone();
        let max_duration = self.max_duration;
        let trailing_silence = self.trailing_silence;

        // cpal streams are not Send on every host, so the whole recording
        // lives on one blocking thread.
        tokio::task::spawn_blocking(move || {
            Self::record_blocking(device_name, max_duration, trailing_silence)
        })
        .await
        .map_err(|e| CaptureError::Task(e.to_string()))?
    }

    fn describe(&self) -> String {
        match &self.device_name {
            Some(name) => format!("microphone '{name}'"),
            None => "default microphone".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector(start: Instant) -> SilenceDetector {
        SilenceDetector::new(start, Duration::from_secs(10), Duration::from_millis(1000))
    }

    #[test]
    fn test_quiet_chunks_do_not_count_as_speech() {
        let start = Instant::now();
        let mut d = detector(start);
        d.observe(0.001, start + Duration::from_millis(100));
        assert!(!d.heard_speech());
        assert!(!d.should_stop(start + Duration::from_secs(5)));
    }

    #[test]
    fn test_stops_after_trailing_silence() {
        let start = Instant::now();
        let mut d = detector(start);
        d.observe(0.2, start + Duration::from_millis(500));

        assert!(d.heard_speech());
        assert!(!d.should_stop(start + Duration::from_millis(1200)));
        assert!(d.should_stop(start + Duration::from_millis(1500)));
    }

    #[test]
    fn test_continued_speech_extends_capture() {
        let start = Instant::now();
        let mut d = detector(start);
        d.observe(0.2, start + Duration::from_millis(500));
        d.observe(0.3, start + Duration::from_millis(1400));
        assert!(!d.should_stop(start + Duration::from_millis(1600)));
    }

    #[test]
    fn test_hard_cap_stops_capture() {
        let start = Instant::now();
        let d = detector(start);
        assert!(d.should_stop(start + Duration::from_secs(10)));
    }

    #[test]
    fn test_microphone_from_config() {
        let config = FileAudioConfig {
            input_device: Some("USB Mic".to_string()),
            max_record_seconds: 5,
            trailing_silence_ms: 800,
            ..FileAudioConfig::default()
        };
        let mic = CpalMicrophone::from_config(&config);
        assert_eq!(mic.max_duration, Duration::from_secs(5));
        assert_eq!(mic.trailing_silence, Duration::from_millis(800));
        assert_eq!(mic.describe(), "microphone 'USB Mic'");
    }
}
