//! Speaker playback via cpal.

use super::dsp::{resample, to_interleaved, to_mono};
use super::wav;
use calorie_application::{AudioOutputError, AudioPlayerPort};
use calorie_domain::SynthesizedAudio;
use cpal::StreamConfig;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{error, info};

/// System speaker. Blocks in [`AudioPlayerPort::play`] until the clip ends.
pub struct CpalSpeaker {
    device_name: Option<String>,
}

struct PlaybackBuffer {
    samples: Vec<f32>,
    position: usize,
    finished: bool,
}

impl CpalSpeaker {
    pub fn new(device_name: Option<String>) -> Self {
        Self { device_name }
    }

    pub fn list_output_devices() -> Result<Vec<String>, AudioOutputError> {
        let host = cpal::default_host();
        let devices = host
            .output_devices()
            .map_err(|e| AudioOutputError::Device(format!("cannot enumerate devices: {e}")))?;
        Ok(devices
            .filter_map(|d| d.description().ok().map(|desc| desc.name().to_owned()))
            .collect())
    }

    fn open_device(&self) -> Result<cpal::Device, AudioOutputError> {
        let host = cpal::default_host();
        match &self.device_name {
            Some(name) => host
                .output_devices()
                .map_err(|e| AudioOutputError::Device(format!("cannot enumerate devices: {e}")))?
                .find(|d| {
                    d.description()
                        .map(|desc| desc.name() == name.as_str())
                        .unwrap_or(false)
                })
                .ok_or_else(|| {
                    AudioOutputError::Device(format!("output device '{name}' not found"))
                }),
            None => host
                .default_output_device()
                .ok_or_else(|| AudioOutputError::Device("no default output device".into())),
        }
    }
}

impl AudioPlayerPort for CpalSpeaker {
    fn describe(&self) -> String {
        match &self.device_name {
            Some(name) => format!("speaker '{name}'"),
            None => "default speaker".to_string(),
        }
    }

    fn play(&self, audio: &SynthesizedAudio) -> Result<(), AudioOutputError> {
        let decoded =
            wav::decode(&audio.data).map_err(|e| AudioOutputError::Decode(e.to_string()))?;

        let device = self.open_device()?;
        let default_config = device
            .default_output_config()
            .map_err(|e| AudioOutputError::Device(format!("no default output config: {e}")))?;
        let device_rate = default_config.sample_rate();
        let device_channels = default_config.channels();

        let mono = to_mono(&decoded.samples, decoded.channels);
        let samples = to_interleaved(
            &resample(&mono, decoded.sample_rate, device_rate),
            device_channels,
        );
        info!(
            "Playing {:.1}s of audio on {}",
            decoded.duration_secs(),
            self.describe()
        );

        let stream_config = StreamConfig {
            channels: device_channels,
            sample_rate: device_rate,
            buffer_size: cpal::BufferSize::Default,
        };

        let buffer = Arc::new(Mutex::new(PlaybackBuffer {
            samples,
            position: 0,
            finished: false,
        }));
        let buffer_clone = Arc::clone(&buffer);

        let stream = device
            .build_output_stream(
                &stream_config,
                move |data: &mut [f32], _info: &cpal::OutputCallbackInfo| {
                    let Ok(mut buf) = buffer_clone.lock() else {
                        return;
                    };
                    for sample in data.iter_mut() {
                        if buf.position < buf.samples.len() {
                            *sample = buf.samples[buf.position];
                            buf.position += 1;
                        } else {
                            *sample = 0.0;
                            buf.finished = true;
                        }
                    }
                },
                move |err| {
                    error!("audio output stream error: {err}");
                },
                None,
            )
            .map_err(|e| AudioOutputError::Device(format!("failed to build output stream: {e}")))?;

        stream
            .play()
            .map_err(|e| AudioOutputError::Device(format!("failed to start output stream: {e}")))?;

        loop {
            std::thread::sleep(Duration::from_millis(10));
            let buf = buffer.lock().map_err(|e| {
                AudioOutputError::Device(format!("playback buffer lock poisoned: {e}"))
            })?;
            if buf.finished {
                break;
            }
        }

        drop(stream);
        Ok(())
    }
}

/// Delivers the same clip to several players, e.g. speaker and WAV sink.
///
/// Every player is tried; the first failure is returned.
pub struct FanOutPlayer {
    players: Vec<Box<dyn AudioPlayerPort>>,
}

impl FanOutPlayer {
    pub fn new(players: Vec<Box<dyn AudioPlayerPort>>) -> Self {
        Self { players }
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl AudioPlayerPort for FanOutPlayer {
    fn describe(&self) -> String {
        if self.players.is_empty() {
            return "no audio output".to_string();
        }
        self.players
            .iter()
            .map(|p| p.describe())
            .collect::<Vec<_>>()
            .join(" + ")
    }

    fn play(&self, audio: &SynthesizedAudio) -> Result<(), AudioOutputError> {
        let mut first_error = None;
        for player in &self.players {
            if let Err(e) = player.play(audio) {
                error!("{} failed: {}", player.describe(), e);
                first_error.get_or_insert(e);
            }
        }
        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calorie_domain::AudioFormat;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct CountingPlayer {
        name: &'static str,
        plays: Arc<AtomicUsize>,
        fail: bool,
    }

    impl AudioPlayerPort for CountingPlayer {
        fn describe(&self) -> String {
            self.name.to_string()
        }

        fn play(&self, _audio: &SynthesizedAudio) -> Result<(), AudioOutputError> {
            self.plays.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(AudioOutputError::Device(format!("{} unplugged", self.name)))
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_fan_out_plays_everywhere_and_reports_first_error() {
        let plays = Arc::new(AtomicUsize::new(0));
        let player = FanOutPlayer::new(vec![
            Box::new(CountingPlayer {
                name: "speaker",
                plays: Arc::clone(&plays),
                fail: true,
            }),
            Box::new(CountingPlayer {
                name: "file",
                plays: Arc::clone(&plays),
                fail: false,
            }),
        ]);

        let audio = SynthesizedAudio::new(AudioFormat::default(), vec![0; 8]);
        let err = player.play(&audio).unwrap_err();

        assert_eq!(plays.load(Ordering::SeqCst), 2);
        assert!(err.to_string().contains("speaker unplugged"));
        assert_eq!(player.describe(), "speaker + file");
    }

    #[test]
    fn test_empty_fan_out_is_a_no_op() {
        let player = FanOutPlayer::new(Vec::new());
        let audio = SynthesizedAudio::new(AudioFormat::default(), vec![0; 8]);
        assert!(player.is_empty());
        assert!(player.play(&audio).is_ok());
        assert_eq!(player.describe(), "no audio output");
    }

    #[test]
    fn test_speaker_rejects_undecodable_audio_before_opening_device() {
        let speaker = CpalSpeaker::new(None);
        let audio = SynthesizedAudio::new(AudioFormat::default(), b"garbage".to_vec());
        assert!(matches!(
            speaker.play(&audio),
            Err(AudioOutputError::Decode(_))
        ));
    }
}
