//! Writes synthesized answers to WAV files.

use calorie_application::{AudioOutputError, AudioPlayerPort};
use calorie_domain::SynthesizedAudio;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::info;

pub struct WavFileSink {
    dir: PathBuf,
    last_written: Mutex<Option<PathBuf>>,
}

impl WavFileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            last_written: Mutex::new(None),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn last_written(&self) -> Option<PathBuf> {
        self.last_written.lock().ok().and_then(|p| p.clone())
    }

    fn next_path(&self) -> PathBuf {
        let stamp = chrono::Local::now().format("%Y%m%d-%H%M%S%.3f");
        self.dir.join(format!("response-{stamp}.wav"))
    }
}

impl AudioPlayerPort for WavFileSink {
    fn describe(&self) -> String {
        format!("WAV files in {}", self.dir.display())
    }

    fn play(&self, audio: &SynthesizedAudio) -> Result<(), AudioOutputError> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.next_path();
        std::fs::write(&path, &audio.data)?;
        info!("Saved {} bytes of speech to {}", audio.len(), path.display());

        if let Ok(mut last) = self.last_written.lock() {
            *last = Some(path);
        }
        Ok(())
    }
}
