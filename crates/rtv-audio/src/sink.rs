// sink.rs — WavSink: a SoundSink that renders cues to WAV files.
//
// Each played cue becomes one numbered file in the sink's directory,
// e.g. `007-click.wav`. The sink is fire-and-forget like every SoundSink:
// render or write failures are logged and swallowed.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use rtv_session::{CueKind, SoundSink};

use crate::error::AudioError;
use crate::synth::render_cue;
use crate::wav::write_wav;

/// Renders every cue into a directory of WAV files.
pub struct WavSink {
    dir: PathBuf,
    counter: AtomicU64,
}

impl WavSink {
    /// Create a sink writing into `dir`, creating it if needed.
    pub fn new(dir: impl AsRef<Path>) -> Result<Self, AudioError> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir).map_err(|source| AudioError::Io {
            path: dir.display().to_string(),
            source,
        })?;
        Ok(Self {
            dir,
            counter: AtomicU64::new(0),
        })
    }

    fn write_cue(&self, cue: CueKind, samples: &[f32]) -> Result<PathBuf, AudioError> {
        let seq = self.counter.fetch_add(1, Ordering::Relaxed);
        let path = self.dir.join(format!("{seq:03}-{cue}.wav"));
        let file = File::create(&path).map_err(|source| AudioError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let mut writer = BufWriter::new(file);
        write_wav(&mut writer, samples).map_err(|source| AudioError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Ok(path)
    }
}

impl SoundSink for WavSink {
    fn play(&self, cue: CueKind, volume: f32) {
        let samples = render_cue(cue, volume);
        if samples.is_empty() {
            return;
        }
        match self.write_cue(cue, &samples) {
            Ok(path) => tracing::debug!(%cue, path = %path.display(), "cue rendered"),
            Err(err) => tracing::warn!(%cue, error = %err, "cue render failed"),
        }
    }
}
