//! # rtv-audio
//!
//! Synthesized retro sound cues — no sample assets, just oscillators.
//!
//! Each [`CueKind`](rtv_session::CueKind) maps to a small patch (waveform,
//! frequency plan, envelope) rendered to mono f32 PCM at 44.1kHz. The
//! [`WavSink`] implements the session's `SoundSink` by writing one 16-bit
//! WAV file per cue, which is as close to a speaker as a headless build
//! gets.
//!
//! ## Key components
//!
//! - [`render_cue`] — cue kind + volume → PCM samples
//! - [`write_wav`] — 16-bit mono RIFF writer
//! - [`WavSink`] — `SoundSink` that renders cues into a directory

pub mod error;
pub mod sink;
pub mod synth;
pub mod wav;

pub use error::AudioError;
pub use sink::WavSink;
pub use synth::{render_cue, SAMPLE_RATE};
pub use wav::write_wav;
