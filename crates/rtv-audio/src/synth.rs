// synth.rs — Cue patches and PCM rendering.
//
// Four fixed patches, one per cue:
//   click   — square 200Hz, exponential sweep toward DC over 0.1s
//   static  — 0.2s of white noise
//   success — triangle arpeggio 440/554/659/880 (A, C#, E, A), 1.5s decay
//   power   — sawtooth 110→880Hz sweep, 0.4s decay
//
// Rendering is deterministic: the noise stream comes from a fixed-seed PCG,
// so the same cue at the same volume always produces the same samples.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use rtv_session::CueKind;

/// Render sample rate in Hz.
pub const SAMPLE_RATE: u32 = 44_100;

/// Master attenuation applied on top of the requested volume.
const MASTER_GAIN: f32 = 0.2;

/// Exponential ramps land on this floor rather than true zero.
const RAMP_FLOOR: f32 = 0.01;

/// Seed for the static noise stream.
const NOISE_SEED: u64 = 0x7e1e_0bed;

#[derive(Debug, Clone, Copy)]
enum Waveform {
    Square,
    Triangle,
    Sawtooth,
    Noise,
}

#[derive(Debug, Clone, Copy)]
enum FreqPlan {
    /// Exponential sweep from `start` to `end` over `secs`, holding `end`
    /// for whatever remains of the cue.
    ExpSweep { start: f32, end: f32, secs: f32 },

    /// Stepped frequencies: `(at_secs, hz)` pairs in ascending order.
    Steps(&'static [(f32, f32)]),

    /// No oscillator (noise).
    Flat,
}

/// One cue's oscillator parameters.
#[derive(Debug, Clone, Copy)]
struct CuePatch {
    waveform: Waveform,
    duration_secs: f32,
    freq: FreqPlan,
    /// When set, gain decays exponentially to [`RAMP_FLOOR`] over this
    /// many seconds; otherwise gain is constant for the whole cue.
    decay_secs: Option<f32>,
}

const SUCCESS_ARPEGGIO: &[(f32, f32)] = &[(0.0, 440.0), (0.1, 554.0), (0.2, 659.0), (0.4, 880.0)];

fn patch_for(kind: CueKind) -> CuePatch {
    match kind {
        CueKind::Click => CuePatch {
            waveform: Waveform::Square,
            duration_secs: 0.1,
            freq: FreqPlan::ExpSweep {
                start: 200.0,
                end: RAMP_FLOOR,
                secs: 0.1,
            },
            decay_secs: None,
        },
        CueKind::Static => CuePatch {
            waveform: Waveform::Noise,
            duration_secs: 0.2,
            freq: FreqPlan::Flat,
            decay_secs: None,
        },
        CueKind::Success => CuePatch {
            waveform: Waveform::Triangle,
            duration_secs: 1.5,
            freq: FreqPlan::Steps(SUCCESS_ARPEGGIO),
            decay_secs: Some(1.5),
        },
        CueKind::Power => CuePatch {
            waveform: Waveform::Sawtooth,
            duration_secs: 0.4,
            freq: FreqPlan::ExpSweep {
                start: 110.0,
                end: 880.0,
                secs: 0.3,
            },
            decay_secs: Some(0.4),
        },
    }
}

/// Render a cue to mono f32 PCM at [`SAMPLE_RATE`].
///
/// `volume` is the session's normalized `[0.0, 1.0]` level; the master
/// attenuation is applied on top. A volume at or below zero renders
/// nothing.
pub fn render_cue(kind: CueKind, volume: f32) -> Vec<f32> {
    if volume <= 0.0 {
        return Vec::new();
    }

    let patch = patch_for(kind);
    let gain = volume.min(1.0) * MASTER_GAIN;
    let num_samples = (patch.duration_secs * SAMPLE_RATE as f32) as usize;
    let mut samples = Vec::with_capacity(num_samples);

    let mut rng = Pcg32::seed_from_u64(NOISE_SEED);
    let mut phase = 0.0f32;

    for i in 0..num_samples {
        let t = i as f32 / SAMPLE_RATE as f32;

        let raw = match patch.waveform {
            Waveform::Noise => rng.gen_range(-1.0f32..1.0),
            waveform => {
                let freq = frequency_at(&patch.freq, t);
                phase = (phase + freq / SAMPLE_RATE as f32).fract();
                oscillate(waveform, phase)
            }
        };

        let envelope = match patch.decay_secs {
            Some(secs) => exp_ramp(gain, RAMP_FLOOR, t / secs),
            None => gain,
        };
        samples.push(raw * envelope);
    }

    samples
}

fn frequency_at(plan: &FreqPlan, t: f32) -> f32 {
    match plan {
        FreqPlan::ExpSweep { start, end, secs } => exp_ramp(*start, *end, (t / secs).min(1.0)),
        FreqPlan::Steps(steps) => steps
            .iter()
            .rev()
            .find(|(at, _)| t >= *at)
            .map(|(_, hz)| *hz)
            .unwrap_or(steps[0].1),
        FreqPlan::Flat => 0.0,
    }
}

/// Exponential interpolation from `from` to `to` at normalized position
/// `pos` in `[0, 1]` — the WebAudio-style ramp shape.
fn exp_ramp(from: f32, to: f32, pos: f32) -> f32 {
    from * (to / from).powf(pos.clamp(0.0, 1.0))
}

fn oscillate(waveform: Waveform, phase: f32) -> f32 {
    match waveform {
        Waveform::Square => {
            if phase < 0.5 {
                1.0
            } else {
                -1.0
            }
        }
        Waveform::Sawtooth => 2.0 * phase - 1.0,
        Waveform::Triangle => {
            if phase < 0.5 {
                4.0 * phase - 1.0
            } else {
                3.0 - 4.0 * phase
            }
        }
        Waveform::Noise => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cue_lengths_match_their_patches() {
        let sr = SAMPLE_RATE as f32;
        assert_eq!(render_cue(CueKind::Click, 0.5).len(), (0.1 * sr) as usize);
        assert_eq!(render_cue(CueKind::Static, 0.5).len(), (0.2 * sr) as usize);
        assert_eq!(render_cue(CueKind::Success, 0.5).len(), (1.5 * sr) as usize);
        assert_eq!(render_cue(CueKind::Power, 0.5).len(), (0.4 * sr) as usize);
    }

    #[test]
    fn zero_volume_renders_nothing() {
        assert!(render_cue(CueKind::Click, 0.0).is_empty());
        assert!(render_cue(CueKind::Power, -1.0).is_empty());
    }

    #[test]
    fn samples_stay_within_the_attenuated_range() {
        for kind in [
            CueKind::Static,
            CueKind::Click,
            CueKind::Success,
            CueKind::Power,
        ] {
            let ceiling = 1.0 * MASTER_GAIN + f32::EPSILON;
            for s in render_cue(kind, 1.0) {
                assert!(s.abs() <= ceiling, "{kind}: sample {s} out of range");
            }
        }
    }

    #[test]
    fn static_is_deterministic() {
        assert_eq!(
            render_cue(CueKind::Static, 0.5),
            render_cue(CueKind::Static, 0.5)
        );
    }

    #[test]
    fn success_decays_toward_silence() {
        let samples = render_cue(CueKind::Success, 1.0);
        let head: f32 = samples[..2000].iter().map(|s| s.abs()).fold(0.0, f32::max);
        let tail: f32 = samples[samples.len() - 2000..]
            .iter()
            .map(|s| s.abs())
            .fold(0.0, f32::max);
        assert!(tail < head / 10.0, "tail {tail} not quieter than head {head}");
    }

    #[test]
    fn arpeggio_steps_pick_the_right_note() {
        let plan = FreqPlan::Steps(SUCCESS_ARPEGGIO);
        assert_eq!(frequency_at(&plan, 0.0), 440.0);
        assert_eq!(frequency_at(&plan, 0.15), 554.0);
        assert_eq!(frequency_at(&plan, 0.3), 659.0);
        assert_eq!(frequency_at(&plan, 1.0), 880.0);
    }

    #[test]
    fn exp_ramp_hits_its_endpoints() {
        assert!((exp_ramp(200.0, 0.01, 0.0) - 200.0).abs() < 1e-3);
        assert!((exp_ramp(200.0, 0.01, 1.0) - 0.01).abs() < 1e-3);
        assert!((exp_ramp(110.0, 880.0, 1.0) - 880.0).abs() < 1e-2);
    }
}
