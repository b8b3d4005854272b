//! Offline soundscape renderer.
//!
//! The engine is an owned resource: `start` builds the voices for a
//! preset, `render` pulls mixed samples, and `stop` releases every
//! voice. Dropping the engine stops it too, so a caller that bails out
//! early never leaks running voices.

use crate::audio::synth::{LowPass, NoiseSource, Oscillator};
use fans_domain::{SoundLayer, SoundscapePreset};
use tracing::debug;

/// Seed for the noise voices. Fixed so renders are reproducible.
const NOISE_SEED: u64 = 0x5745_4952_44;

enum Voice {
    Tone { osc: Oscillator, gain: f32 },
    Noise {
        source: NoiseSource,
        filter: LowPass,
        gain: f32,
    },
}

impl Voice {
    fn next_sample(&mut self) -> f32 {
        match self {
            Voice::Tone { osc, gain } => osc.next_sample() * *gain,
            Voice::Noise {
                source,
                filter,
                gain,
            } => filter.process(source.next_sample()) * *gain,
        }
    }
}

/// Mixes a preset's layers into a mono sample stream.
pub struct SoundscapeEngine {
    sample_rate: u32,
    voices: Vec<Voice>,
}

impl SoundscapeEngine {
    pub fn new(sample_rate: u32) -> Self {
        Self {
            sample_rate,
            voices: Vec::new(),
        }
    }

    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    pub fn is_active(&self) -> bool {
        !self.voices.is_empty()
    }

    /// Build one voice per preset layer. Replaces any running voices.
    pub fn start(&mut self, preset: &SoundscapePreset) {
        debug!(
            "Starting soundscape {:?} with {} layers",
            preset.name,
            preset.layers.len()
        );
        self.voices = preset
            .layers
            .iter()
            .enumerate()
            .map(|(i, layer)| match *layer {
                SoundLayer::Tone {
                    waveform,
                    frequency_hz,
                    gain,
                } => Voice::Tone {
                    osc: Oscillator::new(waveform, frequency_hz, self.sample_rate),
                    gain,
                },
                SoundLayer::Noise { cutoff_hz, gain } => Voice::Noise {
                    source: NoiseSource::new(NOISE_SEED.wrapping_add(i as u64)),
                    filter: LowPass::new(cutoff_hz, self.sample_rate),
                    gain,
                },
            })
            .collect();
    }

    /// Fill `out` with mixed samples, soft-clipped to `-1.0..=1.0`.
    /// Writes silence when stopped.
    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            let mixed: f32 = self.voices.iter_mut().map(Voice::next_sample).sum();
            *sample = mixed.tanh();
        }
    }

    /// Release every active voice.
    pub fn stop(&mut self) {
        if self.is_active() {
            debug!("Stopping soundscape ({} voices)", self.voices.len());
            self.voices.clear();
        }
    }
}

impl Drop for SoundscapeEngine {
    fn drop(&mut self) {
        self.stop();
    }
}
