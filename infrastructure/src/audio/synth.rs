//! Signal generators: band-limited-enough oscillators, white noise and
//! an RBJ low-pass biquad.

use fans_domain::Waveform;
use rand::{Rng, SeedableRng, rngs::StdRng};
use std::f32::consts::PI;

/// A phase-accumulator oscillator.
pub struct Oscillator {
    waveform: Waveform,
    phase: f32,
    step: f32,
}

impl Oscillator {
    pub fn new(waveform: Waveform, frequency_hz: f32, sample_rate: u32) -> Self {
        Self {
            waveform,
            phase: 0.0,
            step: frequency_hz / sample_rate as f32,
        }
    }

    /// Next sample in `-1.0..=1.0`.
    pub fn next_sample(&mut self) -> f32 {
        let t = self.phase;
        self.phase += self.step;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }
        match self.waveform {
            Waveform::Sine => (2.0 * PI * t).sin(),
            Waveform::Triangle => 4.0 * (t - 0.5).abs() - 1.0,
            Waveform::Sawtooth => 2.0 * t - 1.0,
            Waveform::Square => {
                if t < 0.5 {
                    1.0
                } else {
                    -1.0
                }
            }
        }
    }
}

/// Deterministically seeded white noise source.
pub struct NoiseSource {
    rng: StdRng,
}

impl NoiseSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn next_sample(&mut self) -> f32 {
        self.rng.gen_range(-1.0f32..1.0)
    }
}

/// Second-order low-pass filter (RBJ audio EQ cookbook, Q = 1/sqrt(2)).
pub struct LowPass {
    b0: f32,
    b1: f32,
    b2: f32,
    a1: f32,
    a2: f32,
    x1: f32,
    x2: f32,
    y1: f32,
    y2: f32,
}

impl LowPass {
    pub fn new(cutoff_hz: f32, sample_rate: u32) -> Self {
        let q = std::f32::consts::FRAC_1_SQRT_2;
        let w0 = 2.0 * PI * cutoff_hz / sample_rate as f32;
        let (sin_w0, cos_w0) = w0.sin_cos();
        let alpha = sin_w0 / (2.0 * q);

        let a0 = 1.0 + alpha;
        let b1 = (1.0 - cos_w0) / a0;
        Self {
            b0: b1 / 2.0,
            b1,
            b2: b1 / 2.0,
            a1: (-2.0 * cos_w0) / a0,
            a2: (1.0 - alpha) / a0,
            x1: 0.0,
            x2: 0.0,
            y1: 0.0,
            y2: 0.0,
        }
    }

    pub fn process(&mut self, x: f32) -> f32 {
        let y = self.b0 * x + self.b1 * self.x1 + self.b2 * self.x2
            - self.a1 * self.y1
            - self.a2 * self.y2;
        self.x2 = self.x1;
        self.x1 = x;
        self.y2 = self.y1;
        self.y1 = y;
        y
    }
}
