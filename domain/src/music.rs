//! Music playback and soundscape value objects.

use serde::{Deserialize, Serialize};

/// A playable track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub src: String,
}

impl Track {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        src: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            src: src.into(),
        }
    }
}

/// An ordered track list with a wrap-around cursor.
#[derive(Debug, Clone)]
pub struct Playlist {
    tracks: Vec<Track>,
    current: usize,
}

impl Playlist {
    pub fn new(tracks: Vec<Track>) -> Self {
        Self { tracks, current: 0 }
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> Option<&Track> {
        self.tracks.get(self.current)
    }

    /// Advance to the next track, wrapping at the end.
    pub fn next(&mut self) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }
        self.current = (self.current + 1) % self.tracks.len();
        self.current()
    }

    /// Step back to the previous track, wrapping at the start.
    pub fn previous(&mut self) -> Option<&Track> {
        if self.tracks.is_empty() {
            return None;
        }
        self.current = (self.current + self.tracks.len() - 1) % self.tracks.len();
        self.current()
    }

    pub fn select(&mut self, index: usize) -> Option<&Track> {
        if index < self.tracks.len() {
            self.current = index;
        }
        self.current()
    }
}

/// Oscillator waveform shapes for the soundscape engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Waveform {
    Sine,
    Triangle,
    Sawtooth,
    Square,
}

/// One signal-generating layer of a soundscape.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SoundLayer {
    /// A pitched oscillator voice.
    Tone {
        waveform: Waveform,
        frequency_hz: f32,
        gain: f32,
    },
    /// White noise shaped by a low-pass filter.
    Noise { cutoff_hz: f32, gain: f32 },
}

/// A named set of soundscape layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SoundscapePreset {
    pub name: String,
    pub layers: Vec<SoundLayer>,
}

impl SoundscapePreset {
    /// The dark ambient drone used behind the hero section.
    pub fn upside_down() -> Self {
        Self {
            name: "upside-down".to_string(),
            layers: vec![
                SoundLayer::Tone {
                    waveform: Waveform::Sine,
                    frequency_hz: 55.0,
                    gain: 0.30,
                },
                SoundLayer::Tone {
                    waveform: Waveform::Triangle,
                    frequency_hz: 82.5,
                    gain: 0.18,
                },
                SoundLayer::Tone {
                    waveform: Waveform::Sawtooth,
                    frequency_hz: 110.0,
                    gain: 0.08,
                },
                SoundLayer::Noise {
                    cutoff_hz: 400.0,
                    gain: 0.12,
                },
            ],
        }
    }

    /// Brighter arpeggio-flavored bed for the creative section.
    pub fn laboratorio() -> Self {
        Self {
            name: "laboratorio".to_string(),
            layers: vec![
                SoundLayer::Tone {
                    waveform: Waveform::Square,
                    frequency_hz: 220.0,
                    gain: 0.10,
                },
                SoundLayer::Tone {
                    waveform: Waveform::Sine,
                    frequency_hz: 330.0,
                    gain: 0.12,
                },
                SoundLayer::Noise {
                    cutoff_hz: 1200.0,
                    gain: 0.05,
                },
            ],
        }
    }
}
