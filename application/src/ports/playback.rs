//! Playback control port
//!
//! A shared player capability. Any feature that needs to start or steer
//! playback (the music section, the karaoke list) receives this
//! interface by reference instead of reaching into another component's
//! controls.

/// Snapshot of what the player is doing.
#[derive(Debug, Clone, PartialEq)]
pub struct NowPlaying {
    pub title: String,
    pub artist: String,
    pub playing: bool,
    pub position_secs: f64,
    pub duration_secs: Option<f64>,
    pub volume: u8,
    pub muted: bool,
}

/// Shared playback control capability.
pub trait PlaybackControl: Send {
    /// Toggle play/pause for the current source.
    fn toggle(&mut self);

    /// Skip to the next playlist track.
    fn next(&mut self);

    /// Go back to the previous playlist track.
    fn previous(&mut self);

    /// Select a playlist track by index and start playing it.
    fn play_track(&mut self, index: usize);

    /// Play an external source (e.g. a karaoke recording URL),
    /// interrupting the playlist.
    fn play_url(&mut self, title: &str, url: &str);

    /// Seek within the current source.
    fn seek(&mut self, position_secs: f64);

    /// Set volume 0..=100. Unmutes.
    fn set_volume(&mut self, volume: u8);

    fn toggle_mute(&mut self);

    fn now_playing(&self) -> Option<NowPlaying>;
}
