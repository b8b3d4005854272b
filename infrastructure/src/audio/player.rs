//! Playlist player state.
//!
//! Models the player surface without an audio device: sources, cursor,
//! volume and mute are tracked here and rendered by the presentation
//! layer. Implements the shared playback capability so the karaoke list
//! can start a recording without touching the music section's state
//! directly.

use fans_application::ports::playback::{NowPlaying, PlaybackControl};
use fans_domain::Playlist;
use tracing::debug;

/// The source currently loaded into the player.
enum Source {
    Playlist,
    External { title: String, url: String },
}

pub struct TrackPlayer {
    playlist: Playlist,
    source: Source,
    playing: bool,
    position_secs: f64,
    volume: u8,
    muted: bool,
}

impl TrackPlayer {
    pub fn new(playlist: Playlist, volume: u8) -> Self {
        Self {
            playlist,
            source: Source::Playlist,
            playing: false,
            position_secs: 0.0,
            volume: volume.min(100),
            muted: false,
        }
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Reset position and switch back to the playlist source.
    fn rewind_to_playlist(&mut self) {
        self.source = Source::Playlist;
        self.position_secs = 0.0;
    }
}

impl PlaybackControl for TrackPlayer {
    fn toggle(&mut self) {
        self.playing = !self.playing;
        debug!("Playback {}", if self.playing { "resumed" } else { "paused" });
    }

    fn next(&mut self) {
        self.rewind_to_playlist();
        self.playlist.next();
        self.playing = true;
    }

    fn previous(&mut self) {
        self.rewind_to_playlist();
        self.playlist.previous();
        self.playing = true;
    }

    fn play_track(&mut self, index: usize) {
        self.rewind_to_playlist();
        self.playlist.select(index);
        self.playing = true;
    }

    fn play_url(&mut self, title: &str, url: &str) {
        debug!("Playing external source {url}");
        self.source = Source::External {
            title: title.to_string(),
            url: url.to_string(),
        };
        self.position_secs = 0.0;
        self.playing = true;
    }

    fn seek(&mut self, position_secs: f64) {
        self.position_secs = position_secs.max(0.0);
    }

    fn set_volume(&mut self, volume: u8) {
        self.volume = volume.min(100);
        self.muted = false;
    }

    fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    fn now_playing(&self) -> Option<NowPlaying> {
        let (title, artist) = match &self.source {
            Source::External { title, .. } => (title.clone(), "Comunidad".to_string()),
            Source::Playlist => {
                let track = self.playlist.current()?;
                (track.title.clone(), track.artist.clone())
            }
        };
        Some(NowPlaying {
            title,
            artist,
            playing: self.playing,
            position_secs: self.position_secs,
            duration_secs: None,
            volume: self.volume,
            muted: self.muted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fans_domain::Track;

    fn player() -> TrackPlayer {
        TrackPlayer::new(
            Playlist::new(vec![
                Track::new("Theme", "Kyle Dixon & Michael Stein", "/audio/a.mp3"),
                Track::new("Kids", "Kyle Dixon & Michael Stein", "/audio/b.mp3"),
            ]),
            50,
        )
    }

    #[test]
    fn starts_paused_on_first_track() {
        let player = player();
        let now = player.now_playing().unwrap();
        assert_eq!(now.title, "Theme");
        assert!(!now.playing);
        assert_eq!(now.volume, 50);
    }

    #[test]
    fn next_starts_playback_and_advances() {
        let mut player = player();
        player.next();
        let now = player.now_playing().unwrap();
        assert_eq!(now.title, "Kids");
        assert!(now.playing);
    }

    #[test]
    fn external_url_interrupts_playlist() {
        let mut player = player();
        player.seek(42.0);
        player.play_url("Mi canción", "https://cdn/rec.webm");
        let now = player.now_playing().unwrap();
        assert_eq!(now.title, "Mi canción");
        assert_eq!(now.position_secs, 0.0);

        // Skipping returns to the playlist.
        player.next();
        assert_eq!(player.now_playing().unwrap().title, "Kids");
    }

    #[test]
    fn set_volume_clamps_and_unmutes() {
        let mut player = player();
        player.toggle_mute();
        player.set_volume(150);
        let now = player.now_playing().unwrap();
        assert_eq!(now.volume, 100);
        assert!(!now.muted);
    }

    #[test]
    fn empty_playlist_has_nothing_playing() {
        let player = TrackPlayer::new(Playlist::new(vec![]), 50);
        assert!(player.now_playing().is_none());
    }
}
