//! Interactive console for the music player.
//!
//! Drives any [`PlaybackControl`] implementation, so the same commands
//! work for the playlist player and for whatever else hands out the
//! capability.

use crate::output::ConsoleFormatter;
use fans_application::ports::playback::PlaybackControl;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

/// Line-based control surface over a playback capability.
pub struct MusicConsole {
    player: Box<dyn PlaybackControl>,
}

impl MusicConsole {
    pub fn new(player: Box<dyn PlaybackControl>) -> Self {
        Self { player }
    }

    pub fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        println!();
        println!("🎵 Música Stranger - type 'help' for commands");
        self.print_status();

        loop {
            match rl.readline("music> ") {
                Ok(line) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(line);
                    if self.handle(line) {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
                Err(err) => {
                    eprintln!("{}", ConsoleFormatter::format_error(&format!("{err:?}")));
                    break;
                }
            }
        }
        Ok(())
    }

    /// Handle one command line. Returns true if should exit.
    fn handle(&mut self, line: &str) -> bool {
        let mut parts = line.split_whitespace();
        let command = parts.next().unwrap_or_default();
        let argument = parts.next();

        match command {
            "quit" | "q" | "exit" => return true,
            "help" | "?" => Self::print_help(),
            "toggle" | "p" => self.player.toggle(),
            "next" | "n" => self.player.next(),
            "prev" | "b" => self.player.previous(),
            "play" => match argument.and_then(|a| a.parse::<usize>().ok()) {
                // Track numbers are 1-based in the UI
                Some(number) if number > 0 => self.player.play_track(number - 1),
                _ => println!("Usage: play <track number>"),
            },
            "seek" => match argument.and_then(|a| a.parse::<f64>().ok()) {
                Some(position) => self.player.seek(position),
                None => println!("Usage: seek <seconds>"),
            },
            "vol" => match argument.and_then(|a| a.parse::<u8>().ok()) {
                Some(volume) => self.player.set_volume(volume),
                None => println!("Usage: vol <0-100>"),
            },
            "mute" | "m" => self.player.toggle_mute(),
            "status" | "s" => {}
            _ => {
                println!("Unknown command: {command}");
                println!("Type 'help' for available commands");
                return false;
            }
        }

        self.print_status();
        false
    }

    fn print_status(&self) {
        match self.player.now_playing() {
            Some(now) => println!("{}", ConsoleFormatter::format_now_playing(&now)),
            None => println!("(nothing loaded)"),
        }
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  toggle, p    - Play/pause");
        println!("  next, n      - Next track");
        println!("  prev, b      - Previous track");
        println!("  play <n>     - Play track number n");
        println!("  seek <secs>  - Seek within the current track");
        println!("  vol <0-100>  - Set volume");
        println!("  mute, m      - Toggle mute");
        println!("  status, s    - Show what's playing");
        println!("  quit, q      - Exit");
        println!();
    }
}
