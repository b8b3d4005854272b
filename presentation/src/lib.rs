//! Presentation layer for stranger-fans
//!
//! This crate contains CLI definitions, output formatters,
//! progress reporting, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod music;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use music::MusicConsole;
pub use cli::commands::{Cli, Command, GenerateCommand, KaraokeCommand, SoundscapeCommand};
pub use output::console::ConsoleFormatter;
pub use progress::reporter::ProgressReporter;
