//! Music player console.

pub mod console;

pub use console::MusicConsole;
