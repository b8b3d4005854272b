//! CLI command definitions

use clap::{Parser, Subcommand};
use fans_application::use_cases::karaoke::DEFAULT_RANKING_LIMIT;
use fans_domain::CreativeKind;
use std::path::PathBuf;

/// CLI arguments for stranger-fans
#[derive(Parser, Debug)]
#[command(name = "stranger-fans")]
#[command(author, version, about = "Stranger Fans España - chat, karaoke y ambiente")]
#[command(long_about = r#"
Companion for the Stranger Fans España community.

Talk to the AI assistant about the show, generate creative content,
browse and vote the karaoke ranking, or render an ambient soundscape.

Configuration files are loaded from (in priority order):
1. --config <path>            Explicit config file
2. ./stranger-fans.toml       Project-level config
3. ~/.config/stranger-fans/config.toml   Global config

Example:
  stranger-fans chat
  stranger-fans generate image poster
  stranger-fans karaoke list
  stranger-fans soundscape render upside-down -o drone.wav
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long, global = true)]
    pub no_config: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat with the community assistant
    Chat,

    /// One-shot creative generation
    #[command(subcommand)]
    Generate(GenerateCommand),

    /// Karaoke ranking, votes and submissions
    #[command(subcommand)]
    Karaoke(KaraokeCommand),

    /// Join the community newsletter
    Signup {
        /// Your name
        #[arg(long)]
        name: String,
        /// Your email address
        #[arg(long)]
        email: String,
    },

    /// Enter a contest
    Contest {
        /// Contest identifier
        contest_id: u32,
        /// Your name
        #[arg(long)]
        name: String,
        /// Your email address
        #[arg(long)]
        email: String,
    },

    /// Ambient soundscape rendering
    #[command(subcommand)]
    Soundscape(SoundscapeCommand),

    /// Interactive music player console
    Music,
}

#[derive(Subcommand, Debug)]
pub enum GenerateCommand {
    /// Generate a complete text from a prompt
    Content {
        /// The prompt to expand
        prompt: String,
    },
    /// Generate an image (foto, poster or tarjeta)
    Image {
        /// Creation type
        kind: CreativeKind,
    },
}

#[derive(Subcommand, Debug)]
pub enum KaraokeCommand {
    /// Show the ranking, best voted first
    List {
        /// Maximum entries to show
        #[arg(long, default_value_t = DEFAULT_RANKING_LIMIT)]
        limit: usize,
    },
    /// Vote for a submission
    Vote {
        /// Submission id
        id: String,
    },
    /// Play a submission's recording
    Play {
        /// Submission id
        id: String,
    },
    /// Upload a recording and enter the ranking
    Submit {
        /// Path to the audio file
        file: PathBuf,
        /// Your name
        #[arg(long)]
        name: String,
        /// Your email address
        #[arg(long)]
        email: String,
        /// Song identifier from the karaoke catalog
        #[arg(long)]
        song_id: u32,
        /// Song title shown in the ranking
        #[arg(long)]
        song_title: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum SoundscapeCommand {
    /// Render a preset to a WAV file
    Render {
        /// Preset name (upside-down or laboratorio)
        preset: String,
        /// Output file
        #[arg(short, long, default_value = "soundscape.wav")]
        output: PathBuf,
        /// Length in seconds
        #[arg(long, default_value_t = 10)]
        seconds: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_image_kind() {
        let cli = Cli::parse_from(["stranger-fans", "generate", "image", "poster"]);
        match cli.command {
            Command::Generate(GenerateCommand::Image { kind }) => {
                assert_eq!(kind, CreativeKind::Poster);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn karaoke_list_has_default_limit() {
        let cli = Cli::parse_from(["stranger-fans", "karaoke", "list"]);
        match cli.command {
            Command::Karaoke(KaraokeCommand::List { limit }) => assert_eq!(limit, 20),
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
