//! CLI entrypoint for Stranger Fans
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Result, bail};
use clap::Parser;
use fans_application::{
    ChatSession, GenerateCreativeUseCase, JoinCommunityUseCase, KaraokeUseCase, NewRecording,
    PlaybackControl, TranscriptLogger,
};
use fans_domain::{Playlist, SoundscapePreset, Track};
use fans_infrastructure::{
    ConfigLoader, FileConfig, JsonlTranscriptLogger, ProxyGateway, RestCommunityStore,
    SoundscapeEngine, TrackPlayer, write_wav,
};
use fans_presentation::{
    ChatRepl, Cli, Command, ConsoleFormatter, GenerateCommand, KaraokeCommand, MusicConsole,
    ProgressReporter, SoundscapeCommand,
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Render sample rate for soundscape WAV output.
const SAMPLE_RATE: u32 = 44_100;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!("Starting Stranger Fans");

    let config = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref())
            .map_err(|e| anyhow::anyhow!("Configuration error: {e}"))?
    };

    // === Dependency Injection ===
    let http = reqwest::Client::new();
    let gateway = Arc::new(ProxyGateway::new(http.clone(), config.proxy.clone()));
    let store = Arc::new(RestCommunityStore::new(http, config.store.clone()));
    let transcript = transcript_logger(&config);

    match cli.command {
        Command::Chat => {
            let mut session = ChatSession::new(gateway);
            if let Some(logger) = transcript {
                session = session.with_transcript_logger(logger);
            }
            ChatRepl::new(session).run().await?;
        }

        Command::Generate(GenerateCommand::Content { prompt }) => {
            let mut use_case = GenerateCreativeUseCase::new(gateway);
            if let Some(logger) = transcript {
                use_case = use_case.with_transcript_logger(logger);
            }
            let progress = ProgressReporter::new(cli.quiet);
            progress.set_message("Generando contenido...");
            let content = use_case.content(&prompt).await?;
            progress.finish();
            println!("{content}");
        }

        Command::Generate(GenerateCommand::Image { kind }) => {
            let mut use_case = GenerateCreativeUseCase::new(gateway);
            if let Some(logger) = transcript {
                use_case = use_case.with_transcript_logger(logger);
            }
            let progress = ProgressReporter::new(cli.quiet);
            progress.set_message(format!("Generando {kind}..."));
            let image = use_case.image(kind).await?;
            progress.finish();
            println!("{}", ConsoleFormatter::format_image(kind.title(), &image));
        }

        Command::Karaoke(command) => {
            run_karaoke(command, store, cli.quiet, config.playback.volume).await?
        }

        Command::Signup { name, email } => {
            let signup = JoinCommunityUseCase::new(store).signup(&name, &email).await?;
            println!("¡Bienvenido a la comunidad, {}! 🎉", signup.name);
        }

        Command::Contest {
            contest_id,
            name,
            email,
        } => {
            JoinCommunityUseCase::new(store)
                .enter_contest(contest_id, &name, &email)
                .await?;
            println!("Participación registrada en el concurso {contest_id}. ¡Suerte!");
        }

        Command::Soundscape(SoundscapeCommand::Render {
            preset,
            output,
            seconds,
        }) => {
            let preset = match preset.as_str() {
                "upside-down" => SoundscapePreset::upside_down(),
                "laboratorio" => SoundscapePreset::laboratorio(),
                other => bail!("Unknown preset '{other}' (try upside-down or laboratorio)"),
            };

            let mut engine = SoundscapeEngine::new(SAMPLE_RATE);
            engine.start(&preset);
            let mut samples = vec![0.0f32; (SAMPLE_RATE * seconds) as usize];
            engine.render(&mut samples);
            engine.stop();

            write_wav(&output, SAMPLE_RATE, &samples)?;
            println!("Rendered '{}' to {} ({seconds}s)", preset.name, output.display());
        }

        Command::Music => {
            let player = TrackPlayer::new(default_playlist(), config.playback.volume);
            MusicConsole::new(Box::new(player)).run()?;
        }
    }

    Ok(())
}

/// The site's ambient playlist.
fn default_playlist() -> Playlist {
    Playlist::new(vec![
        Track::new("80s Retro Synthwave", "Ambiente 80s", "/audio/track-1.mp3"),
        Track::new("Dark Ambient", "Upside Down", "/audio/track-2.mp3"),
        Track::new("Synth Pulse", "Hawkins Lab", "/audio/track-3.mp3"),
    ])
}

fn transcript_logger(config: &FileConfig) -> Option<Arc<dyn TranscriptLogger>> {
    let path = config.chat.transcript_log.as_ref()?;
    let logger = JsonlTranscriptLogger::new(path)?;
    info!("Transcript log: {}", logger.path().display());
    Some(Arc::new(logger))
}

async fn run_karaoke(
    command: KaraokeCommand,
    store: Arc<RestCommunityStore>,
    quiet: bool,
    volume: u8,
) -> Result<()> {
    let mut use_case = KaraokeUseCase::new(store);

    match command {
        KaraokeCommand::List { limit } => {
            let submissions = use_case.ranking(limit).await?;
            println!("{}", ConsoleFormatter::format_ranking(&submissions));
        }
        KaraokeCommand::Vote { id } => {
            use_case.vote(&id).await?;
            println!("¡Voto registrado! 🗳️");
        }
        KaraokeCommand::Play { id } => {
            let submission = use_case.submission(&id).await?;

            // The karaoke flow starts playback through the shared
            // capability; it never touches the player's internals.
            let mut player: Box<dyn PlaybackControl> =
                Box::new(TrackPlayer::new(default_playlist(), volume));
            player.play_url(
                &format!("{} — {}", submission.user_name, submission.song_title),
                &submission.audio_url,
            );
            MusicConsole::new(player).run()?;
        }
        KaraokeCommand::Submit {
            file,
            name,
            email,
            song_id,
            song_title,
        } => {
            let bytes = std::fs::read(&file)?;
            let file_name = file
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "grabacion.webm".to_string());

            let progress = ProgressReporter::new(quiet);
            progress.set_message("Subiendo grabación...");
            use_case
                .submit(NewRecording {
                    user_name: name,
                    user_email: email,
                    song_id,
                    song_title,
                    file_name,
                    bytes,
                })
                .await?;
            progress.finish();
            println!("¡Grabación enviada! Ya estás en el ranking. 🎤");
        }
    }

    Ok(())
}
