//! Console output formatter

use colored::Colorize;
use fans_application::ports::assistant_gateway::GeneratedImage;
use fans_domain::KaraokeSubmission;

/// Formats results for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the karaoke ranking, best voted first.
    pub fn format_ranking(submissions: &[KaraokeSubmission]) -> String {
        let mut output = String::new();
        output.push_str(&format!("{}\n\n", "🎤 Ranking de Karaoke".cyan().bold()));

        if submissions.is_empty() {
            output.push_str("Todavía no hay grabaciones. ¡Sé el primero!\n");
            return output;
        }

        for (position, submission) in submissions.iter().enumerate() {
            let medal = match position {
                0 => "🥇",
                1 => "🥈",
                2 => "🥉",
                _ => "  ",
            };
            output.push_str(&format!(
                "{medal} {} — {} {}\n     {} {}  {} {}\n",
                submission.user_name.yellow().bold(),
                submission.song_title,
                format!("({} votos)", submission.votes).green(),
                "id:".dimmed(),
                submission.id.dimmed(),
                "audio:".dimmed(),
                submission.audio_url.dimmed(),
            ));
        }
        output
    }

    /// Format a generated image result.
    pub fn format_image(kind_title: &str, image: &GeneratedImage) -> String {
        format!(
            "{}\n\n{}\n{} {}\n",
            format!("✨ {kind_title}").cyan().bold(),
            image.message,
            "URL:".bold(),
            image.image_url
        )
    }

    /// Format the player status line.
    pub fn format_now_playing(now: &fans_application::NowPlaying) -> String {
        let state = if now.playing { "▶" } else { "⏸" };
        let volume = if now.muted {
            "🔇".to_string()
        } else {
            format!("vol {}", now.volume)
        };
        format!(
            "{state} {} — {} {} [{:.0}s] ({volume})",
            now.title.yellow().bold(),
            now.artist,
            if now.playing { "".normal() } else { "(pausado)".dimmed() },
            now.position_secs,
        )
    }

    /// Format an assistant reply prefix for the chat.
    pub fn assistant_prefix() -> String {
        "Asistente> ".red().bold().to_string()
    }

    /// Format an error for the terminal.
    pub fn format_error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submission(name: &str, votes: u32) -> KaraokeSubmission {
        KaraokeSubmission {
            id: format!("{name}-id"),
            user_name: name.to_string(),
            song_title: "Running Up That Hill".to_string(),
            audio_url: "https://cdn/rec.webm".to_string(),
            votes,
            created_at: "2024-01-01T00:00:00Z".to_string(),
        }
    }

    #[test]
    fn ranking_lists_every_submission() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_ranking(&[
            submission("Max", 12),
            submission("Dustin", 7),
        ]);
        assert!(output.contains("🥇 Max"));
        assert!(output.contains("🥈 Dustin"));
        assert!(output.contains("(12 votos)"));
    }

    #[test]
    fn empty_ranking_invites_participation() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_ranking(&[]);
        assert!(output.contains("Sé el primero"));
    }

    #[test]
    fn image_output_includes_url() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format_image(
            "Generador de Posters",
            &GeneratedImage {
                image_url: "https://cdn/poster.png".to_string(),
                message: "¡Tu poster está listo!".to_string(),
            },
        );
        assert!(output.contains("https://cdn/poster.png"));
        assert!(output.contains("Generador de Posters"));
    }
}
