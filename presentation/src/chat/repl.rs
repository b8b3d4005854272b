//! REPL (Read-Eval-Print Loop) for interactive chat

use crate::output::ConsoleFormatter;
use colored::Colorize;
use fans_application::{ChatSession, SubmitOutcome};
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};
use std::io::Write;

/// Interactive chat REPL
pub struct ChatRepl {
    session: ChatSession,
}

impl ChatRepl {
    pub fn new(session: ChatSession) -> Self {
        Self { session }
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> RlResult<()> {
        let mut rl = DefaultEditor::new()?;

        // Try to load history
        let history_path = dirs::data_dir().map(|p| p.join("stranger-fans").join("history.txt"));

        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            let readline = rl.readline(">>> ");

            match readline {
                Ok(line) => {
                    let line = line.trim();

                    if line.is_empty() {
                        continue;
                    }

                    if line.starts_with('/') {
                        if Self::handle_command(line) {
                            break;
                        }
                        continue;
                    }

                    let _ = rl.add_history_entry(line);

                    self.process_turn(line).await;
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("¡Hasta luego!");
                    break;
                }
                Err(err) => {
                    eprintln!("{}", ConsoleFormatter::format_error(&format!("{err:?}")));
                    break;
                }
            }
        }

        // Save history
        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    fn print_welcome(&self) {
        println!();
        println!("╭──────────────────────────────────────────────╮");
        println!("│       Stranger Fans España - Chat            │");
        println!("╰──────────────────────────────────────────────╯");
        println!();
        // The session opens with the assistant's greeting.
        if let Some(greeting) = self.session.messages().first() {
            println!("{}{}", ConsoleFormatter::assistant_prefix(), greeting.content);
        }
        println!();
        println!("Commands:");
        println!("  /help     - Show this help");
        println!("  /quit     - Exit chat");
        println!();
    }

    /// Handle slash commands. Returns true if should exit.
    fn handle_command(cmd: &str) -> bool {
        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("¡Hasta luego!");
                true
            }
            "/help" | "/h" | "/?" => {
                println!();
                println!("Commands:");
                println!("  /help, /h, /?    - Show this help");
                println!("  /quit, /exit, /q - Exit chat");
                println!();
                false
            }
            _ => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
                false
            }
        }
    }

    async fn process_turn(&mut self, text: &str) {
        print!("{}", ConsoleFormatter::assistant_prefix());
        let _ = std::io::stdout().flush();

        let outcome = self
            .session
            .submit(text, |delta| {
                print!("{delta}");
                let _ = std::io::stdout().flush();
            })
            .await;

        match outcome {
            SubmitOutcome::Finished => println!("\n"),
            SubmitOutcome::Failed => {
                // The failure message was appended to the conversation;
                // show it where the reply would have been.
                if let Some(message) = self.session.messages().last() {
                    println!("{}\n", message.content.red());
                }
            }
            SubmitOutcome::Ignored => println!(),
        }
    }
}
