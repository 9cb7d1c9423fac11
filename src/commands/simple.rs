//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::engine::{DictionaryOracle, Rejection, Session};
use crate::output::print_round;
use crate::wordlists::RootWordSource;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What a line of input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Guess(String),
    NewRound,
    ShowWords,
    Help,
    Quit,
}

impl Command {
    /// Interpret one line typed by the player
    ///
    /// Lines starting with `:` are commands; everything else is a guess.
    #[must_use]
    pub fn parse(line: &str) -> Self {
        match line.trim() {
            ":quit" | ":q" | ":exit" => Self::Quit,
            ":new" | ":n" | ":restart" => Self::NewRound,
            ":words" | ":w" => Self::ShowWords,
            ":help" | ":h" | ":?" => Self::Help,
            _ => Self::Guess(line.to_string()),
        }
    }
}

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if there's an I/O error reading input or writing output.
pub fn run_simple<D, R>(session: &mut Session<D, R>) -> Result<(), String>
where
    D: DictionaryOracle,
    R: RootWordSource,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                 Word Scramble - Simple Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    print_help();
    announce_root(session.current_state().root_word());

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{} ", "guess>".bright_black());
        io::stdout().flush().map_err(|e| e.to_string())?;

        let Some(line) = lines.next() else {
            println!();
            break;
        };
        let line = line.map_err(|e| e.to_string())?;

        match Command::parse(&line) {
            Command::Quit => break,
            Command::Help => print_help(),
            Command::ShowWords => print_round(session.current_state()),
            Command::NewRound => {
                let state = session.restart();
                println!("\n🔄 New round!");
                announce_root(state.root_word());
            }
            Command::Guess(raw) => match session.submit_guess(&raw) {
                Ok(accepted) => println!(
                    "  {} {} {}  score: {}",
                    "✓".green().bold(),
                    accepted.word.bright_white().bold(),
                    format!("+{}", accepted.points).green(),
                    accepted.score.to_string().bright_yellow().bold()
                ),
                // Nothing typed, nothing to say
                Err(Rejection::EmptyInput) => {}
                Err(rejection) => println!(
                    "  {} {} {}",
                    "✗".red().bold(),
                    rejection.title().red().bold(),
                    rejection
                        .message(session.current_state().root_word())
                        .bright_black()
                ),
            },
        }
    }

    let state = session.current_state();
    println!(
        "\n👋 Thanks for playing! Final score: {} ({} words)\n",
        state.score().to_string().bright_yellow().bold(),
        state.found_count()
    );
    Ok(())
}

fn announce_root(root: &str) {
    println!(
        "Root word: {}\n",
        root.to_uppercase().bright_cyan().bold()
    );
}

fn print_help() {
    println!("Make as many words as you can from the letters of the root word.");
    println!("Each letter can be used as many times as it appears in the root.\n");
    println!("Commands: ':new' new round, ':words' found words, ':help' help, ':quit' exit\n");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_commands() {
        assert_eq!(Command::parse(":quit"), Command::Quit);
        assert_eq!(Command::parse("  :q "), Command::Quit);
        assert_eq!(Command::parse(":new"), Command::NewRound);
        assert_eq!(Command::parse(":words"), Command::ShowWords);
        assert_eq!(Command::parse(":help"), Command::Help);
    }

    #[test]
    fn parse_guess_keeps_raw_text() {
        assert_eq!(Command::parse(" Tones "), Command::Guess(" Tones ".to_string()));
        assert_eq!(Command::parse(""), Command::Guess(String::new()));
    }

    #[test]
    fn unknown_colon_word_is_a_guess() {
        assert_eq!(Command::parse(":stone"), Command::Guess(":stone".to_string()));
    }
}
