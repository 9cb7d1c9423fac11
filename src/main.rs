//! Word Scramble - CLI
//!
//! Word game with TUI and CLI modes: find every word hidden in a root word.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use word_scramble::{
    commands::{find_solutions, run_simple, run_survey},
    engine::{DEFAULT_LOCALE, DEFAULT_MIN_LENGTH, Session, WordListDictionary},
    logging,
    output::{print_solutions, print_survey},
    wordlists::{RootWordSource, WordListRoots},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Make as many words as you can from the letters of a root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'embedded' (default) or path to a file with one word per line
    #[arg(short, long, global = true, default_value = "embedded")]
    roots: String,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Locale passed to the dictionary
    #[arg(long, global = true, default_value = DEFAULT_LOCALE)]
    locale: String,

    /// Shortest word the dictionary accepts
    #[arg(long, global = true, default_value_t = DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Seed for reproducible root word selection
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// List every word that can be made from a root word
    Solutions {
        /// The root word to solve
        root: String,

        /// Show at most this many words
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Count findable words for every root in the pool
    Survey {
        /// Limit number of roots to survey
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },
}

/// Load the dictionary selected by the -d flag
fn load_dictionary(cli: &Cli) -> Result<WordListDictionary> {
    let dictionary = match cli.dictionary.as_str() {
        "embedded" => WordListDictionary::embedded(),
        path => WordListDictionary::from_file(path)
            .with_context(|| format!("could not load dictionary from {path}"))?,
    };
    Ok(dictionary.with_min_length(cli.min_length))
}

/// Build the root word source selected by the -r and --seed flags
fn root_source(cli: &Cli) -> WordListRoots {
    let source = match cli.roots.as_str() {
        "embedded" => WordListRoots::embedded(),
        path => WordListRoots::from_file(path),
    };
    match cli.seed {
        Some(seed) => source.with_seed(seed),
        None => source,
    }
}

fn init_logging(cli: &Cli, command: &Commands) -> Result<()> {
    match (&cli.log_file, command) {
        (Some(path), _) => logging::init_file(cli.verbose, path),
        // Log lines would corrupt the alternate screen
        (None, Commands::Play) => Ok(()),
        (None, _) => logging::init_stderr(cli.verbose),
    }
}

fn main() -> Result<()> {
    let mut cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);
    init_logging(&cli, &command)?;

    let dictionary = load_dictionary(&cli)?;

    match command {
        Commands::Play => run_play_command(&cli, dictionary),
        Commands::Simple => run_simple_command(&cli, dictionary),
        Commands::Solutions { root, limit } => {
            run_solutions_command(&root, limit, &dictionary, &cli.locale)
        }
        Commands::Survey { limit } => run_survey_command(&cli, limit, &dictionary),
    }
}

fn start_session(
    cli: &Cli,
    dictionary: WordListDictionary,
) -> Result<Session<WordListDictionary, WordListRoots>> {
    let session =
        Session::start(dictionary, root_source(cli)).context("could not start a game")?;
    Ok(session.with_locale(cli.locale.clone()))
}

fn run_play_command(cli: &Cli, dictionary: WordListDictionary) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let session = start_session(cli, dictionary)?;
    run_tui(App::new(session))
}

fn run_simple_command(cli: &Cli, dictionary: WordListDictionary) -> Result<()> {
    let mut session = start_session(cli, dictionary)?;
    run_simple(&mut session).map_err(|e| anyhow::anyhow!(e))
}

fn run_solutions_command(
    root: &str,
    limit: Option<usize>,
    dictionary: &WordListDictionary,
    locale: &str,
) -> Result<()> {
    let result = find_solutions(root, dictionary, locale).map_err(|e| anyhow::anyhow!(e))?;
    print_solutions(&result, limit);
    Ok(())
}

fn run_survey_command(
    cli: &Cli,
    limit: Option<usize>,
    dictionary: &WordListDictionary,
) -> Result<()> {
    let pool = root_source(cli)
        .list_candidate_roots()
        .context("could not load root words")?;

    let stats = run_survey(&pool, dictionary, &cli.locale, limit);
    print_survey(&stats);
    Ok(())
}
