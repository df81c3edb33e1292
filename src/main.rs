//! Wordle - CLI
//!
//! Guess the hidden five-letter word in six tries, in a TUI or a plain
//! terminal session.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use wordle_game::{
    commands::{evaluate_pair, run_simple},
    game::Game,
    output::print_eval_result,
    wordlists::{WordList, loader},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Guess the hidden five-letter word in six tries",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Answer list: 'embedded' (default) or path to a word file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (play without TUI)
    Simple,

    /// Show the verdict for one guess against a given target
    Eval {
        /// The guessed word
        guess: String,

        /// The target word to evaluate against
        target: String,
    },
}

/// Build the word source based on the -w flag
///
/// - "embedded": the word lists compiled into the binary
/// - "<path>": answers loaded from a custom file; the embedded extra
///   guess words still widen the vocabulary
fn load_wordlist(wordlist_mode: &str) -> Result<WordList> {
    use wordle_game::wordlists::ALLOWED_EXTRA;

    match wordlist_mode {
        "embedded" => Ok(WordList::embedded()),
        path => {
            let answers = loader::load_from_file(path)
                .with_context(|| format!("Failed to load word list from {path}"))?;
            let extra = loader::words_from_slice(ALLOWED_EXTRA);
            WordList::new(answers, &extra).map_err(|e| anyhow::anyhow!(e))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(load_wordlist(&cli.wordlist)?),
        Commands::Simple => run_simple_command(load_wordlist(&cli.wordlist)?),
        Commands::Eval { guess, target } => run_eval_command(&guess, &target),
    }
}

fn run_play_command(words: WordList) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(words);
    run_tui(app)
}

fn run_simple_command(words: WordList) -> Result<()> {
    let mut game = Game::new(words);
    run_simple(&mut game).map_err(|e| anyhow::anyhow!(e))
}

fn run_eval_command(guess: &str, target: &str) -> Result<()> {
    let result = evaluate_pair(guess, target).map_err(|e| anyhow::anyhow!(e))?;
    print_eval_result(&result);
    Ok(())
}
