//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI. The transient error has no timer here;
//! it is printed once and explicitly cleared.

use crate::core::{MAX_ATTEMPTS, WORD_LENGTH};
use crate::game::{Game, WordSource};
use crate::output::formatters::colored_row;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: WordSource>(game: &mut Game<S>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Wordle - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the hidden {WORD_LENGTH}-letter word in {MAX_ATTEMPTS} tries or less.");
    println!("After each guess, tile colors show how close you were:\n");
    println!("  - Green:  letter in the correct spot");
    println!("  - Yellow: letter in the word, wrong spot");
    println!("  - Gray:   letter not in the word\n");
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    loop {
        if game.state().won() {
            let turns = game.state().attempt_index();
            print_win_banner(game, turns);

            if !ask_play_again()? {
                return Ok(());
            }
            game.reset();
            println!("\n🔄 New game started!\n");
            continue;
        }

        if game.state().exhausted() {
            println!("\n{}", "Out of guesses!".red().bold());
            if let Some(answer) = game.revealed_answer() {
                println!(
                    "The word was {}",
                    answer.text().to_uppercase().bright_yellow().bold()
                );
            }

            if !ask_play_again()? {
                return Ok(());
            }
            game.reset();
            println!("\n🔄 New game started!\n");
            continue;
        }

        let attempt = game.state().attempt_index() + 1;
        let input = get_user_input(&format!("Guess {attempt}/{MAX_ATTEMPTS}"))?;

        match input.to_lowercase().as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            "new" => {
                game.reset();
                println!("\n🔄 New game started!\n");
                continue;
            }
            guess => {
                game.submit_guess(guess);

                if let Some(error) = game.state().transient_error() {
                    println!("❌ {}\n", error.red());
                    game.clear_error();
                } else {
                    let filled = game.state().attempt_index();
                    let row = &game.state().history()[filled - 1];
                    println!("  {}\n", colored_row(row));
                }
            }
        }
    }
}

fn print_win_banner<S: WordSource>(game: &Game<S>, turns: usize) {
    println!("\n{}", "═".repeat(62).bright_cyan());
    println!(
        "{}",
        "           🎉  Nice! You got it! 👏  🎉           "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(62).bright_cyan());

    println!(
        "\n  Solved in {} {}",
        turns.to_string().bright_cyan().bold(),
        if turns == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Your board:");
    for row in game.state().history().iter().take(turns) {
        println!("    {}", colored_row(row));
    }
    println!();
}

fn ask_play_again() -> Result<bool, String> {
    Ok(matches!(
        get_user_input("Play again? (yes/no)")?.to_lowercase().as_str(),
        "yes" | "y"
    ))
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
