//! Display functions for command results

use super::formatters::{colored_row, row_to_emoji};
use crate::commands::EvalResult;
use colored::Colorize;

/// Print the verdict of one guess/target pair
pub fn print_eval_result(result: &EvalResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.text().to_uppercase().bright_white().bold(),
        result.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    println!("\n  {}", colored_row(&result.row));
    println!("  {}", row_to_emoji(&result.row));

    println!();
    if result.row.is_winning() {
        println!("{}", "Exact match on every letter!".green().bold());
    } else {
        for verdict in &result.row {
            let Some(letter) = verdict.letter else {
                continue;
            };
            let letter = letter.to_ascii_uppercase();
            if verdict.exact {
                println!("  {letter}: {}", "correct spot".green());
            } else if verdict.present {
                println!("  {letter}: {}", "in the word, wrong spot".yellow());
            } else {
                println!("  {letter}: {}", "not in the word".bright_black());
            }
        }
    }
}
