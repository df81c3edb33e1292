//! Terminal output formatting
//!
//! Display utilities for rendering attempt rows outside the TUI.

pub mod display;
pub mod formatters;

pub use display::print_eval_result;
pub use formatters::{colored_row, row_to_emoji};
