//! Command implementations

pub mod eval;
pub mod simple;

pub use eval::{EvalResult, evaluate_pair};
pub use simple::run_simple;
