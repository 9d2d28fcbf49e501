//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_accepted, print_board, print_completion, print_puzzle_report, print_rejected,
    print_survey_statistics,
};
