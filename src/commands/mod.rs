//! Command implementations

pub mod puzzle;
pub mod simple;
pub mod survey;

pub use puzzle::{PuzzleReport, describe_puzzle};
pub use simple::run_simple;
pub use survey::{PuzzleStats, SurveyConfig, SurveyStatistics, run_survey};
