//! Submission validation and letter accounting
//!
//! Both work purely on letter inventories, never on board indices.

mod usage;
mod validate;

pub use usage::{LetterUsage, calculate_letter_usage};
pub use validate::{SubmitError, validate_submission};
