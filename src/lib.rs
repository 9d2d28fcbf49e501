//! Par
//!
//! A daily word-capture puzzle on a 5×5 letter grid. Every date yields the
//! same 25 letters; the player spells five-letter words from them, and each
//! accepted word is moved into the next free row and locked there. Capture
//! all 25 letters to finish. Hard mode instead swaps pairs of cells until
//! every row reads as a word.
//!
//! # Quick Start
//!
//! ```rust
//! use par_puzzle::puzzle::generate_puzzle;
//! use par_puzzle::session::GameSession;
//! use par_puzzle::wordlists::WordSource;
//!
//! let (dictionary, common) = WordSource::embedded().into_parts();
//! let mut session = GameSession::loading();
//! session.begin(generate_puzzle("2024-06-01", &common), dictionary);
//!
//! for index in [0, 1, 2, 3, 4] {
//!     session.select_cell(index).unwrap();
//! }
//! match session.submit() {
//!     Ok(outcome) => println!("captured {}", outcome.word),
//!     Err(e) => println!("refused: {e}"),
//! }
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Daily puzzle generation
pub mod puzzle;

// Submission checks and letter accounting
pub mod scoring;

// Live board and row commits
pub mod board;

// Game state machine
pub mod session;

// Saved progress
pub mod persistence;

// Tunables
pub mod config;

// Tracing subscriber setup
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
