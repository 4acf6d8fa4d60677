//! Error types for the Stemma library.
//!
//! All errors are represented by the [`StemmaError`] enum. Stemming itself
//! never fails; errors only come from the strict [`Stemmer::try_stem`] entry
//! point and from loading a [`StemmerConfig`].
//!
//! # Examples
//!
//! ```
//! use stemma::error::{Result, StemmaError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(StemmaError::invalid_input("empty word"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```
//!
//! [`Stemmer::try_stem`]: crate::stemmer::Stemmer::try_stem
//! [`StemmerConfig`]: crate::config::StemmerConfig

use std::io;

use thiserror::Error;

/// The main error type for Stemma operations.
#[derive(Error, Debug)]
pub enum StemmaError {
    /// The word cannot be stemmed at all (e.g. it is empty).
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The word contains a character outside the English alphabet.
    #[error("Non-alphabetic character {character:?} in word {word:?}")]
    NonAlphabetic { word: String, character: char },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// I/O errors (reading configuration files)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for operations that may fail with StemmaError.
pub type Result<T> = std::result::Result<T, StemmaError>;

impl StemmaError {
    /// Create a new invalid input error.
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        StemmaError::InvalidInput(msg.into())
    }

    /// Create a new non-alphabetic character error.
    pub fn non_alphabetic<S: Into<String>>(word: S, character: char) -> Self {
        StemmaError::NonAlphabetic {
            word: word.into(),
            character,
        }
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        StemmaError::Config(msg.into())
    }
}
