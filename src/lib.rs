//! # Stemma
//!
//! English word stemming with the original Porter (1980) algorithm.
//!
//! ## Features
//!
//! - Pure Rust implementation, no shared state
//! - Rule tables for each step, inspectable in isolation
//! - Strict or lenient handling of non-alphabetic input
//! - Parallel batch stemming
//!
//! ```
//! assert_eq!(stemma::stem("Controlled"), "control");
//! assert_eq!(stemma::stem("caresses"), "caress");
//! ```

pub mod batch;
pub mod config;
pub mod error;
pub mod porter;
pub mod stemmer;

pub mod prelude {
    pub use crate::batch::BatchStemmer;
    pub use crate::config::{InputPolicy, StemmerConfig};
    pub use crate::error::{Result, StemmaError};
    pub use crate::porter::PorterStemmer;
    pub use crate::stemmer::Stemmer;
}

use crate::porter::PorterStemmer;
use crate::stemmer::Stemmer;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Stem one word with the default Porter stemmer.
///
/// The result is always lowercase. Empty input gives an empty string.
pub fn stem(word: &str) -> String {
    PorterStemmer::new().stem(word)
}
