//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use scipio::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`attempt!`]
//! - **Types**: [`Outcome`], [`FoldError`]
//! - **Traits**: [`IntoOutcome`], [`OptionOutcomeExt`], [`WithError`]
//!
//! # Examples
//!
//! ```
//! use scipio::prelude::*;
//!
//! fn port(raw: &str) -> Outcome<u16, std::num::ParseIntError> {
//!     raw.trim().parse::<u16>().into_outcome()
//! }
//!
//! assert_eq!(port(" 8080 ").get(), Ok(8080));
//! assert_eq!(port("http").get_or(80), 80);
//! ```

// Macros
pub use crate::attempt;

// Core types
pub use crate::outcome::Outcome;
pub use crate::types::FoldError;

// Traits
pub use crate::traits::{IntoOutcome, OptionOutcomeExt, WithError};
