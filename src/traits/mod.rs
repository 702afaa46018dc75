//! Traits connecting [`Outcome`](crate::Outcome) with the standard containers.
//!
//! - [`IntoOutcome`] / [`OptionOutcomeExt`]: Conversion from `Result` and `Option`
//! - [`WithError`]: Abstraction for types that carry remappable error variants
//!
//! # Examples
//!
//! ```
//! use scipio::traits::{IntoOutcome, WithError};
//! use scipio::Outcome;
//!
//! let outcome: Outcome<i32, u16> = Err(500).into_outcome();
//! assert_eq!(outcome.fmap_error(|code| code + 3).to_result(), Err(503));
//! ```

pub mod into_outcome;
pub mod with_error;

pub use into_outcome::{IntoOutcome, OptionOutcomeExt};
pub use with_error::WithError;
