//! The [`Outcome`] type and everything that operates on it.
//!
//! [`Outcome`] captures the result of a computation that may fail, either the
//! value it produced or the error that stopped it. Its operations replace
//! hand-written `match` ladders with a chain of transformations, recoveries
//! and inspections.
//!
//! # Key Components
//!
//! - [`Outcome`] - The two-variant type and its operations
//! - Iterator adapters and collection into a single outcome
//! - [`partition_outcomes`] for splitting values from errors
//!
//! # Examples
//!
//! ```
//! use scipio::outcome::Outcome;
//!
//! let total = Outcome::of(|| "40".parse::<i32>())
//!     .map(|n| Ok(n + 2))
//!     .recover(|_| Ok(0));
//! assert_eq!(total.get(), Ok(42));
//! ```
pub mod core;
pub mod iter;
#[cfg(feature = "std")]
mod unwind;

pub use self::core::*;
pub use self::iter::*;
