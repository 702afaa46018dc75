//! Error types produced by the library itself.
//!
//! Caller errors travel inside [`Outcome`](crate::Outcome) untouched; the
//! types here describe the few cases the library reports on its own:
//!
//! - [`FoldError`] - `fold` could not produce a value because its handlers failed
//! - [`InvalidArgument`] - an absent payload was passed to an `Option`-based constructor
//! - `Panicked` - a panic captured by `Outcome::of_unwind` (requires `std`)
//!
//! # Examples
//!
//! ```
//! use scipio::{FoldError, Outcome};
//!
//! let escalated = Outcome::<i32, &str>::failed("lost")
//!     .fold(|n| Ok(n), |_| Err("still lost"));
//! assert_eq!(escalated, Err(FoldError::FailureHandlerFailed("still lost")));
//! ```
use smallvec::SmallVec;

pub mod fold_error;
pub mod invalid_argument;
#[cfg(feature = "std")]
pub mod panicked;

pub use fold_error::*;
pub use invalid_argument::*;
#[cfg(feature = "std")]
pub use panicked::*;

/// SmallVec-backed collection used for gathering errors.
///
/// Uses inline storage for a single element, which covers the common case
/// of at most one failure in a batch without touching the heap.
pub type ErrorVec<E> = SmallVec<[E; 1]>;
