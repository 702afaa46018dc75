//! Conversion helpers between `Result`, `Option`, and [`Outcome`].
//!
//! These adapters make it straightforward to introduce `Outcome` at the edge
//! of existing code, or to hand results back to APIs that expect the core
//! types.
//!
//! # Examples
//!
//! ```
//! use scipio::convert::*;
//!
//! let result: Result<i32, &str> = Ok(42);
//! let outcome = result_to_outcome(result);
//! assert!(outcome.is_succeeded());
//!
//! let missing = option_to_outcome(None::<i32>, || "missing");
//! assert_eq!(outcome_to_result(missing), Err("missing"));
//! ```

use crate::outcome::Outcome;

/// Converts a `Result` into an `Outcome`.
///
/// # Returns
///
/// * `Outcome::Succeeded(value)` if result is `Ok`
/// * `Outcome::Failed(error)` if result is `Err`
///
/// # Examples
///
/// ```
/// use scipio::convert::result_to_outcome;
///
/// let err_result: Result<i32, &str> = Err("failed");
/// let outcome = result_to_outcome(err_result);
/// assert!(outcome.is_failed());
/// ```
#[inline]
pub fn result_to_outcome<V, E>(result: Result<V, E>) -> Outcome<V, E> {
    Outcome::from(result)
}

/// Converts an `Outcome` into a `Result`.
///
/// # Examples
///
/// ```
/// use scipio::{convert::outcome_to_result, Outcome};
///
/// let outcome = Outcome::<i32, &str>::succeeded(42);
/// assert_eq!(outcome_to_result(outcome), Ok(42));
/// ```
#[inline]
pub fn outcome_to_result<V, E>(outcome: Outcome<V, E>) -> Result<V, E> {
    outcome.get()
}

/// Converts an `Option` into an `Outcome`, building the error only for `None`.
///
/// # Examples
///
/// ```
/// use scipio::convert::option_to_outcome;
///
/// let outcome = option_to_outcome(Some("test"), || "empty optional");
/// assert_eq!(outcome.get(), Ok("test"));
/// ```
#[inline]
pub fn option_to_outcome<V, E, F>(option: Option<V>, missing: F) -> Outcome<V, E>
where
    F: FnOnce() -> E,
{
    Outcome::from_option(option, missing)
}

/// Converts an `Outcome` into an `Option`, discarding the error.
///
/// # Examples
///
/// ```
/// use scipio::{convert::outcome_to_option, Outcome};
///
/// let outcome = Outcome::<i32, &str>::failed("gone");
/// assert_eq!(outcome_to_option(outcome), None);
/// ```
#[inline]
pub fn outcome_to_option<V, E>(outcome: Outcome<V, E>) -> Option<V> {
    outcome.to_option()
}
