//! Extension traits for moving standard containers into [`Outcome`].
//!
//! # Examples
//!
//! ```
//! use scipio::traits::{IntoOutcome, OptionOutcomeExt};
//!
//! let parsed = "12".parse::<u8>().into_outcome();
//! assert!(parsed.is_succeeded());
//!
//! let missing = None::<u8>.into_outcome_or("no value");
//! assert_eq!(missing.get(), Err("no value"));
//! ```

use crate::outcome::Outcome;

/// Converts a `Result` into an [`Outcome`] at the end of a method chain.
pub trait IntoOutcome<V, E> {
    /// `Ok` becomes `Succeeded`, `Err` becomes `Failed`.
    fn into_outcome(self) -> Outcome<V, E>;
}

impl<V, E> IntoOutcome<V, E> for Result<V, E> {
    #[inline]
    fn into_outcome(self) -> Outcome<V, E> {
        Outcome::from(self)
    }
}

/// Converts an `Option` into an [`Outcome`], supplying the error for `None`.
pub trait OptionOutcomeExt<V> {
    /// Uses `error` when the option is empty.
    fn into_outcome_or<E>(self, error: E) -> Outcome<V, E>;

    /// Builds the error lazily; `f` only runs when the option is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use scipio::traits::OptionOutcomeExt;
    ///
    /// let mut built = false;
    /// let outcome = Some(3).into_outcome_or_else(|| {
    ///     built = true;
    ///     "unused"
    /// });
    /// assert!(!built);
    /// assert_eq!(outcome.get(), Ok(3));
    /// ```
    fn into_outcome_or_else<E, F>(self, f: F) -> Outcome<V, E>
    where
        F: FnOnce() -> E;
}

impl<V> OptionOutcomeExt<V> for Option<V> {
    #[inline]
    fn into_outcome_or<E>(self, error: E) -> Outcome<V, E> {
        Outcome::from_option(self, || error)
    }

    #[inline]
    fn into_outcome_or_else<E, F>(self, f: F) -> Outcome<V, E>
    where
        F: FnOnce() -> E,
    {
        Outcome::from_option(self, f)
    }
}
