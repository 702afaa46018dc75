use crate::types::{FoldError, InvalidArgument};
use core::fmt;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of a computation that may fail, as a composable value.
///
/// `Outcome<V, E>` holds either the value produced by a computation or the
/// error that stopped it. Operations consume the outcome and hand back a new
/// one (or the same one untouched), so fault handling reads as a pipeline
/// instead of nested `match` blocks.
///
/// Callbacks signal failure by returning `Err` (or a `Failed` outcome where
/// the callback already produces one). Every operation captures that failure
/// into the returned outcome; only [`get`](Outcome::get) hands the stored
/// error back to ordinary control flow.
///
/// Panics are not captured: a callback that panics unwinds through the
/// operation that called it. Use `Outcome::of_unwind` (feature `std`) to turn
/// a panicking computation into a `Failed` outcome.
///
/// # Type Parameters
///
/// * `V` - The success value type
/// * `E` - The error type
///
/// # Variants
///
/// * `Succeeded(V)` - The computation produced a value
/// * `Failed(E)` - The computation failed with an error
///
/// # Examples
///
/// ```
/// use scipio::Outcome;
///
/// let success = Outcome::<i32, &str>::succeeded(42);
/// assert_eq!(success.map(|n| Ok(n * 2)).get(), Ok(84));
///
/// let failure = Outcome::<i32, &str>::failed("boom");
/// assert_eq!(failure.map(|n| Ok(n * 2)).get(), Err("boom"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Outcome<V, E> {
    Succeeded(V),
    Failed(E),
}

impl<V, E> Outcome<V, E> {
    /// Runs `supplier` and captures what it produces.
    ///
    /// `Ok(value)` becomes `Succeeded(value)` and `Err(error)` becomes
    /// `Failed(error)`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scipio::Outcome;
    ///
    /// let parsed = Outcome::of(|| "42".parse::<i32>());
    /// assert_eq!(parsed.get(), Ok(42));
    ///
    /// let broken = Outcome::of(|| "forty-two".parse::<i32>());
    /// assert!(broken.is_failed());
    /// ```
    #[inline]
    pub fn of<F>(supplier: F) -> Self
    where
        F: FnOnce() -> Result<V, E>,
    {
        match supplier() {
            Ok(value) => Self::Succeeded(value),
            Err(error) => Self::Failed(error),
        }
    }

    /// Wraps a value that was already produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use scipio::Outcome;
    ///
    /// let outcome = Outcome::<&str, ()>::succeeded("ready");
    /// assert!(outcome.is_succeeded());
    /// ```
    #[inline]
    pub fn succeeded(value: V) -> Self {
        Self::Succeeded(value)
    }

    /// Wraps an error that was already produced.
    ///
    /// # Examples
    ///
    /// ```
    /// use scipio::Outcome;
    ///
    /// let outcome = Outcome::<(), &str>::failed("disk full");
    /// assert!(outcome.is_failed());
    /// ```
    #[inline]
    pub fn failed(error: E) -> Self {
        Self::Failed(error)
    }

    /// Wraps a value that may be absent, rejecting `None`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] when `value` is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scipio::Outcome;
    ///
    /// assert!(Outcome::<i32, ()>::try_succeeded(Some(1)).is_ok());
    /// assert!(Outcome::<i32, ()>::try_succeeded(None).is_err());
    /// ```
    #[inline]
    pub fn try_succeeded(value: Option<V>) -> Result<Self, InvalidArgument> {
        value
            .map(Self::Succeeded)
            .ok_or(InvalidArgument::new("value"))
    }

    /// Wraps an error that may be absent, rejecting `None`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] when `error` is `None`.
    #[inline]
    pub fn try_failed(error: Option<E>) -> Result<Self, InvalidArgument> {
        error
            .map(Self::Failed)
            .ok_or(InvalidArgument::new("error"))
    }

    /// Converts an `Option`, building the error lazily when it is `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scipio::Outcome;
    ///
    /// let empty: Option<&str> = None;
    /// let outcome = Outcome::from_option(empty, || "empty optional");
    /// assert_eq!(outcome.get(), Err("empty optional"));
    /// ```
    #[inline]
    pub fn from_option<F>(value: Option<V>, missing: F) -> Self
    where
        F: FnOnce() -> E,
    {
        match value {
            Some(value) => Self::Succeeded(value),
            None => Self::Failed(missing()),
        }
    }

    /// Returns `true` if the outcome holds a value.
    #[must_use]
    #[inline]
    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded(_))
    }

    /// Returns `true` if the outcome holds an error.
    #[must_use]
    #[inline]
    pub fn is_failed(&self) -> bool {
        !self.is_succeeded()
    }

    /// Hands the value back, or the stored error as `Err`.
    ///
    /// This is the only operation that returns the error to ordinary control
    /// flow, so it pairs naturally with `?`.
    ///
    /// # Errors
    ///
    /// Returns the stored error when the outcome is `Failed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scipio::Outcome;
    ///
    /// fn doubled(input: &str) -> Result<i32, std::num::ParseIntError> {
    ///     let n = Outcome::of(|| input.parse::<i32>()).get()?;
    ///     Ok(n * 2)
    /// }
    ///
    /// assert_eq!(doubled("21"), Ok(42));
    /// assert!(doubled("x").is_err());
    /// ```
    #[inline]
    pub fn get(self) -> Result<V, E> {
        match self {
            Self::Succeeded(value) => Ok(value),
            Self::Failed(error) => Err(error),
        }
    }

    /// Returns the value, or `default` when failed.
    #[must_use]
    #[inline]
    pub fn get_or(self, default: V) -> V {
        match self {
            Self::Succeeded(value) => value,
            Self::Failed(_) => default,
        }
    }

    /// Returns the value, or computes one from the error when failed.
    #[must_use]
    #[inline]
    pub fn get_or_else<F>(self, f: F) -> V
    where
        F: FnOnce(E) -> V,
    {
        match self {
            Self::Succeeded(value) => value,
            Self::Failed(error) => f(error),
        }
    }

    /// Keeps the value and drops the error.
    ///
    /// Any value counts as present, including empty collections.
    ///
    /// # Examples
    ///
    /// ```
    /// use scipio::Outcome;
    ///
    /// assert_eq!(Outcome::<i32, &str>::succeeded(7).to_option(), Some(7));
    /// assert_eq!(Outcome::<i32, &str>::failed("x").to_option(), None);
    /// ```
    #[must_use]
    #[inline]
    pub fn to_option(self) -> Option<V> {
        match self {
            Self::Succeeded(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    /// Borrows the value, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&V> {
        match self {
            Self::Succeeded(value) => Some(value),
            Self::Failed(_) => None,
        }
    }

    /// Borrows the error, if any.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Succeeded(_) => None,
            Self::Failed(error) => Some(error),
        }
    }

    /// Extracts the error, if any.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Succeeded(_) => None,
            Self::Failed(error) => Some(error),
        }
    }

    /// Converts `&Outcome<V, E>` into `Outcome<&V, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Outcome<&V, &E> {
        match self {
            Self::Succeeded(value) => Outcome::Succeeded(value),
            Self::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Transforms the value with a function that may fail.
    ///
    /// On `Succeeded`, `f` runs once: `Ok(r)` yields `Succeeded(r)` and
    /// `Err(e)` yields `Failed(e)`. On `Failed`, `f` is never invoked and the
    /// same error is carried over.
    ///
    /// # Examples
    ///
    /// ```
    /// use scipio::Outcome;
    ///
    /// let halved = Outcome::<i32, &str>::succeeded(10)
    ///     .map(|n| if n % 2 == 0 { Ok(n / 2) } else { Err("odd") });
    /// assert_eq!(halved.get(), Ok(5));
    ///
    /// let odd = Outcome::<i32, &str>::succeeded(3)
    ///     .map(|n| if n % 2 == 0 { Ok(n / 2) } else { Err("odd") });
    /// assert_eq!(odd.get(), Err("odd"));
    /// ```
    #[inline]
    pub fn map<R, F>(self, f: F) -> Outcome<R, E>
    where
        F: FnOnce(V) -> Result<R, E>,
    {
        match self {
            Self::Succeeded(value) => Outcome::of(|| f(value)),
            Self::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Chains a computation that produces its own outcome.
    ///
    /// On `Succeeded`, returns whatever `f` returns. On `Failed`, the failure
    /// is propagated and `f` is not invoked.
    ///
    /// # Examples
    ///
    /// ```
    /// use scipio::Outcome;
    ///
    /// let n = Outcome::succeeded("42")
    ///     .flat_map(|s| Outcome::of(|| s.parse::<i32>()))
    ///     .map(|n| Ok(n * 2));
    /// assert_eq!(n.get(), Ok(84));
    /// ```
    #[inline]
    pub fn flat_map<R, F>(self, f: F) -> Outcome<R, E>
    where
        F: FnOnce(V) -> Outcome<R, E>,
    {
        match self {
            Self::Succeeded(value) => f(value),
            Self::Failed(error) => Outcome::Failed(error),
        }
    }

    /// Turns a failure back into a value with a function that may fail.
    ///
    /// On `Failed`, `f` receives the error: `Ok(v)` yields `Succeeded(v)` and
    /// `Err(e)` yields `Failed(e)`. On `Succeeded`, `self` is returned untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use scipio::Outcome;
    ///
    /// let recovered = Outcome::<i32, &str>::failed("x").recover(|_| Ok(-1));
    /// assert_eq!(recovered.get(), Ok(-1));
    /// ```
    #[inline]
    pub fn recover<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> Result<V, E>,
    {
        match self {
            Self::Succeeded(_) => self,
            Self::Failed(error) => Self::of(|| f(error)),
        }
    }

    /// Replaces a failure with the outcome produced by `f`.
    ///
    /// On `Succeeded`, `self` is returned untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use scipio::Outcome;
    ///
    /// let fallback = Outcome::<i32, &str>::failed("primary down")
    ///     .recover_with(|_| Outcome::succeeded(7));
    /// assert_eq!(fallback.get(), Ok(7));
    /// ```
    #[inline]
    pub fn recover_with<F>(self, f: F) -> Self
    where
        F: FnOnce(E) -> Outcome<V, E>,
    {
        match self {
            Self::Succeeded(_) => self,
            Self::Failed(error) => f(error),
        }
    }

    /// Runs `action` regardless of the variant, like a `finally` block.
    ///
    /// When `action` returns `Ok(())`, `self` comes back untouched. When it
    /// returns `Err(e)`, the result is `Failed(e)` and the previous state is
    /// discarded, even if it was a different failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use scipio::Outcome;
    ///
    /// let mut closed = false;
    /// let outcome = Outcome::<i32, &str>::succeeded(1).and_finally(|| {
    ///     closed = true;
    ///     Ok(())
    /// });
    /// assert!(closed);
    /// assert_eq!(outcome.get(), Ok(1));
    ///
    /// let outcome = Outcome::<i32, &str>::succeeded(1).and_finally(|| Err("side"));
    /// assert_eq!(outcome.get(), Err("side"));
    /// ```
    #[inline]
    pub fn and_finally<F>(self, action: F) -> Self
    where
        F: FnOnce() -> Result<(), E>,
    {
        match action() {
            Ok(()) => self,
            Err(error) => Self::Failed(error),
        }
    }

    /// Inspects the value without consuming it.
    ///
    /// If `consumer` returns `Err(e)` the result is `Failed(e)`. Failed
    /// outcomes pass through without calling `consumer`.
    ///
    /// # Examples
    ///
    /// ```
    /// use scipio::Outcome;
    ///
    /// let mut seen = None;
    /// let outcome = Outcome::<i32, &str>::succeeded(3).peek_success(|n| {
    ///     seen = Some(*n);
    ///     Ok(())
    /// });
    /// assert_eq!(seen, Some(3));
    /// assert!(outcome.is_succeeded());
    /// ```
    #[inline]
    pub fn peek_success<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&V) -> Result<(), E>,
    {
        let inspected = match &self {
            Self::Succeeded(value) => consumer(value),
            Self::Failed(_) => Ok(()),
        };
        self.and_finally(|| inspected)
    }

    /// Inspects the error without consuming it.
    ///
    /// If `consumer` returns `Err(e)` the result is a new `Failed(e)` in place
    /// of the original error. Succeeded outcomes pass through without calling
    /// `consumer`.
    #[inline]
    pub fn peek_failure<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&E) -> Result<(), E>,
    {
        let inspected = match &self {
            Self::Succeeded(_) => Ok(()),
            Self::Failed(error) => consumer(error),
        };
        self.and_finally(|| inspected)
    }

    /// Inspects whichever side is present.
    ///
    /// Exactly one of the two consumers runs, with the same capture rule as
    /// [`peek_success`](Outcome::peek_success) and
    /// [`peek_failure`](Outcome::peek_failure).
    #[inline]
    pub fn peek<S, F>(self, on_success: S, on_failure: F) -> Self
    where
        S: FnOnce(&V) -> Result<(), E>,
        F: FnOnce(&E) -> Result<(), E>,
    {
        let inspected = match &self {
            Self::Succeeded(value) => on_success(value),
            Self::Failed(error) => on_failure(error),
        };
        self.and_finally(|| inspected)
    }

    /// Collapses both variants into a single value.
    ///
    /// On `Succeeded`, `on_success` runs first; if it fails, its error is
    /// handed to `on_failure`. On `Failed`, `on_failure` runs directly. When
    /// the last handler to run also fails, the double failure cannot be
    /// represented as a plain value and escalates as a [`FoldError`].
    ///
    /// # Errors
    ///
    /// * [`FoldError::FailureHandlerFailed`] - the outcome was `Failed` and
    ///   `on_failure` failed
    /// * [`FoldError::BothHandlersFailed`] - the outcome was `Succeeded` and
    ///   both handlers failed
    ///
    /// # Examples
    ///
    /// ```
    /// use scipio::Outcome;
    ///
    /// let label = Outcome::<i32, &str>::succeeded(5)
    ///     .fold(|n| Ok(format!("S:{n}")), |e| Ok(format!("F:{e}")));
    /// assert_eq!(label.unwrap(), "S:5");
    ///
    /// let label = Outcome::<i32, &str>::failed("e")
    ///     .fold(|n| Ok(format!("S:{n}")), |e| Ok(format!("F:{e}")));
    /// assert_eq!(label.unwrap(), "F:e");
    /// ```
    pub fn fold<R, S, F>(self, on_success: S, on_failure: F) -> Result<R, FoldError<E>>
    where
        S: FnOnce(V) -> Result<R, E>,
        F: FnOnce(E) -> Result<R, E>,
    {
        match self {
            Self::Succeeded(value) => match on_success(value) {
                Ok(result) => Ok(result),
                Err(error) => on_failure(error).map_err(FoldError::BothHandlersFailed),
            },
            Self::Failed(error) => on_failure(error).map_err(FoldError::FailureHandlerFailed),
        }
    }

    /// Collapses both variants with handlers that cannot fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use scipio::Outcome;
    ///
    /// let code = Outcome::<u16, &str>::failed("timeout").fold_total(|c| c, |_| 504);
    /// assert_eq!(code, 504);
    /// ```
    #[inline]
    pub fn fold_total<R, S, F>(self, on_success: S, on_failure: F) -> R
    where
        S: FnOnce(V) -> R,
        F: FnOnce(E) -> R,
    {
        match self {
            Self::Succeeded(value) => on_success(value),
            Self::Failed(error) => on_failure(error),
        }
    }

    /// Maps the error while leaving a value untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use scipio::Outcome;
    ///
    /// let outcome = Outcome::<i32, u16>::failed(404).map_failure(|code| format!("HTTP {code}"));
    /// assert_eq!(outcome.get(), Err("HTTP 404".to_string()));
    /// ```
    #[inline]
    pub fn map_failure<G, F>(self, f: F) -> Outcome<V, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Succeeded(value) => Outcome::Succeeded(value),
            Self::Failed(error) => Outcome::Failed(f(error)),
        }
    }
}

impl<V, E> Outcome<Outcome<V, E>, E> {
    /// Removes one level of nesting.
    #[inline]
    pub fn flatten(self) -> Outcome<V, E> {
        self.flat_map(|inner| inner)
    }
}

impl<V, E> From<Result<V, E>> for Outcome<V, E> {
    #[inline]
    fn from(result: Result<V, E>) -> Self {
        Self::of(|| result)
    }
}

impl<V, E> From<Outcome<V, E>> for Result<V, E> {
    #[inline]
    fn from(outcome: Outcome<V, E>) -> Self {
        outcome.get()
    }
}

impl<V: fmt::Display, E: fmt::Display> fmt::Display for Outcome<V, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Succeeded(value) => write!(f, "Succeeded({value})"),
            Self::Failed(error) => write!(f, "Failed({error})"),
        }
    }
}
