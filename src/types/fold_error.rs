use core::fmt::{self, Display};

/// Escalation raised by [`Outcome::fold`](crate::Outcome::fold).
///
/// `fold` promises a plain value, so when the handler responsible for the
/// current variant fails there is nothing left to return. The variant records
/// which situation occurred; both carry the error of the last handler that ran.
///
/// # Examples
///
/// ```
/// use scipio::{FoldError, Outcome};
///
/// let err = Outcome::<i32, &str>::succeeded(1)
///     .fold(|_| Err::<i32, _>("first"), |_| Err("second"))
///     .unwrap_err();
///
/// assert!(err.is_both_handlers_failed());
/// assert_eq!(err.into_inner(), "second");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum FoldError<E> {
    /// The outcome was `Failed` and the failure handler failed as well.
    FailureHandlerFailed(E),
    /// The outcome was `Succeeded`, the success handler failed, and the
    /// failure handler then failed on that error.
    BothHandlersFailed(E),
}

impl<E> FoldError<E> {
    /// Returns a reference to the error of the last handler that ran.
    #[inline]
    pub const fn inner(&self) -> &E {
        match self {
            Self::FailureHandlerFailed(error) | Self::BothHandlersFailed(error) => error,
        }
    }

    /// Consumes the escalation, returning the error of the last handler that ran.
    #[inline]
    pub fn into_inner(self) -> E {
        match self {
            Self::FailureHandlerFailed(error) | Self::BothHandlersFailed(error) => error,
        }
    }

    #[must_use]
    #[inline]
    pub const fn is_failure_handler_failed(&self) -> bool {
        matches!(self, Self::FailureHandlerFailed(_))
    }

    #[must_use]
    #[inline]
    pub const fn is_both_handlers_failed(&self) -> bool {
        matches!(self, Self::BothHandlersFailed(_))
    }
}

impl<E: Display> Display for FoldError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FailureHandlerFailed(error) => write!(f, "failure handler failed: {error}"),
            Self::BothHandlersFailed(error) => {
                write!(f, "both success and failure handlers failed: {error}")
            }
        }
    }
}

impl<E> core::error::Error for FoldError<E>
where
    E: core::error::Error + 'static,
{
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        Some(self.inner())
    }
}
