use core::fmt::{self, Display};

/// A required argument was absent.
///
/// Returned by [`Outcome::try_succeeded`](crate::Outcome::try_succeeded) and
/// [`Outcome::try_failed`](crate::Outcome::try_failed) before any outcome is
/// built.
///
/// # Examples
///
/// ```
/// use scipio::Outcome;
///
/// let err = Outcome::<i32, &str>::try_failed(None).unwrap_err();
/// assert_eq!(err.argument(), "error");
/// assert_eq!(err.to_string(), "invalid argument: `error` must not be absent");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub struct InvalidArgument {
    argument: &'static str,
}

impl InvalidArgument {
    #[inline]
    pub const fn new(argument: &'static str) -> Self {
        Self { argument }
    }

    /// Name of the argument that was absent.
    #[inline]
    pub const fn argument(&self) -> &'static str {
        self.argument
    }
}

impl Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid argument: `{}` must not be absent", self.argument)
    }
}

impl core::error::Error for InvalidArgument {}
