use crate::outcome::core::Outcome;
use crate::types::Panicked;
use std::panic::{self, AssertUnwindSafe};

impl<V, E> Outcome<V, E>
where
    E: From<Panicked>,
{
    /// Runs `supplier`, capturing a panic as a failure.
    ///
    /// The panic payload is turned into a [`Panicked`] error and converted
    /// into `E`. The panic hook still runs, so the usual message is printed.
    ///
    /// # Examples
    ///
    /// ```
    /// use scipio::{Outcome, Panicked};
    ///
    /// let outcome: Outcome<i32, Panicked> = Outcome::of_unwind(|| 7);
    /// assert_eq!(outcome.get(), Ok(7));
    ///
    /// let outcome: Outcome<i32, Panicked> = Outcome::of_unwind(|| panic!("boom"));
    /// assert_eq!(outcome.get().unwrap_err().message(), "boom");
    /// ```
    pub fn of_unwind<F>(supplier: F) -> Self
    where
        F: FnOnce() -> V,
    {
        match panic::catch_unwind(AssertUnwindSafe(supplier)) {
            Ok(value) => Self::Succeeded(value),
            Err(payload) => Self::Failed(E::from(Panicked::from_payload(payload))),
        }
    }
}
