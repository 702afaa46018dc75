use crate::outcome::core::Outcome;
use crate::types::ErrorVec;
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

pub struct Iter<'a, V> {
    inner: Option<&'a V>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

pub struct IntoIter<V> {
    inner: Option<V>,
}

impl<V> Iterator for IntoIter<V> {
    type Item = V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.take()
    }
}

impl<V, E> IntoIterator for Outcome<V, E> {
    type Item = V;
    type IntoIter = IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter { inner: self.to_option() }
    }
}

impl<'a, V, E> IntoIterator for &'a Outcome<V, E> {
    type Item = &'a V;
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<V, E> Outcome<V, E> {
    /// Iterates over the value, yielding it at most once.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter { inner: self.value() }
    }
}

/// Collects outcomes into a single outcome, stopping at the first failure.
///
/// Items after the first `Failed` are not pulled from the iterator.
///
/// # Examples
///
/// ```
/// use scipio::Outcome;
///
/// let all: Outcome<Vec<i32>, &str> =
///     vec![Outcome::succeeded(1), Outcome::succeeded(2)].into_iter().collect();
/// assert_eq!(all.get(), Ok(vec![1, 2]));
///
/// let first_failure: Outcome<Vec<i32>, &str> =
///     vec![Outcome::succeeded(1), Outcome::failed("a"), Outcome::failed("b")]
///         .into_iter()
///         .collect();
/// assert_eq!(first_failure.get(), Err("a"));
/// ```
impl<V, E, C> FromIterator<Outcome<V, E>> for Outcome<C, E>
where
    C: FromIterator<V>,
{
    fn from_iter<I: IntoIterator<Item = Outcome<V, E>>>(iter: I) -> Self {
        let collected: Result<C, E> = iter.into_iter().map(Outcome::get).collect();
        collected.into()
    }
}

/// Values and errors split out of a sequence of outcomes.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Partitioned<V, E> {
    pub successes: Vec<V>,
    pub failures: ErrorVec<E>,
}

impl<V, E> Partitioned<V, E> {
    /// Returns `true` if no outcome in the sequence failed.
    #[must_use]
    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }

    /// Converts into a single outcome that fails with every error collected.
    pub fn into_outcome(self) -> Outcome<Vec<V>, ErrorVec<E>> {
        if self.failures.is_empty() {
            Outcome::Succeeded(self.successes)
        } else {
            Outcome::Failed(self.failures)
        }
    }
}

/// Splits outcomes into their values and their errors without short-circuiting.
///
/// # Examples
///
/// ```
/// use scipio::{partition_outcomes, Outcome};
///
/// let split = partition_outcomes(vec![
///     Outcome::succeeded(1),
///     Outcome::failed("bad"),
///     Outcome::succeeded(3),
/// ]);
/// assert_eq!(split.successes, vec![1, 3]);
/// assert_eq!(split.failures.as_slice(), &["bad"]);
/// ```
pub fn partition_outcomes<V, E, I>(outcomes: I) -> Partitioned<V, E>
where
    I: IntoIterator<Item = Outcome<V, E>>,
{
    let mut successes = Vec::new();
    let mut failures = ErrorVec::new();

    for outcome in outcomes {
        match outcome {
            Outcome::Succeeded(value) => successes.push(value),
            Outcome::Failed(error) => failures.push(error),
        }
    }

    Partitioned { successes, failures }
}
