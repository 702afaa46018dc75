//! Macros for building outcomes from ordinary fallible code.
//!
//! - [`macro@crate::attempt`] - Runs a `Result`-producing expression or block
//!   inside a closure and captures it as an [`Outcome`](crate::Outcome), so `?`
//!   can be used freely inside the block.
//!
//! # Examples
//!
//! ```
//! use scipio::attempt;
//!
//! let sum = attempt!({
//!     let a: i32 = "40".parse()?;
//!     let b: i32 = "2".parse()?;
//!     Ok::<_, std::num::ParseIntError>(a + b)
//! });
//! assert_eq!(sum.get(), Ok(42));
//! ```

/// Wraps a `Result`-producing expression or block and captures it as an
/// [`Outcome`](crate::Outcome).
///
/// This is shorthand for `Outcome::of(|| expr)`. Because the expression runs
/// inside a closure, `?` returns from the closure and the error lands in the
/// `Failed` variant instead of leaving the surrounding function.
///
/// # Syntax
///
/// - `attempt!(expr)` - Wraps a single `Result`-producing expression
/// - `attempt!({ ... })` - Wraps a block that produces a `Result`
///
/// # Examples
///
/// ```rust
/// use scipio::attempt;
///
/// let parsed = attempt!("7".parse::<u8>());
/// assert_eq!(parsed.get(), Ok(7));
///
/// let failed = attempt!({
///     let n: u8 = "300".parse()?;
///     Ok::<_, std::num::ParseIntError>(n)
/// });
/// assert!(failed.is_failed());
/// ```
#[macro_export]
macro_rules! attempt {
    ($expr:expr $(,)?) => {
        $crate::Outcome::of(|| $expr)
    };
}
