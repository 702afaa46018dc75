//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `scipio::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Transform and Recover
//!
//! ```
//! use scipio::Outcome;
//!
//! let port = Outcome::of(|| "80800".parse::<u16>())
//!     .map(|port| Ok(port + 1))
//!     .recover(|_| Ok(8080));
//!
//! assert_eq!(port.get(), Ok(8080));
//! ```
//!
//! ## Finalize
//!
//! ```
//! use scipio::Outcome;
//!
//! let mut released = 0;
//! let outcome = Outcome::<&str, &str>::succeeded("resource used")
//!     .and_finally(|| {
//!         released += 1;
//!         Ok(())
//!     });
//!
//! assert_eq!(outcome.get(), Ok("resource used"));
//! assert_eq!(released, 1);
//! ```
//!
//! ## Fold
//!
//! ```
//! use scipio::{FoldError, Outcome};
//!
//! let summary = Outcome::<u32, &str>::failed("timeout")
//!     .fold(|n| Ok(format!("{n} rows")), |e| Ok(format!("error: {e}")));
//! assert_eq!(summary, Ok("error: timeout".to_string()));
//!
//! let escalated = Outcome::<u32, &str>::failed("timeout")
//!     .fold(|n| Ok(n), |_| Err("handler broke"));
//! assert_eq!(escalated, Err(FoldError::FailureHandlerFailed("handler broke")));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between Result, Option, and Outcome
pub mod convert;
/// Macros for capturing fallible code as an Outcome
pub mod macros;
/// The Outcome type, its operations, and iteration helpers
pub mod outcome;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Traits connecting Outcome with the standard containers
pub mod traits;
/// Errors reported by the library itself
pub mod types;

/// Tracing integration (requires `tracing` feature)
#[cfg(feature = "tracing")]
pub mod tracing_ext;

pub use convert::*;
pub use outcome::{partition_outcomes, Outcome, Partitioned};
pub use traits::*;
pub use types::{ErrorVec, FoldError, InvalidArgument};

#[cfg(feature = "std")]
pub use types::Panicked;
