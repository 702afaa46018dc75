//! Tracing integration for scipio.
//!
//! This module records failed outcomes as `tracing` events, tagged with the
//! span they happened in. The outcome itself passes through untouched, so the
//! calls can sit anywhere in a chain.
//!
//! # Feature Flag
//!
//! Requires the `tracing` feature:
//!
//! ```toml
//! [dependencies]
//! scipio = { version = "0.1", features = ["tracing"] }
//! ```

use core::fmt::{Debug, Display};

use tracing::Span;

use crate::outcome::Outcome;

/// Extension trait for emitting `tracing` events from an [`Outcome`].
///
/// # Example
///
/// ```rust,ignore
/// use scipio::tracing_ext::OutcomeSpanExt;
/// use scipio::Outcome;
/// use tracing::info_span;
///
/// let span = info_span!("load_user", user_id = 7);
/// let _enter = span.enter();
///
/// let user = Outcome::of(|| repository.find(7))
///     .trace_failure()
///     .recover(|_| Ok(User::guest()));
/// ```
pub trait OutcomeSpanExt: Sized {
    /// Emits a `WARN` event in the current span if the outcome failed.
    fn trace_failure(self) -> Self {
        self.trace_failure_in(&Span::current())
    }

    /// Emits a `WARN` event in `span` if the outcome failed.
    fn trace_failure_in(self, span: &Span) -> Self;

    /// Emits a `DEBUG` event for a value or a `WARN` event for an error,
    /// labelled with `operation`.
    fn trace_outcome(self, operation: &'static str) -> Self;
}

impl<V, E> OutcomeSpanExt for Outcome<V, E>
where
    V: Debug,
    E: Display,
{
    fn trace_failure_in(self, span: &Span) -> Self {
        if let Outcome::Failed(error) = &self {
            let name = span_name(span);
            span.in_scope(|| tracing::warn!(span_name = name, error = %error, "outcome failed"));
        }
        self
    }

    fn trace_outcome(self, operation: &'static str) -> Self {
        match &self {
            Outcome::Succeeded(value) => {
                tracing::debug!(operation, value = ?value, "outcome succeeded")
            }
            Outcome::Failed(error) => {
                tracing::warn!(operation, error = %error, "outcome failed")
            }
        }
        self
    }
}

/// Extracts the span name, falling back for disabled spans.
fn span_name(span: &Span) -> &'static str {
    span.metadata().map(|m| m.name()).unwrap_or("unknown")
}
