use std::any::Any;
use std::borrow::Cow;
use std::boxed::Box;
use std::fmt::{self, Display};

/// A panic captured by [`Outcome::of_unwind`](crate::Outcome::of_unwind).
///
/// Only the panic message survives; payloads that are neither `&str` nor
/// `String` are reported with a placeholder message.
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
pub struct Panicked {
    message: Cow<'static, str>,
}

impl Panicked {
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self { message: message.into() }
    }

    pub(crate) fn from_payload(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<&'static str>() {
            Ok(message) => Cow::Borrowed(*message),
            Err(payload) => match payload.downcast::<String>() {
                Ok(message) => Cow::Owned(*message),
                Err(_) => Cow::Borrowed("non-string panic payload"),
            },
        };
        Self { message }
    }

    #[inline]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl Display for Panicked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "panicked: {}", self.message)
    }
}

impl std::error::Error for Panicked {}
