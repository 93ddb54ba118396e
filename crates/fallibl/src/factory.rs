//! Constructors for failing outcomes.
//!
//! Each factory is generic over the success type, so a function returns
//! `make_error(...)` whatever it declares as its own success payload. With
//! `T = Empty` the result is the plain "failed, nothing else" outcome.

use crate::outcome::Outcome;
use crate::policy::ErrorPolicy;

/// Builds a failing outcome from a message.
///
/// # Examples
///
/// ```
/// use fallibl::{Empty, Outcome, make_error};
///
/// let result: Outcome<Empty> = make_error("error");
/// assert!(result.is_failure());
/// assert_eq!(result.error().message(), "error");
/// ```
pub fn make_error<T, E, S>(message: S) -> Outcome<T, E>
where
    E: ErrorPolicy,
    S: Into<String>,
{
    let reason = message.into();
    tracing::debug!(target: "fallibl::factory", %reason, "constructing failure");
    Outcome::Failure(E::from_message(reason))
}

/// Re-wraps an existing error, moving it.
///
/// Used to forward an error taken out of another outcome, whatever that
/// outcome's success type was.
pub fn forward_error<T, E>(error: E) -> Outcome<T, E>
where
    E: ErrorPolicy,
{
    Outcome::Failure(error)
}

/// Re-wraps a clone of an existing error, leaving the original in place.
pub fn forward_error_cloned<T, E>(error: &E) -> Outcome<T, E>
where
    E: ErrorPolicy,
{
    forward_error(error.clone())
}

/// Builds a failing outcome from a format string and arguments.
///
/// With arguments, the template goes through [`format!`], so placeholders
/// and arguments are checked at compile time. A lone message (literal or
/// expression) is used as written: braces in it are not placeholders.
///
/// # Examples
///
/// ```
/// use fallibl::{Outcome, make_error};
///
/// let result: Outcome<String> = make_error!("first error {}", 69);
/// assert_eq!(result.error().message(), "first error 69");
/// ```
#[macro_export]
macro_rules! make_error {
    ($template:literal, $($arg:tt)+) => {
        $crate::make_error(::std::format!($template, $($arg)+))
    };
    ($message:expr $(,)?) => {
        $crate::make_error($message)
    };
}
