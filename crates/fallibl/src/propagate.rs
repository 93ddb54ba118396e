//! Propagation: forward a failure to the caller, or abort on it.
//!
//! [`propagate!`](crate::propagate!) is the early-return form and the one to
//! reach for by default. [`must!`](crate::must!) is reserved for call sites
//! where a failure means the program itself is broken.

use std::io::Write;

use crate::outcome::Outcome;
use crate::policy::ErrorPolicy;

/// Prefix written before the error message when [`abort_with`] fires.
pub const ABORT_PREFIX: &str = "Aborted execution because: ";

/// Writes the error's message to stderr and aborts the process.
///
/// The write happens once, right before `std::process::abort`, so the
/// process exits with the platform's abort status (SIGABRT on Unix).
#[cold]
pub fn abort_with<E: ErrorPolicy>(error: &E) -> ! {
    tracing::error!(target: "fallibl::must", reason = error.message(), "aborting");
    let mut stderr = std::io::stderr().lock();
    // Nothing useful can be done if stderr is gone; abort regardless.
    let _ = writeln!(stderr, "{ABORT_PREFIX}{}", error.message());
    let _ = stderr.flush();
    std::process::abort()
}

/// Returns the success payload, or aborts via [`abort_with`].
pub fn must<T, E: ErrorPolicy>(outcome: Outcome<T, E>) -> T {
    match outcome {
        Outcome::Success(value) => value,
        Outcome::Failure(error) => abort_with(&error),
    }
}

/// Unwraps a success or returns the failure from the enclosing function.
///
/// The enclosing function must return an [`Outcome`] with the same error
/// type; its success type may differ from the expression's. The error is
/// moved, not rebuilt from its message.
///
/// # Examples
///
/// ```
/// use fallibl::{Outcome, make_error, propagate};
///
/// fn read_config() -> Outcome<String> {
///     make_error("config not found")
/// }
///
/// fn config_len() -> Outcome<usize> {
///     let config = propagate!(read_config());
///     Outcome::Success(config.len())
/// }
///
/// assert_eq!(config_len().error().message(), "config not found");
/// ```
#[macro_export]
macro_rules! propagate {
    ($expr:expr $(,)?) => {
        match $expr {
            $crate::Outcome::Success(value) => value,
            $crate::Outcome::Failure(error) => return $crate::forward_error(error),
        }
    };
}

/// Unwraps a success or aborts the process with the error's message.
///
/// Use only where a failure is an invariant violation; recoverable failures
/// belong with [`propagate!`](crate::propagate!).
///
/// # Examples
///
/// ```
/// use fallibl::{Outcome, must};
///
/// let port: Outcome<u16> = Outcome::Success(8080);
/// assert_eq!(must!(port), 8080);
/// ```
#[macro_export]
macro_rules! must {
    ($expr:expr $(,)?) => {
        $crate::must($expr)
    };
}
