//! The success-or-error sum type.

use serde::{Deserialize, Serialize};

use crate::policy::{ErrorPolicy, MessageError};

/// Zero-sized success payload for operations whose only outcome of interest
/// is whether they succeeded.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Empty;

/// Either a success payload `T` or an error payload `E`.
///
/// Exactly one variant is populated for the whole life of the value. Reading
/// the wrong side (`value()` on a failure, `error()` on a success) is a
/// programming bug and panics.
///
/// # Examples
///
/// ```
/// use fallibl::{Outcome, make_error};
///
/// fn parse_port(raw: &str) -> Outcome<u16> {
///     match raw.parse() {
///         Ok(port) => Outcome::Success(port),
///         Err(_) => make_error!("not a port: {}", raw),
///     }
/// }
///
/// assert_eq!(*parse_port("8080").value(), 8080);
/// assert_eq!(parse_port("http").error().message(), "not a port: http");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[must_use = "this `Outcome` may be a failure, which should be handled"]
pub enum Outcome<T, E = MessageError> {
    /// The operation completed normally.
    Success(T),

    /// The operation failed.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// Wraps a success payload.
    pub fn success(value: T) -> Self {
        Outcome::Success(value)
    }

    /// Wraps an error payload.
    pub fn failure(error: E) -> Self {
        Outcome::Failure(error)
    }

    /// Returns `true` if this holds a success payload.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` if this holds an error payload.
    pub fn is_failure(&self) -> bool {
        !self.is_success()
    }

    /// Boolean view of the outcome: `true` iff it is a success.
    pub fn as_bool(&self) -> bool {
        self.is_success()
    }

    /// Borrows both payloads.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Applies `op` to the success payload, leaving a failure untouched.
    pub fn map<U, F>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(op(value)),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Converts the error payload into another policy.
    pub fn map_err<F, O>(self, op: O) -> Outcome<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Outcome::Success(value) => Outcome::Success(value),
            Outcome::Failure(error) => Outcome::Failure(op(error)),
        }
    }

    /// Chains another fallible step onto a success.
    pub fn and_then<U, F>(self, op: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> Outcome<U, E>,
    {
        match self {
            Outcome::Success(value) => op(value),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Returns the success payload, or `default` on failure.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(_) => default,
        }
    }

    /// Returns the success payload, or computes one from the error.
    pub fn unwrap_or_else<F>(self, op: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => op(error),
        }
    }

    /// Returns the success payload as an `Option`, discarding any error.
    pub fn ok(self) -> Option<T> {
        match self {
            Outcome::Success(value) => Some(value),
            Outcome::Failure(_) => None,
        }
    }

    /// Returns the error payload as an `Option`, discarding any success.
    pub fn err(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(error) => Some(error),
        }
    }

    /// Converts into a standard library `Result`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(value) => Ok(value),
            Outcome::Failure(error) => Err(error),
        }
    }
}

impl<T, E: ErrorPolicy> Outcome<T, E> {
    /// Borrows the success payload.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    #[track_caller]
    #[allow(clippy::panic)]
    pub fn value(&self) -> &T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => {
                panic!("called `Outcome::value()` on a failure: {}", error.message())
            }
        }
    }

    /// Mutably borrows the success payload.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    #[track_caller]
    #[allow(clippy::panic)]
    pub fn value_mut(&mut self) -> &mut T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => panic!(
                "called `Outcome::value_mut()` on a failure: {}",
                error.message()
            ),
        }
    }

    /// Moves the success payload out.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure.
    #[track_caller]
    #[allow(clippy::panic)]
    pub fn into_value(self) -> T {
        match self {
            Outcome::Success(value) => value,
            Outcome::Failure(error) => panic!(
                "called `Outcome::into_value()` on a failure: {}",
                error.message()
            ),
        }
    }

    /// Borrows the error payload.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    #[track_caller]
    #[allow(clippy::panic)]
    pub fn error(&self) -> &E {
        match self {
            Outcome::Success(_) => panic!("called `Outcome::error()` on a success"),
            Outcome::Failure(error) => error,
        }
    }

    /// Mutably borrows the error payload.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    #[track_caller]
    #[allow(clippy::panic)]
    pub fn error_mut(&mut self) -> &mut E {
        match self {
            Outcome::Success(_) => panic!("called `Outcome::error_mut()` on a success"),
            Outcome::Failure(error) => error,
        }
    }

    /// Moves the error payload out.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    #[track_caller]
    #[allow(clippy::panic)]
    pub fn into_error(self) -> E {
        match self {
            Outcome::Success(_) => panic!("called `Outcome::into_error()` on a success"),
            Outcome::Failure(error) => error,
        }
    }

    /// Re-expresses a failure under a different success type, moving the error.
    ///
    /// This is how a function forwards a callee's error when its own success
    /// type differs from the callee's.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success: a success payload of type `T`
    /// cannot become one of type `U`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fallibl::{Outcome, make_error};
    ///
    /// fn load() -> Outcome<Vec<u8>> {
    ///     make_error("file missing")
    /// }
    ///
    /// fn size() -> Outcome<usize> {
    ///     let bytes = load();
    ///     if bytes.is_failure() {
    ///         return bytes.forward();
    ///     }
    ///     Outcome::Success(bytes.into_value().len())
    /// }
    ///
    /// assert_eq!(size().error().message(), "file missing");
    /// ```
    #[track_caller]
    #[allow(clippy::panic)]
    pub fn forward<U>(self) -> Outcome<U, E> {
        match self {
            Outcome::Success(_) => panic!("called `Outcome::forward()` on a success"),
            Outcome::Failure(error) => Outcome::Failure(error),
        }
    }

    /// Like [`forward`](Self::forward), but clones the error and leaves `self`
    /// intact.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a success.
    #[track_caller]
    #[allow(clippy::panic)]
    pub fn forward_cloned<U>(&self) -> Outcome<U, E> {
        match self {
            Outcome::Success(_) => panic!("called `Outcome::forward_cloned()` on a success"),
            Outcome::Failure(error) => Outcome::Failure(error.clone()),
        }
    }

    /// Overwrites the held success payload with `value`.
    ///
    /// # Panics
    ///
    /// Panics if the outcome is a failure; the success slot has to exist
    /// before it can be assigned.
    #[track_caller]
    #[allow(clippy::panic)]
    pub fn assign_value(&mut self, value: T) -> &mut Self {
        match self {
            Outcome::Success(slot) => *slot = value,
            Outcome::Failure(error) => panic!(
                "called `Outcome::assign_value()` on a failure: {}",
                error.message()
            ),
        }
        self
    }

    /// Replaces `self` with the error held by `other`, moving it.
    ///
    /// # Panics
    ///
    /// Panics if `other` is a success.
    #[track_caller]
    #[allow(clippy::panic)]
    pub fn assign_failure_from<U>(&mut self, other: Outcome<U, E>) -> &mut Self {
        match other {
            Outcome::Success(_) => {
                panic!("called `Outcome::assign_failure_from()` with a success")
            }
            Outcome::Failure(error) => *self = Outcome::Failure(error),
        }
        self
    }

    /// Replaces `self` with a clone of the error held by `other`.
    ///
    /// # Panics
    ///
    /// Panics if `other` is a success.
    #[track_caller]
    #[allow(clippy::panic)]
    pub fn assign_failure_from_cloned<U>(&mut self, other: &Outcome<U, E>) -> &mut Self {
        match other {
            Outcome::Success(_) => {
                panic!("called `Outcome::assign_failure_from_cloned()` with a success")
            }
            Outcome::Failure(error) => *self = Outcome::Failure(error.clone()),
        }
        self
    }

    /// Returns the success payload, or aborts the process with the error's
    /// message. Method form of [`must!`](crate::must!).
    pub fn must(self) -> T {
        crate::propagate::must(self)
    }
}

impl<T: Default, E> Default for Outcome<T, E> {
    fn default() -> Self {
        Outcome::Success(T::default())
    }
}

impl<T, E> From<T> for Outcome<T, E> {
    fn from(value: T) -> Self {
        Outcome::Success(value)
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => Outcome::Success(value),
            Err(error) => Outcome::Failure(error),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> From<&Outcome<T, E>> for bool {
    fn from(outcome: &Outcome<T, E>) -> Self {
        outcome.is_success()
    }
}
