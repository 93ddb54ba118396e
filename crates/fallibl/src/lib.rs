#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! Fallibl Core
//!
//! A success-or-error outcome type, a small contract for error types, and
//! two propagation forms: forward the failure to the caller, or abort.
//!
//! # Modules
//!
//! - [`outcome`]: the [`Outcome`] sum type and its conversions
//! - [`policy`]: the [`ErrorPolicy`] contract and [`MessageError`]
//! - [`factory`]: constructors for failing outcomes
//! - [`propagate`]: `propagate!`, `must!` and the abort path

pub mod factory;
pub mod outcome;
pub mod policy;
pub mod propagate;

mod proptests;

// Re-exports for convenience
pub use factory::{forward_error, forward_error_cloned, make_error};
pub use outcome::{Empty, Outcome};
pub use policy::{ErrorPolicy, MessageError};
pub use propagate::{abort_with, must};
