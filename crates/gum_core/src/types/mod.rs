//! Shared types for the uncertainty workspace.
//!
//! This module provides:
//! - `error`: Structured error types for input validation and internal contract violations
//!
//! # Re-exports
//!
//! [`UncertaintyError`] and [`InputField`] are re-exported at this level.

pub mod error;

pub use error::{InputField, UncertaintyError};
