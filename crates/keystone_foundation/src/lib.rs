//! Core types for the Keystone class system.
//!
//! This crate provides:
//! - [`QualifiedName`] - Dotted path names for classes, interfaces, and loggers
//! - [`Severity`] - Ordered log severities from fatal to trace
//! - [`Value`] - The dynamic value type for properties and call arguments
//! - [`Error`] - Structured error types with categorized kinds

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod name;
pub mod severity;
pub mod value;

pub use error::{Error, ErrorKind, Result};
pub use name::QualifiedName;
pub use severity::Severity;
pub use value::Value;
