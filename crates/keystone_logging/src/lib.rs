//! Hierarchical logging facility for Keystone.
//!
//! This crate provides:
//! - [`Appender`] - Named output sinks (console, alert, custom writers)
//! - [`LogConfig`] - Declarative configuration for appenders and loggers
//! - [`LoggerHierarchy`] - Dotted-name logger tree with additive sink
//!   merging, severity fast paths, and degraded-state configuration loading
//!
//! Loggers are configured once, during program initialization, and resolved
//! lazily the first time each dotted name is requested. A resolved logger
//! carries its effective sink list and maximum accepted severity; a log call
//! above that maximum performs no formatting and touches no appender.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod appender;
pub mod config;
pub mod hierarchy;

pub use appender::{Appender, AppenderKind, CustomWriter};
pub use config::{AppenderConfig, LogConfig, LoggerConfig, SinkConfig};
pub use hierarchy::{ConfigWarning, LoggerHierarchy, ResolvedLogger, SinkSpec};
