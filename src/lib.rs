//! Keystone - Self-hosted class system with hierarchical logging
//!
//! This crate re-exports all layers of the Keystone system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: keystone_classes    — Namespaces, interfaces, declaration
//!                                engine, override dispatch, loading
//! Layer 1: keystone_logging    — Appenders, logger hierarchy, config
//! Layer 0: keystone_foundation — Core types (QualifiedName, Severity,
//!                                Value, Error)
//! ```

pub use keystone_classes as classes;
pub use keystone_foundation as foundation;
pub use keystone_logging as logging;
