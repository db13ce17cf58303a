//! Class declaration engine for Keystone.
//!
//! This crate provides:
//! - [`NamespaceTree`] - Hierarchical name-to-binding resolution
//! - [`InterfaceDescriptor`] - Named method-name contracts
//! - [`MethodCatalog`] - Provenance-ordered method lists powering override
//!   dispatch
//! - [`Registry`] - The declaration engine: validates superclass/mixin
//!   specs, builds class descriptors, chains constructors, checks interface
//!   conformance, and registers classes into the namespace tree
//! - [`Call`] - The execution context handed to method bodies, exposing
//!   `call_overridden` and the per-instance logging mixin
//!
//! The registry is a single, explicitly passed owner of the process-wide
//! namespace/class/interface/logger state; there are no ambient globals.
//! All declaration happens sequentially during initialization and the
//! registries are append-only afterwards.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod catalog;
pub mod class;
pub mod dispatch;
pub mod interface;
pub mod loader;
pub mod namespace;
pub mod registry;

pub use catalog::{CatalogEntry, MethodBody, MethodCatalog, MethodToken, Provenance};
pub use class::{ClassDescriptor, Constructor, ConstructorBody, Instance, PropertyBag};
pub use dispatch::Call;
pub use interface::InterfaceDescriptor;
pub use loader::ClassSource;
pub use namespace::{Binding, NamespaceTree};
pub use registry::{Registry, BASE_CLASS, ENGINE_LOGGER};
