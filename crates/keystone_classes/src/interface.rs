//! Interface descriptors: named method-name contracts.
//!
//! An interface is purely declarative — a qualified name plus the method
//! names a conforming class must provide. Conformance is checked once, at
//! class declaration time; interfaces have no runtime behavior of their
//! own and are immutable once declared.

use keystone_foundation::QualifiedName;

/// A named list of required method names.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InterfaceDescriptor {
    /// The interface's qualified name.
    pub name: QualifiedName,
    /// The method names a conforming class must provide.
    pub methods: Vec<String>,
}

impl InterfaceDescriptor {
    /// Creates an interface descriptor.
    #[must_use]
    pub fn new(name: QualifiedName, methods: Vec<String>) -> Self {
        Self { name, methods }
    }

    /// Returns true when the interface requires the given method.
    #[must_use]
    pub fn requires(&self, method: &str) -> bool {
        self.methods.iter().any(|m| m == method)
    }
}
