//! Error types for the Keystone system.
//!
//! Uses `thiserror` for ergonomic error definition. Declaration failures
//! carry the offending name or 1-based position in the superclass spec
//! list, replacing the string throws of older class frameworks with
//! structured, matchable kinds.

use thiserror::Error;

/// A convenient `Result` alias for Keystone operations.
pub type Result<T> = std::result::Result<T, Error>;

// =============================================================================
// Error
// =============================================================================

/// The main error type for Keystone operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Creates a missing-superclass declaration error.
    #[must_use]
    pub fn missing_superclass() -> Self {
        Self::new(ErrorKind::MissingSuperclass)
    }

    /// Creates an error for a superclass that does not derive from the
    /// root base class.
    #[must_use]
    pub fn superclass_not_base(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::SuperclassNotBase { name: name.into() })
    }

    /// Creates an error for a spec element that resolves to nothing.
    #[must_use]
    pub fn missing_spec_element(position: usize) -> Self {
        Self::new(ErrorKind::MissingSpecElement { position })
    }

    /// Creates an error for a spec element that is neither a class nor an
    /// interface.
    #[must_use]
    pub fn invalid_spec_element(position: usize) -> Self {
        Self::new(ErrorKind::InvalidSpecElement { position })
    }

    /// Creates a mixin constructor-conflict (diamond) error.
    #[must_use]
    pub fn constructor_conflict(position: usize) -> Self {
        Self::new(ErrorKind::ConstructorConflict { position })
    }

    /// Creates an interface non-conformance error.
    #[must_use]
    pub fn interface_not_satisfied(
        interface: impl Into<String>,
        method: impl Into<String>,
    ) -> Self {
        Self::new(ErrorKind::InterfaceNotSatisfied {
            interface: interface.into(),
            method: method.into(),
        })
    }

    /// Creates a namespace conflict error for a path segment already bound
    /// to a non-namespace.
    #[must_use]
    pub fn namespace_conflict(segment: impl Into<String>) -> Self {
        Self::new(ErrorKind::NamespaceConflict {
            segment: segment.into(),
        })
    }

    /// Creates an error for a reserved identifier used in a property bag.
    #[must_use]
    pub fn reserved_name(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::ReservedName { name: name.into() })
    }

    /// Wraps a declaration failure with the class being declared.
    #[must_use]
    pub fn declaration_failed(class: impl Into<String>, reason: Self) -> Self {
        Self::new(ErrorKind::DeclarationFailed {
            class: class.into(),
            reason: Box::new(reason),
        })
    }

    /// Creates an unknown-class error.
    #[must_use]
    pub fn unknown_class(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownClass { name: name.into() })
    }

    /// Creates an unknown-method error.
    #[must_use]
    pub fn unknown_method(class: impl Into<String>, method: impl Into<String>) -> Self {
        Self::new(ErrorKind::UnknownMethod {
            class: class.into(),
            method: method.into(),
        })
    }

    /// Creates a load failure for a class resource.
    #[must_use]
    pub fn load_failed(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(ErrorKind::LoadFailed {
            name: name.into(),
            reason: reason.into(),
        })
    }

    /// Returns true if this error arose from a class declaration.
    #[must_use]
    pub fn is_declaration(&self) -> bool {
        matches!(self.kind, ErrorKind::DeclarationFailed { .. })
    }
}

// =============================================================================
// ErrorKind
// =============================================================================

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// The superclass spec was empty or its head did not resolve.
    #[error("superclass cannot be null or undefined")]
    MissingSuperclass,

    /// The superclass does not derive from the root base class.
    #[error("superclass {name} must inherit from Object")]
    SuperclassNotBase {
        /// The offending superclass name.
        name: String,
    },

    /// A spec list element resolved to nothing.
    #[error("element {position} in superclass list does not exist")]
    MissingSpecElement {
        /// 1-based position in the spec list (the superclass is 1).
        position: usize,
    },

    /// A spec list element is neither a class nor an interface.
    #[error("element {position} in superclass list is not a class or interface")]
    InvalidSpecElement {
        /// 1-based position in the spec list.
        position: usize,
    },

    /// A mixin's constructors overlap the accumulated constructor chain.
    #[error("element {position} in superclass list is not allowed as a mixin class")]
    ConstructorConflict {
        /// 1-based position of the conflicting mixin.
        position: usize,
    },

    /// An attached interface requires a method the class does not provide.
    #[error("class must implement {interface}.{method}")]
    InterfaceNotSatisfied {
        /// The interface whose contract is unmet.
        interface: String,
        /// The missing method name.
        method: String,
    },

    /// A namespace path segment is already bound to a non-namespace.
    #[error("{segment} is not a valid namespace")]
    NamespaceConflict {
        /// The conflicting path segment.
        segment: String,
    },

    /// A property bag used a reserved identifier.
    #[error("{name} is a reserved identifier")]
    ReservedName {
        /// The reserved name.
        name: String,
    },

    /// A class declaration failed.
    #[error("declaration of class {class} failed: {reason}")]
    DeclarationFailed {
        /// The class being declared.
        class: String,
        /// The underlying failure.
        reason: Box<Error>,
    },

    /// A class lookup failed.
    #[error("unknown class: {name}")]
    UnknownClass {
        /// The unresolved class name.
        name: String,
    },

    /// A method lookup failed.
    #[error("unknown method: {class}.{method}")]
    UnknownMethod {
        /// The class that was searched.
        class: String,
        /// The method name that was not found.
        method: String,
    },

    /// A class resource could not be loaded.
    #[error("loading {name} failed: {reason}")]
    LoadFailed {
        /// The resource that failed to load.
        name: String,
        /// Why the load failed.
        reason: String,
    },
}

// =============================================================================
// Tests
// =============================================================================
