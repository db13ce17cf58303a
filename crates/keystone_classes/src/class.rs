//! Class descriptors, constructors, property bags, and instances.
//!
//! A [`ClassDescriptor`] is the runtime representation of a declared class:
//! one superclass, ordered mixins, attached interfaces, the flattened
//! method catalog, the chained constructor list, and the resolved property
//! table. Property tables and catalogs are persistent maps, so deriving a
//! class clones its superclass's tables by structural sharing — look-ups
//! effectively fall through to the superclass until a name is overridden.

use std::fmt;
use std::rc::Rc;

use keystone_foundation::{QualifiedName, Value};

use crate::catalog::{MethodBody, MethodCatalog};

/// A constructor implementation, invoked with the instance under
/// construction and the declaration-order argument list.
pub type ConstructorBody = Rc<dyn Fn(&mut Instance, &[Value])>;

// =============================================================================
// Constructor
// =============================================================================

/// One link of a constructor chain.
///
/// Constructor identity — used for the mixin disjointness invariant — is
/// the owning class's qualified name, not closure identity.
#[derive(Clone)]
pub struct Constructor {
    /// Qualified name of the class that supplied this constructor.
    pub owner: String,
    /// The constructor implementation.
    pub body: ConstructorBody,
}

impl fmt::Debug for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Constructor")
            .field("owner", &self.owner)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// ClassDescriptor
// =============================================================================

/// The runtime representation of a declared class.
#[derive(Clone, Debug)]
pub struct ClassDescriptor {
    /// The class's qualified name.
    pub name: QualifiedName,
    /// The superclass's qualified name; `None` only for the root base class.
    pub superclass: Option<String>,
    /// Mixin class names in declaration order.
    pub mixins: Vec<String>,
    /// Attached interface names (own plus mixin-contributed).
    pub interfaces: Vec<String>,
    /// The flattened, provenance-tagged method catalog.
    pub catalog: MethodCatalog,
    /// The constructor chain, oldest→newest.
    pub constructors: Vec<Constructor>,
    /// The resolved property table.
    pub properties: im::HashMap<String, Value>,
}

impl ClassDescriptor {
    /// Returns true when any constructor in the chain is owned by `owner`.
    #[must_use]
    pub fn has_constructor_from(&self, owner: &str) -> bool {
        self.constructors.iter().any(|ctor| ctor.owner == owner)
    }
}

// =============================================================================
// PropertyBag
// =============================================================================

/// Reserved identifiers that a property bag may not use.
///
/// These names carried framework machinery in the original prototype-based
/// encoding; they stay rejected so declarations written against it keep
/// their meaning.
pub const RESERVED_NAMES: [&str; 11] = [
    "class_name",
    "constructor",
    "constructors",
    "implements",
    "inherited",
    "init",
    "interfaces",
    "logger",
    "mixins",
    "namespace",
    "superclass",
];

/// Returns true when the identifier is reserved.
#[must_use]
pub fn is_reserved(name: &str) -> bool {
    RESERVED_NAMES.contains(&name)
}

/// The declaration input for a new class: data properties, methods, and an
/// optional constructor, enumerated explicitly instead of walked by
/// reflection.
#[derive(Clone, Default)]
pub struct PropertyBag {
    /// Data properties in declaration order.
    pub properties: Vec<(String, Value)>,
    /// Methods in declaration order.
    pub methods: Vec<(String, MethodBody)>,
    /// The class's own constructor, if any.
    pub constructor: Option<ConstructorBody>,
}

impl PropertyBag {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to add a data property.
    #[must_use]
    pub fn property(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.properties.push((name.into(), value.into()));
        self
    }

    /// Builder method to add a method.
    #[must_use]
    pub fn method(mut self, name: impl Into<String>, body: MethodBody) -> Self {
        self.methods.push((name.into(), body));
        self
    }

    /// Builder method to set the class's own constructor.
    #[must_use]
    pub fn constructor(mut self, body: ConstructorBody) -> Self {
        self.constructor = Some(body);
        self
    }

    /// Returns the first reserved identifier used by this bag, if any.
    #[must_use]
    pub fn reserved_name(&self) -> Option<&str> {
        self.properties
            .iter()
            .map(|(name, _)| name.as_str())
            .chain(self.methods.iter().map(|(name, _)| name.as_str()))
            .find(|name| is_reserved(name))
    }
}

impl fmt::Debug for PropertyBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let methods: Vec<&str> = self.methods.iter().map(|(name, _)| name.as_str()).collect();
        f.debug_struct("PropertyBag")
            .field("properties", &self.properties)
            .field("methods", &methods)
            .field("has_constructor", &self.constructor.is_some())
            .finish()
    }
}

// =============================================================================
// Instance
// =============================================================================

/// An instance of a declared class: a class reference plus a property
/// table seeded from the class's resolved table.
#[derive(Clone, Debug)]
pub struct Instance {
    class: String,
    properties: im::HashMap<String, Value>,
}

impl Instance {
    /// Creates an instance over a class's resolved property table. Callers
    /// normally go through the registry's `instantiate`, which also runs
    /// the constructor chain.
    #[must_use]
    pub fn new(class: impl Into<String>, properties: im::HashMap<String, Value>) -> Self {
        Self {
            class: class.into(),
            properties,
        }
    }

    /// The qualified name of the instance's class.
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Reads a property.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Writes a property.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.properties.insert(name.into(), value.into());
    }
}

// =============================================================================
// Tests
// =============================================================================
