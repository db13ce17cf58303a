//! The namespace tree: hierarchical name-to-binding resolution.
//!
//! Dotted paths resolve through nested namespace nodes to classes,
//! interfaces, or sub-namespaces. `resolve` never creates; `bind` walks and
//! creates intermediate namespaces, failing when a required segment is
//! already occupied by a non-namespace. Leaf bindings overwrite any prior
//! binding — redeclaration is last-write-wins, preserved from the observed
//! behavior of the system this models.

use std::rc::Rc;

use keystone_foundation::{Error, QualifiedName, Result};

use crate::class::ClassDescriptor;
use crate::interface::InterfaceDescriptor;

// =============================================================================
// Binding
// =============================================================================

/// What a namespace path segment is bound to.
#[derive(Clone, Debug)]
pub enum Binding {
    /// A namespace holding further bindings.
    Namespace(im::HashMap<String, Binding>),
    /// A declared class.
    Class(Rc<ClassDescriptor>),
    /// A declared interface.
    Interface(Rc<InterfaceDescriptor>),
}

impl Binding {
    /// Returns the class descriptor, if this binding is a class.
    #[must_use]
    pub fn as_class(&self) -> Option<&Rc<ClassDescriptor>> {
        match self {
            Self::Class(descriptor) => Some(descriptor),
            _ => None,
        }
    }

    /// Returns the interface descriptor, if this binding is an interface.
    #[must_use]
    pub fn as_interface(&self) -> Option<&Rc<InterfaceDescriptor>> {
        match self {
            Self::Interface(descriptor) => Some(descriptor),
            _ => None,
        }
    }

    /// Returns true when this binding is a namespace.
    #[must_use]
    pub fn is_namespace(&self) -> bool {
        matches!(self, Self::Namespace(_))
    }
}

// =============================================================================
// NamespaceTree
// =============================================================================

/// The root of the namespace hierarchy.
#[derive(Clone, Debug, Default)]
pub struct NamespaceTree {
    root: im::HashMap<String, Binding>,
}

impl NamespaceTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves a dotted path to its binding, or `None`. Never creates.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&Binding> {
        let name = QualifiedName::parse(path);
        let (last, intermediate) = name.segments.split_last()?;
        let mut current = &self.root;
        for segment in intermediate {
            match current.get(segment)? {
                Binding::Namespace(children) => current = children,
                _ => return None,
            }
        }
        current.get(last)
    }

    /// Binds a qualified name, creating intermediate namespaces as needed.
    ///
    /// # Errors
    ///
    /// Returns a namespace conflict when an intermediate segment is bound
    /// to something that is not a namespace. An existing leaf binding is
    /// overwritten without error.
    pub fn bind(&mut self, name: &QualifiedName, binding: Binding) -> Result<()> {
        if name.is_empty() {
            return Err(Error::namespace_conflict(""));
        }
        Self::bind_in(&mut self.root, &name.segments, binding)
    }

    fn bind_in(
        map: &mut im::HashMap<String, Binding>,
        segments: &[String],
        binding: Binding,
    ) -> Result<()> {
        let (head, rest) = match segments {
            [head, rest @ ..] => (head, rest),
            [] => return Ok(()),
        };
        if rest.is_empty() {
            map.insert(head.clone(), binding);
            return Ok(());
        }
        let child = map
            .entry(head.clone())
            .or_insert_with(|| Binding::Namespace(im::HashMap::new()));
        match child {
            Binding::Namespace(children) => Self::bind_in(children, rest, binding),
            _ => Err(Error::namespace_conflict(head.clone())),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
