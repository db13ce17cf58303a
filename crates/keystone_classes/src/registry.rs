//! The class registry and declaration engine.
//!
//! The [`Registry`] is the single owner of the process-wide namespace,
//! class, interface, and logger state. It is created once at startup and
//! passed explicitly into declaration and lookup operations.
//!
//! `declare` validates a superclass/mixin/interface specification, builds
//! the new class descriptor (flattened catalog, chained constructors,
//! delegated property table), checks interface conformance, and registers
//! the class — or fails fast, aborting only that declaration. Failures are
//! wrapped with the class name, logged at error severity through the
//! engine logger, and propagated to the caller; previously registered
//! classes are never affected.

use std::rc::Rc;

use keystone_foundation::{Error, QualifiedName, Result, Severity, Value};
use keystone_logging::{LogConfig, LoggerHierarchy};

use crate::catalog::{MethodCatalog, Provenance};
use crate::class::{ClassDescriptor, Constructor, Instance, PropertyBag};
use crate::interface::InterfaceDescriptor;
use crate::namespace::{Binding, NamespaceTree};

/// The qualified name of the seeded root base class.
pub const BASE_CLASS: &str = "Object";

/// The logger name the declaration engine itself logs through.
pub const ENGINE_LOGGER: &str = "keystone";

// =============================================================================
// Registry
// =============================================================================

/// The process-wide namespace/class/interface/logger registry.
#[derive(Debug)]
pub struct Registry {
    tree: NamespaceTree,
    logging: LoggerHierarchy,
}

impl Registry {
    /// Creates a registry with the default logging configuration (console
    /// root appender at `warn`).
    #[must_use]
    pub fn new() -> Self {
        Self::with_logging(LoggerHierarchy::with_default_config())
    }

    /// Creates a registry loading the given logging configuration.
    #[must_use]
    pub fn with_config(config: &LogConfig) -> Self {
        let mut logging = LoggerHierarchy::new();
        logging.load(config);
        Self::with_logging(logging)
    }

    /// Creates a registry over a pre-built logger hierarchy. Use this when
    /// custom appender writers must be registered before the configuration
    /// is loaded.
    #[must_use]
    pub fn with_logging(logging: LoggerHierarchy) -> Self {
        let mut registry = Self {
            tree: NamespaceTree::new(),
            logging,
        };
        let base = ClassDescriptor {
            name: QualifiedName::parse(BASE_CLASS),
            superclass: None,
            mixins: Vec::new(),
            interfaces: Vec::new(),
            catalog: MethodCatalog::new(),
            constructors: Vec::new(),
            properties: im::HashMap::new(),
        };
        // Seeding the base class into an empty tree cannot conflict.
        let _ = registry
            .tree
            .bind(&QualifiedName::parse(BASE_CLASS), Binding::Class(Rc::new(base)));
        registry
    }

    /// Returns the logger hierarchy.
    #[must_use]
    pub fn logging(&self) -> &LoggerHierarchy {
        &self.logging
    }

    /// Returns the logger hierarchy mutably (configuration phase only).
    pub fn logging_mut(&mut self) -> &mut LoggerHierarchy {
        &mut self.logging
    }

    /// Resolves a dotted path to its binding, or `None`.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Option<&Binding> {
        self.tree.resolve(path)
    }

    /// Resolves a dotted path to a class descriptor, or `None`.
    #[must_use]
    pub fn resolve_class(&self, path: &str) -> Option<Rc<ClassDescriptor>> {
        self.tree.resolve(path).and_then(Binding::as_class).cloned()
    }

    /// Declares an interface: a named list of required method names.
    ///
    /// # Errors
    ///
    /// Fails only on a namespace conflict along the path.
    pub fn declare_interface(&mut self, name: &str, methods: &[&str]) -> Result<()> {
        let qualified = QualifiedName::parse(name);
        let descriptor = InterfaceDescriptor::new(
            qualified.clone(),
            methods.iter().map(ToString::to_string).collect(),
        );
        self.tree
            .bind(&qualified, Binding::Interface(Rc::new(descriptor)))
    }

    /// Declares a new class.
    ///
    /// `spec` is the superclass spec list: its head names the superclass,
    /// its tail names mixins and/or interfaces in order. A one-element
    /// list is the plain single-superclass form.
    ///
    /// # Errors
    ///
    /// Any validation failure aborts this declaration only; the error is
    /// wrapped with the class name, logged at error severity, and
    /// returned. The class is not registered on failure.
    pub fn declare(&mut self, name: &str, spec: &[&str], bag: PropertyBag) -> Result<()> {
        self.logging.log(
            ENGINE_LOGGER,
            Severity::Debug,
            None,
            &format!("declaring class: {name}"),
        );
        match self.build_and_bind(name, spec, bag) {
            Ok(()) => Ok(()),
            Err(reason) => {
                let err = Error::declaration_failed(name, reason);
                self.logging
                    .log(ENGINE_LOGGER, Severity::Error, None, &err.to_string());
                Err(err)
            }
        }
    }

    fn build_and_bind(&mut self, name: &str, spec: &[&str], bag: PropertyBag) -> Result<()> {
        let Some((head, tail)) = spec.split_first() else {
            return Err(Error::missing_superclass());
        };
        let superclass = match self.tree.resolve(head) {
            None => return Err(Error::missing_superclass()),
            Some(binding) => binding
                .as_class()
                .cloned()
                .ok_or_else(|| Error::superclass_not_base(*head))?,
        };
        let qualified = QualifiedName::parse(name);
        let full = qualified.full_name();

        // The property table delegates to the superclass by structural
        // sharing; the catalog absorbs the superclass chain oldest-first.
        let mut properties = superclass.properties.clone();
        let mut catalog = MethodCatalog::new();
        catalog.absorb(&superclass.catalog, Provenance::Superclass);
        let mut constructors = superclass.constructors.clone();
        let mut mixins: Vec<String> = Vec::new();
        let mut interfaces: Vec<String> = Vec::new();
        let mut conformance: Vec<Rc<InterfaceDescriptor>> = Vec::new();

        for (index, element) in tail.iter().enumerate() {
            // Positions are 1-based over the whole spec list; the
            // superclass occupies position 1.
            let position = index + 2;
            match self.tree.resolve(element) {
                None => return Err(Error::missing_spec_element(position)),
                Some(Binding::Interface(descriptor)) => {
                    let descriptor = Rc::clone(descriptor);
                    let iface = descriptor.name.full_name();
                    if !interfaces.contains(&iface) {
                        interfaces.push(iface);
                        conformance.push(descriptor);
                    }
                }
                Some(Binding::Class(mixin)) => {
                    let mixin = Rc::clone(mixin);
                    for ctor in &mixin.constructors {
                        if constructors.iter().any(|existing| existing.owner == ctor.owner) {
                            return Err(Error::constructor_conflict(position));
                        }
                    }
                    constructors.extend(mixin.constructors.iter().cloned());
                    catalog.absorb(&mixin.catalog, Provenance::Mixin);
                    mixins.push(mixin.name.full_name());
                    for iface in mixin.interfaces.clone() {
                        if !interfaces.contains(&iface) {
                            if let Some(descriptor) =
                                self.tree.resolve(&iface).and_then(Binding::as_interface)
                            {
                                conformance.push(Rc::clone(descriptor));
                            }
                            interfaces.push(iface);
                        }
                    }
                }
                Some(Binding::Namespace(_)) => {
                    return Err(Error::invalid_spec_element(position));
                }
            }
        }

        if let Some(reserved) = bag.reserved_name() {
            return Err(Error::reserved_name(reserved));
        }
        for (prop_name, value) in &bag.properties {
            properties.insert(prop_name.clone(), value.clone());
        }
        for (method_name, body) in &bag.methods {
            catalog.add_own(method_name.clone(), full.clone(), Rc::clone(body));
        }
        if let Some(body) = &bag.constructor {
            constructors.push(Constructor {
                owner: full.clone(),
                body: Rc::clone(body),
            });
        }

        for descriptor in &conformance {
            for method in &descriptor.methods {
                if catalog.visible(method).is_none() {
                    return Err(Error::interface_not_satisfied(
                        descriptor.name.full_name(),
                        method,
                    ));
                }
            }
        }

        let descriptor = ClassDescriptor {
            name: qualified.clone(),
            superclass: Some(superclass.name.full_name()),
            mixins,
            interfaces,
            catalog,
            constructors,
            properties,
        };
        // The class's logger node is resolved (and memoized) now, at
        // declaration time.
        let _ = self.logging.logger(&full);
        self.tree
            .bind(&qualified, Binding::Class(Rc::new(descriptor)))
    }

    /// Builds an instance of a class, invoking **every** constructor in
    /// the chain — superclass, then mixins, then own — with the identical
    /// argument list.
    ///
    /// # Errors
    ///
    /// Fails when the class is not registered.
    pub fn instantiate(&self, class: &str, args: &[Value]) -> Result<Instance> {
        let descriptor = self
            .resolve_class(class)
            .ok_or_else(|| Error::unknown_class(class))?;
        let mut instance = Instance::new(descriptor.name.full_name(), descriptor.properties.clone());
        for ctor in &descriptor.constructors {
            (ctor.body)(&mut instance, args);
        }
        Ok(instance)
    }

    /// Returns true when `class` is `ancestor` or derives from it.
    #[must_use]
    pub fn is_a(&self, class: &str, ancestor: &str) -> bool {
        let mut current = Some(class.to_string());
        while let Some(name) = current {
            if name == ancestor {
                return true;
            }
            current = self
                .resolve_class(&name)
                .and_then(|descriptor| descriptor.superclass.clone());
        }
        false
    }

    /// Returns true when `class` declared the interface attached (directly
    /// or via a mixin).
    #[must_use]
    pub fn implements(&self, class: &str, interface: &str) -> bool {
        self.resolve_class(class)
            .is_some_and(|descriptor| descriptor.interfaces.iter().any(|i| i == interface))
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Tests
// =============================================================================
