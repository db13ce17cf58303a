//! On-demand class provisioning.
//!
//! A [`ClassSource`] turns a qualified name into declarations against the
//! registry — from embedded definitions, a file tree, or anything else.
//! `Registry::require` drives it: resolution happens as an explicit,
//! fallible phase before use, and a source that declares prerequisites
//! recursively does so through the same registry it was handed.

use keystone_foundation::{Error, QualifiedName, Result, Severity};

use crate::registry::{Registry, ENGINE_LOGGER};

/// A provider of class and interface declarations.
pub trait ClassSource {
    /// Declares the named class (and anything it needs) into the registry.
    ///
    /// # Errors
    ///
    /// Implementations fail when the definition cannot be produced; the
    /// error is wrapped by `require` with the requested name.
    fn provide(&mut self, name: &QualifiedName, registry: &mut Registry) -> Result<()>;
}

impl Registry {
    /// Ensures the named class or interface is registered, asking `source`
    /// to provide it when absent. Already-registered names are a no-op.
    ///
    /// # Errors
    ///
    /// Fails when the source errors, or when it returns successfully
    /// without the name becoming resolvable.
    pub fn require(&mut self, name: &str, source: &mut dyn ClassSource) -> Result<()> {
        if self.resolve(name).is_some() {
            return Ok(());
        }
        self.logging()
            .log(ENGINE_LOGGER, Severity::Info, None, &format!("loading: {name}"));
        let qualified = QualifiedName::parse(name);
        source
            .provide(&qualified, self)
            .map_err(|reason| Error::load_failed(name, reason.to_string()))?;
        if self.resolve(name).is_none() {
            return Err(Error::load_failed(name, "source did not provide the resource"));
        }
        Ok(())
    }
}

// =============================================================================
// Tests
// =============================================================================
