//! Method dispatch and the per-call context.
//!
//! `Registry::invoke` looks up the method's override chain in the
//! instance's class catalog and runs the newest entry inside a [`Call`]
//! context. The context carries the executing entry's [`MethodToken`], so
//! `call_overridden` can step exactly one entry toward the superclass —
//! no scanning for function identity, no walking the prototype at call
//! time.
//!
//! The context also exposes the logging convenience layer every declared
//! class carries: severity-named methods plus `enter`/`leave` markers, all
//! routed through the class's logger with a `class.method` origin.

use std::rc::Rc;

use keystone_foundation::{Error, Result, Severity, Value};

use crate::catalog::MethodToken;
use crate::class::Instance;
use crate::registry::Registry;

impl Registry {
    /// Invokes the publicly visible implementation of `method` on an
    /// instance.
    ///
    /// # Errors
    ///
    /// Fails when the instance's class is not registered or the class has
    /// no implementation of the method anywhere in its chain.
    pub fn invoke(
        &self,
        instance: &mut Instance,
        method: &str,
        args: &[Value],
    ) -> Result<Option<Value>> {
        let descriptor = self
            .resolve_class(instance.class())
            .ok_or_else(|| Error::unknown_class(instance.class()))?;
        let Some(chain) = descriptor.catalog.chain(method) else {
            return Err(Error::unknown_method(instance.class(), method));
        };
        let depth = chain.len() - 1;
        let body = Rc::clone(&chain[depth].body);
        let token = MethodToken {
            class: instance.class().to_string(),
            method: method.to_string(),
            depth,
        };
        let mut call = Call {
            registry: self,
            token,
            instance,
        };
        Ok(body(&mut call, args))
    }
}

// =============================================================================
// Call
// =============================================================================

/// The context a method body executes in: the registry, the executing
/// entry's token, and the receiver instance.
pub struct Call<'a> {
    registry: &'a Registry,
    token: MethodToken,
    instance: &'a mut Instance,
}

impl Call<'_> {
    /// The registry the call is dispatched through.
    #[must_use]
    pub fn registry(&self) -> &Registry {
        self.registry
    }

    /// The executing entry's token.
    #[must_use]
    pub fn token(&self) -> &MethodToken {
        &self.token
    }

    /// Reads a property of the receiver.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        self.instance.get(name).cloned()
    }

    /// Writes a property of the receiver.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.instance.set(name, value);
    }

    /// The receiver instance.
    #[must_use]
    pub fn instance(&self) -> &Instance {
        self.instance
    }

    /// The receiver instance, mutably.
    pub fn instance_mut(&mut self) -> &mut Instance {
        self.instance
    }

    /// Invokes the implementation this entry overrode — the next-older
    /// entry in the chain — on the same receiver.
    ///
    /// At the oldest entry there is nothing to delegate to: the call
    /// becomes a no-op that returns `None` and logs one error record
    /// through the class's logger, mirroring the receiver-side behavior
    /// this replaces.
    pub fn call_overridden(&mut self, args: &[Value]) -> Option<Value> {
        let Some(descriptor) = self.registry.resolve_class(&self.token.class) else {
            return None;
        };
        let Some(chain) = descriptor.catalog.chain(&self.token.method) else {
            return None;
        };
        if self.token.depth == 0 || self.token.depth >= chain.len() {
            let owner = chain
                .get(self.token.depth.min(chain.len() - 1))
                .map_or_else(String::new, |entry| entry.owner.clone());
            let message = format!(
                "the {} method {} inherits from {} does not override a method",
                self.token.method, self.token.class, owner
            );
            self.registry.logging().log(
                &self.token.class,
                Severity::Error,
                Some(&self.token.origin()),
                &message,
            );
            return None;
        }
        let depth = self.token.depth - 1;
        let body = Rc::clone(&chain[depth].body);
        let token = MethodToken {
            class: self.token.class.clone(),
            method: self.token.method.clone(),
            depth,
        };
        let mut inner = Call {
            registry: self.registry,
            token,
            instance: &mut *self.instance,
        };
        body(&mut inner, args)
    }

    // ===== Logging convenience layer =====

    /// Logs at fatal severity through the class's logger.
    pub fn fatal(&self, message: &str) {
        self.log(Severity::Fatal, message);
    }

    /// Logs at error severity through the class's logger.
    pub fn error(&self, message: &str) {
        self.log(Severity::Error, message);
    }

    /// Logs at warn severity through the class's logger.
    pub fn warn(&self, message: &str) {
        self.log(Severity::Warn, message);
    }

    /// Logs at info severity through the class's logger.
    pub fn info(&self, message: &str) {
        self.log(Severity::Info, message);
    }

    /// Logs at debug severity through the class's logger.
    pub fn debug(&self, message: &str) {
        self.log(Severity::Debug, message);
    }

    /// Logs at trace severity through the class's logger.
    pub fn trace(&self, message: &str) {
        self.log(Severity::Trace, message);
    }

    /// Marks method entry at trace severity.
    pub fn enter(&self) {
        self.log(Severity::Trace, "enter");
    }

    /// Marks method exit at trace severity.
    pub fn leave(&self) {
        self.log(Severity::Trace, "leave");
    }

    fn log(&self, severity: Severity, message: &str) {
        self.registry.logging().log(
            &self.token.class,
            severity,
            Some(&self.token.origin()),
            message,
        );
    }
}

// =============================================================================
// Tests
// =============================================================================
