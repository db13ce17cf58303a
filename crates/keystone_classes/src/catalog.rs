//! Method catalogs: provenance-ordered implementation lists.
//!
//! Each method name maps to an ordered list of implementations,
//! oldest→newest: superclass entries first, then mixins in declaration
//! order, then the class's own entry. The list order *is* the
//! override-dispatch search order — the last entry is the publicly visible
//! implementation, and `call_overridden` steps one entry toward the
//! superclass.
//!
//! A [`MethodToken`] names the catalog entry currently executing:
//! `(class, method, depth)`. Passing the token explicitly replaces the
//! function-object identity scan the original framework used to find "the
//! method I overrode".

use std::fmt;
use std::rc::Rc;

use keystone_foundation::Value;

use crate::dispatch::Call;

/// A method implementation: a closure over the call context and arguments.
pub type MethodBody = Rc<dyn Fn(&mut Call<'_>, &[Value]) -> Option<Value>>;

// =============================================================================
// Provenance
// =============================================================================

/// Where a catalog entry came from, relative to the class owning the
/// catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Provenance {
    /// Inherited from the superclass chain.
    Superclass,
    /// Contributed by a mixin.
    Mixin,
    /// Defined by the class itself.
    Own,
}

// =============================================================================
// CatalogEntry
// =============================================================================

/// One implementation of a method, tagged with its origin.
#[derive(Clone)]
pub struct CatalogEntry {
    /// Qualified name of the class that declared this implementation.
    pub owner: String,
    /// The entry's relation to the catalog's class.
    pub provenance: Provenance,
    /// The implementation.
    pub body: MethodBody,
}

impl fmt::Debug for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CatalogEntry")
            .field("owner", &self.owner)
            .field("provenance", &self.provenance)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// MethodToken
// =============================================================================

/// Identity of the catalog entry currently executing.
///
/// `depth` indexes into the entry list of `method` in the catalog of
/// `class` (the instance's most-derived class, not the declaring class).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MethodToken {
    /// Qualified name of the class whose catalog is being dispatched.
    pub class: String,
    /// The method name.
    pub method: String,
    /// Index of the executing entry in the method's list.
    pub depth: usize,
}

impl MethodToken {
    /// Returns the "class.method" origin string used in log records.
    #[must_use]
    pub fn origin(&self) -> String {
        format!("{}.{}", self.class, self.method)
    }
}

// =============================================================================
// MethodCatalog
// =============================================================================

/// Per-method, provenance-ordered implementation lists.
#[derive(Clone, Default)]
pub struct MethodCatalog {
    entries: im::HashMap<String, Vec<CatalogEntry>>,
}

impl MethodCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Merges every entry of `source` into this catalog, re-tagged with
    /// `provenance`. Entry order within each method is preserved, so a
    /// superclass absorbed first stays oldest.
    pub fn absorb(&mut self, source: &MethodCatalog, provenance: Provenance) {
        for (name, source_entries) in &source.entries {
            let target = self.entries.entry(name.clone()).or_default();
            for entry in source_entries {
                target.push(CatalogEntry {
                    owner: entry.owner.clone(),
                    provenance,
                    body: Rc::clone(&entry.body),
                });
            }
        }
    }

    /// Appends the class's own implementation of a method, making it the
    /// visible one.
    pub fn add_own(&mut self, name: impl Into<String>, owner: impl Into<String>, body: MethodBody) {
        self.entries.entry(name.into()).or_default().push(CatalogEntry {
            owner: owner.into(),
            provenance: Provenance::Own,
            body,
        });
    }

    /// Returns the full override chain for a method, oldest→newest.
    #[must_use]
    pub fn chain(&self, name: &str) -> Option<&[CatalogEntry]> {
        self.entries.get(name).map(Vec::as_slice)
    }

    /// Returns the publicly visible implementation (the newest entry).
    #[must_use]
    pub fn visible(&self, name: &str) -> Option<&CatalogEntry> {
        self.entries.get(name).and_then(|entries| entries.last())
    }

    /// Returns true when any implementation of the method exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Iterates over the method names in the catalog.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl fmt::Debug for MethodCatalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("MethodCatalog").field("methods", &names).finish()
    }
}

// =============================================================================
// Tests
// =============================================================================
