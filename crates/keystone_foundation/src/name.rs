//! Qualified names for classes, interfaces, namespaces, and loggers.
//!
//! A qualified name is a dotted path like "game.ui.Hangman", stored as
//! segments for easy traversal and comparison.

use std::fmt;

// =============================================================================
// QualifiedName
// =============================================================================

/// A qualified dotted name like "game.ui.Hangman".
///
/// Stored as path segments for easy manipulation and comparison.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct QualifiedName {
    /// Path segments (e.g., `["game", "ui", "Hangman"]`).
    pub segments: Vec<String>,
}

impl QualifiedName {
    /// Creates a new qualified name from segments.
    #[must_use]
    pub fn new(segments: Vec<String>) -> Self {
        Self { segments }
    }

    /// Creates a qualified name from a dotted string like "game.ui.Hangman".
    #[must_use]
    pub fn parse(s: &str) -> Self {
        if s.is_empty() {
            return Self {
                segments: Vec::new(),
            };
        }
        Self {
            segments: s.split('.').map(String::from).collect(),
        }
    }

    /// Returns the full qualified name as a dotted string.
    #[must_use]
    pub fn full_name(&self) -> String {
        self.segments.join(".")
    }

    /// Returns the simple name (last segment).
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    /// Returns the parent name (all segments but the last), or `None`
    /// when this name has no parent.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        if self.segments.len() < 2 {
            return None;
        }
        Some(Self {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// Returns the dotted prefixes of this name, shortest first.
    ///
    /// For "app.db.pool" this yields "app", "app.db", "app.db.pool".
    #[must_use]
    pub fn prefixes(&self) -> Vec<String> {
        let mut result = Vec::with_capacity(self.segments.len());
        let mut current = String::new();
        for segment in &self.segments {
            if !current.is_empty() {
                current.push('.');
            }
            current.push_str(segment);
            result.push(current.clone());
        }
        result
    }

    /// Returns true if this name has no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}

impl From<&str> for QualifiedName {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

// =============================================================================
// Tests
// =============================================================================
