//! Log severities.
//!
//! Severities are ordered from most severe (`Fatal`, numerically 0) to
//! least severe (`Trace`, numerically 5). The derived ordering therefore
//! puts the *more verbose* level last: a sink configured at `Debug` accepts
//! every record whose severity is `<= Debug`, and "more permissive" means
//! numerically larger.

use std::fmt;

// =============================================================================
// Severity
// =============================================================================

/// A log severity level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    /// Unrecoverable failures.
    Fatal = 0,
    /// Errors the program can survive.
    Error = 1,
    /// Suspicious conditions.
    Warn = 2,
    /// Informational messages.
    Info = 3,
    /// Detailed diagnostics.
    Debug = 4,
    /// Method entry/exit and finest-grained diagnostics.
    Trace = 5,
}

impl Severity {
    /// All severities in numeric order, most severe first.
    pub const ALL: [Self; 6] = [
        Self::Fatal,
        Self::Error,
        Self::Warn,
        Self::Info,
        Self::Debug,
        Self::Trace,
    ];

    /// Parses a severity from its name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "FATAL" => Some(Self::Fatal),
            "ERROR" => Some(Self::Error),
            "WARN" => Some(Self::Warn),
            "INFO" => Some(Self::Info),
            "DEBUG" => Some(Self::Debug),
            "TRACE" => Some(Self::Trace),
            _ => None,
        }
    }

    /// Returns the canonical upper-case name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }

    /// Returns the column-padded display name used in log output.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warn => "WARN ",
            Self::Info => "INFO ",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }

    /// Returns the numeric level (0 = fatal, 5 = trace).
    #[must_use]
    pub fn level(self) -> u8 {
        self as u8
    }

    /// Returns the more permissive (more verbose) of two severities.
    #[must_use]
    pub fn more_permissive(self, other: Self) -> Self {
        self.max(other)
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// =============================================================================
// Tests
// =============================================================================
