//! Named log appenders.
//!
//! An appender is instantiated once per configuration and memoized by name.
//! The console appender routes fatal/error/warn to stderr and the quieter
//! severities to stdout; the alert appender is a prominent stderr writer
//! standing in for a modal alert; custom appenders delegate to a
//! caller-registered writer (which is also how tests capture output).

use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

use keystone_foundation::Severity;

/// A caller-registered writer for custom appenders.
pub type CustomWriter = Rc<dyn Fn(Severity, &str)>;

// =============================================================================
// AppenderKind
// =============================================================================

/// The write behavior of an appender.
#[derive(Clone)]
pub enum AppenderKind {
    /// Write to stdout/stderr depending on severity.
    Console,
    /// Write prominently to stderr.
    Alert,
    /// Delegate to a registered writer.
    Custom(CustomWriter),
}

impl fmt::Debug for AppenderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Console => write!(f, "Console"),
            Self::Alert => write!(f, "Alert"),
            Self::Custom(_) => write!(f, "Custom(..)"),
        }
    }
}

// =============================================================================
// Appender
// =============================================================================

/// A named output sink for log records.
#[derive(Clone, Debug)]
pub struct Appender {
    name: String,
    kind: AppenderKind,
}

impl Appender {
    /// Creates an appender with the given name and kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: AppenderKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Returns the appender's configured name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Writes one formatted record. The appender prefixes its own name,
    /// so the same record is distinguishable across sinks.
    pub fn append(&self, severity: Severity, message: &str) {
        let line = format!("{}:{}", self.name, message);
        match &self.kind {
            AppenderKind::Console => {
                if severity <= Severity::Warn {
                    let _ = writeln!(io::stderr(), "{line}");
                } else {
                    let _ = writeln!(io::stdout(), "{line}");
                }
            }
            AppenderKind::Alert => {
                let _ = writeln!(io::stderr(), "ALERT {line}");
            }
            AppenderKind::Custom(writer) => writer(severity, &line),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
