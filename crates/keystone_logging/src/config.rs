//! Declarative logging configuration.
//!
//! A [`LogConfig`] names a set of appenders and a set of logger nodes. The
//! `kind` and `level` fields are deliberately plain strings: a malformed
//! entry must degrade to a configuration warning when the hierarchy loads
//! it, not fail deserialization of the whole document.

use serde::{Deserialize, Serialize};

// =============================================================================
// AppenderConfig
// =============================================================================

/// Configuration for one named appender.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppenderConfig {
    /// The appender name, referenced by logger sinks.
    pub name: String,
    /// The appender kind: "console", "alert", or "custom".
    pub kind: String,
}

impl AppenderConfig {
    /// Creates a console appender configuration.
    #[must_use]
    pub fn console(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: "console".to_string(),
        }
    }

    /// Creates an alert appender configuration.
    #[must_use]
    pub fn alert(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: "alert".to_string(),
        }
    }

    /// Creates a custom appender configuration. The writer itself is
    /// registered on the hierarchy under the same name before loading.
    #[must_use]
    pub fn custom(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: "custom".to_string(),
        }
    }
}

// =============================================================================
// SinkConfig
// =============================================================================

/// One sink entry of a logger node: an appender reference and a minimum
/// severity name ("fatal" through "trace").
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SinkConfig {
    /// Name of the appender to deliver to.
    pub appender: String,
    /// Severity name; records at or above this verbosity are dropped.
    pub level: String,
}

impl SinkConfig {
    /// Creates a sink entry.
    #[must_use]
    pub fn new(appender: impl Into<String>, level: impl Into<String>) -> Self {
        Self {
            appender: appender.into(),
            level: level.into(),
        }
    }
}

// =============================================================================
// LoggerConfig
// =============================================================================

/// Configuration for one logger node, keyed by dotted name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// The dotted logger name ("root", "app.db", ...).
    pub name: String,
    /// Whether ancestor sinks are inherited (default) or replaced.
    #[serde(default = "default_additive")]
    pub additive: bool,
    /// The node's own sinks.
    #[serde(default)]
    pub sinks: Vec<SinkConfig>,
}

fn default_additive() -> bool {
    true
}

impl LoggerConfig {
    /// Creates an additive logger node with no sinks.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            additive: true,
            sinks: Vec::new(),
        }
    }

    /// Builder method to add a sink.
    #[must_use]
    pub fn sink(mut self, appender: impl Into<String>, level: impl Into<String>) -> Self {
        self.sinks.push(SinkConfig::new(appender, level));
        self
    }

    /// Builder method to mark the node non-additive: its own sinks replace
    /// whatever descendants would otherwise inherit from above.
    #[must_use]
    pub fn non_additive(mut self) -> Self {
        self.additive = false;
        self
    }
}

// =============================================================================
// LogConfig
// =============================================================================

/// A complete logging configuration: named appenders plus logger nodes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogConfig {
    /// Appender declarations.
    #[serde(default)]
    pub appenders: Vec<AppenderConfig>,
    /// Logger node declarations.
    #[serde(default)]
    pub loggers: Vec<LoggerConfig>,
}

impl LogConfig {
    /// Creates an empty configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            appenders: Vec::new(),
            loggers: Vec::new(),
        }
    }

    /// Builder method to add an appender.
    #[must_use]
    pub fn appender(mut self, appender: AppenderConfig) -> Self {
        self.appenders.push(appender);
        self
    }

    /// Builder method to add a logger node.
    #[must_use]
    pub fn logger(mut self, logger: LoggerConfig) -> Self {
        self.loggers.push(logger);
        self
    }
}

impl Default for LogConfig {
    /// The fallback configuration: one console appender named "root" and a
    /// root logger sinking to it at `warn`.
    fn default() -> Self {
        Self::new()
            .appender(AppenderConfig::console("root"))
            .logger(LoggerConfig::new("root").sink("root", "warn"))
    }
}

// =============================================================================
// Tests
// =============================================================================
