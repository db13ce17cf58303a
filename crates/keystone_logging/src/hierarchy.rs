//! The logger hierarchy: configuration loading, effective sink resolution,
//! and record delivery.
//!
//! Loggers form a tree keyed by dotted name. A node's effective sinks are
//! resolved by walking its name's prefixes from the root: additive nodes
//! merge their own sinks into the inherited list (duplicate appenders keep
//! the more permissive level), non-additive nodes replace it. Resolution is
//! memoized per name; the cache sits behind a `RefCell` so the logging read
//! path takes `&self` under the single-threaded initialization model.
//!
//! Configuration loading never fails: unresolvable appender kinds, missing
//! custom writers, dangling appender references, and invalid level names
//! are reported through a fallback channel (stderr) and skipped, leaving
//! the facility in a degraded but working state.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};
use std::rc::Rc;

use keystone_foundation::{QualifiedName, Severity};
use thiserror::Error;

use crate::appender::{Appender, AppenderKind, CustomWriter};
use crate::config::LogConfig;

// =============================================================================
// ConfigWarning
// =============================================================================

/// A non-fatal problem found while loading a logging configuration.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigWarning {
    /// An appender declared a kind the facility does not know.
    #[error("could not resolve appender kind {kind} for appender {appender}")]
    UnknownAppenderKind {
        /// The appender being declared.
        appender: String,
        /// The unresolvable kind string.
        kind: String,
    },

    /// An appender declaration was missing its name or kind.
    #[error("invalid appender specification [{appender}]")]
    MalformedAppender {
        /// The (possibly empty) appender name.
        appender: String,
    },

    /// A custom appender had no registered writer.
    #[error("custom appender {appender} has no registered writer")]
    MissingCustomWriter {
        /// The appender missing its writer.
        appender: String,
    },

    /// A logger sink referenced an undeclared appender.
    #[error("logger {logger} specifies invalid appender {appender}")]
    UnknownAppender {
        /// The logger node being configured.
        logger: String,
        /// The dangling appender reference.
        appender: String,
    },

    /// A logger sink carried an unparseable severity name.
    #[error("logger {logger} does not specify a valid level for appender {appender}")]
    InvalidLevel {
        /// The logger node being configured.
        logger: String,
        /// The sink's appender reference.
        appender: String,
    },
}

// =============================================================================
// Sinks and resolved loggers
// =============================================================================

/// A resolved sink: an appender plus the minimum severity it accepts.
#[derive(Clone, Debug)]
pub struct SinkSpec {
    /// The appender to deliver to.
    pub appender: Rc<Appender>,
    /// Records with `severity <= level` are delivered.
    pub level: Severity,
}

/// A logger resolved to its effective sink list.
#[derive(Clone, Debug)]
pub struct ResolvedLogger {
    /// Effective sinks, duplicate appenders already merged.
    pub sinks: Vec<SinkSpec>,
    /// The most permissive level among the sinks, or `None` with no sinks.
    pub max_severity: Option<Severity>,
}

impl ResolvedLogger {
    /// Returns true when a record at `severity` would reach any sink.
    #[must_use]
    pub fn accepts(&self, severity: Severity) -> bool {
        self.max_severity.is_some_and(|max| severity <= max)
    }
}

/// A configured logger node before resolution.
#[derive(Clone, Debug)]
struct LoggerNode {
    additive: bool,
    sinks: Vec<SinkSpec>,
}

// =============================================================================
// LoggerHierarchy
// =============================================================================

/// The hierarchy of configured loggers and named appenders.
pub struct LoggerHierarchy {
    appenders: HashMap<String, Rc<Appender>>,
    nodes: HashMap<String, LoggerNode>,
    custom_writers: HashMap<String, CustomWriter>,
    resolved: RefCell<HashMap<String, Rc<ResolvedLogger>>>,
    warnings: Vec<ConfigWarning>,
}

impl LoggerHierarchy {
    /// Creates an empty hierarchy. Until a configuration is loaded every
    /// logger resolves to an empty sink list.
    #[must_use]
    pub fn new() -> Self {
        Self {
            appenders: HashMap::new(),
            nodes: HashMap::new(),
            custom_writers: HashMap::new(),
            resolved: RefCell::new(HashMap::new()),
            warnings: Vec::new(),
        }
    }

    /// Creates a hierarchy loaded with the fallback configuration
    /// (console "root" appender, root logger at `warn`).
    #[must_use]
    pub fn with_default_config() -> Self {
        let mut hierarchy = Self::new();
        hierarchy.load(&LogConfig::default());
        hierarchy
    }

    /// Registers a writer for a custom appender. Must happen before the
    /// configuration naming that appender is loaded.
    pub fn register_custom_writer(&mut self, name: impl Into<String>, writer: CustomWriter) {
        self.custom_writers.insert(name.into(), writer);
    }

    /// Loads a configuration, instantiating appenders and logger nodes.
    ///
    /// Never fails: problems are recorded as [`ConfigWarning`]s, echoed to
    /// stderr (the facility cannot reliably log about its own
    /// misconfiguration), and the offending entries skipped.
    pub fn load(&mut self, config: &LogConfig) {
        self.resolved.borrow_mut().clear();
        for spec in &config.appenders {
            if spec.name.is_empty() || spec.kind.is_empty() {
                self.warn(ConfigWarning::MalformedAppender {
                    appender: spec.name.clone(),
                });
                continue;
            }
            let kind = match spec.kind.as_str() {
                "console" => AppenderKind::Console,
                "alert" => AppenderKind::Alert,
                "custom" => match self.custom_writers.get(&spec.name) {
                    Some(writer) => AppenderKind::Custom(Rc::clone(writer)),
                    None => {
                        self.warn(ConfigWarning::MissingCustomWriter {
                            appender: spec.name.clone(),
                        });
                        continue;
                    }
                },
                other => {
                    self.warn(ConfigWarning::UnknownAppenderKind {
                        appender: spec.name.clone(),
                        kind: other.to_string(),
                    });
                    continue;
                }
            };
            self.appenders.insert(
                spec.name.clone(),
                Rc::new(Appender::new(spec.name.clone(), kind)),
            );
        }
        for spec in &config.loggers {
            let mut node = LoggerNode {
                additive: spec.additive,
                sinks: Vec::new(),
            };
            for sink in &spec.sinks {
                let Some(appender) = self.appenders.get(&sink.appender) else {
                    self.warn(ConfigWarning::UnknownAppender {
                        logger: spec.name.clone(),
                        appender: sink.appender.clone(),
                    });
                    continue;
                };
                let Some(level) = Severity::from_name(&sink.level) else {
                    self.warn(ConfigWarning::InvalidLevel {
                        logger: spec.name.clone(),
                        appender: sink.appender.clone(),
                    });
                    continue;
                };
                node.sinks.push(SinkSpec {
                    appender: Rc::clone(appender),
                    level,
                });
            }
            // A node with no valid sinks is still registered: non-additive
            // empty nodes silence their subtree.
            self.nodes.insert(spec.name.clone(), node);
        }
    }

    /// Returns the warnings accumulated across configuration loads.
    #[must_use]
    pub fn warnings(&self) -> &[ConfigWarning] {
        &self.warnings
    }

    /// Resolves a logger by dotted name, memoizing the result.
    #[must_use]
    pub fn logger(&self, name: &str) -> Rc<ResolvedLogger> {
        if let Some(found) = self.resolved.borrow().get(name) {
            return Rc::clone(found);
        }
        let logger = Rc::new(self.resolve(name));
        self.resolved
            .borrow_mut()
            .insert(name.to_string(), Rc::clone(&logger));
        logger
    }

    /// Logs one record through the named logger.
    ///
    /// `origin` identifies the calling method ("game.Hangman.guess"); it is
    /// omitted from the line when absent. Records whose severity exceeds
    /// the logger's maximum return before any formatting happens.
    pub fn log(&self, name: &str, severity: Severity, origin: Option<&str>, message: &str) {
        let logger = self.logger(name);
        if !logger.accepts(severity) {
            return;
        }
        let line = match origin {
            Some(origin) => format!("{}:{}: {}", severity.display_name(), origin, message),
            None => format!("{}: {}", severity.display_name(), message),
        };
        for sink in &logger.sinks {
            if severity <= sink.level {
                sink.appender.append(severity, &line);
            }
        }
    }

    fn resolve(&self, name: &str) -> ResolvedLogger {
        let mut sinks: Vec<SinkSpec> = self
            .nodes
            .get("root")
            .map(|node| node.sinks.clone())
            .unwrap_or_default();
        if name != "root" {
            for prefix in QualifiedName::parse(name).prefixes() {
                let Some(node) = self.nodes.get(&prefix) else {
                    continue;
                };
                if node.additive {
                    Self::merge_sinks(&mut sinks, &node.sinks);
                } else {
                    sinks = node.sinks.clone();
                }
            }
        }
        let max_severity = sinks.iter().map(|sink| sink.level).max();
        ResolvedLogger {
            sinks,
            max_severity,
        }
    }

    /// Merges `incoming` into `sinks`, deduplicating by appender name and
    /// keeping the more permissive (more verbose) level.
    fn merge_sinks(sinks: &mut Vec<SinkSpec>, incoming: &[SinkSpec]) {
        for sink in incoming {
            match sinks
                .iter_mut()
                .find(|existing| existing.appender.name() == sink.appender.name())
            {
                Some(existing) => {
                    existing.level = existing.level.more_permissive(sink.level);
                }
                None => sinks.push(sink.clone()),
            }
        }
    }

    fn warn(&mut self, warning: ConfigWarning) {
        let _ = writeln!(io::stderr(), "keystone-logging: {warning}");
        self.warnings.push(warning);
    }
}

impl Default for LoggerHierarchy {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for LoggerHierarchy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggerHierarchy")
            .field("appenders", &self.appenders.keys())
            .field("nodes", &self.nodes)
            .field("warnings", &self.warnings)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Tests
// =============================================================================
