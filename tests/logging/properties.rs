//! Property tests for sink inheritance and delivery.

use std::cell::RefCell;
use std::rc::Rc;

use keystone_foundation::Severity;
use keystone_logging::{AppenderConfig, CustomWriter, LogConfig, LoggerConfig, LoggerHierarchy};
use proptest::prelude::*;

fn severity() -> impl Strategy<Value = Severity> {
    proptest::sample::select(Severity::ALL.to_vec())
}

fn counting_hierarchy(config: LogConfig) -> (LoggerHierarchy, Rc<RefCell<usize>>) {
    let count = Rc::new(RefCell::new(0_usize));
    let sink = Rc::clone(&count);
    let writer: CustomWriter = Rc::new(move |_, _| {
        *sink.borrow_mut() += 1;
    });
    let mut hierarchy = LoggerHierarchy::new();
    hierarchy.register_custom_writer("cap", writer);
    hierarchy.load(&config);
    (hierarchy, count)
}

proptest! {
    /// A record is delivered exactly when its severity is within the
    /// effective sink level, for every combination of root and child
    /// levels.
    #[test]
    fn delivery_follows_merged_level(
        root_level in severity(),
        child_level in severity(),
        record in severity(),
    ) {
        let config = LogConfig::new()
            .appender(AppenderConfig::custom("cap"))
            .logger(LoggerConfig::new("root").sink("cap", root_level.as_str()))
            .logger(LoggerConfig::new("app").sink("cap", child_level.as_str()));
        let (hierarchy, count) = counting_hierarchy(config);

        hierarchy.log("app.db", record, None, "probe");

        let effective = root_level.more_permissive(child_level);
        let expected = usize::from(record <= effective);
        prop_assert_eq!(*count.borrow(), expected);
    }

    /// Merging a duplicate appender never narrows the level: the resolved
    /// child accepts everything either config node accepted.
    #[test]
    fn merge_never_narrows(root_level in severity(), child_level in severity()) {
        let config = LogConfig::new()
            .appender(AppenderConfig::custom("cap"))
            .logger(LoggerConfig::new("root").sink("cap", root_level.as_str()))
            .logger(LoggerConfig::new("app").sink("cap", child_level.as_str()));
        let (hierarchy, _count) = counting_hierarchy(config);

        let logger = hierarchy.logger("app");
        for probe in Severity::ALL {
            if probe <= root_level || probe <= child_level {
                prop_assert!(logger.accepts(probe));
            }
        }
    }

    /// A non-additive node's resolution ignores the root entirely.
    #[test]
    fn non_additive_ignores_ancestors(root_level in severity(), child_level in severity()) {
        let config = LogConfig::new()
            .appender(AppenderConfig::custom("cap"))
            .logger(LoggerConfig::new("root").sink("cap", root_level.as_str()))
            .logger(
                LoggerConfig::new("app")
                    .non_additive()
                    .sink("cap", child_level.as_str()),
            );
        let (hierarchy, _count) = counting_hierarchy(config);

        prop_assert_eq!(hierarchy.logger("app").max_severity, Some(child_level));
    }
}
