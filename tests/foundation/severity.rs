//! Integration tests for severities.

use keystone_foundation::Severity;

#[test]
fn fatal_is_most_severe() {
    assert_eq!(Severity::Fatal.level(), 0);
    assert!(Severity::Fatal < Severity::Trace);
}

#[test]
fn ordering_matches_numeric_levels() {
    for window in Severity::ALL.windows(2) {
        assert!(window[0] < window[1]);
        assert!(window[0].level() < window[1].level());
    }
}

#[test]
fn names_round_trip() {
    for severity in Severity::ALL {
        assert_eq!(Severity::from_name(severity.as_str()), Some(severity));
        assert_eq!(
            Severity::from_name(&severity.as_str().to_lowercase()),
            Some(severity)
        );
    }
}

#[test]
fn unknown_name_is_rejected() {
    assert_eq!(Severity::from_name("verbose"), None);
    assert_eq!(Severity::from_name(""), None);
}

#[test]
fn more_permissive_is_commutative_max() {
    assert_eq!(
        Severity::Warn.more_permissive(Severity::Trace),
        Severity::Trace
    );
    assert_eq!(
        Severity::Trace.more_permissive(Severity::Warn),
        Severity::Trace
    );
    assert_eq!(
        Severity::Error.more_permissive(Severity::Error),
        Severity::Error
    );
}

#[test]
fn display_names_align_to_five_columns() {
    for severity in Severity::ALL {
        assert_eq!(severity.display_name().len(), 5);
        assert_eq!(severity.display_name().trim(), severity.as_str());
    }
}
