//! Integration tests for structured errors.

use keystone_foundation::{Error, ErrorKind};

#[test]
fn declaration_errors_carry_positions() {
    let missing = Error::missing_spec_element(2);
    assert!(matches!(
        missing.kind,
        ErrorKind::MissingSpecElement { position: 2 }
    ));
    assert_eq!(
        format!("{missing}"),
        "element 2 in superclass list does not exist"
    );

    let conflict = Error::constructor_conflict(4);
    assert_eq!(
        format!("{conflict}"),
        "element 4 in superclass list is not allowed as a mixin class"
    );
}

#[test]
fn declaration_failed_wraps_the_cause() {
    let err = Error::declaration_failed("game.Hangman", Error::reserved_name("superclass"));
    assert!(err.is_declaration());
    let message = format!("{err}");
    assert!(message.starts_with("declaration of class game.Hangman failed:"));
    assert!(message.contains("superclass is a reserved identifier"));
}

#[test]
fn lookup_errors_name_their_subject() {
    let class = Error::unknown_class("game.Missing");
    assert_eq!(format!("{class}"), "unknown class: game.Missing");

    let method = Error::unknown_method("game.Hangman", "warp");
    assert_eq!(format!("{method}"), "unknown method: game.Hangman.warp");
}

#[test]
fn interface_error_names_contract() {
    let err = Error::interface_not_satisfied("game.Greeter", "greet");
    assert_eq!(format!("{err}"), "class must implement game.Greeter.greet");
    assert!(!err.is_declaration());
}

#[test]
fn load_error_carries_reason() {
    let err = Error::load_failed("game.Hangman", "source did not provide the resource");
    assert!(matches!(err.kind, ErrorKind::LoadFailed { .. }));
    assert!(format!("{err}").contains("loading game.Hangman failed"));
}
