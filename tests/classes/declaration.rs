//! Integration tests for class declaration: spec validation, mixins,
//! interfaces, constructors, and namespace effects.

use std::rc::Rc;

use keystone_classes::{BASE_CLASS, Binding, MethodBody, PropertyBag, Registry};
use keystone_foundation::{ErrorKind, Value};
use keystone_logging::LoggerHierarchy;

fn registry() -> Registry {
    Registry::with_logging(LoggerHierarchy::new())
}

fn noop() -> MethodBody {
    Rc::new(|_, _| None)
}

fn declaration_cause(err: keystone_foundation::Error) -> ErrorKind {
    match err.kind {
        ErrorKind::DeclarationFailed { reason, .. } => reason.kind,
        other => other,
    }
}

// =============================================================================
// Spec validation
// =============================================================================

#[test]
fn empty_spec_is_missing_superclass() {
    let mut registry = registry();
    let err = registry.declare("game.Bad", &[], PropertyBag::new()).unwrap_err();
    assert!(matches!(
        declaration_cause(err),
        ErrorKind::MissingSuperclass
    ));
}

#[test]
fn unresolved_superclass_is_missing() {
    let mut registry = registry();
    let err = registry
        .declare("game.Bad", &["game.NoSuchBase"], PropertyBag::new())
        .unwrap_err();
    assert!(matches!(
        declaration_cause(err),
        ErrorKind::MissingSuperclass
    ));
}

#[test]
fn tail_positions_count_from_two() {
    let mut registry = registry();
    registry
        .declare("game.Mixin", &[BASE_CLASS], PropertyBag::new())
        .unwrap();

    let err = registry
        .declare(
            "game.Bad",
            &[BASE_CLASS, "game.Mixin", "game.Ghost"],
            PropertyBag::new(),
        )
        .unwrap_err();
    assert!(matches!(
        declaration_cause(err),
        ErrorKind::MissingSpecElement { position: 3 }
    ));
}

#[test]
fn namespace_in_tail_is_invalid_element() {
    let mut registry = registry();
    registry
        .declare("game.inner.Thing", &[BASE_CLASS], PropertyBag::new())
        .unwrap();

    // "game.inner" resolves to a namespace, not a class or interface.
    let err = registry
        .declare("game.Bad", &[BASE_CLASS, "game.inner"], PropertyBag::new())
        .unwrap_err();
    assert!(matches!(
        declaration_cause(err),
        ErrorKind::InvalidSpecElement { position: 2 }
    ));
}

#[test]
fn failed_declaration_leaves_namespace_unbound() {
    let mut registry = registry();
    assert!(registry
        .declare("game.Bad", &["game.Ghost"], PropertyBag::new())
        .is_err());
    assert!(registry.resolve("game.Bad").is_none());
}

// =============================================================================
// Mixins and the diamond rule
// =============================================================================

#[test]
fn mixins_contribute_methods_not_properties() {
    let mut registry = registry();
    registry
        .declare(
            "game.Paintable",
            &[BASE_CLASS],
            PropertyBag::new().property("brush", "wide").method("paint", noop()),
        )
        .unwrap();
    registry
        .declare("game.Widget", &[BASE_CLASS, "game.Paintable"], PropertyBag::new())
        .unwrap();

    let widget = registry.resolve_class("game.Widget").unwrap();
    assert!(widget.catalog.contains("paint"));
    assert_eq!(widget.properties.get("brush"), None);
}

#[test]
fn shared_constructor_ancestry_is_rejected_with_position() {
    let mut registry = registry();
    registry
        .declare(
            "game.Base",
            &[BASE_CLASS],
            PropertyBag::new().constructor(Rc::new(|instance, _| instance.set("base", true))),
        )
        .unwrap();
    registry
        .declare("game.Left", &["game.Base"], PropertyBag::new())
        .unwrap();
    registry
        .declare("game.Right", &["game.Base"], PropertyBag::new())
        .unwrap();

    // Left already brought Base's constructor; Right at position 3
    // re-introduces it.
    let err = registry
        .declare(
            "game.Diamond",
            &[BASE_CLASS, "game.Left", "game.Right"],
            PropertyBag::new(),
        )
        .unwrap_err();
    assert!(matches!(
        declaration_cause(err),
        ErrorKind::ConstructorConflict { position: 3 }
    ));
    assert!(registry.resolve("game.Diamond").is_none());
}

#[test]
fn disjoint_constructors_all_run_with_same_args() {
    let mut registry = registry();
    registry
        .declare(
            "game.Named",
            &[BASE_CLASS],
            PropertyBag::new().constructor(Rc::new(|instance, args| {
                if let Some(name) = args.first().and_then(Value::as_str) {
                    instance.set("name", name);
                }
            })),
        )
        .unwrap();
    registry
        .declare(
            "game.Counted",
            &[BASE_CLASS],
            PropertyBag::new().constructor(Rc::new(|instance, args| {
                instance.set("arg_count", args.len() as i64);
            })),
        )
        .unwrap();
    registry
        .declare(
            "game.Piece",
            &[BASE_CLASS, "game.Named", "game.Counted"],
            PropertyBag::new().constructor(Rc::new(|instance, _| instance.set("own", true))),
        )
        .unwrap();

    let instance = registry
        .instantiate("game.Piece", &[Value::str("pawn")])
        .unwrap();
    assert_eq!(instance.get("name"), Some(&Value::str("pawn")));
    assert_eq!(instance.get("arg_count"), Some(&Value::Int(1)));
    assert_eq!(instance.get("own"), Some(&Value::Bool(true)));
}

// =============================================================================
// Interfaces
// =============================================================================

#[test]
fn unimplemented_interface_aborts_declaration() {
    let mut registry = registry();
    registry
        .declare_interface("game.Greeter", &["greet", "farewell"])
        .unwrap();

    let err = registry
        .declare(
            "game.Partial",
            &[BASE_CLASS, "game.Greeter"],
            PropertyBag::new().method("greet", noop()),
        )
        .unwrap_err();
    assert!(matches!(
        declaration_cause(err),
        ErrorKind::InterfaceNotSatisfied { ref interface, ref method }
            if interface == "game.Greeter" && method == "farewell"
    ));
    assert!(registry.resolve("game.Partial").is_none());
}

#[test]
fn inherited_methods_satisfy_interfaces() {
    let mut registry = registry();
    registry.declare_interface("game.Greeter", &["greet"]).unwrap();
    registry
        .declare(
            "game.Base",
            &[BASE_CLASS],
            PropertyBag::new().method("greet", noop()),
        )
        .unwrap();
    registry
        .declare("game.Child", &["game.Base", "game.Greeter"], PropertyBag::new())
        .unwrap();

    assert!(registry.implements("game.Child", "game.Greeter"));
}

#[test]
fn mixin_interfaces_propagate_to_host() {
    let mut registry = registry();
    registry.declare_interface("game.Greeter", &["greet"]).unwrap();
    registry
        .declare(
            "game.Friendly",
            &[BASE_CLASS, "game.Greeter"],
            PropertyBag::new().method("greet", noop()),
        )
        .unwrap();
    registry
        .declare("game.Host", &[BASE_CLASS, "game.Friendly"], PropertyBag::new())
        .unwrap();

    assert!(registry.implements("game.Host", "game.Greeter"));
}

// =============================================================================
// Reserved names and namespaces
// =============================================================================

#[test]
fn reserved_identifiers_are_rejected() {
    let mut registry = registry();
    for reserved in ["superclass", "inherited", "constructor", "logger"] {
        let err = registry
            .declare(
                "game.Sneaky",
                &[BASE_CLASS],
                PropertyBag::new().property(reserved, true),
            )
            .unwrap_err();
        assert!(matches!(
            declaration_cause(err),
            ErrorKind::ReservedName { .. }
        ));
    }
    assert!(registry.resolve("game.Sneaky").is_none());
}

#[test]
fn declaration_creates_intermediate_namespaces() {
    let mut registry = registry();
    registry
        .declare("game.ui.widgets.Button", &[BASE_CLASS], PropertyBag::new())
        .unwrap();

    assert!(registry.resolve("game").is_some_and(Binding::is_namespace));
    assert!(registry.resolve("game.ui").is_some_and(Binding::is_namespace));
    assert!(registry
        .resolve("game.ui.widgets.Button")
        .is_some_and(|binding| binding.as_class().is_some()));
}

#[test]
fn class_segment_cannot_become_namespace() {
    let mut registry = registry();
    registry
        .declare("game.Hangman", &[BASE_CLASS], PropertyBag::new())
        .unwrap();

    let err = registry
        .declare("game.Hangman.Inner", &[BASE_CLASS], PropertyBag::new())
        .unwrap_err();
    assert!(matches!(
        declaration_cause(err),
        ErrorKind::NamespaceConflict { ref segment } if segment == "Hangman"
    ));
}

// =============================================================================
// Kinship
// =============================================================================

#[test]
fn every_class_is_an_object() {
    let mut registry = registry();
    registry
        .declare("game.Base", &[BASE_CLASS], PropertyBag::new())
        .unwrap();
    registry
        .declare("game.Derived", &["game.Base"], PropertyBag::new())
        .unwrap();

    assert!(registry.is_a("game.Derived", BASE_CLASS));
    assert!(registry.is_a("game.Derived", "game.Base"));
    assert!(registry.is_a(BASE_CLASS, BASE_CLASS));
    assert!(!registry.is_a("game.Base", "game.Derived"));
}

#[test]
fn mixins_do_not_join_the_superclass_chain() {
    let mut registry = registry();
    registry
        .declare("game.Mixin", &[BASE_CLASS], PropertyBag::new())
        .unwrap();
    registry
        .declare("game.Host", &[BASE_CLASS, "game.Mixin"], PropertyBag::new())
        .unwrap();

    assert!(!registry.is_a("game.Host", "game.Mixin"));
    let host = registry.resolve_class("game.Host").unwrap();
    assert_eq!(host.mixins, ["game.Mixin"]);
}
