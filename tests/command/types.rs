//! Integration tests for the type registry.

use herald_command::{ParameterType, TypeRegistry};
use herald_foundation::{ErrorKind, Value};
use std::collections::BTreeSet;

// =============================================================================
// Built-ins
// =============================================================================

#[test]
fn builtin_text_passes_through() {
    let registry = TypeRegistry::new();
    let value = registry.get("text").unwrap().parse("as is").unwrap();
    assert_eq!(value, Value::from("as is"));
}

#[test]
fn builtin_integer_accepts_and_rejects() {
    let registry = TypeRegistry::new();
    let integer = registry.get("integer").unwrap();
    assert_eq!(integer.parse("-17").unwrap(), Value::Int(-17));
    assert!(integer.parse("seventeen").is_err());
    assert!(integer.parse("1.5").is_err());
}

#[test]
fn builtin_float_accepts_and_rejects() {
    let registry = TypeRegistry::new();
    let float = registry.get("float").unwrap();
    assert_eq!(float.parse("2.5").unwrap(), Value::Float(2.5));
    assert!(float.parse("two point five").is_err());
}

#[test]
fn builtin_boolean_accepts_words_and_digits() {
    let registry = TypeRegistry::new();
    let boolean = registry.get("boolean").unwrap();
    assert_eq!(boolean.parse("true").unwrap(), Value::Bool(true));
    assert_eq!(boolean.parse("FALSE").unwrap(), Value::Bool(false));
    assert_eq!(boolean.parse("1").unwrap(), Value::Bool(true));
    assert_eq!(boolean.parse("0").unwrap(), Value::Bool(false));
    assert!(boolean.parse("yes").is_err());
}

#[test]
fn boolean_suggests_its_values() {
    let registry = TypeRegistry::new();
    let values = registry.get("boolean").unwrap().values().expect("has values")();
    assert_eq!(
        values,
        BTreeSet::from(["true".to_string(), "false".to_string()])
    );
}

#[test]
fn bare_registry_has_no_builtins() {
    let registry = TypeRegistry::bare();
    assert!(!registry.contains("text"));
}

// =============================================================================
// Registration
// =============================================================================

#[test]
fn unknown_kind_is_unsupported_type() {
    let registry = TypeRegistry::new();
    let err = registry.get("duration").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::UnsupportedType { .. }));
}

#[test]
fn custom_kind_registration() {
    let mut registry = TypeRegistry::new();
    registry.register(ParameterType::new("percent", |raw| {
        raw.trim_end_matches('%')
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| herald_foundation::Error::invalid_argument("percent", raw))
    }));

    assert_eq!(
        registry.get("percent").unwrap().parse("45%").unwrap(),
        Value::Int(45)
    );
}

#[test]
fn reregistration_silently_overwrites() {
    let mut registry = TypeRegistry::new();
    registry.register(ParameterType::new("boolean", |raw| {
        match raw {
            "yes" => Ok(Value::Bool(true)),
            "no" => Ok(Value::Bool(false)),
            _ => Err(herald_foundation::Error::invalid_argument("boolean", raw)),
        }
    }));

    let boolean = registry.get("boolean").unwrap();
    assert_eq!(boolean.parse("yes").unwrap(), Value::Bool(true));
    assert!(boolean.parse("true").is_err());
}

// =============================================================================
// Enumerations
// =============================================================================

#[test]
fn enum_kind_yields_canonical_variant() {
    let mut registry = TypeRegistry::new();
    registry.register_enum("gamemode", ["Survival", "Creative", "Spectator"]);

    let gamemode = registry.get("gamemode").unwrap();
    assert_eq!(gamemode.parse("survival").unwrap(), Value::from("Survival"));
    assert_eq!(gamemode.parse("CREATIVE").unwrap(), Value::from("Creative"));
    assert!(gamemode.parse("hardcore").is_err());
}

#[test]
fn enum_kind_suggests_variants() {
    let mut registry = TypeRegistry::new();
    registry.register_enum("gamemode", ["Survival", "Creative"]);

    let values = registry.get("gamemode").unwrap().values().expect("has values")();
    assert_eq!(
        values,
        BTreeSet::from(["Survival".to_string(), "Creative".to_string()])
    );
}
