//! Integration tests for Error, ErrorKind, and ErrorContext.

use herald_foundation::{Error, ErrorContext, ErrorKind};

#[test]
fn not_a_command_carries_input() {
    let err = Error::not_a_command("frobnicate now");
    assert!(matches!(err.kind, ErrorKind::NotACommand { .. }));
    assert!(err.to_string().contains("frobnicate now"));
}

#[test]
fn duplicate_command_renders_joined_path() {
    let err = Error::duplicate_command(vec!["map".to_string(), "zoom".to_string()]);
    assert!(err.to_string().contains("map zoom"));
}

#[test]
fn invalid_argument_names_parameter_and_value() {
    let err = Error::invalid_argument("count", "abc");
    let msg = err.to_string();
    assert!(msg.contains("count"));
    assert!(msg.contains("abc"));
}

#[test]
fn missing_argument_names_parameter() {
    let err = Error::missing_argument("target");
    assert!(matches!(err.kind, ErrorKind::MissingArgument { .. }));
    assert!(err.to_string().contains("target"));
}

#[test]
fn invalid_parameter_carries_token() {
    let err = Error::invalid_parameter("--frob");
    assert!(err.to_string().contains("--frob"));
}

#[test]
fn incompatible_sender_names_capability() {
    let err = Error::incompatible_sender("Moderator");
    assert!(matches!(err.kind, ErrorKind::IncompatibleSender { .. }));
    assert!(err.to_string().contains("Moderator"));
}

#[test]
fn multiple_required_senders_names_both() {
    let err = Error::multiple_required_senders("Player", "Admin");
    let msg = err.to_string();
    assert!(msg.contains("Player"));
    assert!(msg.contains("Admin"));
}

#[test]
fn construction_kinds() {
    assert!(matches!(
        Error::duplicate_parameter("who").kind,
        ErrorKind::DuplicateParameter { .. }
    ));
    assert!(matches!(
        Error::duplicate_flag('x').kind,
        ErrorKind::DuplicateFlag { flag: 'x' }
    ));
    assert!(matches!(
        Error::invalid_default("reason").kind,
        ErrorKind::InvalidDefault { .. }
    ));
    assert!(matches!(
        Error::unsupported_type("duration").kind,
        ErrorKind::UnsupportedType { .. }
    ));
}

#[test]
fn command_error_is_its_message() {
    let err = Error::command("you cannot do that here");
    assert_eq!(err.to_string(), "you cannot do that here");
}

#[test]
fn context_attaches_command_and_input() {
    let err = Error::missing_argument("target").with_context(
        ErrorContext::new()
            .with_command("teleport")
            .with_input("teleport"),
    );
    let context = err.context.expect("context set");
    assert_eq!(context.command.as_deref(), Some("teleport"));
    assert_eq!(context.input.as_deref(), Some("teleport"));
    let rendered = context.to_string();
    assert!(rendered.contains("teleport"));
}

#[test]
fn errors_are_std_errors() {
    fn takes_std_error(_: &dyn std::error::Error) {}
    takes_std_error(&Error::not_a_command("x"));
}
