//! Integration tests for the dispatch pipeline.

use herald_command::{AdapterRegistry, CommandBuilder, CommandSender, DefaultValue, ParamSpec};
use herald_engine::Dispatcher;
use herald_foundation::{Error, ErrorKind, Value};
use std::any::Any;
use std::sync::Arc;

struct Silent;

impl CommandSender for Silent {
    fn name(&self) -> &str {
        "#"
    }

    fn send_message(&self, _message: &str) {}

    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct Operator;

// =============================================================================
// Resolution
// =============================================================================

#[test]
fn unknown_input_is_not_a_command() {
    let dispatcher = Dispatcher::new();
    let err = dispatcher.dispatch(&Silent, "warp 9").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NotACommand { .. }));
}

#[test]
fn alias_resolves_to_the_same_handler() {
    let dispatcher = Dispatcher::new();
    dispatcher
        .register(
            CommandBuilder::new("teleport")
                .alias("tp")
                .param(ParamSpec::new("target", "text"))
                .handler(|_, _, args| Ok(Value::from(args.str("target").unwrap_or_default()))),
        )
        .unwrap();

    assert_eq!(
        dispatcher.dispatch(&Silent, "teleport home").unwrap(),
        Value::from("home")
    );
    assert_eq!(
        dispatcher.dispatch(&Silent, "tp home").unwrap(),
        Value::from("home")
    );
}

#[test]
fn longest_path_wins_over_its_prefix() {
    let dispatcher = Dispatcher::new();
    dispatcher
        .register(CommandBuilder::new("map").handler(|_, _, _| Ok(Value::from("map"))))
        .unwrap();
    dispatcher
        .register(CommandBuilder::new("map zoom").handler(|_, _, _| Ok(Value::from("zoom"))))
        .unwrap();

    assert_eq!(
        dispatcher.dispatch(&Silent, "map zoom").unwrap(),
        Value::from("zoom")
    );
    assert_eq!(dispatcher.dispatch(&Silent, "map").unwrap(), Value::from("map"));
}

#[test]
fn duplicate_registration_fails() {
    let dispatcher = Dispatcher::new();
    dispatcher
        .register(CommandBuilder::new("ping").handler(|_, _, _| Ok(Value::Null)))
        .unwrap();
    let err = dispatcher
        .register(CommandBuilder::new("ping").handler(|_, _, _| Ok(Value::Null)))
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::DuplicateCommand { .. }));
}

// =============================================================================
// Argument Plumbing
// =============================================================================

#[test]
fn quoted_arguments_survive_the_pipeline() {
    let dispatcher = Dispatcher::new();
    dispatcher
        .register(
            CommandBuilder::new("say")
                .param(ParamSpec::new("message", "text"))
                .handler(|_, _, args| Ok(Value::from(args.str("message").unwrap_or_default()))),
        )
        .unwrap();

    assert_eq!(
        dispatcher.dispatch(&Silent, "say \"hello there\"").unwrap(),
        Value::from("hello there")
    );
}

#[test]
fn raw_tokens_pass_through_a_parameterless_command() {
    let dispatcher = Dispatcher::new();
    dispatcher
        .register(CommandBuilder::new("c").handler(|_, _, args| {
            Ok(Value::List(
                args.raw().iter().map(|t| Value::from(t.as_str())).collect(),
            ))
        }))
        .unwrap();

    let result = dispatcher.dispatch(&Silent, "c one two three").unwrap();
    assert_eq!(result.to_string(), "[one two three]");
}

#[test]
fn flags_and_defaults_flow_end_to_end() {
    let dispatcher = Dispatcher::new();
    dispatcher
        .register(
            CommandBuilder::new("greet")
                .param(ParamSpec::new("name", "text").default(DefaultValue::of("world")))
                .param(ParamSpec::new("shout", "boolean").default(DefaultValue::of("false")))
                .handler(|_, _, args| {
                    let name = args.str("name").unwrap_or("world");
                    let text = format!("hello {name}");
                    Ok(Value::from(if args.bool("shout") == Some(true) {
                        text.to_uppercase()
                    } else {
                        text
                    }))
                }),
        )
        .unwrap();

    assert_eq!(
        dispatcher.dispatch(&Silent, "greet").unwrap(),
        Value::from("hello world")
    );
    assert_eq!(
        dispatcher.dispatch(&Silent, "greet -s ada").unwrap(),
        Value::from("HELLO ADA")
    );
}

// =============================================================================
// Sender Checks and Failures
// =============================================================================

#[test]
fn required_capability_gates_execution() {
    let mut adapters = AdapterRegistry::new();
    adapters.register::<Operator, _>(|sender| (sender.name() == "root").then_some(Operator));

    let dispatcher = Dispatcher::new().with_adapters(adapters);
    dispatcher
        .register(
            CommandBuilder::new("shutdown")
                .require_sender::<Operator>()
                .handler(|_, _, _| Ok(Value::from("down"))),
        )
        .unwrap();

    let err = dispatcher.dispatch(&Silent, "shutdown").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IncompatibleSender { .. }));
}

#[test]
fn handler_errors_pass_through_unchanged() {
    let dispatcher = Dispatcher::new();
    dispatcher
        .register(
            CommandBuilder::new("fail")
                .handler(|_, _, _| Err(Error::command("it broke"))),
        )
        .unwrap();

    let err = dispatcher.dispatch(&Silent, "fail").unwrap_err();
    assert_eq!(err.to_string(), "it broke");
    assert!(err.context.is_none());
}

#[test]
fn binding_failures_carry_command_and_input_context() {
    let dispatcher = Dispatcher::new();
    dispatcher
        .register(
            CommandBuilder::new("sum")
                .param(ParamSpec::new("value", "integer"))
                .handler(|_, _, _| Ok(Value::Null)),
        )
        .unwrap();

    let err = dispatcher.dispatch(&Silent, "sum nine").unwrap_err();
    let context = err.context.expect("context attached");
    assert_eq!(context.command.as_deref(), Some("sum"));
    assert_eq!(context.input.as_deref(), Some("sum nine"));
}

// =============================================================================
// Custom Types
// =============================================================================

#[test]
fn custom_type_registry_flows_into_binding() {
    let mut types = herald_command::TypeRegistry::new();
    types.register_enum("direction", ["north", "south"]);

    let dispatcher = Dispatcher::new().with_types(types);
    dispatcher
        .register(
            CommandBuilder::new("walk")
                .param(ParamSpec::new("heading", "direction"))
                .handler(|_, _, args| Ok(Value::from(args.str("heading").unwrap_or_default()))),
        )
        .unwrap();

    assert_eq!(
        dispatcher.dispatch(&Silent, "walk NORTH").unwrap(),
        Value::from("north")
    );
    let err = dispatcher.dispatch(&Silent, "walk up").unwrap_err();
    assert!(matches!(err.kind, ErrorKind::InvalidArgument { .. }));
}

// =============================================================================
// Concurrency
// =============================================================================

#[test]
fn registration_and_dispatch_from_separate_threads() {
    let dispatcher = Arc::new(Dispatcher::new());
    dispatcher
        .register(CommandBuilder::new("ping").handler(|_, _, _| Ok(Value::from("pong"))))
        .unwrap();

    let writer = {
        let dispatcher = Arc::clone(&dispatcher);
        std::thread::spawn(move || {
            for i in 0..32 {
                dispatcher
                    .register(
                        CommandBuilder::new(format!("cmd{i}"))
                            .handler(|_, _, _| Ok(Value::Null)),
                    )
                    .unwrap();
            }
        })
    };

    for _ in 0..128 {
        assert_eq!(
            dispatcher.dispatch(&Silent, "ping").unwrap(),
            Value::from("pong")
        );
    }
    writer.join().expect("writer thread");
    assert_eq!(dispatcher.commands().len(), 33);
}
