//! Integration tests for sender capability resolution.

use herald_command::{
    AdapterRegistry, CapabilityId, CommandBuilder, CommandSender, SenderRequirement, TypeRegistry,
    resolve_sender,
};
use herald_foundation::{ErrorKind, Value};
use std::any::Any;
use std::sync::atomic::{AtomicUsize, Ordering};

struct ChatUser {
    nick: String,
}

impl CommandSender for ChatUser {
    fn name(&self) -> &str {
        &self.nick
    }

    fn send_message(&self, _message: &str) {}

    fn as_any(&self) -> &dyn Any {
        self
    }
}

struct Moderator {
    level: u8,
}

fn ada() -> ChatUser {
    ChatUser {
        nick: "ada".to_string(),
    }
}

// =============================================================================
// Required Capabilities
// =============================================================================

#[test]
fn native_match_admits_without_calling_adapt() {
    static CALLS: AtomicUsize = AtomicUsize::new(0);

    let mut adapters = AdapterRegistry::new();
    adapters.register::<ChatUser, _>(|_| {
        CALLS.fetch_add(1, Ordering::SeqCst);
        None
    });

    let sender = ada();
    let requirement = SenderRequirement::Required {
        capability: CapabilityId::of::<ChatUser>(),
        optional: Vec::new(),
    };
    let view = resolve_sender(&requirement, &sender, &adapters).expect("admitted");

    assert!(view.satisfies(CapabilityId::of::<ChatUser>()));
    assert_eq!(CALLS.load(Ordering::SeqCst), 0);
}

#[test]
fn adapter_admits_a_non_native_sender() {
    let mut adapters = AdapterRegistry::new();
    adapters.register::<Moderator, _>(|sender| {
        (sender.name() == "ada").then_some(Moderator { level: 3 })
    });

    let sender = ada();
    let requirement = SenderRequirement::Required {
        capability: CapabilityId::of::<Moderator>(),
        optional: Vec::new(),
    };
    let view = resolve_sender(&requirement, &sender, &adapters).expect("adapted");

    assert_eq!(view.adapted::<Moderator>().map(|m| m.level), Some(3));
    assert_eq!(view.capability::<Moderator>(&sender).map(|m| m.level), Some(3));
}

#[test]
fn declining_adapter_rejects_with_incompatible_sender() {
    let mut adapters = AdapterRegistry::new();
    adapters.register::<Moderator, _>(|_| None);

    let sender = ada();
    let requirement = SenderRequirement::Required {
        capability: CapabilityId::of::<Moderator>(),
        optional: Vec::new(),
    };
    let err = resolve_sender(&requirement, &sender, &adapters).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IncompatibleSender { .. }));
}

#[test]
fn missing_adapter_rejects_too() {
    let sender = ada();
    let requirement = SenderRequirement::Required {
        capability: CapabilityId::of::<Moderator>(),
        optional: Vec::new(),
    };
    let err = resolve_sender(&requirement, &sender, &AdapterRegistry::new()).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IncompatibleSender { .. }));
}

// =============================================================================
// Optional Capabilities
// =============================================================================

#[test]
fn optional_slots_fill_independently() {
    let mut adapters = AdapterRegistry::new();
    adapters.register::<Moderator, _>(|sender| {
        (sender.name() == "ada").then_some(Moderator { level: 1 })
    });

    let sender = ada();
    let requirement = SenderRequirement::Optional(vec![
        CapabilityId::of::<ChatUser>(),
        CapabilityId::of::<Moderator>(),
    ]);
    let view = resolve_sender(&requirement, &sender, &adapters).expect("always admitted");

    assert!(view.satisfies(CapabilityId::of::<ChatUser>()));
    assert!(view.satisfies(CapabilityId::of::<Moderator>()));
}

#[test]
fn unfilled_optional_slot_never_rejects() {
    let sender = ada();
    let requirement = SenderRequirement::Optional(vec![CapabilityId::of::<Moderator>()]);
    let view = resolve_sender(&requirement, &sender, &AdapterRegistry::new()).expect("admitted");
    assert!(!view.satisfies(CapabilityId::of::<Moderator>()));
    assert!(view.capability::<Moderator>(&sender).is_none());
}

// =============================================================================
// Capability Access
// =============================================================================

#[test]
fn capability_prefers_the_native_sender() {
    let sender = ada();
    let requirement = SenderRequirement::Required {
        capability: CapabilityId::of::<ChatUser>(),
        optional: Vec::new(),
    };
    let view = resolve_sender(&requirement, &sender, &AdapterRegistry::new()).expect("admitted");

    let user = view.capability::<ChatUser>(&sender).expect("native access");
    assert_eq!(user.nick, "ada");
}

#[test]
fn no_requirement_yields_an_empty_view() {
    let sender = ada();
    let view =
        resolve_sender(&SenderRequirement::None, &sender, &AdapterRegistry::new()).expect("admitted");
    assert!(!view.satisfies(CapabilityId::of::<ChatUser>()));
}

// =============================================================================
// Mixed Requirements
// =============================================================================

#[test]
fn optional_slots_fill_alongside_a_required_capability() {
    let types = TypeRegistry::new();
    let descriptor = CommandBuilder::new("kick")
        .require_sender::<ChatUser>()
        .optional_sender::<Moderator>()
        .handler(|_, _, _| Ok(Value::Null))
        .build(&types)
        .unwrap();

    let mut adapters = AdapterRegistry::new();
    adapters.register::<Moderator, _>(|sender| {
        (sender.name() == "ada").then_some(Moderator { level: 7 })
    });

    let sender = ada();
    let view =
        resolve_sender(descriptor.sender_requirement(), &sender, &adapters).expect("admitted");
    assert!(view.satisfies(CapabilityId::of::<ChatUser>()));
    assert_eq!(view.adapted::<Moderator>().map(|m| m.level), Some(7));
}

#[test]
fn required_capability_still_gates_when_optionals_are_declared() {
    let types = TypeRegistry::new();
    let descriptor = CommandBuilder::new("kick")
        .require_sender::<Moderator>()
        .optional_sender::<ChatUser>()
        .handler(|_, _, _| Ok(Value::Null))
        .build(&types)
        .unwrap();

    let sender = ada();
    let err = resolve_sender(descriptor.sender_requirement(), &sender, &AdapterRegistry::new())
        .unwrap_err();
    assert!(matches!(err.kind, ErrorKind::IncompatibleSender { .. }));
}
