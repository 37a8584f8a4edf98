//! Command senders and the capability model.
//!
//! A capability is an abstract role a sender may satisfy, identified by a
//! Rust type. A command declares at most one *required* capability and any
//! number of *optional* ones. At execution time the resolver checks the
//! actual sender: a native match (the sender's concrete type is the
//! capability type) satisfies directly; otherwise an externally supplied
//! adapter may convert the sender into the capability. The original
//! design's class-hierarchy walk becomes this explicit adapter table.

use std::any::{Any, TypeId};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use herald_foundation::{Error, Result};

/// An entity that issues commands and receives responses.
pub trait CommandSender: Send + Sync {
    /// The sender's display name.
    fn name(&self) -> &str;

    /// Delivers a response message to the sender.
    fn send_message(&self, message: &str);

    /// Upcast for capability downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// Identifies a capability type.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CapabilityId {
    type_id: TypeId,
    name: &'static str,
}

impl CapabilityId {
    /// The capability id for the type `T`.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// The capability type's name, for error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if the value's concrete type is this capability type.
    #[must_use]
    pub fn matches(&self, value: &dyn Any) -> bool {
        value.type_id() == self.type_id
    }
}

impl fmt::Debug for CapabilityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CapabilityId({})", self.name)
    }
}

/// A command's declared sender requirement.
#[derive(Clone, Debug, Default)]
pub enum SenderRequirement {
    /// Any sender is admissible; no capability slots.
    #[default]
    None,
    /// The sender must satisfy `capability`, natively or by adaptation.
    /// Any `optional` slots fill independently and never reject.
    Required {
        /// The capability gating admissibility.
        capability: CapabilityId,
        /// Additional slots filled on a best-effort basis.
        optional: Vec<CapabilityId>,
    },
    /// Each capability slot fills independently; every sender is admissible.
    Optional(Vec<CapabilityId>),
}

/// Converts a sender into an owned capability instance, or declines.
pub type AdaptFn = Arc<dyn Fn(&dyn CommandSender) -> Option<Box<dyn Any + Send + Sync>> + Send + Sync>;

/// The capability-conversion table, keyed by capability type.
///
/// Supplied by the hosting layer; consulted whenever a sender does not
/// natively satisfy a declared capability.
#[derive(Clone, Default)]
pub struct AdapterRegistry {
    adapters: HashMap<CapabilityId, AdaptFn>,
}

impl AdapterRegistry {
    /// Creates an empty adapter registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an adapter producing capability `T` from a sender.
    pub fn register<T, F>(&mut self, adapt: F)
    where
        T: Send + Sync + 'static,
        F: Fn(&dyn CommandSender) -> Option<T> + Send + Sync + 'static,
    {
        self.adapters.insert(
            CapabilityId::of::<T>(),
            Arc::new(move |sender| {
                adapt(sender).map(|value| Box::new(value) as Box<dyn Any + Send + Sync>)
            }),
        );
    }

    /// Attempts to adapt the sender to the given capability.
    #[must_use]
    pub fn adapt(
        &self,
        sender: &dyn CommandSender,
        capability: CapabilityId,
    ) -> Option<Box<dyn Any + Send + Sync>> {
        self.adapters.get(&capability).and_then(|f| f(sender))
    }
}

impl fmt::Debug for AdapterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AdapterRegistry")
            .field("capabilities", &self.adapters.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// The adapted view of a sender for one invocation.
///
/// Records which capabilities the sender satisfies natively and owns any
/// adapted instances. Handlers reach a capability through
/// [`SenderView::capability`], which prefers the native downcast.
#[derive(Default)]
pub struct SenderView {
    native: HashSet<CapabilityId>,
    adapted: HashMap<CapabilityId, Box<dyn Any + Send + Sync>>,
}

impl SenderView {
    /// An empty view (no capability slots).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns true if the capability slot was filled, natively or by
    /// adaptation.
    #[must_use]
    pub fn satisfies(&self, capability: CapabilityId) -> bool {
        self.native.contains(&capability) || self.adapted.contains_key(&capability)
    }

    /// The adapted instance for capability `T`, if adaptation filled it.
    #[must_use]
    pub fn adapted<T: 'static>(&self) -> Option<&T> {
        self.adapted
            .get(&CapabilityId::of::<T>())
            .and_then(|boxed| boxed.downcast_ref::<T>())
    }

    /// The capability `T` as seen by this invocation: the sender itself
    /// when it natively is a `T`, else the adapted instance.
    #[must_use]
    pub fn capability<'a, T: 'static>(&'a self, sender: &'a dyn CommandSender) -> Option<&'a T> {
        sender
            .as_any()
            .downcast_ref::<T>()
            .or_else(|| self.adapted::<T>())
    }
}

impl fmt::Debug for SenderView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SenderView")
            .field("native", &self.native)
            .field("adapted", &self.adapted.keys().collect::<Vec<_>>())
            .finish()
    }
}

/// Decides admissibility of a sender against a requirement and produces
/// the adapted view.
///
/// A required capability is satisfied by a native type match or a
/// successful adaptation; otherwise the sender is inadmissible. Optional
/// capability slots fill independently and never reject the sender.
///
/// # Errors
///
/// Fails with `IncompatibleSender` when a required capability can be
/// neither matched nor adapted.
pub fn resolve_sender(
    requirement: &SenderRequirement,
    sender: &dyn CommandSender,
    adapters: &AdapterRegistry,
) -> Result<SenderView> {
    let mut view = SenderView::empty();

    match requirement {
        SenderRequirement::None => {}
        SenderRequirement::Required {
            capability,
            optional,
        } => {
            if !fill_slot(&mut view, *capability, sender, adapters) {
                return Err(Error::incompatible_sender(capability.name()));
            }
            for capability in optional {
                fill_slot(&mut view, *capability, sender, adapters);
            }
        }
        SenderRequirement::Optional(capabilities) => {
            for capability in capabilities {
                fill_slot(&mut view, *capability, sender, adapters);
            }
        }
    }

    Ok(view)
}

/// Fills one capability slot, preferring a native match over adaptation.
/// Returns whether the slot was filled.
fn fill_slot(
    view: &mut SenderView,
    capability: CapabilityId,
    sender: &dyn CommandSender,
    adapters: &AdapterRegistry,
) -> bool {
    if capability.matches(sender.as_any()) {
        view.native.insert(capability);
        true
    } else if let Some(instance) = adapters.adapt(sender, capability) {
        view.adapted.insert(capability, instance);
        true
    } else {
        false
    }
}
