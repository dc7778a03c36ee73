use std::{fmt, rc::Rc};

use crate::{error::ExternalRuntimeError, events::event_kind::EventKind};

/// What a callback receives when the player dispatches an event
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerEvent {
    pub kind: EventKind,
    /// Set for `EventKind::Error`, carrying the player's report untouched
    pub error: Option<ExternalRuntimeError>,
}

impl PlayerEvent {
    pub fn new(kind: EventKind) -> Self {
        Self { kind, error: None }
    }

    pub fn error(error: ExternalRuntimeError) -> Self {
        Self {
            kind: EventKind::Error,
            error: Some(error),
        }
    }
}

/// A declared event handler
///
/// Two callbacks are equal only if they are clones of the same allocation.
/// Wrapping the same closure twice yields two distinct handlers, which is
/// what lets the binding manager tell "unchanged" from "replaced".
#[derive(Clone)]
pub struct Callback {
    inner: Rc<dyn Fn(&PlayerEvent)>,
}

impl Callback {
    pub fn new(handler: impl Fn(&PlayerEvent) + 'static) -> Self {
        Self {
            inner: Rc::new(handler),
        }
    }

    pub fn emit(&self, event: &PlayerEvent) {
        (self.inner)(event)
    }

    /// Reference identity, ignoring vtable pointers
    pub fn same_as(&self, other: &Callback) -> bool {
        self.id() == other.id()
    }

    /// Address of the shared handler, stable for the life of every clone
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.inner) as *const () as usize
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Callback {}

impl fmt::Debug for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Callback({:#x})", self.id())
    }
}
