use thiserror::Error;

use stream_shared::EventKind;

/// Errors that can occur while driving a Bridge
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BridgeError {
    /// The bridge has been torn down and accepts no further work
    #[error("Bridge has been detached, no further {operation} is possible")]
    Detached { operation: &'static str },

    /// A subscription was bound to a player that has since been replaced.
    /// It is dropped without touching the old player.
    #[error("Subscription for '{event}' targets player {bound_to:#x}, but the live player is {live:#x}")]
    StaleHandle {
        event: &'static str,
        bound_to: usize,
        live: usize,
    },
}

impl BridgeError {
    pub(crate) fn stale_handle(event: EventKind, bound_to: usize, live: usize) -> Self {
        Self::StaleHandle {
            event: event.name(),
            bound_to,
            live,
        }
    }
}

/// Errors from the process-wide host factory slot
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HostError {
    /// A factory is already installed; it must be uninstalled first
    #[error("A host player factory is already installed on this thread")]
    FactoryAlreadyInstalled,
}
