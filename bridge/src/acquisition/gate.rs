use std::{cell::Cell, rc::Rc};

use log::{debug, info};

use stream_shared::PlayerHandle;

use super::host::FactoryAccessor;

/// Produces the player for one embedded element, at most once
///
/// The gate never blocks: each `poll` asks the host whether its factory has
/// appeared yet. A host whose script never loads simply leaves the gate
/// pending forever.
pub struct AcquisitionGate<E> {
    element: E,
    live: Rc<Cell<bool>>,
}

impl<E> AcquisitionGate<E> {
    pub fn new(element: E) -> Self {
        Self {
            element,
            live: Rc::new(Cell::new(true)),
        }
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    /// Still waiting for the factory: neither resolved nor cancelled
    pub fn is_pending(&self) -> bool {
        self.live.get()
    }

    /// A liveness flag for continuations scheduled outside the gate
    pub fn token(&self) -> AcquisitionToken {
        AcquisitionToken {
            live: self.live.clone(),
        }
    }

    /// Invoke the factory if it is available and has not been invoked yet
    pub fn poll(&mut self, host: &dyn FactoryAccessor<E>) -> Option<PlayerHandle> {
        if !self.live.get() {
            return None;
        }
        let Some(factory) = host.factory() else {
            debug!("AcquisitionGate: host factory not available yet");
            return None;
        };

        self.live.set(false);
        let player = factory.create(&self.element);
        info!("AcquisitionGate: acquired player {:?}", player);
        Some(player)
    }

    /// Abandon the acquisition. Nothing is invoked after this.
    pub fn cancel(&mut self) {
        if self.live.replace(false) {
            info!("AcquisitionGate: pending acquisition cancelled");
        }
    }
}

impl<E> Drop for AcquisitionGate<E> {
    fn drop(&mut self) {
        self.live.set(false);
    }
}

/// Lets a deferred continuation check whether its acquisition still matters
#[derive(Clone, Debug)]
pub struct AcquisitionToken {
    live: Rc<Cell<bool>>,
}

impl AcquisitionToken {
    pub fn is_live(&self) -> bool {
        self.live.get()
    }
}
