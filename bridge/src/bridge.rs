use std::{cell::RefCell, mem, rc::Rc};

use log::{info, warn};

use stream_shared::{ConfigSnapshot, PlayerHandle};

use crate::{
    acquisition::{
        gate::{AcquisitionGate, AcquisitionToken},
        host::FactoryAccessor,
    },
    bridge_config::{BridgeConfig, SourceChangePolicy},
    calls::{
        pending_call_queue::PendingCallQueue,
        stream_ref::{CallSink, StreamRef},
    },
    error::BridgeError,
    surface::EmbeddingSurface,
    sync::{
        attribute_synchronizer::AttributeSynchronizer,
        event_binding_manager::EventBindingManager,
    },
};

/// Lifecycle of a Bridge
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BridgeState {
    /// No configuration received yet, nothing embedded
    Unattached,
    /// Embedded, waiting for the host factory
    Acquiring,
    /// A player exists and mirrors the latest configuration
    Ready,
    /// Torn down. Terminal.
    Detached,
}

/// Keeps one embedded player consistent with a stream of configuration
/// snapshots
///
/// Feed every new snapshot to `update`, call `poll` whenever the host might
/// have finished loading, and hand `stream_ref()` to whoever needs
/// imperative access. Dropping the bridge tears it down.
pub struct Bridge<S: EmbeddingSurface> {
    config: BridgeConfig,
    surface: S,
    host: Rc<dyn FactoryAccessor<S::Element>>,
    state: BridgeState,
    element: Option<S::Element>,
    gate: Option<AcquisitionGate<S::Element>>,
    player: Option<PlayerHandle>,
    attributes: AttributeSynchronizer,
    events: EventBindingManager,
    /// Most recent snapshot received
    latest: Option<ConfigSnapshot>,
    /// Snapshot the current player was last synchronized to
    applied: Option<ConfigSnapshot>,
    sink: Rc<RefCell<CallSink>>,
}

impl<S: EmbeddingSurface> Bridge<S> {
    pub fn new(config: BridgeConfig, surface: S, host: Rc<dyn FactoryAccessor<S::Element>>) -> Self {
        Self {
            config,
            surface,
            host,
            state: BridgeState::Unattached,
            element: None,
            gate: None,
            player: None,
            attributes: AttributeSynchronizer::new(),
            events: EventBindingManager::new(),
            latest: None,
            applied: None,
            sink: CallSink::shared(),
        }
    }

    pub fn state(&self) -> BridgeState {
        self.state
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Element of the current embed, if any
    pub fn element(&self) -> Option<&S::Element> {
        self.element.as_ref()
    }

    pub fn player(&self) -> Option<&PlayerHandle> {
        self.player.as_ref()
    }

    pub fn latest(&self) -> Option<&ConfigSnapshot> {
        self.latest.as_ref()
    }

    pub fn events(&self) -> &EventBindingManager {
        &self.events
    }

    /// Liveness of the acquisition in progress, if there is one
    pub fn acquisition_token(&self) -> Option<AcquisitionToken> {
        self.gate.as_ref().map(|gate| gate.token())
    }

    /// Imperative handle to the player, usable before it exists
    pub fn stream_ref(&self) -> StreamRef {
        StreamRef::new(&self.sink)
    }

    /// Accept a new configuration.
    ///
    /// The first snapshot embeds the player. Later ones are diffed against
    /// what the live player was last given, or replace the embed when the
    /// source changes and the policy calls for it. Returns the state after
    /// an immediate acquisition attempt.
    pub fn update(&mut self, next: ConfigSnapshot) -> Result<BridgeState, BridgeError> {
        match self.state {
            BridgeState::Detached => {
                warn!("Bridge: ignoring configuration for '{}' after teardown", next.src());
                return Err(BridgeError::Detached {
                    operation: "configuration update",
                });
            }
            BridgeState::Unattached => {
                self.begin_acquisition(&next);
            }
            BridgeState::Acquiring => {
                let source_changed = self
                    .latest
                    .as_ref()
                    .is_some_and(|latest| latest.src() != next.src());
                if source_changed {
                    self.reembed(&next);
                }
            }
            BridgeState::Ready => {
                let previous = self.applied.take();
                let source_changed = previous
                    .as_ref()
                    .is_some_and(|previous| previous.src() != next.src());

                if source_changed && self.config.source_change == SourceChangePolicy::Reembed {
                    self.reembed(&next);
                } else if let Some(player) = self.player.clone() {
                    self.attributes.apply(previous.as_ref(), &next, &player);
                    self.events.reconcile(&player, next.callbacks());
                    self.applied = Some(next.clone());
                }
            }
        }

        self.latest = Some(next);
        Ok(self.poll())
    }

    /// Give the acquisition a chance to complete. On success the player is
    /// fully synchronized, every declared callback is subscribed and queued
    /// calls are replayed, in that order.
    pub fn poll(&mut self) -> BridgeState {
        if self.state != BridgeState::Acquiring {
            return self.state;
        }
        let Some(gate) = self.gate.as_mut() else {
            return self.state;
        };
        let Some(player) = gate.poll(self.host.as_ref()) else {
            return self.state;
        };
        self.gate = None;
        self.on_acquired(player);
        self.state
    }

    /// Unsubscribe every callback, drop queued calls, release the player and
    /// its embed. Nothing happens after this.
    pub fn teardown(&mut self) {
        if self.state == BridgeState::Detached {
            return;
        }

        let unsubscribed = self.events.unbind_all();
        if let Some(mut gate) = self.gate.take() {
            gate.cancel();
        }
        let discarded = mem::replace(&mut *self.sink.borrow_mut(), CallSink::Detached);
        let dropped_calls = discarded.pending_len();
        drop(discarded);

        self.player = None;
        self.applied = None;
        if let Some(element) = self.element.take() {
            self.surface.release(element);
        }
        self.state = BridgeState::Detached;

        info!(
            "Bridge: detached ({} subscriptions removed, {} queued calls dropped)",
            unsubscribed, dropped_calls
        );
    }

    fn begin_acquisition(&mut self, snapshot: &ConfigSnapshot) {
        let element = self.surface.embed(snapshot);
        self.gate = Some(AcquisitionGate::new(element.clone()));
        self.element = Some(element);
        self.state = BridgeState::Acquiring;
        info!("Bridge: embedded '{}', acquiring player", snapshot.src());
    }

    /// Throw away the current embed and whatever player lives in it, then
    /// start over for `snapshot`. The old player dies with its embed, so its
    /// subscriptions are forgotten rather than removed.
    fn reembed(&mut self, snapshot: &ConfigSnapshot) {
        let discarded = self.events.discard();
        if let Some(mut gate) = self.gate.take() {
            gate.cancel();
        }
        self.player = None;
        self.applied = None;
        {
            let mut sink = self.sink.borrow_mut();
            if matches!(&*sink, CallSink::Ready(_)) {
                *sink = CallSink::Pending(PendingCallQueue::new());
            }
        }
        if let Some(element) = self.element.take() {
            self.surface.release(element);
        }
        info!(
            "Bridge: source changed to '{}', re-embedding ({} subscriptions discarded)",
            snapshot.src(),
            discarded
        );
        self.begin_acquisition(snapshot);
    }

    fn on_acquired(&mut self, player: PlayerHandle) {
        let Some(snapshot) = self.latest.clone() else {
            warn!("Bridge: player acquired without a configuration");
            return;
        };

        let written = self.attributes.apply(None, &snapshot, &player);
        self.events.reconcile(&player, snapshot.callbacks());
        info!(
            "Bridge: ready, {} properties written, {} callbacks subscribed",
            written,
            self.events.active_count()
        );

        self.applied = Some(snapshot);
        self.player = Some(player.clone());
        self.state = BridgeState::Ready;
        self.drain_pending(player);
    }

    fn drain_pending(&mut self, player: PlayerHandle) {
        {
            let mut sink = self.sink.borrow_mut();
            let CallSink::Pending(queue) = mem::replace(&mut *sink, CallSink::Detached) else {
                *sink = CallSink::Ready(player);
                return;
            };
            *sink = CallSink::Draining {
                player: player.clone(),
                queue,
            };
        }

        loop {
            let call = {
                let mut sink = self.sink.borrow_mut();
                let CallSink::Draining { queue, .. } = &mut *sink else {
                    break;
                };
                match queue.pop_front() {
                    Some(call) => call,
                    None => {
                        *sink = CallSink::Ready(player.clone());
                        break;
                    }
                }
            };
            call.apply(&player);
        }
    }
}

impl<S: EmbeddingSurface> Drop for Bridge<S> {
    fn drop(&mut self) {
        self.teardown();
    }
}
