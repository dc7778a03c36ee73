use log::{debug, warn};

use stream_shared::{Callback, CallbackSet, EventKind, PlayerHandle};

use crate::error::BridgeError;

/// One live subscription, remembered together with the player it was
/// made on
struct Binding {
    callback: Callback,
    player: PlayerHandle,
}

/// Keeps exactly the declared callbacks subscribed on the player
///
/// The table holds one slot per event, so a second subscription for the
/// same event cannot be represented: a slot must be emptied (and its
/// callback unsubscribed) before it can be filled again.
pub struct EventBindingManager {
    bindings: [Option<Binding>; EventKind::COUNT],
}

impl Default for EventBindingManager {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBindingManager {
    pub fn new() -> Self {
        Self {
            bindings: std::array::from_fn(|_| None),
        }
    }

    /// Callback currently subscribed for `kind`, if any
    pub fn active(&self, kind: EventKind) -> Option<&Callback> {
        self.bindings[kind.index()]
            .as_ref()
            .map(|binding| &binding.callback)
    }

    pub fn active_count(&self) -> usize {
        self.bindings.iter().filter(|slot| slot.is_some()).count()
    }

    /// Bring the subscriptions on `player` in line with `next`.
    ///
    /// Unchanged callbacks are left alone. A replaced callback is
    /// unsubscribed before its successor is subscribed. Bindings left over
    /// from a different player are dropped without being unsubscribed.
    pub fn reconcile(&mut self, player: &PlayerHandle, next: &CallbackSet) {
        for kind in EventKind::ALL {
            let slot = &mut self.bindings[kind.index()];
            let wanted = next.get(kind);

            if let Some(binding) = slot.as_ref() {
                if !binding.player.same_as(player) {
                    let error = BridgeError::stale_handle(kind, binding.player.id(), player.id());
                    warn!("EventBindingManager: discarding binding. {}", error);
                    *slot = None;
                } else if wanted.is_some_and(|callback| callback.same_as(&binding.callback)) {
                    continue;
                }
            }

            if let Some(binding) = slot.take() {
                debug!("EventBindingManager: unsubscribe {} {:?}", kind.name(), binding.callback);
                binding.player.remove_event_listener(kind, &binding.callback);
            }

            if let Some(callback) = wanted {
                debug!("EventBindingManager: subscribe {} {:?}", kind.name(), callback);
                player.add_event_listener(kind, callback);
                *slot = Some(Binding {
                    callback: callback.clone(),
                    player: player.clone(),
                });
            }
        }
    }

    /// Unsubscribe everything, each through the player it was bound on.
    /// Returns the number of subscriptions removed.
    pub fn unbind_all(&mut self) -> usize {
        let mut removed = 0;
        for kind in EventKind::ALL {
            if let Some(binding) = self.bindings[kind.index()].take() {
                binding.player.remove_event_listener(kind, &binding.callback);
                removed += 1;
            }
        }
        removed
    }

    /// Forget every subscription without unsubscribing. Used when the
    /// player is being destroyed along with its embed.
    pub fn discard(&mut self) -> usize {
        let mut discarded = 0;
        for slot in self.bindings.iter_mut() {
            if slot.take().is_some() {
                discarded += 1;
            }
        }
        discarded
    }
}
