use std::{
    cell::RefCell,
    rc::{Rc, Weak},
};

use futures::channel::oneshot;
use log::warn;

use stream_shared::{
    Field, PlayFuture, PlaybackError, PlayerHandle, Property, VideoDimensions,
};

use super::pending_call_queue::{PendingCall, PendingCallQueue};

/// Where imperative calls go, depending on the bridge's state
pub(crate) enum CallSink {
    /// No player yet: calls are queued
    Pending(PendingCallQueue),
    /// A player was just acquired and the queue is being flushed into it.
    /// Calls made meanwhile join the back of the queue.
    Draining {
        player: PlayerHandle,
        queue: PendingCallQueue,
    },
    /// Calls go straight to the player
    Ready(PlayerHandle),
    /// Calls are discarded
    Detached,
}

impl CallSink {
    pub(crate) fn shared() -> Rc<RefCell<CallSink>> {
        Rc::new(RefCell::new(CallSink::Pending(PendingCallQueue::new())))
    }

    fn player(&self) -> Option<&PlayerHandle> {
        match self {
            CallSink::Draining { player, .. } | CallSink::Ready(player) => Some(player),
            CallSink::Pending(_) | CallSink::Detached => None,
        }
    }

    pub(crate) fn pending_len(&self) -> usize {
        match self {
            CallSink::Pending(queue) | CallSink::Draining { queue, .. } => queue.len(),
            CallSink::Ready(_) | CallSink::Detached => 0,
        }
    }
}

/// Imperative access to the player behind a Bridge
///
/// A `StreamRef` can be handed out before the player exists. Calls made
/// while the bridge is still acquiring are queued and replayed, in order,
/// as soon as the player is acquired. Reads return `None` until then.
#[derive(Clone)]
pub struct StreamRef {
    sink: Weak<RefCell<CallSink>>,
}

impl StreamRef {
    pub(crate) fn new(sink: &Rc<RefCell<CallSink>>) -> Self {
        Self {
            sink: Rc::downgrade(sink),
        }
    }

    fn dispatch(&self, call: PendingCall) {
        let Some(sink) = self.sink.upgrade() else {
            warn!("StreamRef: bridge no longer exists, discarding call");
            return;
        };

        let mut sink = sink.borrow_mut();
        let player = match &mut *sink {
            CallSink::Pending(queue) | CallSink::Draining { queue, .. } => {
                queue.push(call);
                return;
            }
            CallSink::Ready(player) => player.clone(),
            CallSink::Detached => {
                warn!("StreamRef: bridge is detached, discarding call");
                return;
            }
        };
        // The player may call back into this StreamRef.
        drop(sink);

        call.apply(&player);
    }

    /// The live player, if one has been acquired
    pub fn player(&self) -> Option<PlayerHandle> {
        let sink = self.sink.upgrade()?;
        let sink = sink.borrow();
        sink.player().cloned()
    }

    pub fn is_ready(&self) -> bool {
        self.player().is_some()
    }

    /// Number of calls waiting for a player
    pub fn pending_calls(&self) -> usize {
        let Some(sink) = self.sink.upgrade() else {
            return 0;
        };
        let pending = sink.borrow().pending_len();
        pending
    }

    /// Start playback.
    ///
    /// Resolves with the player's own result once the call reaches it,
    /// with `PlaybackError::Detached` if the bridge is torn down first, and
    /// never if the player is never acquired.
    pub fn play(&self) -> PlayFuture {
        let (sender, receiver) = oneshot::channel();
        self.dispatch(PendingCall::Play(sender));
        Box::pin(async move {
            match receiver.await {
                Ok(play) => play.await,
                Err(oneshot::Canceled) => Err(PlaybackError::Detached),
            }
        })
    }

    pub fn pause(&self) {
        self.dispatch(PendingCall::Pause);
    }

    pub fn set_property(&self, property: Property) {
        self.dispatch(PendingCall::SetProperty(property));
    }

    /// Seek to `seconds`
    pub fn set_current_time(&self, seconds: f64) {
        self.set_property(Property::CurrentTime(seconds));
    }

    pub fn set_volume(&self, volume: f64) {
        self.set_property(Property::Volume(volume));
    }

    pub fn set_muted(&self, muted: bool) {
        self.set_property(Property::Muted(muted));
    }

    pub fn property(&self, field: Field) -> Option<Property> {
        self.player().map(|player| player.property(field))
    }

    pub fn current_time(&self) -> Option<f64> {
        self.property(Field::CurrentTime)
            .and_then(|property| property.as_number())
    }

    pub fn volume(&self) -> Option<f64> {
        self.property(Field::Volume)
            .and_then(|property| property.as_number())
    }

    pub fn muted(&self) -> Option<bool> {
        self.property(Field::Muted)
            .and_then(|property| property.as_bool())
    }

    pub fn video_dimensions(&self) -> Option<VideoDimensions> {
        self.player().map(|player| player.video_dimensions())
    }
}
