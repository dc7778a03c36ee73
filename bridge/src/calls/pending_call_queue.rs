use std::collections::VecDeque;

use futures::channel::oneshot;
use log::debug;

use stream_shared::{PlayFuture, PlayerHandle, Property};

/// An imperative call issued through a `StreamRef`
pub(crate) enum PendingCall {
    SetProperty(Property),
    /// The player's play future is handed back through the sender
    Play(oneshot::Sender<PlayFuture>),
    Pause,
}

impl PendingCall {
    pub(crate) fn apply(self, player: &PlayerHandle) {
        match self {
            PendingCall::SetProperty(property) => player.set_property(property),
            PendingCall::Play(sender) => {
                // The caller may have dropped its future; playback still starts.
                let _ = sender.send(player.play());
            }
            PendingCall::Pause => player.pause(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            PendingCall::SetProperty(_) => "set_property",
            PendingCall::Play(_) => "play",
            PendingCall::Pause => "pause",
        }
    }
}

/// Calls issued before a player exists, kept in the order they were made
#[derive(Default)]
pub(crate) struct PendingCallQueue {
    calls: VecDeque<PendingCall>,
}

impl PendingCallQueue {
    pub(crate) fn new() -> Self {
        Self {
            calls: VecDeque::new(),
        }
    }

    pub(crate) fn push(&mut self, call: PendingCall) {
        debug!("PendingCallQueue: deferring {}", call.name());
        self.calls.push_back(call);
    }

    pub(crate) fn pop_front(&mut self) -> Option<PendingCall> {
        self.calls.pop_front()
    }

    pub(crate) fn len(&self) -> usize {
        self.calls.len()
    }

    #[cfg(test)]
    fn is_empty(&self) -> bool {
        self.calls.is_empty()
    }
}
