use crate::events::{callback::Callback, event_kind::EventKind};

/// The declared handler for every event, at most one per event
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CallbackSet {
    slots: [Option<Callback>; EventKind::COUNT],
}

impl CallbackSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a set with `callback` declared for `kind`, replacing any
    /// handler previously declared for it
    pub fn with(mut self, kind: EventKind, callback: Callback) -> Self {
        self.slots[kind.index()] = Some(callback);
        self
    }

    /// Returns a set with no handler declared for `kind`
    pub fn without(mut self, kind: EventKind) -> Self {
        self.slots[kind.index()] = None;
        self
    }

    pub fn get(&self, kind: EventKind) -> Option<&Callback> {
        self.slots[kind.index()].as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Declared handlers in `EventKind::ALL` order
    pub fn iter(&self) -> impl Iterator<Item = (EventKind, &Callback)> {
        EventKind::ALL
            .into_iter()
            .filter_map(|kind| self.get(kind).map(|callback| (kind, callback)))
    }
}
