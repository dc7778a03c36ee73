use std::{fmt, ops::Deref, rc::Rc};

use crate::player::player_api::PlayerApi;

/// Shared reference to a live player object
///
/// Identity is the identity of the underlying object, so a handle can be
/// checked against the one a subscription was made on.
#[derive(Clone)]
pub struct PlayerHandle {
    inner: Rc<dyn PlayerApi>,
}

impl PlayerHandle {
    pub fn new<P: PlayerApi + 'static>(player: P) -> Self {
        Self {
            inner: Rc::new(player),
        }
    }

    pub fn from_rc(inner: Rc<dyn PlayerApi>) -> Self {
        Self { inner }
    }

    pub fn same_as(&self, other: &PlayerHandle) -> bool {
        self.id() == other.id()
    }

    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.inner) as *const () as usize
    }
}

impl Deref for PlayerHandle {
    type Target = dyn PlayerApi;

    fn deref(&self) -> &Self::Target {
        self.inner.as_ref()
    }
}

impl fmt::Debug for PlayerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlayerHandle({:#x})", self.id())
    }
}
