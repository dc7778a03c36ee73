use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use stream_bridge::{FactoryAccessor, PlayerFactory, PlayerHandle};

use super::{recording_player::RecordingPlayer, test_surface::TestElement};

#[derive(Default)]
struct HostState {
    installed: Cell<bool>,
    echo: Cell<bool>,
    created: RefCell<Vec<RecordingPlayer>>,
}

/// A host whose factory appears only when the test says so
#[derive(Clone, Default)]
pub struct TestHost {
    state: Rc<HostState>,
}

impl TestHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulate the host script finishing its load
    pub fn install(&self) {
        self.state.installed.set(true);
    }

    pub fn uninstall(&self) {
        self.state.installed.set(false);
    }

    /// Players created from now on echo their own play/pause events
    pub fn set_echo(&self, echo: bool) {
        self.state.echo.set(echo);
    }

    /// How many times the factory has been invoked
    pub fn created_count(&self) -> usize {
        self.state.created.borrow().len()
    }

    pub fn player(&self, index: usize) -> Option<RecordingPlayer> {
        self.state.created.borrow().get(index).cloned()
    }

    pub fn last_player(&self) -> Option<RecordingPlayer> {
        self.state.created.borrow().last().cloned()
    }

    pub fn accessor(&self) -> Rc<dyn FactoryAccessor<TestElement>> {
        Rc::new(self.clone())
    }
}

struct TestFactory {
    host: Rc<HostState>,
}

impl PlayerFactory<TestElement> for TestFactory {
    fn create(&self, element: &TestElement) -> PlayerHandle {
        let player = RecordingPlayer::new(element.0);
        player.set_echo(self.host.echo.get());
        self.host.created.borrow_mut().push(player.clone());
        PlayerHandle::new(player)
    }
}

impl FactoryAccessor<TestElement> for TestHost {
    fn factory(&self) -> Option<Rc<dyn PlayerFactory<TestElement>>> {
        if !self.state.installed.get() {
            return None;
        }
        Some(Rc::new(TestFactory {
            host: self.state.clone(),
        }))
    }
}
