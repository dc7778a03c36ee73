use std::{any::Any, cell::RefCell, marker::PhantomData, rc::Rc};

use log::{debug, info};

use stream_shared::PlayerHandle;

use crate::error::HostError;

/// The host's constructor for player objects, callable once its script has
/// loaded
pub trait PlayerFactory<E> {
    /// Wrap the embedding surface's root element in a ready-to-use player
    fn create(&self, element: &E) -> PlayerHandle;
}

impl<E, F> PlayerFactory<E> for F
where
    F: Fn(&E) -> PlayerHandle,
{
    fn create(&self, element: &E) -> PlayerHandle {
        self(element)
    }
}

/// Narrow accessor for the host factory, which only exists after an
/// external load completes
pub trait FactoryAccessor<E> {
    fn factory(&self) -> Option<Rc<dyn PlayerFactory<E>>>;
}

thread_local! {
    static HOST_FACTORY: RefCell<Option<Rc<dyn Any>>> = RefCell::new(None);
}

/// Publish the host factory for this thread. Installing a second factory
/// without uninstalling the first is refused.
pub fn install_host_factory<E: 'static>(
    factory: Rc<dyn PlayerFactory<E>>,
) -> Result<(), HostError> {
    HOST_FACTORY.with(|slot| {
        let mut slot = slot.borrow_mut();
        if slot.is_some() {
            return Err(HostError::FactoryAlreadyInstalled);
        }
        info!("Host player factory installed");
        *slot = Some(Rc::new(factory));
        Ok(())
    })
}

/// Withdraw the host factory, returning whether one was installed
pub fn uninstall_host_factory() -> bool {
    HOST_FACTORY.with(|slot| slot.borrow_mut().take().is_some())
}

/// Reads the factory published with `install_host_factory`
pub struct GlobalHost<E> {
    phantom_e: PhantomData<fn(&E)>,
}

impl<E> GlobalHost<E> {
    pub fn new() -> Self {
        Self {
            phantom_e: PhantomData,
        }
    }
}

impl<E> Default for GlobalHost<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: 'static> FactoryAccessor<E> for GlobalHost<E> {
    fn factory(&self) -> Option<Rc<dyn PlayerFactory<E>>> {
        HOST_FACTORY.with(|slot| {
            let slot = slot.borrow();
            let installed = slot.as_ref()?;
            let factory = installed.downcast_ref::<Rc<dyn PlayerFactory<E>>>();
            if factory.is_none() {
                debug!("Installed host factory does not accept this element type");
            }
            factory.cloned()
        })
    }
}
