use std::rc::Rc;

use js_sys::{Function, Reflect};
use log::warn;
use wasm_bindgen::{JsCast, JsValue};

use stream_shared::PlayerHandle;

use crate::acquisition::host::{FactoryAccessor, PlayerFactory};

use super::js_player::JsPlayer;

/// Reads the `Stream` factory the host SDK installs on the global object
/// once its script has loaded
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowStreamHost;

struct StreamFactory {
    stream: Function,
}

impl PlayerFactory<JsValue> for StreamFactory {
    fn create(&self, element: &JsValue) -> PlayerHandle {
        let api = self.stream.call1(&JsValue::NULL, element).unwrap_or_else(|err| {
            warn!("WindowStreamHost: Stream(iframe) threw {:?}", err);
            JsValue::UNDEFINED
        });
        PlayerHandle::new(JsPlayer::new(api))
    }
}

impl FactoryAccessor<JsValue> for WindowStreamHost {
    fn factory(&self) -> Option<Rc<dyn PlayerFactory<JsValue>>> {
        let stream = Reflect::get(&js_sys::global(), &JsValue::from_str("Stream")).ok()?;
        let stream = stream.dyn_into::<Function>().ok()?;
        Some(Rc::new(StreamFactory { stream }))
    }
}
