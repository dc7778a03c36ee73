use std::cell::RefCell;

use js_sys::{Array, Function, Promise, Reflect};
use log::warn;
use wasm_bindgen::{closure::Closure, JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use stream_shared::{
    Callback, EventKind, ExternalRuntimeError, Field, PlayFuture, PlaybackError, PlayerApi,
    PlayerEvent, Preload, PreloadSetting, Property, VideoDimensions,
};

struct Listener {
    kind: EventKind,
    callback: Callback,
    closure: Closure<dyn FnMut(JsValue)>,
}

/// The player object returned by the host's `Stream(iframe)` factory
pub struct JsPlayer {
    api: JsValue,
    listeners: RefCell<Vec<Listener>>,
}

impl JsPlayer {
    pub fn new(api: JsValue) -> Self {
        Self {
            api,
            listeners: RefCell::new(Vec::new()),
        }
    }

    fn get(&self, name: &str) -> JsValue {
        Reflect::get(&self.api, &JsValue::from_str(name)).unwrap_or(JsValue::UNDEFINED)
    }

    fn call(&self, name: &str, args: &Array) -> Result<JsValue, JsValue> {
        let method: Function = self.get(name).dyn_into()?;
        method.apply(&self.api, args)
    }
}

fn to_js(property: &Property) -> JsValue {
    match property {
        Property::Src(src) => JsValue::from_str(src),
        Property::Autoplay(value)
        | Property::Controls(value)
        | Property::Loop(value)
        | Property::Muted(value) => JsValue::from_bool(*value),
        Property::Preload(hint) => JsValue::from_str(hint.as_str()),
        Property::Poster(url) | Property::AdUrl(url) => url
            .as_deref()
            .map(JsValue::from_str)
            .unwrap_or(JsValue::UNDEFINED),
        Property::CurrentTime(value) | Property::Volume(value) => JsValue::from_f64(*value),
    }
}

fn from_js(field: Field, value: &JsValue) -> Property {
    let flag = || value.as_bool().unwrap_or(false);
    match field {
        Field::Src => Property::Src(value.as_string().unwrap_or_default()),
        Field::Autoplay => Property::Autoplay(flag()),
        Field::Controls => Property::Controls(flag()),
        Field::Loop => Property::Loop(flag()),
        Field::Muted => Property::Muted(flag()),
        Field::Preload => {
            let hint = match value.as_bool() {
                Some(flag) => PreloadSetting::Flag(flag).resolve(),
                None => value
                    .as_string()
                    .and_then(|hint| Preload::parse(&hint))
                    .unwrap_or_default(),
            };
            Property::Preload(hint)
        }
        Field::Poster => Property::Poster(value.as_string()),
        Field::CurrentTime => Property::CurrentTime(value.as_f64().unwrap_or(0.0)),
        Field::Volume => Property::Volume(value.as_f64().unwrap_or(1.0)),
        Field::AdUrl => Property::AdUrl(value.as_string()),
    }
}

pub(crate) fn runtime_error(value: &JsValue) -> ExternalRuntimeError {
    let message = Reflect::get(value, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    let code = Reflect::get(value, &JsValue::from_str("code"))
        .ok()
        .and_then(|code| code.as_string().or_else(|| code.as_f64().map(|code| code.to_string())));
    ExternalRuntimeError { code, message }
}

impl PlayerApi for JsPlayer {
    fn property(&self, field: Field) -> Property {
        from_js(field, &self.get(field.name()))
    }

    fn set_property(&self, property: Property) {
        let name = JsValue::from_str(property.field().name());
        if let Err(err) = Reflect::set(&self.api, &name, &to_js(&property)) {
            warn!("JsPlayer: could not set {:?}: {:?}", name, err);
        }
    }

    fn video_dimensions(&self) -> VideoDimensions {
        let pixels = |name| self.get(name).as_f64().unwrap_or(0.0).max(0.0) as u32;
        VideoDimensions {
            video_width: pixels("videoWidth"),
            video_height: pixels("videoHeight"),
        }
    }

    fn add_event_listener(&self, kind: EventKind, callback: &Callback) {
        let emitted = callback.clone();
        let closure = Closure::wrap(Box::new(move |event: JsValue| {
            let payload = match kind {
                EventKind::Error => PlayerEvent::error(runtime_error(&event)),
                _ => PlayerEvent::new(kind),
            };
            emitted.emit(&payload);
        }) as Box<dyn FnMut(JsValue)>);

        let args = Array::of2(&JsValue::from_str(kind.name()), closure.as_ref());
        if let Err(err) = self.call("addEventListener", &args) {
            warn!("JsPlayer: addEventListener({}) failed: {:?}", kind.name(), err);
            return;
        }
        self.listeners.borrow_mut().push(Listener {
            kind,
            callback: callback.clone(),
            closure,
        });
    }

    fn remove_event_listener(&self, kind: EventKind, callback: &Callback) {
        let listener = {
            let mut listeners = self.listeners.borrow_mut();
            let Some(position) = listeners
                .iter()
                .position(|listener| listener.kind == kind && listener.callback.same_as(callback))
            else {
                return;
            };
            listeners.remove(position)
        };

        let args = Array::of2(&JsValue::from_str(kind.name()), listener.closure.as_ref());
        if let Err(err) = self.call("removeEventListener", &args) {
            warn!("JsPlayer: removeEventListener({}) failed: {:?}", kind.name(), err);
        }
    }

    fn play(&self) -> PlayFuture {
        let promise = self
            .call("play", &Array::new())
            .and_then(|value| value.dyn_into::<Promise>());
        Box::pin(async move {
            let promise = promise.map_err(|err| PlaybackError::Rejected(runtime_error(&err)))?;
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(|err| PlaybackError::Rejected(runtime_error(&err)))
        })
    }

    fn pause(&self) {
        if let Err(err) = self.call("pause", &Array::new()) {
            warn!("JsPlayer: pause failed: {:?}", err);
        }
    }
}
