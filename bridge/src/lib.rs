//! # Stream Bridge
//! Keeps an asynchronously embedded, event-emitting video player consistent
//! with a stream of declarative configuration snapshots.
//!
//! The player lives behind an embedding surface whose script installs a
//! factory some time after the embed is created. A [`Bridge`] waits for that
//! factory, invokes it once, then reconciles each new [`ConfigSnapshot`]
//! against the live player: only changed properties are written, and each
//! declared callback maps to exactly one subscription. A [`StreamRef`]
//! queues imperative calls until the player exists.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

#[macro_use]
extern crate cfg_if;

pub use stream_shared::{
    Callback, CallbackSet, ConfigSnapshot, EventKind, ExternalRuntimeError, Field, PlayFuture,
    PlaybackError, PlayerApi, PlayerEvent, PlayerHandle, Preload, PreloadSetting, Property,
    SurfaceLayout, VideoDimensions,
};

mod acquisition;
mod backends;
mod bridge;
mod bridge_config;
mod calls;
mod error;
mod surface;
mod sync;

pub use acquisition::{
    gate::{AcquisitionGate, AcquisitionToken},
    host::{install_host_factory, uninstall_host_factory, FactoryAccessor, GlobalHost, PlayerFactory},
};
pub use backends::*;
pub use bridge::{Bridge, BridgeState};
pub use bridge_config::{BridgeConfig, SourceChangePolicy};
pub use calls::stream_ref::StreamRef;
pub use error::{BridgeError, HostError};
pub use surface::EmbeddingSurface;
pub use sync::{
    attribute_synchronizer::AttributeSynchronizer, event_binding_manager::EventBindingManager,
};
