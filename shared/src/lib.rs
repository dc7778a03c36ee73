//! # Stream Shared
//! Configuration snapshots, the event vocabulary and the external player
//! interface shared by the stream bridge crates.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod config;
mod error;
mod events;
mod player;

pub use config::{
    field::{Field, Property},
    layout::SurfaceLayout,
    preload::{Preload, PreloadSetting},
    snapshot::ConfigSnapshot,
};
pub use error::{ExternalRuntimeError, PlaybackError};
pub use events::{
    callback::{Callback, PlayerEvent},
    callback_set::CallbackSet,
    event_kind::EventKind,
};
pub use player::{
    handle::PlayerHandle,
    player_api::{PlayFuture, PlayerApi, VideoDimensions},
};
