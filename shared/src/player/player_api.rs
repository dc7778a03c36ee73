use futures::future::LocalBoxFuture;

use crate::{
    config::field::{Field, Property},
    error::PlaybackError,
    events::{callback::Callback, event_kind::EventKind},
};

/// Resolves once the player has started (or refused to start) playback
pub type PlayFuture = LocalBoxFuture<'static, Result<(), PlaybackError>>;

/// Intrinsic size of the video currently being played, in pixels
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct VideoDimensions {
    pub video_width: u32,
    pub video_height: u32,
}

/// The live player object produced by the host factory
///
/// Every method takes `&self`: the object lives on the host side and has its
/// own interior state, the same way the host exposes it.
pub trait PlayerApi {
    /// Read the current value of a synchronized property
    fn property(&self, field: Field) -> Property;

    /// Write one property
    fn set_property(&self, property: Property);

    /// Intrinsic dimensions of the video, which change with the quality
    /// being played
    fn video_dimensions(&self) -> VideoDimensions;

    /// Subscribe `callback` to `event`
    fn add_event_listener(&self, event: EventKind, callback: &Callback);

    /// Unsubscribe `callback` from `event`. Must be given the same callback
    /// that was subscribed.
    fn remove_event_listener(&self, event: EventKind, callback: &Callback);

    fn play(&self) -> PlayFuture;

    fn pause(&self);
}
