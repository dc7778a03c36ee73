use crate::{
    config::{
        field::{Field, Property},
        layout::SurfaceLayout,
        preload::PreloadSetting,
    },
    events::{callback::Callback, callback_set::CallbackSet, event_kind::EventKind},
};

/// One immutable, point-in-time declaration of the desired player state
///
/// Every `with_*` call consumes the snapshot and returns a new one; there is
/// no way to change a snapshot after it has been handed to a bridge.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigSnapshot {
    src: String,
    autoplay: Option<bool>,
    controls: Option<bool>,
    looping: Option<bool>,
    muted: Option<bool>,
    preload: Option<PreloadSetting>,
    poster: Option<String>,
    current_time: Option<f64>,
    volume: Option<f64>,
    ad_url: Option<String>,
    layout: SurfaceLayout,
    callbacks: CallbackSet,
}

impl ConfigSnapshot {
    /// `src` is either the video id or a signed URL for it
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            autoplay: None,
            controls: None,
            looping: None,
            muted: None,
            preload: None,
            poster: None,
            current_time: None,
            volume: None,
            ad_url: None,
            layout: SurfaceLayout::default(),
            callbacks: CallbackSet::new(),
        }
    }

    pub fn with_src(mut self, src: impl Into<String>) -> Self {
        self.src = src.into();
        self
    }

    pub fn with_autoplay(mut self, autoplay: bool) -> Self {
        self.autoplay = Some(autoplay);
        self
    }

    pub fn with_controls(mut self, controls: bool) -> Self {
        self.controls = Some(controls);
        self
    }

    pub fn with_loop(mut self, looping: bool) -> Self {
        self.looping = Some(looping);
        self
    }

    pub fn with_muted(mut self, muted: bool) -> Self {
        self.muted = Some(muted);
        self
    }

    pub fn with_preload(mut self, preload: impl Into<PreloadSetting>) -> Self {
        self.preload = Some(preload.into());
        self
    }

    pub fn with_poster(mut self, poster: impl Into<String>) -> Self {
        self.poster = Some(poster.into());
        self
    }

    pub fn with_current_time(mut self, seconds: f64) -> Self {
        self.current_time = Some(seconds);
        self
    }

    /// From 0.0 (silent) to 1.0 (maximum)
    pub fn with_volume(mut self, volume: f64) -> Self {
        self.volume = Some(volume);
        self
    }

    /// VAST tag used to display ads
    pub fn with_ad_url(mut self, ad_url: impl Into<String>) -> Self {
        self.ad_url = Some(ad_url.into());
        self
    }

    pub fn with_layout(mut self, layout: SurfaceLayout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_callback(mut self, kind: EventKind, callback: Callback) -> Self {
        self.callbacks = self.callbacks.with(kind, callback);
        self
    }

    pub fn with_callbacks(mut self, callbacks: CallbackSet) -> Self {
        self.callbacks = callbacks;
        self
    }

    /// Drops the declaration for `field`, reverting it to its default.
    /// The source identifier is mandatory and cannot be undeclared.
    pub fn without(mut self, field: Field) -> Self {
        match field {
            Field::Src => {}
            Field::Autoplay => self.autoplay = None,
            Field::Controls => self.controls = None,
            Field::Loop => self.looping = None,
            Field::Muted => self.muted = None,
            Field::Preload => self.preload = None,
            Field::Poster => self.poster = None,
            Field::CurrentTime => self.current_time = None,
            Field::Volume => self.volume = None,
            Field::AdUrl => self.ad_url = None,
        }
        self
    }

    pub fn without_callback(mut self, kind: EventKind) -> Self {
        self.callbacks = self.callbacks.without(kind);
        self
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn layout(&self) -> &SurfaceLayout {
        &self.layout
    }

    pub fn callbacks(&self) -> &CallbackSet {
        &self.callbacks
    }

    /// Declared value of `field`, or `None` if the snapshot leaves it at its
    /// default. Preload is reported already resolved to a hint.
    pub fn declared(&self, field: Field) -> Option<Property> {
        match field {
            Field::Src => Some(Property::Src(self.src.clone())),
            Field::Autoplay => self.autoplay.map(Property::Autoplay),
            Field::Controls => self.controls.map(Property::Controls),
            Field::Loop => self.looping.map(Property::Loop),
            Field::Muted => self.muted.map(Property::Muted),
            Field::Preload => self
                .preload
                .map(|setting| Property::Preload(setting.resolve())),
            Field::Poster => self
                .poster
                .as_ref()
                .map(|poster| Property::Poster(Some(poster.clone()))),
            Field::CurrentTime => self.current_time.map(Property::CurrentTime),
            Field::Volume => self.volume.map(Property::Volume),
            Field::AdUrl => self
                .ad_url
                .as_ref()
                .map(|ad_url| Property::AdUrl(Some(ad_url.clone()))),
        }
    }

    /// Value the player should hold for `field`: the declaration if any,
    /// otherwise the field's default
    pub fn resolved(&self, field: Field) -> Property {
        self.declared(field)
            .unwrap_or_else(|| field.default_value())
    }
}
