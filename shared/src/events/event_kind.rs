/// Every event the player can emit that a caller may subscribe to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EventKind {
    LoadStart,
    LoadedMetadata,
    LoadedData,
    CanPlay,
    CanPlayThrough,
    Play,
    Pause,
    Playing,
    Waiting,
    Seeking,
    Seeked,
    Ended,
    TimeUpdate,
    VolumeChange,
    RateChange,
    DurationChange,
    Progress,
    Suspend,
    Abort,
    Stalled,
    Resize,
    Error,
    AdStart,
    AdEnd,
    AdTimeout,
}

impl EventKind {
    pub const COUNT: usize = 25;

    pub const ALL: [EventKind; EventKind::COUNT] = [
        EventKind::LoadStart,
        EventKind::LoadedMetadata,
        EventKind::LoadedData,
        EventKind::CanPlay,
        EventKind::CanPlayThrough,
        EventKind::Play,
        EventKind::Pause,
        EventKind::Playing,
        EventKind::Waiting,
        EventKind::Seeking,
        EventKind::Seeked,
        EventKind::Ended,
        EventKind::TimeUpdate,
        EventKind::VolumeChange,
        EventKind::RateChange,
        EventKind::DurationChange,
        EventKind::Progress,
        EventKind::Suspend,
        EventKind::Abort,
        EventKind::Stalled,
        EventKind::Resize,
        EventKind::Error,
        EventKind::AdStart,
        EventKind::AdEnd,
        EventKind::AdTimeout,
    ];

    /// Slot of this event in fixed-size per-event tables
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Event name as dispatched by the host player
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::LoadStart => "loadstart",
            EventKind::LoadedMetadata => "loadedmetadata",
            EventKind::LoadedData => "loadeddata",
            EventKind::CanPlay => "canplay",
            EventKind::CanPlayThrough => "canplaythrough",
            EventKind::Play => "play",
            EventKind::Pause => "pause",
            EventKind::Playing => "playing",
            EventKind::Waiting => "waiting",
            EventKind::Seeking => "seeking",
            EventKind::Seeked => "seeked",
            EventKind::Ended => "ended",
            EventKind::TimeUpdate => "timeupdate",
            EventKind::VolumeChange => "volumechange",
            EventKind::RateChange => "ratechange",
            EventKind::DurationChange => "durationchange",
            EventKind::Progress => "progress",
            EventKind::Suspend => "suspend",
            EventKind::Abort => "abort",
            EventKind::Stalled => "stalled",
            EventKind::Resize => "resize",
            EventKind::Error => "error",
            EventKind::AdStart => "stream-adstart",
            EventKind::AdEnd => "stream-adend",
            EventKind::AdTimeout => "stream-adtimeout",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        EventKind::ALL.into_iter().find(|kind| kind.name() == name)
    }
}
