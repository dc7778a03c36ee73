use super::preload::Preload;

/// Identity of every player property the bridge keeps in sync
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Src,
    Autoplay,
    Controls,
    Loop,
    Muted,
    Preload,
    Poster,
    CurrentTime,
    Volume,
    AdUrl,
}

impl Field {
    pub const COUNT: usize = 10;

    /// Every field, in the fixed order the synchronizer walks them
    pub const ALL: [Field; Field::COUNT] = [
        Field::Src,
        Field::Autoplay,
        Field::Controls,
        Field::Loop,
        Field::Muted,
        Field::Preload,
        Field::Poster,
        Field::CurrentTime,
        Field::Volume,
        Field::AdUrl,
    ];

    /// Property name on the host player object
    pub fn name(&self) -> &'static str {
        match self {
            Field::Src => "src",
            Field::Autoplay => "autoplay",
            Field::Controls => "controls",
            Field::Loop => "loop",
            Field::Muted => "muted",
            Field::Preload => "preload",
            Field::Poster => "poster",
            Field::CurrentTime => "currentTime",
            Field::Volume => "volume",
            Field::AdUrl => "adUrl",
        }
    }

    /// Value a fresh player holds when the field is not declared
    pub fn default_value(&self) -> Property {
        match self {
            Field::Src => Property::Src(String::new()),
            Field::Autoplay => Property::Autoplay(false),
            Field::Controls => Property::Controls(false),
            Field::Loop => Property::Loop(false),
            Field::Muted => Property::Muted(false),
            Field::Preload => Property::Preload(Preload::Metadata),
            Field::Poster => Property::Poster(None),
            Field::CurrentTime => Property::CurrentTime(0.0),
            Field::Volume => Property::Volume(1.0),
            Field::AdUrl => Property::AdUrl(None),
        }
    }
}

/// A typed value for one player property
///
/// Booleans stay booleans, numbers stay numbers and preload is always written
/// as a resolved hint, so the player never sees a coerced value.
#[derive(Clone, Debug, PartialEq)]
pub enum Property {
    Src(String),
    Autoplay(bool),
    Controls(bool),
    Loop(bool),
    Muted(bool),
    Preload(Preload),
    Poster(Option<String>),
    CurrentTime(f64),
    Volume(f64),
    AdUrl(Option<String>),
}

impl Property {
    pub fn field(&self) -> Field {
        match self {
            Property::Src(_) => Field::Src,
            Property::Autoplay(_) => Field::Autoplay,
            Property::Controls(_) => Field::Controls,
            Property::Loop(_) => Field::Loop,
            Property::Muted(_) => Field::Muted,
            Property::Preload(_) => Field::Preload,
            Property::Poster(_) => Field::Poster,
            Property::CurrentTime(_) => Field::CurrentTime,
            Property::Volume(_) => Field::Volume,
            Property::AdUrl(_) => Field::AdUrl,
        }
    }

    /// Whether writing `other` over `self` would change nothing. Numbers are
    /// compared bit for bit, so a NaN declaration matches itself.
    pub fn same_value(&self, other: &Property) -> bool {
        match (self, other) {
            (Property::CurrentTime(a), Property::CurrentTime(b))
            | (Property::Volume(a), Property::Volume(b)) => a.to_bits() == b.to_bits(),
            _ => self == other,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Property::Autoplay(value)
            | Property::Controls(value)
            | Property::Loop(value)
            | Property::Muted(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Property::CurrentTime(value) | Property::Volume(value) => Some(*value),
            _ => None,
        }
    }
}
