/// Loading hint understood by the player
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Preload {
    /// Start downloading the beginning of the video right away
    Auto,
    /// Only fetch what is needed to know duration and dimensions
    #[default]
    Metadata,
    /// Fetch nothing up front. The player still loads a minimal amount of
    /// metadata to initialize itself.
    None,
}

impl Preload {
    pub fn as_str(&self) -> &'static str {
        match self {
            Preload::Auto => "auto",
            Preload::Metadata => "metadata",
            Preload::None => "none",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(Preload::Auto),
            "metadata" => Some(Preload::Metadata),
            "none" => Some(Preload::None),
            _ => None,
        }
    }
}

/// The preload field as it may be declared: either a bare flag or an
/// explicit hint
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PreloadSetting {
    Flag(bool),
    Hint(Preload),
}

impl PreloadSetting {
    /// `true` means "auto", `false` falls back to "metadata"
    pub fn resolve(&self) -> Preload {
        match self {
            PreloadSetting::Flag(true) => Preload::Auto,
            PreloadSetting::Flag(false) => Preload::Metadata,
            PreloadSetting::Hint(hint) => *hint,
        }
    }
}

impl From<bool> for PreloadSetting {
    fn from(flag: bool) -> Self {
        PreloadSetting::Flag(flag)
    }
}

impl From<Preload> for PreloadSetting {
    fn from(hint: Preload) -> Self {
        PreloadSetting::Hint(hint)
    }
}
