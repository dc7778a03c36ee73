use std::default::Default;

/// What to do when a new snapshot names a different source
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SourceChangePolicy {
    /// Ask the surface for a fresh embed and acquire a new player
    #[default]
    Reembed,
    /// Keep the current player and write the new `src` property to it
    InPlace,
}

/// Contains Config properties which will be used by a Bridge
#[derive(Clone, Debug)]
pub struct BridgeConfig {
    /// Determines how a change of source identifier is applied to a
    /// player that is already live. Before a player exists, a source change
    /// always re-embeds.
    pub source_change: SourceChangePolicy,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            source_change: SourceChangePolicy::default(),
        }
    }
}
