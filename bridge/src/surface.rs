use stream_shared::ConfigSnapshot;

/// The collaborator that creates and destroys the frame hosting the player
pub trait EmbeddingSurface {
    /// Root element of one embed, handed to the host factory
    type Element: Clone + 'static;

    /// Create a frame for `snapshot`'s source and layout
    fn embed(&mut self, snapshot: &ConfigSnapshot) -> Self::Element;

    /// Destroy a frame created by `embed`, together with any player inside it
    fn release(&mut self, element: Self::Element);
}
