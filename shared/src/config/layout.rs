/// How the embedding surface should size and style its frame
///
/// Layout is consumed by the surface when it creates the frame and is never
/// written to the player.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurfaceLayout {
    /// Width of the display area, in CSS pixels
    pub width: Option<String>,
    /// Height of the display area, in CSS pixels
    pub height: Option<String>,
    /// CSS class applied to the containing element
    pub class_name: Option<String>,
    /// Let the surface keep the frame's aspect ratio
    pub responsive: bool,
}

impl Default for SurfaceLayout {
    fn default() -> Self {
        Self {
            width: None,
            height: None,
            class_name: None,
            responsive: true,
        }
    }
}
