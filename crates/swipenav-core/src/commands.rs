use swipenav_common::PanelCoord;

use crate::gesture::SwipeDirection;

/// Host-issued requests, for callers that drive the navigator without raw
/// touch events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavCommand {
    Swipe(SwipeDirection),
    NavigateTo(PanelCoord),
    ToggleMedia(usize),
    Resize,
}
