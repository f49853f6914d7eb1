//! Grid validation (home panel present, no duplicates).

use std::collections::HashSet;

use crate::schema::SwipeNavConfig;
use swipenav_common::PanelCoord;

pub(crate) fn validate_grid(errors: &mut Vec<String>, config: &SwipeNavConfig) {
    let panels = &config.grid.panels;
    if panels.is_empty() {
        errors.push("grid.panels is empty".into());
        return;
    }
    if !panels.contains(&PanelCoord::HOME) {
        errors.push("grid.panels must include the home panel [0, 0]".into());
    }

    let mut seen = HashSet::new();
    for panel in panels {
        if !seen.insert(*panel) {
            errors.push(format!("grid.panels lists {panel} more than once"));
        }
    }
}
