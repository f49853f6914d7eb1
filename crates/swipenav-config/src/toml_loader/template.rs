//! Default TOML config template with inline documentation comments.

/// The default TOML config content with comments.
///
/// Parses to the same values as `SwipeNavConfig::default()`.
pub fn default_config_toml() -> String {
    r##"# Swipe navigator configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[grid]
# Reachable panels as [x, y]; x grows right, y grows down. Must include [0, 0].
panels = [
  [0, 0],
  [0, -1], [0, -2],
  [1, 0], [2, 0],
  [-1, 0], [-2, 0],
  [0, 1], [0, 2],
]

[gesture]
# min_distance_px = 40.0   # 0-500
# axis_ratio = 1.2         # 1.0-10.0

[transition]
# duration_ms = 520        # 1-10000, keep in sync with the CSS transition

# Each [[media]] entry binds a <video> id to the panel where it autoplays.
[[media]]
element_id = "feature-video"
panel = [0, 1]

[[media]]
element_id = "feature-video-2"
panel = [0, 2]

[[media]]
element_id = "staff-video"
panel = [0, -1]
# muted = true

[dom]
# viewport_id = "viewport"
# animating_class = "is-animating"
# indicator_active_class = "is-active"

[dom.indicators]
# left = ".dot-left"
# right = ".dot-right"
# up = ".dot-up"
# down = ".dot-down"

[logging]
# level = "info"           # trace, debug, info, warn, error
"##
    .to_string()
}
