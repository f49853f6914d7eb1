//! The set of reachable panels and neighbor availability.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use swipenav_common::{PanelCoord, Side};
use swipenav_config::schema::GridConfig;

/// Immutable set of panels the navigator may move to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelGrid {
    panels: HashSet<PanelCoord>,
}

impl PanelGrid {
    pub fn new(panels: impl IntoIterator<Item = PanelCoord>) -> Self {
        Self {
            panels: panels.into_iter().collect(),
        }
    }

    pub fn from_config(config: &GridConfig) -> Self {
        Self::new(config.panels.iter().copied())
    }

    pub fn contains(&self, coord: PanelCoord) -> bool {
        self.panels.contains(&coord)
    }

    pub fn len(&self) -> usize {
        self.panels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panels.is_empty()
    }

    /// Which of the four neighbors of `coord` are reachable.
    pub fn availability(&self, coord: PanelCoord) -> Availability {
        Availability {
            left: self.contains(coord.neighbor(Side::Left)),
            right: self.contains(coord.neighbor(Side::Right)),
            up: self.contains(coord.neighbor(Side::Up)),
            down: self.contains(coord.neighbor(Side::Down)),
        }
    }
}

impl Default for PanelGrid {
    fn default() -> Self {
        Self::from_config(&GridConfig::default())
    }
}

/// Neighbor flags for one panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Availability {
    pub fn on(&self, side: Side) -> bool {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
            Side::Up => self.up,
            Side::Down => self.down,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_has_nine_panels() {
        let grid = PanelGrid::default();
        assert_eq!(grid.len(), 9);
        assert!(grid.contains(PanelCoord::HOME));
        assert!(grid.contains(PanelCoord::new(-2, 0)));
        assert!(grid.contains(PanelCoord::new(0, 2)));
    }

    #[test]
    fn corners_are_not_members() {
        let grid = PanelGrid::default();
        for (x, y) in [(1, 1), (-1, 1), (1, -1), (-1, -1), (3, 0), (0, -3)] {
            assert!(!grid.contains(PanelCoord::new(x, y)), "({x}, {y})");
        }
    }

    #[test]
    fn home_has_all_neighbors() {
        let grid = PanelGrid::default();
        let avail = grid.availability(PanelCoord::HOME);
        assert_eq!(
            avail,
            Availability {
                left: true,
                right: true,
                up: true,
                down: true
            }
        );
    }

    #[test]
    fn arm_end_only_points_back_home() {
        let grid = PanelGrid::default();
        let avail = grid.availability(PanelCoord::new(2, 0));
        assert!(avail.on(Side::Left));
        assert!(!avail.on(Side::Right));
        assert!(!avail.on(Side::Up));
        assert!(!avail.on(Side::Down));
    }

    #[test]
    fn upper_arm_availability() {
        let grid = PanelGrid::default();
        let avail = grid.availability(PanelCoord::new(0, -1));
        assert!(avail.up);
        assert!(avail.down);
        assert!(!avail.left);
        assert!(!avail.right);
    }

    #[test]
    fn custom_grid() {
        let grid = PanelGrid::new([PanelCoord::HOME, PanelCoord::new(1, 0)]);
        assert_eq!(grid.len(), 2);
        assert!(grid.availability(PanelCoord::HOME).right);
        assert!(!grid.availability(PanelCoord::HOME).left);
    }
}
