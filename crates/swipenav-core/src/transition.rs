//! The two-state transition machine.

use std::fmt;

use serde::{Deserialize, Serialize};
use swipenav_common::PanelCoord;

use crate::host::TimerHandle;

/// Identifies one scheduled completion, so a late or duplicated timer
/// callback cannot finish a different transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TransitionTicket(pub u64);

#[derive(Default)]
pub enum TransitionState {
    #[default]
    Idle,
    Animating {
        target: PanelCoord,
        ticket: TransitionTicket,
        timer: Box<dyn TimerHandle>,
    },
}

impl TransitionState {
    pub fn is_animating(&self) -> bool {
        matches!(self, TransitionState::Animating { .. })
    }

    /// The panel being moved to, if a transition is running.
    pub fn target(&self) -> Option<PanelCoord> {
        match self {
            TransitionState::Idle => None,
            TransitionState::Animating { target, .. } => Some(*target),
        }
    }

    pub fn ticket(&self) -> Option<TransitionTicket> {
        match self {
            TransitionState::Idle => None,
            TransitionState::Animating { ticket, .. } => Some(*ticket),
        }
    }
}

impl fmt::Debug for TransitionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionState::Idle => f.write_str("Idle"),
            TransitionState::Animating { target, ticket, .. } => f
                .debug_struct("Animating")
                .field("target", target)
                .field("ticket", ticket)
                .finish_non_exhaustive(),
        }
    }
}
