//! Navigation requests and the transition lifecycle.

use swipenav_common::{NavEvent, PanelCoord, Translation};
use tracing::{debug, info};

use crate::commands::NavCommand;
use crate::gesture::SwipeDirection;
use crate::transition::{TransitionState, TransitionTicket};

use super::Navigator;

impl Navigator {
    /// Move one panel in response to a swipe.
    pub fn navigate(&mut self, direction: SwipeDirection) -> bool {
        if self.is_animating() {
            return false;
        }
        let target = direction.target(self.current);
        self.navigate_to(target)
    }

    /// Start a transition to `target` if it is a grid member and nothing is
    /// animating. Returns `true` if a transition started.
    pub fn navigate_to(&mut self, target: PanelCoord) -> bool {
        if self.is_animating() {
            return false;
        }
        if !self.settings.grid.contains(target) {
            debug!(from = %self.current, to = %target, "navigation target outside grid");
            self.record(NavEvent::NavigationDropped {
                from: self.current,
                to: target,
            });
            return false;
        }
        self.begin_transition(target);
        true
    }

    fn begin_transition(&mut self, target: PanelCoord) {
        let size = self.viewport.size();
        self.viewport.set_animating(true);
        self.viewport
            .apply_translation(Translation::for_panel(target, size));

        let ticket = TransitionTicket(self.next_ticket);
        self.next_ticket += 1;
        let timer = self
            .scheduler
            .schedule(self.settings.transition_duration, ticket);

        self.state = TransitionState::Animating {
            target,
            ticket,
            timer,
        };
        self.record(NavEvent::TransitionStarted {
            from: self.current,
            to: target,
        });
    }

    /// Finish the transition identified by `ticket`.
    ///
    /// Called by the host when the scheduled delay elapses. A ticket that does
    /// not match the running transition is ignored. Returns `true` if a
    /// transition completed.
    pub fn complete_transition(&mut self, ticket: TransitionTicket) -> bool {
        if self.state.ticket() != Some(ticket) {
            return false;
        }
        let TransitionState::Animating { target, .. } = std::mem::take(&mut self.state) else {
            return false;
        };

        self.current = target;
        self.viewport.set_animating(false);
        info!(at = %target, "transition complete");
        self.record(NavEvent::TransitionCompleted { at: target });

        self.refresh_indicators();
        self.sync_media();
        true
    }

    /// Dispatch a command. Returns `true` if it had an effect.
    pub fn execute(&mut self, cmd: NavCommand) -> bool {
        match cmd {
            NavCommand::Swipe(direction) => self.navigate(direction),
            NavCommand::NavigateTo(target) => self.navigate_to(target),
            NavCommand::ToggleMedia(index) => self.toggle_media(index),
            NavCommand::Resize => {
                self.handle_resize();
                true
            }
        }
    }
}
