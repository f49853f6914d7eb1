//! Transition completion on `setTimeout`.

use std::cell::RefCell;
use std::rc::Weak;
use std::time::Duration;

use gloo::timers::callback::Timeout;
use swipenav_core::host::{TimerHandle, TransitionScheduler};
use swipenav_core::{Navigator, TransitionTicket};

use super::with_navigator;

/// Schedules completions against the navigator that owns it. Holds a weak
/// reference so the navigator can be dropped with a timer pending.
pub struct GlooScheduler {
    nav: Weak<RefCell<Navigator>>,
}

impl GlooScheduler {
    pub fn new(nav: Weak<RefCell<Navigator>>) -> Self {
        Self { nav }
    }
}

struct GlooTimer(Timeout);

impl TimerHandle for GlooTimer {
    fn cancel(self: Box<Self>) {
        drop(self.0.cancel());
    }
}

impl TransitionScheduler for GlooScheduler {
    fn schedule(&mut self, delay: Duration, ticket: TransitionTicket) -> Box<dyn TimerHandle> {
        let nav = self.nav.clone();
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        Box::new(GlooTimer(Timeout::new(millis, move || {
            if let Some(nav) = nav.upgrade() {
                with_navigator(&nav, |n| {
                    n.complete_transition(ticket);
                });
            }
        })))
    }
}
