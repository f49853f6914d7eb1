//! DOM event wiring. Every listener borrows the navigator for one event.

use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use swipenav_core::{Navigator, TouchPoint};
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, HtmlVideoElement, TouchEvent, Window};

use super::with_navigator;

fn passive() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: true,
    }
}

/// Client coordinates of the first changed touch.
fn first_touch(event: &Event) -> Option<TouchPoint> {
    let touch = event.dyn_ref::<TouchEvent>()?.changed_touches().get(0)?;
    Some(TouchPoint::new(
        f64::from(touch.client_x()),
        f64::from(touch.client_y()),
    ))
}

pub fn touch(viewport: &HtmlElement, nav: &Rc<RefCell<Navigator>>) -> Vec<EventListener> {
    let on_start = {
        let nav = nav.clone();
        EventListener::new_with_options(viewport, "touchstart", passive(), move |event| {
            let Some(point) = first_touch(event) else {
                return;
            };
            with_navigator(&nav, |n| n.touch_start(point, js_sys::Date::now()));
        })
    };
    let on_end = {
        let nav = nav.clone();
        EventListener::new_with_options(viewport, "touchend", passive(), move |event| {
            let point = first_touch(event);
            with_navigator(&nav, |n| match point {
                Some(point) => {
                    n.touch_end(point, js_sys::Date::now());
                }
                None => n.cancel_touch(),
            });
        })
    };
    vec![on_start, on_end]
}

pub fn resize(window: &Window, nav: &Rc<RefCell<Navigator>>) -> EventListener {
    let nav = nav.clone();
    EventListener::new_with_options(window, "resize", passive(), move |_| {
        with_navigator(&nav, Navigator::handle_resize);
    })
}

/// Tap on a video toggles it, whatever panel is showing.
pub fn media_click(
    video: &HtmlVideoElement,
    index: usize,
    nav: &Rc<RefCell<Navigator>>,
) -> EventListener {
    let nav = nav.clone();
    EventListener::new(video, "click", move |_| {
        with_navigator(&nav, |n| {
            n.toggle_media(index);
        });
    })
}
