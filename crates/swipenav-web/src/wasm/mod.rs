//! `wasm-bindgen` exports. Only compiled on `wasm32` targets.

mod listeners;
mod logging;
mod scheduler;
mod surfaces;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::EventListener;
use swipenav_common::{DomError, PanelCoord, SwipeNavError};
use swipenav_config::SwipeNavConfig;
use swipenav_core::{NavSettings, Navigator, SwipeDirection};
use tracing::{debug, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, HtmlVideoElement};

use crate::events_to_json;
use crate::plan::ElementPlan;

use scheduler::GlooScheduler;
use surfaces::{DomIndicators, DomViewport, VideoHandle};

/// The one mount allowed to listen, tagged with the generation of the
/// handle that owns it. Generation 0 is the automatic mount.
struct Active {
    generation: u64,
    mount: Mount,
}

thread_local! {
    static ACTIVE: RefCell<Option<Active>> = const { RefCell::new(None) };
    static NEXT_GENERATION: Cell<u64> = const { Cell::new(1) };
}

/// Tear down whatever is mounted. The mount is dropped outside the slot
/// borrow since its teardown writes to the page.
fn unmount() {
    let previous = ACTIVE.with(|slot| slot.borrow_mut().take());
    if let Some(previous) = previous {
        debug!(generation = previous.generation, "unmounting");
        drop(previous.mount);
    }
}

/// Tear down the current mount, then install `mount` under `generation`.
fn install(generation: u64, mount: Mount) {
    unmount();
    ACTIVE.with(|slot| *slot.borrow_mut() = Some(Active { generation, mount }));
}

/// The navigator mounted for `generation`, if that mount is still live.
fn active_navigator(generation: Option<u64>) -> Option<Rc<RefCell<Navigator>>> {
    let generation = generation?;
    ACTIVE.with(|slot| {
        slot.borrow()
            .as_ref()
            .filter(|active| active.generation == generation)
            .map(|active| active.mount.nav.clone())
    })
}

/// Run `f` against the navigator unless it is already borrowed. Events are
/// delivered one at a time, so a failed borrow means re-entry and the event
/// is dropped.
pub(crate) fn with_navigator<R>(
    nav: &Rc<RefCell<Navigator>>,
    f: impl FnOnce(&mut Navigator) -> R,
) -> Option<R> {
    match nav.try_borrow_mut() {
        Ok(mut n) => Some(f(&mut n)),
        Err(_) => {
            debug!("navigator busy; event dropped");
            None
        }
    }
}

/// A navigator wired to the page. Dropping it removes every listener,
/// cancels a pending transition timer and puts the viewport back at home.
struct Mount {
    nav: Rc<RefCell<Navigator>>,
    _listeners: Vec<EventListener>,
}

impl Mount {
    fn new(config: &SwipeNavConfig) -> swipenav_common::Result<Self> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoWindow)?;
        let plan = ElementPlan::from_config(config);

        let viewport = document
            .get_element_by_id(&plan.viewport_id)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .ok_or_else(|| DomError::MissingElement(format!("#{}", plan.viewport_id)))?;

        let indicators = DomIndicators::lookup(&document, &plan);
        let surface = DomViewport::new(
            window.clone(),
            viewport.clone(),
            plan.animating_class.clone(),
        );
        let settings = NavSettings::from_config(config);
        let nav = Rc::new_cyclic(|weak| {
            RefCell::new(Navigator::new(
                settings,
                Box::new(surface),
                Box::new(indicators),
                Box::new(GlooScheduler::new(weak.clone())),
            ))
        });

        let mut attached = listeners::touch(&viewport, &nav);
        attached.push(listeners::resize(&window, &nav));

        {
            let mut n = nav.borrow_mut();
            for target in &plan.media {
                let video = document
                    .get_element_by_id(&target.element_id)
                    .and_then(|el| el.dyn_into::<HtmlVideoElement>().ok());
                let Some(video) = video else {
                    debug!(id = %target.element_id, "video element not found");
                    continue;
                };
                attached.push(listeners::media_click(&video, target.index, &nav));
                n.bind_media(
                    target.index,
                    target.panel,
                    Box::new(VideoHandle::new(&target.element_id, video)),
                    target.muted,
                );
            }
            n.start();
        }

        Ok(Self {
            nav,
            _listeners: attached,
        })
    }
}

fn to_js(err: SwipeNavError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// Module entry point: mount with the default configuration.
#[wasm_bindgen(start)]
pub fn start() {
    logging::install_panic_hook();
    let config = SwipeNavConfig::default();
    logging::init(config.logging.level);
    info!("swipenav v{} starting", env!("CARGO_PKG_VERSION"));

    match Mount::new(&config) {
        Ok(mount) => install(0, mount),
        Err(e) => warn!("swipe navigation disabled: {e}"),
    }
}

/// A page-configured navigator. Only one mount listens at a time: creating
/// a `SwipeNav` tears down the automatic mount and any earlier instance,
/// which then behave as inert. Freeing the live instance unmounts it.
#[wasm_bindgen]
pub struct SwipeNav {
    generation: Option<u64>,
}

impl SwipeNav {
    fn with_nav<R>(&self, f: impl FnOnce(&mut Navigator) -> R) -> Option<R> {
        let nav = active_navigator(self.generation)?;
        with_navigator(&nav, f)
    }
}

impl Drop for SwipeNav {
    fn drop(&mut self) {
        if active_navigator(self.generation).is_some() {
            unmount();
        }
    }
}

#[wasm_bindgen]
impl SwipeNav {
    /// Mount with `config_toml`, or the defaults when omitted. Throws if the
    /// config does not parse or validate. A page without the viewport
    /// element yields an inert instance.
    #[wasm_bindgen(constructor)]
    pub fn new(config_toml: Option<String>) -> Result<SwipeNav, JsValue> {
        let config = match config_toml {
            Some(text) => swipenav_config::load_config(&text)
                .map_err(|e| to_js(e.into()))?,
            None => SwipeNavConfig::default(),
        };
        logging::init(config.logging.level);

        unmount();
        match Mount::new(&config) {
            Ok(mount) => {
                let generation = NEXT_GENERATION.with(|next| {
                    let generation = next.get();
                    next.set(generation + 1);
                    generation
                });
                install(generation, mount);
                Ok(SwipeNav {
                    generation: Some(generation),
                })
            }
            Err(e) => {
                warn!("swipe navigation disabled: {e}");
                Ok(SwipeNav { generation: None })
            }
        }
    }

    /// Visible panel as `[x, y]`.
    pub fn current(&self) -> Vec<i32> {
        let panel = self
            .with_nav(|n| n.current())
            .unwrap_or(PanelCoord::HOME);
        vec![panel.x, panel.y]
    }

    #[wasm_bindgen(js_name = isAnimating)]
    pub fn is_animating(&self) -> bool {
        self.with_nav(|n| n.is_animating()).unwrap_or(false)
    }

    /// Behave as if the user swiped: `"left"`, `"swipe-up"` and so on.
    /// Returns whether a transition started. Throws on an unknown direction.
    pub fn navigate(&self, direction: &str) -> Result<bool, JsValue> {
        let direction: SwipeDirection = direction
            .parse()
            .map_err(|e: String| to_js(SwipeNavError::Other(e)))?;
        Ok(self.with_nav(|n| n.navigate(direction)).unwrap_or(false))
    }

    /// Everything recorded since the last call, as a JSON array.
    #[wasm_bindgen(js_name = drainEventsJson)]
    pub fn drain_events_json(&self) -> String {
        let events = self
            .with_nav(Navigator::drain_events)
            .unwrap_or_default();
        events_to_json(&events)
    }
}
