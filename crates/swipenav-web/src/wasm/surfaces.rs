//! Host surfaces backed by real DOM elements.

use swipenav_common::{DomError, MediaError, Side, Translation, ViewportSize};
use swipenav_core::host::{self, IndicatorSurface, MediaHandle, ViewportSurface};
use tracing::debug;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Document, Element, HtmlElement, HtmlVideoElement, Window};

use crate::plan::ElementPlan;

fn js_error(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

pub struct DomViewport {
    window: Window,
    element: HtmlElement,
    animating_class: String,
}

impl DomViewport {
    pub fn new(window: Window, element: HtmlElement, animating_class: String) -> Self {
        Self {
            window,
            element,
            animating_class,
        }
    }
}

impl ViewportSurface for DomViewport {
    fn size(&self) -> ViewportSize {
        let px = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
        ViewportSize::new(
            px(self.window.inner_width()),
            px(self.window.inner_height()),
        )
    }

    fn apply_translation(&mut self, translation: Translation) {
        let css = translation.to_css();
        if let Err(e) = self.element.style().set_property("transform", &css) {
            debug!(%css, "{}", DomError::Script(js_error(&e)));
        }
    }

    fn set_animating(&mut self, animating: bool) {
        if let Err(e) = self
            .element
            .class_list()
            .toggle_with_force(&self.animating_class, animating)
        {
            debug!("{}", DomError::Script(js_error(&e)));
        }
    }
}

/// Whichever indicator elements the page has. Missing ones are skipped.
pub struct DomIndicators {
    elements: Vec<(Side, Element)>,
    active_class: String,
}

impl DomIndicators {
    pub fn lookup(document: &Document, plan: &ElementPlan) -> Self {
        let mut elements = Vec::new();
        for (side, selector) in &plan.indicators {
            match document.query_selector(selector) {
                Ok(Some(el)) => elements.push((*side, el)),
                Ok(None) => debug!(side = side.as_str(), %selector, "indicator not found"),
                Err(e) => debug!(%selector, "bad indicator selector: {}", js_error(&e)),
            }
        }
        Self {
            elements,
            active_class: plan.indicator_active_class.clone(),
        }
    }
}

impl IndicatorSurface for DomIndicators {
    fn set_available(&mut self, side: Side, available: bool) {
        let Some((_, el)) = self.elements.iter().find(|(s, _)| *s == side) else {
            return;
        };
        if let Err(e) = el
            .class_list()
            .toggle_with_force(&self.active_class, available)
        {
            debug!("{}", DomError::Script(js_error(&e)));
        }
    }
}

pub struct VideoHandle {
    id: String,
    video: HtmlVideoElement,
}

impl VideoHandle {
    pub fn new(id: impl Into<String>, video: HtmlVideoElement) -> Self {
        Self {
            id: id.into(),
            video,
        }
    }
}

impl MediaHandle for VideoHandle {
    /// Starts playback. A promise rejection (autoplay policy, decode
    /// failure) arrives later and is only logged.
    fn play(&mut self) -> host::Result<()> {
        let promise = self
            .video
            .play()
            .map_err(|e| MediaError::PlaybackRejected(js_error(&e)))?;
        let id = self.id.clone();
        spawn_local(async move {
            if let Err(e) = JsFuture::from(promise).await {
                debug!(%id, "{}", MediaError::PlaybackRejected(js_error(&e)));
            }
        });
        Ok(())
    }

    fn pause(&mut self) {
        if let Err(e) = self.video.pause() {
            debug!(id = %self.id, "{}", MediaError::Unavailable(js_error(&e)));
        }
    }

    fn is_paused(&self) -> bool {
        self.video.paused()
    }

    fn set_muted(&mut self, muted: bool) {
        self.video.set_muted(muted);
        // iOS autoplay reads the attribute as well as the property.
        let result = if muted {
            self.video.set_attribute("muted", "")
        } else {
            self.video.remove_attribute("muted")
        };
        if let Err(e) = result {
            debug!(id = %self.id, "{}", DomError::Script(js_error(&e)));
        }
    }
}
