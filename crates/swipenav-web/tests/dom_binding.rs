#![cfg(target_arch = "wasm32")]

use swipenav_web::SwipeNav;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Document, Element, HtmlElement, HtmlVideoElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn inner_width() -> f64 {
    web_sys::window()
        .unwrap()
        .inner_width()
        .unwrap()
        .as_f64()
        .unwrap()
}

/// Elements added to the body for one test, removed again on drop.
#[derive(Default)]
struct Page {
    nodes: Vec<Element>,
}

impl Page {
    fn add(&mut self, tag: &str, id: Option<&str>, class: Option<&str>) -> Element {
        let doc = document();
        let el = doc.create_element(tag).unwrap();
        if let Some(id) = id {
            el.set_id(id);
        }
        if let Some(class) = class {
            el.set_class_name(class);
        }
        doc.body().unwrap().append_child(&el).unwrap();
        self.nodes.push(el.clone());
        el
    }

    fn viewport(&mut self, id: &str) -> HtmlElement {
        self.add("div", Some(id), None).dyn_into().unwrap()
    }

    fn dots(&mut self) -> [Element; 4] {
        ["dot-left", "dot-right", "dot-up", "dot-down"].map(|c| self.add("span", None, Some(c)))
    }
}

impl Drop for Page {
    fn drop(&mut self) {
        for el in &self.nodes {
            el.remove();
        }
    }
}

fn mount(toml: &str) -> SwipeNav {
    SwipeNav::new(Some(toml.to_string())).unwrap()
}

fn transform(el: &HtmlElement) -> String {
    el.style().get_property_value("transform").unwrap()
}

fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

async fn sleep(ms: i32) {
    let promise = js_sys::Promise::new(&mut |resolve, _| {
        web_sys::window()
            .unwrap()
            .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn missing_viewport_gives_inert_instance() {
    let nav = mount("[dom]\nviewport_id = \"not-on-page\"\n");
    assert_eq!(nav.current(), vec![0, 0]);
    assert!(!nav.is_animating());
    assert_eq!(nav.navigate("left"), Ok(false));
    assert_eq!(nav.drain_events_json(), "[]");
}

#[wasm_bindgen_test]
fn unknown_direction_throws() {
    let nav = mount("[dom]\nviewport_id = \"not-on-page\"\n");
    assert!(nav.navigate("sideways").is_err());
}

#[wasm_bindgen_test]
fn invalid_config_throws() {
    let err = SwipeNav::new(Some("[transition]\nduration_ms = 0\n".into()));
    assert!(err.is_err());
}

#[wasm_bindgen_test]
fn navigate_left_translates_and_marks_animating() {
    let mut page = Page::default();
    let viewport = page.viewport("stage-left");
    let nav = mount("[dom]\nviewport_id = \"stage-left\"\n");

    assert_eq!(nav.navigate("left"), Ok(true));
    assert!(nav.is_animating());
    assert!(has_class(&viewport, "is-animating"));
    // Browsers serialize the trailing `0` as `0px`.
    let expected = format!("translate3d({}px, 0px", -inner_width());
    let css = transform(&viewport);
    assert!(css.starts_with(&expected), "{css}");
    assert!(nav.drain_events_json().contains("TransitionStarted"));

    // Input is locked until the transition completes.
    assert_eq!(nav.navigate("right"), Ok(false));
}

#[wasm_bindgen_test]
fn indicators_are_marked_at_mount() {
    let mut page = Page::default();
    page.viewport("stage-dots");
    let dots = page.dots();
    let _nav = mount("[dom]\nviewport_id = \"stage-dots\"\n");

    for dot in &dots {
        assert!(has_class(dot, "is-active"), "{}", dot.class_name());
    }
}

#[wasm_bindgen_test]
fn indicators_follow_the_configured_grid() {
    let mut page = Page::default();
    page.viewport("stage-row");
    let [left, right, up, down] = page.dots();
    let _nav = mount(
        r#"
media = []

[grid]
panels = [[0, 0], [1, 0]]

[dom]
viewport_id = "stage-row"
"#,
    );

    assert!(has_class(&right, "is-active"));
    assert!(!has_class(&left, "is-active"));
    assert!(!has_class(&up, "is-active"));
    assert!(!has_class(&down, "is-active"));
}

#[wasm_bindgen_test]
fn bound_videos_are_muted() {
    let mut page = Page::default();
    page.viewport("stage-video");
    let video: HtmlVideoElement = page
        .add("video", Some("clip"), None)
        .dyn_into()
        .unwrap();
    let _nav = mount(
        r#"
[[media]]
element_id = "clip"
panel = [1, 0]

[dom]
viewport_id = "stage-video"
"#,
    );

    assert!(video.muted());
    assert!(video.has_attribute("muted"));
    assert!(video.paused());
}

#[wasm_bindgen_test]
async fn transition_completes_after_duration() {
    let mut page = Page::default();
    let viewport = page.viewport("stage-timer");
    let nav = mount("[transition]\nduration_ms = 20\n\n[dom]\nviewport_id = \"stage-timer\"\n");

    assert_eq!(nav.navigate("up"), Ok(true));
    sleep(100).await;

    assert!(!nav.is_animating());
    assert!(!has_class(&viewport, "is-animating"));
    assert_eq!(nav.current(), vec![0, 1]);
    assert!(nav.drain_events_json().contains("TransitionCompleted"));
}

#[wasm_bindgen_test]
fn second_instance_replaces_the_first() {
    let mut page = Page::default();
    let viewport = page.viewport("stage-twice");
    let toml = "[dom]\nviewport_id = \"stage-twice\"\n";

    let first = mount(toml);
    assert_eq!(first.navigate("left"), Ok(true));
    assert!(has_class(&viewport, "is-animating"));

    let second = mount(toml);
    assert!(!has_class(&viewport, "is-animating"));
    assert!(transform(&viewport).starts_with("translate3d(0px, 0px"));
    assert_eq!(first.navigate("down"), Ok(false));
    assert_eq!(first.current(), vec![0, 0]);

    assert_eq!(second.navigate("left"), Ok(true));
    // Releasing the replaced handle leaves the live mount alone.
    drop(first);
    assert!(second.is_animating());
}

#[wasm_bindgen_test]
fn dropping_mid_transition_resets_the_page() {
    let mut page = Page::default();
    let viewport = page.viewport("stage-drop");
    let nav = mount("[dom]\nviewport_id = \"stage-drop\"\n");

    assert_eq!(nav.navigate("right"), Ok(true));
    assert!(has_class(&viewport, "is-animating"));
    drop(nav);

    assert!(!has_class(&viewport, "is-animating"));
    assert!(transform(&viewport).starts_with("translate3d(0px, 0px"));
}
