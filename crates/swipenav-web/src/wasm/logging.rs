//! Console logging and panic reporting for the browser.

use swipenav_config::schema::LogLevel;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use wasm_bindgen::JsValue;
use web_sys::console;

use crate::console::{filter_directive, ConsoleMakeWriter, ConsoleSink};

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConsole;

impl ConsoleSink for BrowserConsole {
    fn emit(&self, level: Level, line: &str) {
        let line = JsValue::from_str(line);
        match level {
            Level::ERROR => console::error_1(&line),
            Level::WARN => console::warn_1(&line),
            Level::INFO => console::info_1(&line),
            _ => console::debug_1(&line),
        }
    }
}

/// Install the global subscriber. Only the first call takes effect.
pub fn init(level: LogLevel) {
    // No wall clock on wasm32 without JS shims, so lines carry no timestamp.
    let installed = tracing_subscriber::fmt()
        .with_writer(ConsoleMakeWriter::new(BrowserConsole))
        .without_time()
        .with_ansi(false)
        .with_env_filter(EnvFilter::new(filter_directive(level)))
        .try_init();
    if installed.is_err() {
        tracing::debug!("logging already initialized");
    }
}

pub fn install_panic_hook() {
    use std::sync::Once;

    static ONCE: Once = Once::new();
    ONCE.call_once(|| {
        std::panic::set_hook(Box::new(|info| {
            let msg = match info.location() {
                Some(loc) => format!(
                    "swipenav panicked at {}:{}:{}: {info}",
                    loc.file(),
                    loc.line(),
                    loc.column()
                ),
                None => format!("swipenav panicked: {info}"),
            };
            console::error_1(&JsValue::from_str(&msg));
        }));
    });
}
