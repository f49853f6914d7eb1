//! Routes `tracing` output to a console, one formatted line per event.
//!
//! The fmt layer writes each event into a fresh [`ConsoleWriter`]; the line
//! is handed to the sink when the writer drops, tagged with the event's
//! level so the browser can pick `console.error`, `console.warn` and so on.

use std::io;

use swipenav_config::schema::LogLevel;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// Receives finished log lines.
pub trait ConsoleSink {
    fn emit(&self, level: Level, line: &str);
}

/// A [`MakeWriter`] that buffers each event and forwards it to a sink.
#[derive(Debug, Clone, Default)]
pub struct ConsoleMakeWriter<S> {
    sink: S,
}

impl<S> ConsoleMakeWriter<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }
}

pub struct ConsoleWriter<'a, S: ConsoleSink> {
    sink: &'a S,
    level: Level,
    buf: Vec<u8>,
}

impl<S: ConsoleSink> io::Write for ConsoleWriter<'_, S> {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<S: ConsoleSink> Drop for ConsoleWriter<'_, S> {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        self.sink.emit(self.level, line.trim_end_matches('\n'));
    }
}

impl<'a, S: ConsoleSink + 'a> MakeWriter<'a> for ConsoleMakeWriter<S> {
    type Writer = ConsoleWriter<'a, S>;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            sink: &self.sink,
            level: Level::INFO,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            sink: &self.sink,
            level: *meta.level(),
            buf: Vec::new(),
        }
    }
}

/// Filter directive for the configured level. Our crates log at `level`;
/// everything else only at `warn`.
pub fn filter_directive(level: LogLevel) -> String {
    let level = level.as_directive();
    format!("warn,swipenav_core={level},swipenav_config={level},swipenav_web={level}")
}
