//! Routes `tracing` output to the browser console.

use std::io;

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::PickerConfig;

/// Buffers one formatted event and hands it to the console method that
/// matches its level when dropped.
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        if line.is_empty() {
            return;
        }
        let value = wasm_bindgen::JsValue::from_str(line);
        match self.level {
            Level::ERROR => web_sys::console::error_1(&value),
            Level::WARN => web_sys::console::warn_1(&value),
            Level::INFO => web_sys::console::info_1(&value),
            _ => web_sys::console::debug_1(&value),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buf: Vec::new(),
        }
    }
}

fn directive(config: &PickerConfig) -> String {
    let level = config
        .level_filter()
        .map(|filter| filter.to_string().to_lowercase())
        .unwrap_or_else(|_| "info".to_string());
    format!("finger_picker={level}")
}

/// Installs the global subscriber. Safe to call more than once.
pub fn init(config: &PickerConfig) {
    let filter = EnvFilter::try_new(directive(config))
        .unwrap_or_else(|_| EnvFilter::new("finger_picker=info"));

    // no wall clock on wasm32-unknown-unknown
    let fmt_layer = fmt::layer()
        .with_writer(ConsoleMakeWriter)
        .with_ansi(false)
        .with_target(true)
        .without_time()
        .compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn directive_targets_this_crate() {
        let config = PickerConfig {
            log_level: "debug".into(),
            ..Default::default()
        };
        assert_eq!(directive(&config), "finger_picker=debug");
    }

    #[test]
    fn bad_level_falls_back_to_info() {
        let config = PickerConfig {
            log_level: "loud".into(),
            ..Default::default()
        };
        assert_eq!(directive(&config), "finger_picker=info");
    }
}
