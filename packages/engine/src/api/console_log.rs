//! `log` backend that writes to the browser console.
//!
//! Installed by `init()`. Error and warn records map to `console.error` and
//! `console.warn` so they stand out in devtools; everything else goes to
//! `console.info` / `console.debug`.

use std::fmt;

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = JsValue::from_str(&format_line(record.level(), record.target(), *record.args()));
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Install the console logger. Returns false if a logger was already set;
/// the level is applied either way.
pub fn install(level: LevelFilter) -> bool {
    let installed = log::set_logger(&LOGGER).is_ok();
    log::set_max_level(level);
    installed
}

/// "off", "error", "warn", "info", "debug" or "trace", any case
pub fn parse_level(name: &str) -> Option<LevelFilter> {
    name.trim().parse().ok()
}

fn format_line(level: Level, target: &str, args: fmt::Arguments<'_>) -> String {
    format!("[{level}] {target}: {args}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_carries_level_target_and_message() {
        let line = format_line(Level::Warn, "dice_tray_engine::tray", format_args!("die {} lost", 3));
        assert_eq!(line, "[WARN] dice_tray_engine::tray: die 3 lost");
    }

    #[test]
    fn level_names_parse() {
        assert_eq!(parse_level("Debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" off "), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }
}
