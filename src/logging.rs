//! `tracing` output for the browser console.
//!
//! Events are formatted by `tracing-subscriber`'s fmt layer and each finished
//! line goes to the console method matching its level. Native builds (tests)
//! write to stderr instead.

use std::io;

use tracing::Level;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info";

/// Route Rust panics to `console.error` with their message and location,
/// instead of the bare "unreachable executed" wasm trap.
pub fn install_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Install the global subscriber. The filter comes from `STOREFRONT_LOG` at
/// build time, defaulting to `info`. Calling this twice is harmless.
pub fn init() {
    let filter = EnvFilter::try_new(option_env!("STOREFRONT_LOG").unwrap_or(DEFAULT_FILTER))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let result = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(ConsoleMakeWriter)
        .without_time()
        .with_target(false)
        .try_init();

    if result.is_err() {
        tracing::debug!("Logging already initialised");
    }
}

#[derive(Debug, Clone, Copy)]
struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &tracing::Metadata<'_>) -> Self::Writer {
        ConsoleLine::new(*meta.level())
    }
}

/// Buffers one formatted event and emits it on drop.
struct ConsoleLine {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleLine {
    fn new(level: Level) -> Self {
        Self {
            level,
            buf: Vec::new(),
        }
    }
}

impl io::Write for ConsoleLine {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let text = String::from_utf8_lossy(&self.buf);
        emit(self.level, text.trim_end());
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&value),
        Level::WARN => console::warn_1(&value),
        Level::INFO => console::info_1(&value),
        _ => console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_init_twice_is_harmless() {
        init();
        init();
        tracing::info!("logging initialised in test");
    }

    #[test]
    fn test_panic_hook_keeps_panics_catchable() {
        install_panic_hook();
        install_panic_hook();
        let result = std::panic::catch_unwind(|| panic!("booking failed"));
        assert!(result.is_err());
    }

    #[test]
    fn test_console_line_buffers_until_drop() {
        let mut line = ConsoleMakeWriter.make_writer();
        write!(line, "part one, ").unwrap();
        writeln!(line, "part two").unwrap();
        assert_eq!(line.buf, b"part one, part two\n");
        assert_eq!(line.level, Level::INFO);
    }
}
