//! `tracing` output for the browser build.
//!
//! The site library only emits events. Here they are formatted by
//! `tracing-subscriber` and each line goes to `console.log`.

use std::io;

use tracing::Level;

/// Buffers one formatted event and hands it to the console when dropped.
#[derive(Default)]
struct ConsoleWriter {
    line: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.line.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let line = String::from_utf8_lossy(&self.line);
        let line = line.trim_end();
        if !line.is_empty() {
            web_sys::console::log_1(&line.into());
        }
    }
}

/// Install the console subscriber at `DEBUG`.
///
/// Safe to call more than once; later calls leave the first subscriber in place.
pub fn init() {
    // No clock on wasm32-unknown-unknown, so no timestamps.
    let installed = tracing_subscriber::fmt()
        .with_ansi(false)
        .without_time()
        .with_max_level(Level::DEBUG)
        .with_writer(ConsoleWriter::default)
        .try_init();

    if installed.is_ok() {
        tracing::debug!("console logging ready");
    }
}
