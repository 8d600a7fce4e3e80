//! Opening the composed link
//!
//! Fire-and-forget: the caller never learns whether the chat app opened.

use std::io::Write;

/// Opens a URL in a new browsing context (a new tab on the page)
pub trait LinkOpener {
    fn open_new_tab(&mut self, url: &str);
}

/// Writes the link to a terminal instead of a browser tab
pub struct ConsoleOpener<W: Write> {
    out: W,
}

impl<W: Write> ConsoleOpener<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }
}

impl ConsoleOpener<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write> LinkOpener for ConsoleOpener<W> {
    fn open_new_tab(&mut self, url: &str) {
        tracing::info!(url = %url, "Opening messaging link");
        if let Err(e) = writeln!(self.out, "→ abrir em nova aba: {}", url) {
            tracing::warn!(error = %e, "Failed to write messaging link");
        }
    }
}

/// Opener that only remembers what it was asked to open
#[derive(Debug, Default)]
pub struct RecordingOpener {
    pub opened: Vec<String>,
}

impl LinkOpener for RecordingOpener {
    fn open_new_tab(&mut self, url: &str) {
        self.opened.push(url.to_string());
    }
}
