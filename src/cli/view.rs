//! Terminal gallery
//!
//! Renders the gallery as text cards or JSON lines. Write failures are kept
//! and reported by the runner once the current step finishes.

use super::commands::OutputFormat;
use crate::controller::GalleryView;
use crate::types::{Image, Notification, NotificationKind};
use serde_json::json;
use std::io::{self, Write};
use tracing::debug;

/// Lines printed per image card in pretty mode
const CARD_LINES: usize = 3;

pub const NO_RESULTS_MESSAGE: &str =
    "Sorry, there are no images matching your search query. Please try again!";

pub const END_OF_RESULTS_MESSAGE: &str =
    "We're sorry, but you've reached the end of search results.";

/// Gallery view writing to a terminal or pipe
pub struct TerminalView<W: Write> {
    out: W,
    format: OutputFormat,
    rendered: usize,
    load_more_visible: bool,
    error: Option<io::Error>,
}

impl TerminalView<io::Stdout> {
    /// Create a view writing to stdout
    pub fn stdout(format: OutputFormat) -> Self {
        Self::new(io::stdout(), format)
    }
}

impl<W: Write> TerminalView<W> {
    /// Create a view over any writer
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            rendered: 0,
            load_more_visible: false,
            error: None,
        }
    }

    /// Number of images currently in the gallery
    pub fn rendered(&self) -> usize {
        self.rendered
    }

    /// Whether the load-more control is showing
    pub fn load_more_visible(&self) -> bool {
        self.load_more_visible
    }

    /// Take the first write error since the last call
    pub fn take_error(&mut self) -> Option<io::Error> {
        self.error.take()
    }

    /// Get the underlying writer
    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, text: &str) {
        if self.error.is_some() {
            return;
        }
        if let Err(e) = writeln!(self.out, "{text}").and_then(|()| self.out.flush()) {
            self.error = Some(e);
        }
    }

    fn message(&mut self, kind: &str, pretty: &str) {
        match self.format {
            OutputFormat::Pretty => self.line(pretty),
            OutputFormat::Json => {
                let msg = json!({ "type": kind, "message": pretty });
                self.line(&msg.to_string());
            }
        }
    }

    fn render_card(&mut self, index: usize, image: &Image) {
        let tags = image.tag_list().join(", ");
        self.line(&format!("#{index:<4} {tags}"));
        self.line(&format!(
            "      {}x{}  likes {}  views {}  comments {}  downloads {}",
            image.image_width,
            image.image_height,
            image.likes,
            image.views,
            image.comments,
            image.downloads
        ));
        self.line(&format!("      {}", image.large_image_url));
    }
}

impl<W: Write> GalleryView for TerminalView<W> {
    fn render_results(&mut self, images: &[Image]) {
        for image in images {
            self.rendered += 1;
            match self.format {
                OutputFormat::Pretty => self.render_card(self.rendered, image),
                OutputFormat::Json => {
                    let msg = json!({ "type": "IMAGE", "index": self.rendered, "image": image });
                    self.line(&msg.to_string());
                }
            }
        }
    }

    fn clear(&mut self) {
        self.rendered = 0;
    }

    fn set_loading(&mut self, visible: bool) {
        debug!(visible, "Loader");
    }

    fn set_no_results(&mut self, visible: bool) {
        if visible {
            self.message("NO_RESULTS", NO_RESULTS_MESSAGE);
        }
    }

    fn set_end_of_results(&mut self, visible: bool) {
        if visible {
            self.message("END_OF_RESULTS", END_OF_RESULTS_MESSAGE);
        }
    }

    fn set_load_more_visible(&mut self, visible: bool) {
        self.load_more_visible = visible;
        if visible {
            self.message("LOAD_MORE", "-- more results available, type :more --");
        }
    }

    fn notify(&mut self, notification: Notification) {
        let label = match notification.kind {
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        };
        match self.format {
            OutputFormat::Pretty => self.line(&format!("{label}: {notification}")),
            OutputFormat::Json => {
                let msg = json!({
                    "type": "NOTIFICATION",
                    "kind": label,
                    "message": notification.message
                });
                self.line(&msg.to_string());
            }
        }
    }

    fn first_item_height(&self) -> Option<f64> {
        (self.rendered > 0).then_some(CARD_LINES as f64)
    }

    fn scroll_by(&mut self, delta: f64) {
        // Output already flows downward; nothing to move
        debug!(delta, "Scroll");
    }
}
