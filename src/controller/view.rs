//! Rendering seam for the gallery
//!
//! The controller only talks to a `GalleryView`. A browser binding, the
//! terminal renderer in `cli`, and the recording view used in tests all
//! implement it.

use crate::types::{Image, Notification};

/// Capabilities the controller needs from a gallery surface
pub trait GalleryView {
    /// Append images to the gallery
    fn render_results(&mut self, images: &[Image]);

    /// Remove every rendered image
    fn clear(&mut self);

    /// Show or hide the loading indicator
    fn set_loading(&mut self, visible: bool);

    /// Show or hide the "no results" message
    fn set_no_results(&mut self, visible: bool);

    /// Show or hide the "end of collection" message
    fn set_end_of_results(&mut self, visible: bool);

    /// Show or hide the load-more control
    fn set_load_more_visible(&mut self, visible: bool);

    /// Show a transient notification
    fn notify(&mut self, notification: Notification);

    /// Height of the first rendered item, `None` when the gallery is empty
    fn first_item_height(&self) -> Option<f64>;

    /// Smoothly scroll the viewport down by `delta`
    fn scroll_by(&mut self, delta: f64);
}
