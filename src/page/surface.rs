//! Seam between the controller and the host page.
//!
//! The controller never talks to a concrete view; everything it needs from the
//! page goes through this trait, so the whole enable/watch/apply flow can run
//! against a plain struct in tests.

pub trait PageSurface {
    /// Current page path, e.g. `/video/BV123/`.
    fn address(&self) -> &str;

    /// Whether the widescreen toggle control exists yet. The player mounts it
    /// some time after page load, which is why the controller has to watch.
    fn wide_toggle_present(&self) -> bool;

    /// Activate the widescreen toggle control.
    fn click_wide_toggle(&mut self);

    /// Show or hide the site navigation header.
    fn set_header_visible(&mut self, visible: bool);

    /// Scroll the page to a vertical pixel offset.
    fn scroll_to(&mut self, offset: u32);
}
