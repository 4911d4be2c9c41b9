//! Per-page-load controller: decides whether the current page qualifies for
//! widescreen, watches for the toggle control, and applies scroll and header
//! visibility.

pub mod burn_in;

use crate::config::settings::Settings;
use crate::page::{PageKind, PageSurface};

/// Outcome of the startup decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Enabled(PageKind),
    Disabled,
}

impl Activation {
    /// Enabled iff the path resolves to a known page kind whose rule is on.
    pub fn decide(path: &str, settings: &Settings) -> Self {
        match PageKind::from_path(path) {
            Some(kind) if settings.page_enabled(kind) => Activation::Enabled(kind),
            _ => Activation::Disabled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WatcherState {
    Idle,
    Watching,
    Done,
}

pub struct PageController {
    settings: Settings,
    activation: Activation,
    watcher: WatcherState,
}

impl PageController {
    pub fn new(settings: Settings, path: &str) -> Self {
        let activation = Activation::decide(path, &settings);
        Self {
            settings,
            activation,
            watcher: WatcherState::Idle,
        }
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Whether the toggle watcher is still armed.
    pub fn watching(&self) -> bool {
        self.watcher == WatcherState::Watching
    }

    /// Whether the widescreen toggle has already been activated this run.
    pub fn widescreen_applied(&self) -> bool {
        self.watcher == WatcherState::Done
    }

    /// Runs once at page-ready time.
    pub fn start(&mut self, page: &mut dyn PageSurface) {
        match self.activation {
            Activation::Enabled(kind) => {
                tracing::info!("enhancer enabled for {:?} page", kind);
                page.set_header_visible(self.settings.show_header);
                self.watcher = WatcherState::Watching;
            }
            Activation::Disabled => {
                tracing::info!("page does not qualify, restoring defaults");
                page.set_header_visible(true);
                page.scroll_to(0);
            }
        }
    }

    /// One mutation turn. While armed, looks for the widescreen toggle; when it
    /// appears the control is clicked exactly once, the watcher disarms, and the
    /// initial scroll is applied.
    pub fn on_mutation(&mut self, page: &mut dyn PageSurface) {
        if self.watcher != WatcherState::Watching {
            return;
        }
        if page.wide_toggle_present() {
            page.click_wide_toggle();
            self.watcher = WatcherState::Done;
            tracing::info!("widescreen toggle clicked");
            self.apply_scroll(page);
        }
    }

    /// Re-apply the scroll offset after an in-page navigation.
    pub fn on_address_change(&mut self, page: &mut dyn PageSurface) {
        tracing::debug!("address changed to {}", page.address());
        self.apply_scroll(page);
    }

    fn apply_scroll(&self, page: &mut dyn PageSurface) {
        if self.settings.auto_scroll.enabled {
            page.scroll_to(self.settings.auto_scroll.offset);
        }
    }
}
