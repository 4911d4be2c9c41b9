use std::time::{Duration, Instant};

use eframe::egui;

use crate::page::{PageKind, PageSurface};
use crate::utils::i18n::{self, Language, T};

/// How long the simulated player takes to mount its widescreen toggle after a
/// load. Long enough that the controller's watcher is observably doing its job.
const TOGGLE_MOUNT_DELAY: Duration = Duration::from_millis(1500);

const PLAYER_FILL: egui::Color32 = egui::Color32::from_gray(18);
const PLAYER_TEXT: egui::Color32 = egui::Color32::from_gray(110);

pub enum PageEvent {
    /// The address changed without a reload (in-page navigation).
    Navigated,
}

/// Simulated playback page: site header, address bar, a player area whose
/// widescreen toggle mounts late, and a scrollable content column. This is the
/// concrete [`PageSurface`] the controller drives in the app.
pub struct PageView {
    address: String,
    address_input: String,
    header_visible: bool,
    wide: bool,
    loaded_at: Instant,
    pending_scroll: Option<u32>,
}

impl PageView {
    pub fn new(address: &str) -> Self {
        Self {
            address: address.to_string(),
            address_input: address.to_string(),
            header_visible: true,
            wide: false,
            loaded_at: Instant::now(),
            pending_scroll: None,
        }
    }

    pub fn kind(&self) -> Option<PageKind> {
        PageKind::from_path(&self.address)
    }

    /// Whether the player container exists on this page. The floating panel
    /// mounts into it and silently stays unmounted when it is absent.
    pub fn player_present(&self) -> bool {
        self.kind().is_some()
    }

    #[allow(dead_code)]
    pub fn is_wide(&self) -> bool {
        self.wide
    }

    /// Simulated full reload: widescreen drops back to normal, the toggle
    /// remounts after its usual delay, and the page starts at the top.
    pub fn reload(&mut self) {
        self.wide = false;
        self.loaded_at = Instant::now();
        self.pending_scroll = Some(0);
    }

    fn navigate(&mut self, address: String) -> bool {
        if address.is_empty() || address == self.address {
            return false;
        }
        self.address = address;
        self.address_input = self.address.clone();
        true
    }

    /// Render the page. Returns an event when the user navigated in-page.
    pub fn show(&mut self, ctx: &egui::Context, lang: Language) -> Option<PageEvent> {
        let mut event = None;

        if self.header_visible {
            egui::TopBottomPanel::top("site_header").show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(i18n::t(T::SiteHeaderTitle, lang))
                            .strong()
                            .size(15.0),
                    );
                });
            });
        }

        egui::TopBottomPanel::top("address_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(i18n::t(T::AddressLabel, lang));
                let response = ui.add(
                    egui::TextEdit::singleline(&mut self.address_input).desired_width(340.0),
                );
                let entered =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
                if ui.button(i18n::t(T::Go, lang)).clicked() || entered {
                    let target = self.address_input.trim().to_string();
                    if self.navigate(target) {
                        event = Some(PageEvent::Navigated);
                    }
                }
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let mut area = egui::ScrollArea::vertical().auto_shrink([false; 2]);
            if let Some(offset) = self.pending_scroll.take() {
                area = area.vertical_scroll_offset(offset as f32);
            }
            area.show(ui, |ui| match self.kind() {
                Some(kind) => {
                    if let Some(page_event) = self.show_player_column(ui, kind, lang) {
                        event = Some(page_event);
                    }
                }
                None => {
                    ui.add_space(80.0);
                    ui.vertical_centered(|ui| {
                        ui.label(
                            egui::RichText::new(i18n::t(T::NoPlayerOnPage, lang))
                                .size(16.0)
                                .weak(),
                        );
                    });
                }
            });
        });

        event
    }

    fn show_player_column(
        &mut self,
        ui: &mut egui::Ui,
        kind: PageKind,
        lang: Language,
    ) -> Option<PageEvent> {
        let mut event = None;

        let full = ui.available_width();
        let width = if self.wide { full } else { (full * 0.66).min(880.0) };
        let height = if self.wide { 430.0 } else { 320.0 };
        let (rect, _) = ui.allocate_exact_size(egui::vec2(width, height), egui::Sense::hover());
        ui.painter()
            .rect_filled(rect, egui::CornerRadius::same(6), PLAYER_FILL);
        ui.painter().text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            format!(
                "{} · {}",
                i18n::t(T::PlayerPlaceholder, lang),
                kind.label(lang)
            ),
            egui::FontId::proportional(18.0),
            PLAYER_TEXT,
        );

        // player control strip; the widescreen toggle mounts late
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(self.address.as_str()).monospace().weak());
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if self.wide_toggle_present() {
                    let toggle = ui
                        .button("⛶")
                        .on_hover_text(i18n::t(T::WideToggleTooltip, lang));
                    if toggle.clicked() {
                        self.click_wide_toggle();
                    }
                }
            });
        });

        ui.separator();
        ui.strong(i18n::t(T::RelatedVideos, lang));
        for i in 1u32..=12 {
            let id = 1_000 + i * 37;
            let title = format!("BV{:08}", id);
            if ui.link(&title).clicked() {
                let target = format!("/video/BV{:08}/", id);
                if self.navigate(target) {
                    event = Some(PageEvent::Navigated);
                }
            }
        }

        event
    }
}

impl PageSurface for PageView {
    fn address(&self) -> &str {
        &self.address
    }

    fn wide_toggle_present(&self) -> bool {
        self.player_present() && self.loaded_at.elapsed() >= TOGGLE_MOUNT_DELAY
    }

    fn click_wide_toggle(&mut self) {
        self.wide = !self.wide;
    }

    fn set_header_visible(&mut self, visible: bool) {
        self.header_visible = visible;
    }

    fn scroll_to(&mut self, offset: u32) {
        self.pending_scroll = Some(offset);
    }
}
