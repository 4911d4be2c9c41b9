use eframe::egui;

use crate::config::settings::{self, Settings, BURN_IN_SHIFT_MAX, SCROLL_OFFSET_MAX};
use crate::page::PageKind;
use crate::utils::i18n::{self, Language, T};

const ACCENT: egui::Color32 = egui::Color32::from_rgb(0, 161, 214);
const TAB_FILL: egui::Color32 = egui::Color32::from_rgb(0, 174, 236);

pub enum PanelAction {
    /// Persist the given settings and restart the controller.
    Save(Settings),
    /// Overwrite the store with hard-coded defaults and restart.
    Reset,
}

/// The floating settings panel.
///
/// Collapsed it is a small clickable tab in the top-right corner of the player
/// area; expanded it shows the full form. Form state lives in a draft copy of
/// the settings, nothing touches the store until Save.
pub struct FloatPanel {
    expanded: bool,
    draft: Settings,
    scroll_offset_input: String,
    max_shift_input: String,
}

impl FloatPanel {
    pub fn new(settings: &Settings) -> Self {
        Self {
            expanded: false,
            draft: settings.clone(),
            scroll_offset_input: settings.auto_scroll.offset.to_string(),
            max_shift_input: settings.burn_in.max_offset.to_string(),
        }
    }

    #[allow(dead_code)]
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Render the panel, shifted left by the burn-in offset.
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        shift: u32,
        lang: Language,
    ) -> Option<PanelAction> {
        let anchor_offset = egui::vec2(-24.0 - shift as f32, 92.0);
        if self.expanded {
            self.show_expanded(ctx, anchor_offset, lang)
        } else {
            self.show_collapsed(ctx, anchor_offset);
            None
        }
    }

    fn show_collapsed(&mut self, ctx: &egui::Context, anchor_offset: egui::Vec2) {
        egui::Area::new(egui::Id::new("float_panel_tab"))
            .anchor(egui::Align2::RIGHT_TOP, anchor_offset)
            .show(ctx, |ui| {
                let tab = egui::Button::new("").fill(TAB_FILL).corner_radius(
                    egui::CornerRadius {
                        nw: 0,
                        ne: 0,
                        sw: 6,
                        se: 6,
                    },
                );
                if ui.add_sized(egui::vec2(30.0, 14.0), tab).clicked() {
                    self.expanded = true;
                }
            });
    }

    fn show_expanded(
        &mut self,
        ctx: &egui::Context,
        anchor_offset: egui::Vec2,
        lang: Language,
    ) -> Option<PanelAction> {
        let mut action = None;
        egui::Window::new("float_panel")
            .title_bar(false)
            .resizable(false)
            .anchor(egui::Align2::RIGHT_TOP, anchor_offset)
            .default_width(320.0)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.strong(i18n::t(T::PanelTitle, lang));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        if ui.button("✕").clicked() {
                            self.expanded = false;
                        }
                    });
                });
                ui.separator();

                self.section_header(ui, i18n::t(T::SectionPageKinds, lang));
                ui.label(
                    egui::RichText::new(i18n::t(T::PageKindsHint, lang))
                        .small()
                        .weak(),
                );
                for rule in &mut self.draft.page_rules {
                    let label = match PageKind::from_slug(&rule.slug) {
                        Some(kind) => kind.label(lang).to_string(),
                        None => rule.name.clone(),
                    };
                    ui.checkbox(&mut rule.enabled, label);
                }

                self.section_header(ui, i18n::t(T::SectionInterface, lang));
                ui.checkbox(&mut self.draft.show_header, i18n::t(T::ShowHeader, lang));

                self.section_header(ui, i18n::t(T::SectionAutoScroll, lang));
                ui.checkbox(
                    &mut self.draft.auto_scroll.enabled,
                    i18n::t(T::EnableAutoScroll, lang),
                );
                ui.horizontal(|ui| {
                    ui.label(i18n::t(T::ScrollOffsetLabel, lang));
                    ui.add(
                        egui::TextEdit::singleline(&mut self.scroll_offset_input)
                            .desired_width(80.0),
                    );
                    ui.label("px");
                });

                self.section_header(ui, i18n::t(T::SectionBurnIn, lang));
                ui.checkbox(
                    &mut self.draft.burn_in.enabled,
                    i18n::t(T::EnableBurnIn, lang),
                );
                ui.horizontal(|ui| {
                    ui.label(i18n::t(T::MaxShiftLabel, lang));
                    ui.add(
                        egui::TextEdit::singleline(&mut self.max_shift_input).desired_width(80.0),
                    );
                    ui.label("px");
                });

                ui.separator();
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(i18n::t(T::Save, lang)).clicked() {
                        let saved = self.commit();
                        self.expanded = false;
                        action = Some(PanelAction::Save(saved));
                    }
                    if ui.button(i18n::t(T::Reset, lang)).clicked() {
                        self.expanded = false;
                        action = Some(PanelAction::Reset);
                    }
                });
            });
        action
    }

    fn section_header(&self, ui: &mut egui::Ui, text: &str) {
        ui.add_space(6.0);
        ui.label(egui::RichText::new(text).color(ACCENT).strong());
    }

    /// Read the form into a settings object. Out-of-range or unparsable numeric
    /// fields are coerced to 0 and the field text is reset to match.
    fn commit(&mut self) -> Settings {
        let offset = settings::sanitize_offset(&self.scroll_offset_input, SCROLL_OFFSET_MAX);
        self.scroll_offset_input = offset.to_string();
        let max_shift = settings::sanitize_offset(&self.max_shift_input, BURN_IN_SHIFT_MAX);
        self.max_shift_input = max_shift.to_string();

        let mut saved = self.draft.clone();
        saved.auto_scroll.offset = offset;
        saved.burn_in.max_offset = max_shift;
        saved
    }
}
