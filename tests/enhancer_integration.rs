use autowide::config::settings::Settings;
use autowide::config::store::SettingsStore;
use autowide::controller::{Activation, PageController};
use autowide::page::{PageKind, PageSurface};

/// Minimal page stand-in, the same seam the real view implements.
#[derive(Default)]
struct FakePage {
    address: String,
    toggle_present: bool,
    clicks: u32,
    header_visible: Option<bool>,
    scrolled_to: Option<u32>,
}

impl FakePage {
    fn at(address: &str) -> Self {
        Self {
            address: address.to_string(),
            ..Default::default()
        }
    }
}

impl PageSurface for FakePage {
    fn address(&self) -> &str {
        &self.address
    }

    fn wide_toggle_present(&self) -> bool {
        self.toggle_present
    }

    fn click_wide_toggle(&mut self) {
        self.clicks += 1;
    }

    fn set_header_visible(&mut self, visible: bool) {
        self.header_visible = Some(visible);
    }

    fn scroll_to(&mut self, offset: u32) {
        self.scrolled_to = Some(offset);
    }
}

fn temp_store(name: &str) -> SettingsStore {
    let path = std::env::temp_dir().join(format!(
        "autowide_it_{}_{}.json",
        name,
        std::process::id()
    ));
    let _ = std::fs::remove_file(&path);
    SettingsStore::new(path)
}

#[test]
fn test_saved_settings_drive_a_fresh_controller_run() {
    let store = temp_store("fresh_run");

    // the panel's save path: full replace of the stored object
    let mut edited = Settings::default();
    edited.auto_scroll.enabled = true;
    edited.auto_scroll.offset = 250;
    edited.show_header = true;
    store.save(&edited).expect("save failed");

    // fresh controller run, as after the post-save restart
    let settings = store.load();
    let mut page = FakePage::at("/video/BV123/");
    let mut controller = PageController::new(settings, "/video/BV123/");
    controller.start(&mut page);

    assert_eq!(controller.activation(), Activation::Enabled(PageKind::Video));
    assert_eq!(page.header_visible, Some(true));

    // mutation turns until the toggle mounts
    controller.on_mutation(&mut page);
    assert_eq!(page.clicks, 0);
    page.toggle_present = true;
    controller.on_mutation(&mut page);
    controller.on_mutation(&mut page);

    assert_eq!(page.clicks, 1, "widescreen toggle must be clicked exactly once");
    assert_eq!(page.scrolled_to, Some(250));

    let _ = std::fs::remove_file(store.path());
}

#[test]
fn test_unmatched_page_restores_defaults() {
    let store = temp_store("unmatched");
    let mut settings = Settings::default();
    settings.auto_scroll.enabled = true;
    settings.show_header = false;
    store.save(&settings).expect("save failed");

    let mut page = FakePage::at("/read/cv123");
    page.toggle_present = true;
    let mut controller = PageController::new(store.load(), "/read/cv123");
    controller.start(&mut page);
    controller.on_mutation(&mut page);

    assert_eq!(controller.activation(), Activation::Disabled);
    assert_eq!(page.header_visible, Some(true), "header forced visible");
    assert_eq!(page.scrolled_to, Some(0), "scroll reset to the top");
    assert_eq!(page.clicks, 0);

    let _ = std::fs::remove_file(store.path());
}

#[test]
fn test_disabled_rule_turns_matching_page_off() {
    let store = temp_store("rule_off");
    let mut settings = Settings::default();
    for rule in &mut settings.page_rules {
        if rule.slug == "bangumi" {
            rule.enabled = false;
        }
    }
    store.save(&settings).expect("save failed");

    let controller = PageController::new(store.load(), "/bangumi/play/ep77");
    assert_eq!(controller.activation(), Activation::Disabled);

    let _ = std::fs::remove_file(store.path());
}

#[test]
fn test_legacy_settings_file_is_migrated_on_load() {
    let store = temp_store("legacy");
    std::fs::write(
        store.path(),
        r#"{
            "enabled_pages": { "video": false, "scripted": true },
            "show_header": true
        }"#,
    )
    .expect("write failed");

    let settings = store.load();
    assert!(settings.show_header);

    let video = settings
        .page_rules
        .iter()
        .find(|r| r.slug == "video")
        .expect("migrated video rule missing");
    assert_eq!(video.name, "Video");
    assert!(!video.enabled);

    let unknown = settings
        .page_rules
        .iter()
        .find(|r| r.slug == "scripted")
        .expect("unknown slug must be kept verbatim");
    assert_eq!(unknown.name, "scripted");
    assert!(unknown.enabled);

    // disabled legacy flag carries through to activation
    let controller = PageController::new(settings, "/video/BV123/");
    assert_eq!(controller.activation(), Activation::Disabled);

    let _ = std::fs::remove_file(store.path());
}

#[test]
fn test_partial_settings_file_merges_under_defaults() {
    let store = temp_store("partial");
    std::fs::write(store.path(), r#"{ "watch_address": true }"#).expect("write failed");

    let settings = store.load();
    assert!(settings.watch_address);
    assert_eq!(settings.page_rules, Settings::default().page_rules);
    assert_eq!(settings.auto_scroll, Settings::default().auto_scroll);
    assert_eq!(settings.burn_in, Settings::default().burn_in);

    let _ = std::fs::remove_file(store.path());
}
