use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::page::PageKind;

/// Upper bound accepted for the auto-scroll offset, in pixels.
pub const SCROLL_OFFSET_MAX: u32 = 1000;

/// Upper bound accepted for the burn-in shift, in pixels.
pub const BURN_IN_SHIFT_MAX: u32 = 100;

/// Per-page-kind enable flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRule {
    pub name: String,
    pub slug: String,
    pub enabled: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutoScroll {
    pub enabled: bool,
    pub offset: u32,
}

impl Default for AutoScroll {
    fn default() -> Self {
        Self {
            enabled: false,
            offset: 100,
        }
    }
}

/// Idle-animation configuration for the floating panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BurnIn {
    pub enabled: bool,
    /// Pixels moved per tick.
    pub step: u32,
    /// Largest horizontal shift away from the rest position.
    pub max_offset: u32,
    pub interval_ms: u64,
}

impl Default for BurnIn {
    fn default() -> Self {
        Self {
            enabled: true,
            step: 1,
            max_offset: 100,
            interval_ms: 10_000,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub page_rules: Vec<PageRule>,

    pub auto_scroll: AutoScroll,

    pub show_header: bool,

    pub burn_in: BurnIn,

    /// Re-apply the scroll offset when the address changes without a reload.
    pub watch_address: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            page_rules: PageKind::ALL
                .iter()
                .map(|kind| PageRule {
                    name: kind.default_name().to_string(),
                    slug: kind.slug().to_string(),
                    enabled: true,
                })
                .collect(),
            auto_scroll: AutoScroll::default(),
            show_header: false,
            burn_in: BurnIn::default(),
            watch_address: false,
        }
    }
}

impl Settings {
    /// Build effective settings from a raw stored value: legacy shapes are
    /// migrated first, then every top-level field is merged under the defaults.
    pub fn from_stored(raw: Value) -> Self {
        merge_with_defaults(migrate_legacy(raw))
    }

    /// Whether the rule for `kind` exists and is enabled.
    pub fn page_enabled(&self, kind: PageKind) -> bool {
        self.page_rules
            .iter()
            .any(|rule| rule.slug == kind.slug() && rule.enabled)
    }
}

/// Fixed slug-to-name lookup. Unknown slugs keep their identifier as the name.
pub fn page_name_for_slug(slug: &str) -> String {
    PageKind::from_slug(slug)
        .map(|kind| kind.default_name().to_string())
        .unwrap_or_else(|| slug.to_string())
}

/// Translate the legacy `enabled_pages` map (slug -> bool) into the current
/// list-of-rules shape. Anything already in the current shape is left alone.
fn migrate_legacy(mut raw: Value) -> Value {
    let Value::Object(map) = &mut raw else {
        return raw;
    };
    if map.contains_key("page_rules") {
        return raw;
    }
    if let Some(Value::Object(legacy)) = map.remove("enabled_pages") {
        tracing::info!("migrating legacy enabled_pages settings shape");
        let rules: Vec<Value> = legacy
            .iter()
            .map(|(slug, enabled)| {
                serde_json::json!({
                    "name": page_name_for_slug(slug),
                    "slug": slug,
                    "enabled": enabled.as_bool().unwrap_or(false),
                })
            })
            .collect();
        map.insert("page_rules".to_string(), Value::Array(rules));
    }
    raw
}

/// Top-level per-field merge: a stored field wins only if it deserializes into
/// the expected shape, otherwise the default stands.
fn merge_with_defaults(raw: Value) -> Settings {
    let defaults = Settings::default();
    let Value::Object(map) = raw else {
        return defaults;
    };
    Settings {
        page_rules: field(&map, "page_rules").unwrap_or(defaults.page_rules),
        auto_scroll: field(&map, "auto_scroll").unwrap_or(defaults.auto_scroll),
        show_header: field(&map, "show_header").unwrap_or(defaults.show_header),
        burn_in: field(&map, "burn_in").unwrap_or(defaults.burn_in),
        watch_address: field(&map, "watch_address").unwrap_or(defaults.watch_address),
    }
}

fn field<T: serde::de::DeserializeOwned>(map: &Map<String, Value>, key: &str) -> Option<T> {
    map.get(key)
        .cloned()
        .and_then(|value| serde_json::from_value(value).ok())
}

/// Sanitize a numeric form field: the input must parse as a number within
/// `[0, max]`, anything else is coerced to 0.
pub fn sanitize_offset(input: &str, max: u32) -> u32 {
    let Ok(value) = input.trim().parse::<f64>() else {
        return 0;
    };
    if !value.is_finite() || value < 0.0 || value > max as f64 {
        return 0;
    }
    value as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_default_settings() {
        let s = Settings::default();
        assert_eq!(s.page_rules.len(), 4);
        assert!(s.page_rules.iter().all(|r| r.enabled));
        assert!(!s.auto_scroll.enabled);
        assert_eq!(s.auto_scroll.offset, 100);
        assert!(!s.show_header);
        assert!(s.burn_in.enabled);
        assert_eq!(s.burn_in.interval_ms, 10_000);
        assert!(!s.watch_address);
    }

    #[test]
    fn test_merge_fills_missing_fields() {
        let s = Settings::from_stored(json!({ "show_header": true }));
        assert!(s.show_header);
        // everything else is the default
        assert_eq!(s.page_rules, Settings::default().page_rules);
        assert_eq!(s.auto_scroll, AutoScroll::default());
        assert_eq!(s.burn_in, BurnIn::default());
    }

    #[test]
    fn test_merge_ignores_ill_typed_fields() {
        let s = Settings::from_stored(json!({
            "show_header": "yes",
            "auto_scroll": { "enabled": true, "offset": 250 },
        }));
        assert!(!s.show_header);
        assert!(s.auto_scroll.enabled);
        assert_eq!(s.auto_scroll.offset, 250);
    }

    #[test]
    fn test_merge_fills_missing_nested_fields() {
        let s = Settings::from_stored(json!({
            "auto_scroll": { "enabled": true },
            "burn_in": { "max_offset": 40 },
        }));
        assert!(s.auto_scroll.enabled);
        assert_eq!(s.auto_scroll.offset, 100);
        assert!(s.burn_in.enabled);
        assert_eq!(s.burn_in.max_offset, 40);
        assert_eq!(s.burn_in.step, 1);
    }

    #[test]
    fn test_non_object_value_falls_back_to_defaults() {
        assert_eq!(Settings::from_stored(json!(null)), Settings::default());
        assert_eq!(Settings::from_stored(json!([1, 2])), Settings::default());
        assert_eq!(Settings::from_stored(json!("broken")), Settings::default());
    }

    #[test]
    fn test_legacy_map_migration() {
        let s = Settings::from_stored(json!({
            "enabled_pages": { "video": false, "bangumi": true, "danmaku": true },
        }));
        let video = s.page_rules.iter().find(|r| r.slug == "video").unwrap();
        assert_eq!(video.name, "Video");
        assert!(!video.enabled);

        let bangumi = s.page_rules.iter().find(|r| r.slug == "bangumi").unwrap();
        assert_eq!(bangumi.name, "Bangumi");
        assert!(bangumi.enabled);

        // unknown identifier survives verbatim, name falls back to the slug
        let custom = s.page_rules.iter().find(|r| r.slug == "danmaku").unwrap();
        assert_eq!(custom.name, "danmaku");
        assert!(custom.enabled);
    }

    #[test]
    fn test_current_shape_wins_over_legacy_key() {
        let s = Settings::from_stored(json!({
            "page_rules": [{ "name": "Video", "slug": "video", "enabled": false }],
            "enabled_pages": { "video": true },
        }));
        assert_eq!(s.page_rules.len(), 1);
        assert!(!s.page_rules[0].enabled);
    }

    #[test]
    fn test_page_enabled() {
        let mut s = Settings::default();
        assert!(s.page_enabled(PageKind::Video));
        s.page_rules.retain(|r| r.slug != "video");
        assert!(!s.page_enabled(PageKind::Video));
    }

    #[test]
    fn test_sanitize_offset() {
        assert_eq!(sanitize_offset("100", SCROLL_OFFSET_MAX), 100);
        assert_eq!(sanitize_offset(" 250 ", SCROLL_OFFSET_MAX), 250);
        assert_eq!(sanitize_offset("1000", SCROLL_OFFSET_MAX), 1000);
        assert_eq!(sanitize_offset("-5", SCROLL_OFFSET_MAX), 0);
        assert_eq!(sanitize_offset("1500", SCROLL_OFFSET_MAX), 0);
        assert_eq!(sanitize_offset("abc", SCROLL_OFFSET_MAX), 0);
        assert_eq!(sanitize_offset("", SCROLL_OFFSET_MAX), 0);
        assert_eq!(sanitize_offset("NaN", SCROLL_OFFSET_MAX), 0);
        assert_eq!(sanitize_offset("120", BURN_IN_SHIFT_MAX), 0);
        assert_eq!(sanitize_offset("80", BURN_IN_SHIFT_MAX), 80);
    }
}
