//! Page kind resolution from the current address.

use crate::utils::i18n::{self, Language, T};

/// The page kinds the enhancer knows how to handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    Video,
    Bangumi,
    Medialist,
    List,
}

impl PageKind {
    pub const ALL: [PageKind; 4] = [
        PageKind::Video,
        PageKind::Bangumi,
        PageKind::Medialist,
        PageKind::List,
    ];

    /// Stable identifier used in persisted settings.
    pub fn slug(&self) -> &'static str {
        match self {
            PageKind::Video => "video",
            PageKind::Bangumi => "bangumi",
            PageKind::Medialist => "medialist",
            PageKind::List => "list",
        }
    }

    /// Fixed name lookup used when building default rules and when migrating
    /// legacy settings.
    pub fn default_name(&self) -> &'static str {
        match self {
            PageKind::Video => "Video",
            PageKind::Bangumi => "Bangumi",
            PageKind::Medialist => "Media list",
            PageKind::List => "List",
        }
    }

    pub fn label(&self, lang: Language) -> &'static str {
        match self {
            PageKind::Video => i18n::t(T::PageVideo, lang),
            PageKind::Bangumi => i18n::t(T::PageBangumi, lang),
            PageKind::Medialist => i18n::t(T::PageMedialist, lang),
            PageKind::List => i18n::t(T::PageList, lang),
        }
    }

    pub fn from_slug(slug: &str) -> Option<PageKind> {
        Self::ALL.iter().copied().find(|k| k.slug() == slug)
    }

    /// Resolve the kind from a page path by substring match.
    ///
    /// `/medialist/` is checked before `/list/`, which it also contains.
    pub fn from_path(path: &str) -> Option<PageKind> {
        if path.contains("/video/") {
            Some(PageKind::Video)
        } else if path.contains("/bangumi/") {
            Some(PageKind::Bangumi)
        } else if path.contains("/medialist/") {
            Some(PageKind::Medialist)
        } else if path.contains("/list/") {
            Some(PageKind::List)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_path() {
        assert_eq!(PageKind::from_path("/video/BV123/"), Some(PageKind::Video));
        assert_eq!(
            PageKind::from_path("/bangumi/play/ep1234"),
            Some(PageKind::Bangumi)
        );
        assert_eq!(
            PageKind::from_path("/medialist/play/ml55"),
            Some(PageKind::Medialist)
        );
        assert_eq!(PageKind::from_path("/list/watchlater"), Some(PageKind::List));
    }

    #[test]
    fn test_from_path_unmatched() {
        assert_eq!(PageKind::from_path("/read/cv123"), None);
        assert_eq!(PageKind::from_path("/"), None);
        assert_eq!(PageKind::from_path(""), None);
    }

    #[test]
    fn test_medialist_wins_over_list() {
        // "/medialist/" contains "/list/" as a substring
        assert_eq!(
            PageKind::from_path("/medialist/detail/ml1"),
            Some(PageKind::Medialist)
        );
    }

    #[test]
    fn test_slug_round_trip() {
        for kind in PageKind::ALL {
            assert_eq!(PageKind::from_slug(kind.slug()), Some(kind));
        }
        assert_eq!(PageKind::from_slug("unknown"), None);
    }
}
