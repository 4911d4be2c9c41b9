//! Built-in translation table.
//!
//! The enhancer targets a site whose audience is largely Chinese-speaking, so the
//! UI ships with English and Chinese strings and a View-menu switch.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

/// Translation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum T {
    // Menu bar
    File,
    Exit,
    View,
    Help,
    About,
    AboutTitle,
    Close,

    // Floating panel
    PanelTitle,
    SectionPageKinds,
    PageKindsHint,
    SectionInterface,
    ShowHeader,
    SectionAutoScroll,
    EnableAutoScroll,
    ScrollOffsetLabel,
    SectionBurnIn,
    EnableBurnIn,
    MaxShiftLabel,
    Save,
    Reset,

    // Page kinds
    PageVideo,
    PageBangumi,
    PageMedialist,
    PageList,

    // Status bar
    EnhancerEnabledOn,
    EnhancerDisabled,
    WatchingForToggle,
    WidescreenApplied,
    SettingsSaved,
    SettingsReset,

    // Simulated page
    AddressLabel,
    Go,
    SiteHeaderTitle,
    PlayerPlaceholder,
    WideToggleTooltip,
    RelatedVideos,
    NoPlayerOnPage,
}

/// Look up a translation.
pub fn t(key: T, lang: Language) -> &'static str {
    match lang {
        Language::English => match key {
            T::File => "File",
            T::Exit => "Exit",
            T::View => "View",
            T::Help => "Help",
            T::About => "About",
            T::AboutTitle => "About AutoWide",
            T::Close => "Close",

            T::PanelTitle => "Playback page enhancer",
            T::SectionPageKinds => "Widescreen page kinds",
            T::PageKindsHint => "Widescreen triggers only on checked page kinds",
            T::SectionInterface => "Interface",
            T::ShowHeader => "Show top navigation bar",
            T::SectionAutoScroll => "Auto scroll",
            T::EnableAutoScroll => "Scroll the page automatically",
            T::ScrollOffsetLabel => "Scroll offset (0-1000)",
            T::SectionBurnIn => "Panel burn-in protection",
            T::EnableBurnIn => "Enable burn-in protection",
            T::MaxShiftLabel => "Max shift (0-100)",
            T::Save => "Save",
            T::Reset => "Reset to defaults",

            T::PageVideo => "Video",
            T::PageBangumi => "Bangumi",
            T::PageMedialist => "Media list",
            T::PageList => "List",

            T::EnhancerEnabledOn => "Enhancer active on {} page",
            T::EnhancerDisabled => "Page does not qualify, defaults restored",
            T::WatchingForToggle => "Waiting for the widescreen toggle",
            T::WidescreenApplied => "Widescreen applied",
            T::SettingsSaved => "Settings saved, restarting",
            T::SettingsReset => "Settings reset, restarting",

            T::AddressLabel => "Address",
            T::Go => "Go",
            T::SiteHeaderTitle => "bilibili  |  home  ·  trending  ·  channels",
            T::PlayerPlaceholder => "video player",
            T::WideToggleTooltip => "Toggle widescreen",
            T::RelatedVideos => "Related videos",
            T::NoPlayerOnPage => "This page has no player",
        },
        Language::Chinese => match key {
            T::File => "文件",
            T::Exit => "退出",
            T::View => "视图",
            T::Help => "帮助",
            T::About => "关于",
            T::AboutTitle => "关于 AutoWide",
            T::Close => "关闭",

            T::PanelTitle => "播放页增强设置",
            T::SectionPageKinds => "宽屏-页面类型",
            T::PageKindsHint => "只有在勾选的页面类型才触发宽屏",
            T::SectionInterface => "界面显示",
            T::ShowHeader => "显示顶部导航条",
            T::SectionAutoScroll => "自动滚动",
            T::EnableAutoScroll => "启用页面自动滚动",
            T::ScrollOffsetLabel => "滚动距离(0-1000)",
            T::SectionBurnIn => "工具按钮防烧屏设置",
            T::EnableBurnIn => "启用面板防烧屏保护",
            T::MaxShiftLabel => "移动幅度(0-100)",
            T::Save => "保存配置",
            T::Reset => "恢复默认",

            T::PageVideo => "普通视频",
            T::PageBangumi => "番剧",
            T::PageMedialist => "收藏夹",
            T::PageList => "列表",

            T::EnhancerEnabledOn => "增强已在{}页启用",
            T::EnhancerDisabled => "当前页面不生效，已恢复默认",
            T::WatchingForToggle => "等待宽屏按钮出现",
            T::WidescreenApplied => "已切换宽屏",
            T::SettingsSaved => "配置已保存，正在重启",
            T::SettingsReset => "已恢复默认配置，正在重启",

            T::AddressLabel => "地址",
            T::Go => "跳转",
            T::SiteHeaderTitle => "bilibili  |  首页 · 热门 · 频道",
            T::PlayerPlaceholder => "视频播放器",
            T::WideToggleTooltip => "切换宽屏",
            T::RelatedVideos => "相关视频",
            T::NoPlayerOnPage => "此页面没有播放器",
        },
    }
}
