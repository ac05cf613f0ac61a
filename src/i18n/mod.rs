//! i18n - Internationalization Module
//!
//! Default component labels, looked up with HashMap-based tables.

use std::collections::HashMap;
use std::sync::OnceLock;

use gpui::SharedString;
use serde::{Deserialize, Serialize};

/// Supported locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Locale {
    /// English (US)
    #[default]
    #[serde(rename = "en-US")]
    EnUS,
    /// Chinese (Simplified)
    #[serde(rename = "zh-CN")]
    ZhCN,
}

impl Locale {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Locale::EnUS => "English",
            Locale::ZhCN => "中文",
        }
    }

    /// Locale of the current user session, English when unknown
    pub fn from_system() -> Self {
        Self::from_tag(&locale_config::Locale::current().to_string())
    }

    /// Match a language tag such as `zh-CN` or `en_US.UTF-8`
    pub fn from_tag(tag: &str) -> Self {
        let language = tag
            .split(|c| c == '-' || c == '_' || c == ',' || c == '.')
            .next()
            .unwrap_or_default();
        if language.eq_ignore_ascii_case("zh") {
            Locale::ZhCN
        } else {
            Locale::EnUS
        }
    }

    /// The other locale, for the gallery language toggle
    pub fn toggled(&self) -> Self {
        match self {
            Locale::EnUS => Locale::ZhCN,
            Locale::ZhCN => Locale::EnUS,
        }
    }
}

/// Translation resources
static TRANSLATIONS: OnceLock<HashMap<&'static str, (&'static str, &'static str)>> = OnceLock::new();

/// Initialize translations (key -> (en, zh))
fn init_translations() -> HashMap<&'static str, (&'static str, &'static str)> {
    let mut map = HashMap::new();

    // Gallery
    map.insert("gallery-title", ("Loom UI Gallery", "Loom UI 组件库"));
    map.insert("gallery-language", ("Language", "语言"));
    map.insert("section-buttons", ("Buttons", "按钮"));
    map.insert("section-inputs", ("Inputs", "输入框"));
    map.insert("section-selection", ("Selection", "选择"));
    map.insert("section-feedback", ("Feedback", "反馈"));
    map.insert("section-navigation", ("Navigation", "导航"));
    map.insert("section-overlays", ("Overlays", "浮层"));
    map.insert("section-layout", ("Layout", "布局"));
    map.insert("section-data", ("Data display", "数据展示"));
    map.insert("section-color", ("Color", "颜色"));

    // Pagination
    map.insert("pagination-previous", ("Previous", "上一页"));
    map.insert("pagination-next", ("Next", "下一页"));
    map.insert("pagination-first", ("«", "«"));
    map.insert("pagination-last", ("»", "»"));
    map.insert("pagination-dots", ("...", "..."));

    // Copy button
    map.insert("copy", ("Copy", "复制"));
    map.insert("copied", ("Copied", "已复制"));

    // Password input
    map.insert("password-show", ("Show", "显示"));
    map.insert("password-hide", ("Hide", "隐藏"));

    // File input
    map.insert("file-input-placeholder", ("Pick file", "选择文件"));
    map.insert("files-selected", ("file(s) selected", "个文件已选择"));
    map.insert("file-button-label", ("Upload files", "上传文件"));

    // Collapse
    map.insert("collapse-open", ("Show content", "展开"));
    map.insert("collapse-close", ("Hide content", "收起"));

    // Misc
    map.insert("loading", ("Loading...", "加载中..."));
    map.insert("modal-close", ("Close", "关闭"));
    map.insert("select-placeholder", ("Select...", "请选择..."));
    map.insert("stepper-completed", ("Completed", "已完成"));

    // Shortcuts
    map.insert("shortcut-next-section", ("Next section", "下一节"));
    map.insert("shortcut-previous-section", ("Previous section", "上一节"));
    map.insert("shortcut-language", ("Switch language", "切换语言"));
    map.insert("shortcut-save", ("Save settings", "保存设置"));

    map
}

/// Get translations
fn translations() -> &'static HashMap<&'static str, (&'static str, &'static str)> {
    TRANSLATIONS.get_or_init(init_translations)
}

/// Translate a key
pub fn t(locale: Locale, key: &str) -> SharedString {
    if let Some(&(en, zh)) = translations().get(key) {
        match locale {
            Locale::EnUS => SharedString::from(en),
            Locale::ZhCN => SharedString::from(zh),
        }
    } else {
        // Fallback: return the key itself
        SharedString::from(key.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_keys_translate() {
        assert_eq!(t(Locale::EnUS, "pagination-next").as_ref(), "Next");
        assert_eq!(t(Locale::ZhCN, "copied").as_ref(), "已复制");
        assert_eq!(t(Locale::ZhCN, "file-input-placeholder").as_ref(), "选择文件");
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(t(Locale::ZhCN, "no-such-key").as_ref(), "no-such-key");
    }

    #[test]
    fn tags_map_to_locales() {
        assert_eq!(Locale::from_tag("zh-CN"), Locale::ZhCN);
        assert_eq!(Locale::from_tag("zh_TW.UTF-8"), Locale::ZhCN);
        assert_eq!(Locale::from_tag("en-US"), Locale::EnUS);
        assert_eq!(Locale::from_tag("fr"), Locale::EnUS);
        assert_eq!(Locale::from_tag(""), Locale::EnUS);
    }
}
