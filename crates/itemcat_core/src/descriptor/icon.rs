//! Icon path pattern resolution.
//!
//! Descriptors advertise icon paths as patterns with a `:size` placeholder,
//! e.g. `images/:size/folder.png`.

use once_cell::sync::Lazy;
use regex::Regex;

static SIZE_PLACEHOLDER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r":size\b").expect("valid size placeholder regex"));

/// Standard icon sizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSize {
    Small,
    Medium,
    Large,
    XLarge,
}

impl IconSize {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "16x16",
            Self::Medium => "24x24",
            Self::Large => "32x32",
            Self::XLarge => "48x48",
        }
    }
}

/// Substitutes every `:size` placeholder in `pattern`.
///
/// Returns `None` for a blank pattern (descriptor has no icon).
pub fn resolve_icon_path(pattern: &str, size: IconSize) -> Option<String> {
    let trimmed = pattern.trim();
    if trimmed.is_empty() {
        return None;
    }
    Some(
        SIZE_PLACEHOLDER_RE
            .replace_all(trimmed, size.as_str())
            .into_owned(),
    )
}
