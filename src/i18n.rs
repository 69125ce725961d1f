//! Internationalization (i18n) module
//!
//! Picks the interface locale: an explicit override first, then the system
//! locale. Dutch is the reference language and the fallback.
//! Note: Log messages remain in English for consistency.

use tracing::debug;

/// Locales with a translation file
pub const SUPPORTED_LOCALES: [&str; 2] = ["nl", "en"];

/// Locale used when nothing else matches
pub const DEFAULT_LOCALE: &str = "nl";

/// Map a locale tag such as `en-US` or `nl_BE.UTF-8` to a supported locale
pub fn resolve_locale(tag: &str) -> Option<&'static str> {
    let language = tag
        .split(['-', '_', '.'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    SUPPORTED_LOCALES
        .into_iter()
        .find(|supported| *supported == language)
}

/// Detect the locale from the operating system
pub fn detect_locale() -> &'static str {
    sys_locale::get_locale()
        .as_deref()
        .and_then(resolve_locale)
        .unwrap_or(DEFAULT_LOCALE)
}

/// Initialize the global locale and return it
pub fn init_locale(requested: Option<&str>) -> &'static str {
    let locale = requested
        .and_then(resolve_locale)
        .unwrap_or_else(detect_locale);
    rust_i18n::set_locale(locale);
    debug!(locale, ?requested, "Locale initialized");
    locale
}
