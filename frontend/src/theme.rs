//! Light/dark theme and the document/storage side effects it drives.

use web_sys::{window, Storage};

use crate::config::THEME_STORAGE_KEY;

/// Colour scheme of the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Dark background, light text.
    Dark,
    /// Light background, dark text.
    Light,
}

impl Theme {
    /// `Dark` when `is_dark`, otherwise `Light`.
    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Parses a persisted value; anything but `dark`/`light` is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }

    /// Value written to storage and to the `data-theme` attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Body class marking this theme.
    pub fn body_class(self) -> &'static str {
        match self {
            Theme::Dark => "dark-mode",
            Theme::Light => "light-mode",
        }
    }

    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// True for [`Theme::Dark`].
    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Where the theme preference is read from, written to and applied.
pub trait ThemeHost {
    /// Preference persisted by an earlier visit, if any.
    fn stored(&self) -> Option<Theme>;
    /// Persists `theme` for later visits.
    fn store(&self, theme: Theme);
    /// Whether the OS asks for a dark colour scheme.
    fn prefers_dark(&self) -> bool;
    /// Sets the root `data-theme` attribute and swaps the body classes.
    fn apply(&self, theme: Theme);
}

/// [`ThemeHost`] backed by `localStorage` and the live document.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserThemeHost;

fn local_storage() -> Option<Storage> {
    window().and_then(|win| win.local_storage().ok().flatten())
}

impl ThemeHost for BrowserThemeHost {
    fn stored(&self) -> Option<Theme> {
        local_storage()
            .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
            .and_then(|value| Theme::parse(&value))
    }

    fn store(&self, theme: Theme) {
        let Some(storage) = local_storage() else {
            tracing::warn!("localStorage unavailable, theme not persisted");
            return;
        };
        if let Err(err) = storage.set_item(THEME_STORAGE_KEY, theme.as_str()) {
            tracing::warn!(?err, "failed to persist theme");
        }
    }

    fn prefers_dark(&self) -> bool {
        window()
            .and_then(|win| win.match_media("(prefers-color-scheme: dark)").ok().flatten())
            .map(|query| query.matches())
            .unwrap_or(false)
    }

    fn apply(&self, theme: Theme) {
        let Some(doc) = window().and_then(|win| win.document()) else {
            return;
        };
        if let Some(root) = doc.document_element() {
            let _ = root.set_attribute("data-theme", theme.as_str());
        }
        if let Some(body) = doc.body() {
            let classes = body.class_list();
            let _ = classes.remove_1(theme.toggled().body_class());
            let _ = classes.add_1(theme.body_class());
        }
    }
}
