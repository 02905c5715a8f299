//! Reflect the theme mode on the document root.
//!
//! Adds the `dark` class to `<html>` while the mode is dark and removes it
//! otherwise. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! SSR paths no-op; the class is applied once the page hydrates and the
//! stored mode has been loaded.

#[cfg(test)]
#[path = "theme_dom_test.rs"]
mod theme_dom_test;

use crate::state::theme::ThemeMode;

/// Class toggled on the `<html>` element.
pub const DARK_CLASS: &str = "dark";

/// Whether the root element should carry [`DARK_CLASS`] for `mode`.
pub fn wants_dark_class(mode: ThemeMode) -> bool {
    match mode {
        ThemeMode::Dark => true,
        ThemeMode::Light => false,
    }
}

/// Apply or remove [`DARK_CLASS`] on the `<html>` element.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let class_list = el.class_list();
            let _ = class_list.toggle_with_force(DARK_CLASS, wants_dark_class(mode));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}
