//! Floating light/dark theme toggle.

#[cfg(test)]
#[path = "theme_toggle_test.rs"]
mod theme_toggle_test;

use leptos::prelude::*;

use crate::app::AppStore;
use crate::state::store::Action;
use crate::state::theme::ThemeMode;

/// Button in the top-right corner flipping the theme.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let mode = move || store.with(|s| s.state().theme.mode);

    view! {
        <button
            class="btn theme-toggle"
            aria-label="Toggle theme"
            title="Toggle theme"
            on:click=move |_| store.update(|s| s.dispatch(Action::ToggleTheme))
        >
            {move || toggle_glyph(mode())}
        </button>
    }
}

/// Glyph offering the other mode: a moon while light, a sun while dark.
pub fn toggle_glyph(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "☾",
        ThemeMode::Dark => "☀",
    }
}
