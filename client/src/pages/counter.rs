//! Counter page: header, theme toggle, counter card and history card.
//!
//! SYSTEM CONTEXT
//! ==============
//! The single route of the app. The page background follows the theme mode
//! so the first SSR paint and the hydrated page share one layout.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use leptos::prelude::*;

use crate::app::AppStore;
use crate::components::counter_panel::CounterPanel;
use crate::components::history_panel::HistoryPanel;
use crate::components::theme_toggle::ThemeToggle;
use crate::state::theme::ThemeMode;

#[component]
pub fn CounterPage() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let root_class = move || page_class(store.with(|s| s.state().theme.mode));

    view! {
        <div class=root_class>
            <ThemeToggle/>
            <header class="counter-page__header">
                <h1 class="counter-page__title">"Tally"</h1>
                <p class="counter-page__subtitle">"A counter with complete history tracking"</p>
            </header>
            <main class="counter-page__cards">
                <CounterPanel/>
                <HistoryPanel/>
            </main>
            <footer class="counter-page__footer">"Built with Leptos"</footer>
        </div>
    }
}

/// Root class for the page in `mode`.
pub fn page_class(mode: ThemeMode) -> &'static str {
    match mode {
        ThemeMode::Light => "counter-page counter-page--light",
        ThemeMode::Dark => "counter-page counter-page--dark",
    }
}
