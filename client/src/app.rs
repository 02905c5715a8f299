//! Root application component with routing and the store context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::counter::CounterPage;
use crate::persistence::StorageKeys;
use crate::state::store::Store;
use crate::util::storage::PlatformStorage;
use crate::util::theme_dom;

/// Store handle shared with every component through context.
pub type AppStore = RwSignal<Store<PlatformStorage>>;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the store, rehydrates it from browser storage once the page is
/// live, and keeps the document's theme class in sync.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store: AppStore = RwSignal::new(Store::new(PlatformStorage::default(), StorageKeys::default()));
    provide_context(store);

    // Effects only run in the browser, so SSR always paints the defaults and
    // the stored state replaces them right after hydration.
    Effect::new(move || store.update(Store::rehydrate));
    Effect::new(move || theme_dom::apply(store.with(|s| s.state().theme.mode)));

    view! {
        <Stylesheet id="leptos" href="/pkg/tally.css"/>
        <Title text="Tally"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=CounterPage/>
            </Routes>
        </Router>
    }
}
