//! History list of every recorded counter value, newest first.

#[cfg(test)]
#[path = "history_panel_test.rs"]
mod history_panel_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::app::AppStore;
use crate::state::counter::HistoryRow;
use crate::util::step::signed;

/// History card listing recorded values with their deltas.
#[component]
pub fn HistoryPanel() -> impl IntoView {
    let store = expect_context::<AppStore>();

    let count = move || store.with(|s| s.state().counter.history_count());
    let rows = move || store.with(|s| s.state().counter.history_rows());

    view! {
        <section class="history-panel">
            <h3 class="history-panel__title">{move || history_title(count())}</h3>
            <div class="history-panel__list">
                {move || {
                    let rows = rows();
                    if rows.is_empty() {
                        view! { <p class="history-panel__empty">"No history available"</p> }.into_any()
                    } else {
                        rows.into_iter().map(history_row).collect::<Vec<_>>().into_any()
                    }
                }}
            </div>
        </section>
    }
}

fn history_row(row: HistoryRow) -> impl IntoView {
    view! {
        <div class="history-panel__row" class:history-panel__row--latest=row.is_latest>
            <span class="history-panel__position">{format!("#{}", row.position)}</span>
            <span class="history-panel__value">{row.value}</span>
            {(row.delta != 0)
                .then(|| {
                    view! { <span class=delta_class(row.delta)>{signed(row.delta)}</span> }
                })}
        </div>
    }
}

/// Heading text for a history of `count` entries.
pub fn history_title(count: usize) -> String {
    format!("History ({count} changes)")
}

/// Badge class for a row's delta.
pub fn delta_class(delta: i64) -> &'static str {
    if delta > 0 {
        "history-panel__delta history-panel__delta--up"
    } else {
        "history-panel__delta history-panel__delta--down"
    }
}
