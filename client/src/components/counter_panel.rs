//! Counter card: current value, last change, and every counter control.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only surface that dispatches counter actions. The custom step lives
//! in a local signal; it is UI draft state and is not persisted.

#[cfg(test)]
#[path = "counter_panel_test.rs"]
mod counter_panel_test;

use leptos::prelude::*;

use crate::app::AppStore;
use crate::state::store::Action;
use crate::util::step::{DEFAULT_STEP, parse_step, signed};

/// Counter card with increase/decrease, custom step, reset and clear-history.
#[component]
pub fn CounterPanel() -> impl IntoView {
    let store = expect_context::<AppStore>();
    let step = RwSignal::new(DEFAULT_STEP);

    let value = move || store.with(|s| s.state().counter.value);
    let last_change = move || store.with(|s| s.state().counter.last_change());
    let dispatch = move |action: Action| store.update(|s| s.dispatch(action));

    view! {
        <section class="counter-panel">
            <h2 class="counter-panel__title">"Counter"</h2>
            <div class="counter-panel__value">{value}</div>
            <Show when=move || last_change() != 0>
                <div class=move || change_class(last_change())>{move || signed(last_change())}</div>
            </Show>

            <div class="counter-panel__row">
                <button class="btn counter-panel__decrease" on:click=move |_| dispatch(Action::Decrement)>
                    "Decrease"
                </button>
                <button class="btn counter-panel__increase" on:click=move |_| dispatch(Action::Increment)>
                    "Increase"
                </button>
            </div>

            <div class="counter-panel__step">
                <label for="custom-step" class="counter-panel__step-label">
                    "Custom Step:"
                </label>
                <input
                    id="custom-step"
                    type="number"
                    class="counter-panel__step-input"
                    value=DEFAULT_STEP.to_string()
                    on:input=move |ev| {
                        let raw = event_target_value(&ev);
                        step.update(|s| *s = parse_step(&raw, *s));
                    }
                />
                <button
                    class="btn counter-panel__step-apply"
                    on:click=move |_| dispatch(Action::IncrementByAmount(step.get_untracked()))
                >
                    {move || signed(step.get())}
                </button>
            </div>

            <div class="counter-panel__row">
                <button class="btn counter-panel__reset" on:click=move |_| dispatch(Action::Reset)>
                    "Reset"
                </button>
                <button class="btn counter-panel__clear" on:click=move |_| dispatch(Action::ClearHistory)>
                    "Clear History"
                </button>
            </div>
        </section>
    }
}

/// Badge class for a non-zero change between the last two values.
pub fn change_class(delta: i64) -> &'static str {
    if delta > 0 {
        "counter-panel__change counter-panel__change--up"
    } else {
        "counter-panel__change counter-panel__change--down"
    }
}
