//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render widget state read from the `AppStore` context and
//! dispatch actions back into it.

pub mod counter_panel;
pub mod history_panel;
pub mod theme_toggle;
