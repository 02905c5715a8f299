//! Widget state containers and the store that owns them.
//!
//! DESIGN
//! ======
//! `counter` and `theme` are plain data with in-place operations. `store`
//! routes [`store::Action`] values to them and persists after each change.

pub mod counter;
pub mod store;
pub mod theme;
