//! Counter value and its append-only history.
//!
//! DESIGN
//! ======
//! Every operation that changes the value records the new value at the end of
//! `history`, so the last history entry always mirrors `value`. Only
//! `load_snapshot` may break that pairing, because it replaces the whole state
//! with whatever was persisted.

#[cfg(test)]
#[path = "counter_test.rs"]
mod counter_test;

use serde::{Deserialize, Serialize};

/// Counter value plus every value it has held, oldest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    pub value: i64,
    pub history: Vec<i64>,
}

impl Default for CounterState {
    fn default() -> Self {
        Self { value: 0, history: vec![0] }
    }
}

/// One rendered history entry, as shown newest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HistoryRow {
    /// 1-based chronological position.
    pub position: usize,
    pub value: i64,
    /// Difference to the previous entry (saturating); 0 for the first entry.
    pub delta: i64,
    pub is_latest: bool,
}

impl CounterState {
    pub fn increment(&mut self) {
        self.set_and_record(self.value.wrapping_add(1));
    }

    pub fn decrement(&mut self) {
        self.set_and_record(self.value.wrapping_sub(1));
    }

    /// Set the value back to zero. The reset is itself recorded; earlier
    /// history is kept.
    pub fn reset(&mut self) {
        self.set_and_record(0);
    }

    /// Add an arbitrary (possibly zero or negative) amount.
    pub fn increment_by_amount(&mut self, amount: i64) {
        self.set_and_record(self.value.wrapping_add(amount));
    }

    /// Collapse history to a single entry holding the current value.
    pub fn clear_history(&mut self) {
        self.history = vec![self.value];
    }

    /// Replace the whole state with a previously persisted snapshot.
    pub fn load_snapshot(&mut self, snapshot: CounterState) {
        *self = snapshot;
    }

    /// Number of recorded history entries.
    pub fn history_count(&self) -> usize {
        self.history.len()
    }

    /// Difference between the two most recent history entries, or 0 when
    /// fewer than two exist. Saturates so the sign always matches the
    /// direction of the step.
    pub fn last_change(&self) -> i64 {
        match self.history.as_slice() {
            [.., prev, last] => last.saturating_sub(*prev),
            _ => 0,
        }
    }

    /// History rows newest first.
    pub fn history_rows(&self) -> Vec<HistoryRow> {
        let last_index = self.history.len().saturating_sub(1);
        self.history
            .iter()
            .enumerate()
            .rev()
            .map(|(index, &value)| {
                let delta = if index == 0 { 0 } else { value.saturating_sub(self.history[index - 1]) };
                HistoryRow { position: index + 1, value, delta, is_latest: index == last_index }
            })
            .collect()
    }

    fn set_and_record(&mut self, value: i64) {
        self.value = value;
        self.history.push(value);
    }
}
