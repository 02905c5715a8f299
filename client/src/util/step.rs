//! Custom step input parsing and signed number labels.

#[cfg(test)]
#[path = "step_test.rs"]
mod step_test;

/// Step shown in the custom-amount field before the user edits it.
pub const DEFAULT_STEP: i64 = 5;

/// Interpret the raw text of the numeric step field.
///
/// An empty field counts as 0, like a cleared browser number input. Text that
/// is not an integer leaves `current` unchanged.
pub fn parse_step(raw: &str, current: i64) -> i64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0;
    }
    trimmed.parse().unwrap_or(current)
}

/// Format `n` with an explicit sign for positive values (`+3`, `-2`, `0`).
pub fn signed(n: i64) -> String {
    if n > 0 { format!("+{n}") } else { n.to_string() }
}
