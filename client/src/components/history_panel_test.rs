use super::*;

#[test]
fn history_title_includes_count() {
    assert_eq!(history_title(1), "History (1 changes)");
    assert_eq!(history_title(12), "History (12 changes)");
}

#[test]
fn delta_class_marks_direction() {
    assert!(delta_class(2).ends_with("--up"));
    assert!(delta_class(-2).ends_with("--down"));
}
