use super::*;

#[test]
fn accepts_plain_addresses() {
    assert!(validate("husky@uw.edu"));
    assert!(validate("first.last@cs.washington.edu"));
    assert!(validate("a_b-c@example.org"));
}

#[test]
fn rejects_missing_at_or_domain() {
    assert!(!validate("husky"));
    assert!(!validate("husky@"));
    assert!(!validate("@uw.edu"));
    assert!(!validate("husky@uw"));
}

#[test]
fn rejects_spaces_and_doubled_separators() {
    assert!(!validate(""));
    assert!(!validate("husky dawg@uw.edu"));
    assert!(!validate("husky..dawg@uw.edu"));
}

#[test]
fn rejects_long_final_component() {
    // The pattern caps the final label at three letters.
    assert!(!validate("husky@uw.institute"));
}
