#[cfg(test)]
#[path = "email_test.rs"]
mod email_test;

use std::sync::LazyLock;

use regex::Regex;

/// Accepts `name@host.tld` shapes: word characters with at most one `.` or
/// `-` between runs in each part, and a final component of 2-3 letters.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\w+([.-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$").expect("email pattern is valid")
});

/// Whether `address` is well-formed enough to hand to the email relay.
#[must_use]
pub fn validate(address: &str) -> bool {
    EMAIL_RE.is_match(address)
}
