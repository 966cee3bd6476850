//! Username validator
//!
//! Checks run in a fixed order and stop at the first violation: length, then characters.
//! The candidate is never trimmed or normalized.

use log::debug;

use super::results::Verdict;
use super::rules::UsernameRules;

/// Validates a username against the given rules.
///
/// Length is counted in Unicode scalar values.
pub fn validate_username(username: &str, rules: &UsernameRules) -> Verdict {
    let length = username.chars().count();

    if !rules.length_in_bounds(length) {
        debug!("Rejected username of length {}", length);
        return Verdict::InvalidLength;
    }

    if rules.contains_forbidden(username) {
        debug!("Rejected username containing a forbidden character");
        return Verdict::ForbiddenCharacter;
    }

    Verdict::Accepted(username.to_string())
}
