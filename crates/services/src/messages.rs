//! Fixed user-facing strings shared by views and tests.

/// Result text for a correct submission.
pub const CORRECT_MESSAGE: &str = "Correct!";

/// Result text for an incorrect submission.
pub const INCORRECT_MESSAGE: &str = "Incorrect!";

/// Result text when the submitted answer is not a whole number.
pub const INVALID_ANSWER_MESSAGE: &str = "Please enter a whole number between 0 and 11.";

/// Formats the streak counter for display.
#[must_use]
pub fn streak_label(streak: u32) -> String {
    format!("Streak: {streak}")
}

/// Formats the active note pair for display.
#[must_use]
pub fn notes_label(first: &str, second: &str) -> String {
    format!("Current Notes: {first} and {second}")
}
