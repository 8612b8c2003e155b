use serde::{Deserialize, Serialize};

use crate::model::note::{CYCLE_LEN, UnknownNoteError, resolve_position};

/// Semitone distances between two notes, one per rotational direction.
///
/// Both values are in `[0, 11]` and sum to 12, except for identical notes
/// where both are 0. This is a derived value, recomputed from the note pair
/// on demand rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDifferences {
    pub clockwise: u8,
    pub anticlockwise: u8,
}

impl NoteDifferences {
    /// Computes the direction distances between two cycle positions.
    #[must_use]
    pub(crate) fn between_positions(from: u8, to: u8) -> Self {
        let len = CYCLE_LEN as u8;
        let clockwise = (len + to - from) % len;
        let anticlockwise = (len - clockwise) % len;
        Self {
            clockwise,
            anticlockwise,
        }
    }

    /// Returns true if `value` matches either direction distance.
    #[must_use]
    pub fn matches(&self, value: u8) -> bool {
        value == self.clockwise || value == self.anticlockwise
    }
}

/// Computes the clockwise and anticlockwise semitone distances from `a` to `b`.
///
/// Pure and deterministic: `clockwise` is the number of steps from `a` to `b`
/// in cycle order, `anticlockwise` the number of steps the other way round.
///
/// # Errors
///
/// Returns `UnknownNoteError` if either name is not on the chromatic cycle.
pub fn calculate_note_differences(a: &str, b: &str) -> Result<NoteDifferences, UnknownNoteError> {
    let from = resolve_position(a)?;
    let to = resolve_position(b)?;
    Ok(NoteDifferences::between_positions(from, to))
}
