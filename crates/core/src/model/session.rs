use rand::Rng;
use rand::seq::index::sample;
use thiserror::Error;

use crate::model::distance::NoteDifferences;
use crate::model::note::{CHROMATIC_CYCLE, CYCLE_LEN, UnknownNoteError, resolve_position};

/// Largest valid semitone distance answer.
pub const MAX_SEMITONES: u8 = 11;

/// Errors that can occur while checking a submitted answer.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("semitone distance must be between 0 and 11, got {value}")]
pub struct InvalidSemitoneError {
    pub value: i64,
}

//
// ─── QUIZ SESSION ──────────────────────────────────────────────────────────────
//

/// Holds the active note pair and validates answers against it.
///
/// The pair is never empty: a session starts on a fixed default pair and is
/// mutated only through [`set_current_notes`](Self::set_current_notes) or
/// [`randomize_current_notes`](Self::randomize_current_notes). Note names are
/// resolved to cycle positions at set time, so distance lookups are
/// infallible afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizSession {
    notes: [(String, u8); 2],
}

impl QuizSession {
    /// Creates a session seeded with the first two notes of the cycle.
    ///
    /// Callers that want an unpredictable opening pair should follow up with
    /// [`randomize_current_notes`](Self::randomize_current_notes).
    #[must_use]
    pub fn new() -> Self {
        Self {
            notes: [
                (CHROMATIC_CYCLE[0].to_string(), 0),
                (CHROMATIC_CYCLE[1].to_string(), 1),
            ],
        }
    }

    /// Sets the current pair directly, used for deterministic seeding.
    ///
    /// Identical notes are allowed here; both direction distances are then 0.
    ///
    /// # Errors
    ///
    /// Returns `UnknownNoteError` if either name is not on the chromatic
    /// cycle. The current pair is left untouched on error.
    pub fn set_current_notes(&mut self, first: &str, second: &str) -> Result<(), UnknownNoteError> {
        let first_position = resolve_position(first)?;
        let second_position = resolve_position(second)?;
        self.notes = [
            (first.to_string(), first_position),
            (second.to_string(), second_position),
        ];
        Ok(())
    }

    /// Returns the current pair as `(first, second)`.
    #[must_use]
    pub fn current_notes(&self) -> (&str, &str) {
        (&self.notes[0].0, &self.notes[1].0)
    }

    /// Replaces the pair with two distinct notes drawn uniformly at random.
    ///
    /// Sampling is without replacement over the 12 canonical names, so the
    /// same note is never picked twice.
    pub fn randomize_current_notes<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let picked = sample(rng, CYCLE_LEN, 2);
        let first = picked.index(0);
        let second = picked.index(1);
        self.notes = [
            (CHROMATIC_CYCLE[first].to_string(), first as u8),
            (CHROMATIC_CYCLE[second].to_string(), second as u8),
        ];
    }

    /// Returns both direction distances for the current pair.
    #[must_use]
    pub fn differences(&self) -> NoteDifferences {
        NoteDifferences::between_positions(self.notes[0].1, self.notes[1].1)
    }

    /// Checks a submitted answer against the current pair.
    ///
    /// Either direction distance is accepted, since the user is not told
    /// which direction is being asked.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSemitoneError` if `value` is outside `[0, 11]`.
    pub fn check_answer(&self, value: i64) -> Result<bool, InvalidSemitoneError> {
        if value < 0 || value > i64::from(MAX_SEMITONES) {
            return Err(InvalidSemitoneError { value });
        }
        Ok(self.differences().matches(value as u8))
    }
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}
