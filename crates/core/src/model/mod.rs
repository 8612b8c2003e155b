mod distance;
mod note;
mod session;
mod streak;

pub use distance::{NoteDifferences, calculate_note_differences};
pub use note::{CHROMATIC_CYCLE, CYCLE_LEN, UnknownNoteError, alias_label, resolve_position};
pub use session::{InvalidSemitoneError, MAX_SEMITONES, QuizSession};
pub use streak::Streak;
