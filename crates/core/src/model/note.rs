use thiserror::Error;

/// Number of pitch classes on the chromatic cycle.
pub const CYCLE_LEN: usize = 12;

/// The chromatic cycle in its fixed order, sharp spellings, starting at A.
///
/// Position arithmetic is modulo [`CYCLE_LEN`]; the starting note is a
/// convention only and never observable through distance calculations.
pub const CHROMATIC_CYCLE: [&str; CYCLE_LEN] = [
    "A", "A#", "B", "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#",
];

/// Flat spellings accepted as enharmonic aliases of the canonical names.
const FLAT_ALIASES: [(&str, &str); 5] = [
    ("Bb", "A#"),
    ("Db", "C#"),
    ("Eb", "D#"),
    ("Gb", "F#"),
    ("Ab", "G#"),
];

/// Display labels for each cycle position, grouping enharmonic spellings.
const ALIAS_LABELS: [&str; CYCLE_LEN] = [
    "A", "A#/Bb", "B", "C", "C#/Db", "D", "D#/Eb", "E", "F", "F#/Gb", "G", "G#/Ab",
];

/// Errors that can occur while resolving note names.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown note name: {name}")]
pub struct UnknownNoteError {
    pub name: String,
}

impl UnknownNoteError {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Resolves a note name to its position on the chromatic cycle.
///
/// Accepts the canonical sharp spellings plus the flat enharmonic aliases
/// (`Bb`, `Db`, `Eb`, `Gb`, `Ab`). Matching is exact; no trimming or case
/// folding is applied.
///
/// # Errors
///
/// Returns `UnknownNoteError` if the name is not on the cycle.
pub fn resolve_position(name: &str) -> Result<u8, UnknownNoteError> {
    let canonical = FLAT_ALIASES
        .iter()
        .find(|(flat, _)| *flat == name)
        .map_or(name, |(_, sharp)| *sharp);

    CHROMATIC_CYCLE
        .iter()
        .position(|candidate| *candidate == canonical)
        .map(|position| position as u8)
        .ok_or_else(|| UnknownNoteError::new(name))
}

/// Returns the display label for a cycle position, e.g. `"A#/Bb"`.
///
/// # Panics
///
/// Panics if `position` is not in `[0, 11]`.
#[must_use]
pub fn alias_label(position: u8) -> &'static str {
    ALIAS_LABELS[position as usize]
}
