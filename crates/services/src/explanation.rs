use jam_core::model::{CYCLE_LEN, QuizSession, alias_label};

/// Builds the give-up explanation for the session's current pair.
///
/// Lists the twelve cycle slots in order with the two current slots and the
/// two current note names wrapped in `<b>…</b>`, then states both direction
/// distances. A slot is considered current when any of its enharmonic
/// spellings matches a current note, so `Bb` bolds the `A#/Bb` slot.
#[must_use]
pub fn build_explanation(session: &QuizSession) -> String {
    let (first, second) = session.current_notes();
    let differences = session.differences();

    let cycle = (0..CYCLE_LEN as u8)
        .map(|position| {
            let label = alias_label(position);
            let is_current = label
                .split('/')
                .any(|spelling| spelling == first || spelling == second);
            if is_current {
                format!("<b>{label}</b>")
            } else {
                label.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "Explanation - These are the notes in their order: {cycle}. \
         The notes are <b>{first}</b> and <b>{second}</b>. \
         The correct semitone difference is <b>{clockwise}</b> in the clockwise direction \
         & <b>{anticlockwise}</b> in the anti-clockwise.",
        clockwise = differences.clockwise,
        anticlockwise = differences.anticlockwise,
    )
}
