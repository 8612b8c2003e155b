/// Display surface the controller drives.
///
/// Implementations own the actual widgets (terminal lines, HTML elements,
/// test recorders) and are only ever touched through these update calls.
/// Methods take `&self` so views can be shared behind an `Arc`; anything
/// mutable lives behind interior mutability inside the implementation.
pub trait QuizView: Send + Sync {
    /// Shows the active note pair.
    fn render_current_notes(&self, first: &str, second: &str);

    /// Shows the outcome text for the last submission. An empty message
    /// clears the slot.
    fn render_result(&self, message: &str);

    /// Shows the give-up explanation. An empty body clears the slot.
    /// The body may carry `<b>…</b>` emphasis markup.
    fn render_explanation(&self, body: &str);

    /// Shows the streak counter.
    fn render_streak(&self, streak: u32);

    /// Enables or disables the submit control.
    fn set_submit_enabled(&self, enabled: bool);

    /// Enables or disables the randomize control.
    fn set_randomize_enabled(&self, enabled: bool);

    /// Resets the answer input field.
    fn clear_answer_input(&self);
}
