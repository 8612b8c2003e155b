use std::sync::{Arc, Mutex};
use std::time::Duration;

use jam_core::model::{CHROMATIC_CYCLE, QuizSession};
use jam_core::time::{fixed_clock, fixed_now};
use services::messages::{CORRECT_MESSAGE, INCORRECT_MESSAGE, INVALID_ANSWER_MESSAGE};
use services::{
    DelayScheduler, QuizController, QuizPhase, QuizView, RESULT_CLEAR_DELAY, SubmitOutcome,
    messages,
};

#[derive(Debug, Clone, Default)]
struct ViewState {
    notes: String,
    result: String,
    explanation: String,
    streak: String,
    submit_enabled: bool,
    randomize_enabled: bool,
    answer_input: String,
}

/// Records every update call so tests can assert on the final display state.
#[derive(Default)]
struct RecordingView {
    state: Mutex<ViewState>,
}

impl RecordingView {
    fn snapshot(&self) -> ViewState {
        self.state.lock().unwrap().clone()
    }

    fn type_answer(&self, text: &str) {
        self.state.lock().unwrap().answer_input = text.to_string();
    }
}

impl QuizView for RecordingView {
    fn render_current_notes(&self, first: &str, second: &str) {
        self.state.lock().unwrap().notes = messages::notes_label(first, second);
    }

    fn render_result(&self, message: &str) {
        self.state.lock().unwrap().result = message.to_string();
    }

    fn render_explanation(&self, body: &str) {
        self.state.lock().unwrap().explanation = body.to_string();
    }

    fn render_streak(&self, streak: u32) {
        self.state.lock().unwrap().streak = messages::streak_label(streak);
    }

    fn set_submit_enabled(&self, enabled: bool) {
        self.state.lock().unwrap().submit_enabled = enabled;
    }

    fn set_randomize_enabled(&self, enabled: bool) {
        self.state.lock().unwrap().randomize_enabled = enabled;
    }

    fn clear_answer_input(&self) {
        self.state.lock().unwrap().answer_input.clear();
    }
}

/// Collects scheduled tasks and fires them on demand, standing in for the
/// app's tokio timer.
#[derive(Default)]
struct ManualScheduler {
    tasks: Mutex<Vec<(Duration, Box<dyn FnOnce() + Send>)>>,
}

impl ManualScheduler {
    fn pending(&self) -> usize {
        self.tasks.lock().unwrap().len()
    }

    fn last_delay(&self) -> Option<Duration> {
        self.tasks.lock().unwrap().last().map(|(delay, _)| *delay)
    }

    fn fire_all(&self) {
        let tasks: Vec<_> = self.tasks.lock().unwrap().drain(..).collect();
        for (_, task) in tasks {
            task();
        }
    }
}

impl DelayScheduler for ManualScheduler {
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send + 'static>) {
        self.tasks.lock().unwrap().push((delay, task));
    }
}

fn controller_on(
    first: &str,
    second: &str,
) -> (QuizController, Arc<RecordingView>, Arc<ManualScheduler>) {
    let view = Arc::new(RecordingView::default());
    let scheduler = Arc::new(ManualScheduler::default());
    let mut session = QuizSession::new();
    session.set_current_notes(first, second).unwrap();

    let controller = QuizController::new(view.clone(), scheduler.clone())
        .with_session(session)
        .with_seed(11)
        .with_clock(fixed_clock());
    (controller, view, scheduler)
}

#[test]
fn correct_answer_updates_result_streak_and_submit() {
    let (mut controller, view, scheduler) = controller_on("C", "D#");

    let outcome = controller.submit_answer("3");

    assert_eq!(outcome, SubmitOutcome::Correct);
    assert_eq!(controller.phase(), QuizPhase::AnsweredCorrect);
    assert_eq!(controller.streak(), 1);

    let state = view.snapshot();
    assert_eq!(state.result, CORRECT_MESSAGE);
    assert_eq!(state.streak, "Streak: 1");
    assert!(!state.submit_enabled);
    assert_eq!(scheduler.pending(), 1);
}

#[test]
fn either_direction_distance_is_accepted() {
    let (mut controller, view, _scheduler) = controller_on("C", "D#");

    assert_eq!(controller.submit_answer("9"), SubmitOutcome::Correct);
    assert_eq!(view.snapshot().result, CORRECT_MESSAGE);
    assert_eq!(controller.streak(), 1);
}

#[test]
fn incorrect_answer_resets_streak_and_keeps_submit_enabled() {
    let (mut controller, view, scheduler) = controller_on("C", "D#");

    controller.submit_answer("3");
    assert_eq!(controller.streak(), 1);

    controller.randomize();
    let (first, second) = {
        let session = controller.session();
        let (a, b) = session.current_notes();
        (a.to_string(), b.to_string())
    };
    let wrong = wrong_answer_for(&first, &second);
    let outcome = controller.submit_answer(&wrong);

    assert_eq!(outcome, SubmitOutcome::Incorrect);
    assert_eq!(controller.phase(), QuizPhase::AnsweredIncorrect);
    assert_eq!(controller.streak(), 0);
    assert_eq!(controller.best_streak(), 1);

    let state = view.snapshot();
    assert_eq!(state.result, INCORRECT_MESSAGE);
    assert_eq!(state.streak, "Streak: 0");
    assert!(state.submit_enabled);
    assert_eq!(scheduler.pending(), 2);
}

/// Picks an in-range value that matches neither direction distance.
fn wrong_answer_for(first: &str, second: &str) -> String {
    let differences = jam_core::model::calculate_note_differences(first, second).unwrap();
    let wrong = (0..=11)
        .find(|value| !differences.matches(*value))
        .unwrap();
    wrong.to_string()
}

#[test]
fn out_of_range_answer_renders_error_without_arming_the_timer() {
    let (mut controller, view, scheduler) = controller_on("C", "D#");

    for raw in ["-1", "12"] {
        let outcome = controller.submit_answer(raw);
        assert_eq!(outcome, SubmitOutcome::Rejected);
    }

    assert_eq!(controller.phase(), QuizPhase::Idle);
    assert_eq!(controller.streak(), 0);
    assert_eq!(
        view.snapshot().result,
        "semitone distance must be between 0 and 11, got 12"
    );
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn non_numeric_input_is_rejected_with_a_fixed_message() {
    let (mut controller, view, scheduler) = controller_on("C", "D#");

    let outcome = controller.submit_answer("three");

    assert_eq!(outcome, SubmitOutcome::Rejected);
    assert_eq!(view.snapshot().result, INVALID_ANSWER_MESSAGE);
    assert_eq!(controller.streak(), 0);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn result_and_answer_input_clear_when_the_timer_fires() {
    let (mut controller, view, scheduler) = controller_on("C", "D#");

    view.type_answer("3");
    controller.submit_answer("3");
    assert_eq!(scheduler.last_delay(), Some(RESULT_CLEAR_DELAY));
    assert_eq!(RESULT_CLEAR_DELAY, Duration::from_millis(3000));

    scheduler.fire_all();

    let state = view.snapshot();
    assert_eq!(state.result, "");
    assert_eq!(state.answer_input, "");
}

#[test]
fn stale_timer_firing_after_randomize_is_harmless() {
    let (mut controller, view, scheduler) = controller_on("C", "D#");

    controller.submit_answer("3");
    controller.randomize();
    assert_eq!(controller.phase(), QuizPhase::Idle);

    // The pending clear from the submission fires on already-cleared slots.
    scheduler.fire_all();

    let state = view.snapshot();
    assert_eq!(state.result, "");
    assert_eq!(state.answer_input, "");
    assert!(state.submit_enabled);
}

#[test]
fn randomize_rerenders_notes_and_clears_messages_immediately() {
    let (mut controller, view, _scheduler) = controller_on("C", "D#");

    view.type_answer("5");
    controller.give_up();
    controller.randomize();

    let state = view.snapshot();
    assert!(state.notes.starts_with("Current Notes: "));
    assert_eq!(state.result, "");
    assert_eq!(state.explanation, "");
    assert_eq!(state.answer_input, "");
    assert!(state.submit_enabled);
    assert!(state.randomize_enabled);

    let (first, second) = controller.session().current_notes();
    assert_ne!(first, second);
    assert!(CHROMATIC_CYCLE.contains(&first));
    assert!(CHROMATIC_CYCLE.contains(&second));
}

#[test]
fn repeated_randomize_varies_the_pair() {
    let (mut controller, view, _scheduler) = controller_on("C", "D#");

    let mut labels = std::collections::HashSet::new();
    for _ in 0..20 {
        controller.randomize();
        labels.insert(view.snapshot().notes);
    }
    assert!(labels.len() > 1);
}

#[test]
fn give_up_shows_explanation_and_resets_streak() {
    let (mut controller, view, _scheduler) = controller_on("C", "D#");

    controller.submit_answer("3");
    controller.give_up();

    assert_eq!(controller.phase(), QuizPhase::GaveUp);
    assert_eq!(controller.streak(), 0);
    assert_eq!(controller.best_streak(), 1);

    let state = view.snapshot();
    assert!(state.explanation.contains("Explanation"));
    assert!(state.explanation.contains("<b>3</b> in the clockwise direction"));
    assert_eq!(state.streak, "Streak: 0");
    assert!(!state.submit_enabled);
}

#[test]
fn start_renders_the_opening_round() {
    let (mut controller, view, _scheduler) = controller_on("C", "D#");

    controller.start();

    assert_eq!(controller.started_at(), Some(fixed_now()));
    let state = view.snapshot();
    assert!(state.notes.starts_with("Current Notes: "));
    assert_eq!(state.streak, "Streak: 0");
    assert!(state.submit_enabled);
}
