use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;

use jam_core::Clock;
use jam_core::model::{QuizSession, Streak};

use crate::explanation::build_explanation;
use crate::messages;
use crate::quiz_view::QuizView;
use crate::scheduler::DelayScheduler;

/// How long a submission's result message stays on screen.
pub const RESULT_CLEAR_DELAY: Duration = Duration::from_millis(3000);

//
// ─── PHASES & OUTCOMES ─────────────────────────────────────────────────────────
//

/// Where the controller is in the round lifecycle.
///
/// `Idle` waits for input; a submission moves to one of the `Answered`
/// phases, a give-up to `GaveUp`; randomize returns to `Idle` from anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    Idle,
    AnsweredCorrect,
    AnsweredIncorrect,
    GaveUp,
}

/// What happened to a submitted answer.
///
/// `Rejected` covers unparseable input and out-of-range values; neither
/// touches the streak or the phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Correct,
    Incorrect,
    Rejected,
}

//
// ─── CONTROLLER ────────────────────────────────────────────────────────────────
//

/// Orchestrates the quiz round lifecycle against a view and a scheduler.
///
/// Owns the session state outright (no ambient globals); one controller per
/// quiz session, constructed at startup. Every failure a user action can
/// produce is rendered into the result slot; nothing propagates to the host.
pub struct QuizController {
    session: QuizSession,
    streak: Streak,
    phase: QuizPhase,
    rng: StdRng,
    clock: Clock,
    started_at: Option<DateTime<Utc>>,
    view: Arc<dyn QuizView>,
    scheduler: Arc<dyn DelayScheduler>,
}

impl QuizController {
    #[must_use]
    pub fn new(view: Arc<dyn QuizView>, scheduler: Arc<dyn DelayScheduler>) -> Self {
        Self {
            session: QuizSession::new(),
            streak: Streak::new(),
            phase: QuizPhase::Idle,
            rng: StdRng::from_os_rng(),
            clock: Clock::default_clock(),
            started_at: None,
            view,
            scheduler,
        }
    }

    /// Seeds the note randomizer, making the session deterministic.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the session, used for deterministic seeding of the note pair.
    #[must_use]
    pub fn with_session(mut self, session: QuizSession) -> Self {
        self.session = session;
        self
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn streak(&self) -> u32 {
        self.streak.current()
    }

    #[must_use]
    pub fn best_streak(&self) -> u32 {
        self.streak.best()
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    /// Begins the session: first random pair plus the initial streak render.
    pub fn start(&mut self) {
        self.started_at = Some(self.clock.now());
        self.randomize();
        self.view.render_streak(self.streak.current());
    }

    /// Handles the submit action with the raw input text.
    ///
    /// Unparseable input and out-of-range values are rendered into the
    /// result slot and leave streak and phase untouched. Correct and
    /// incorrect answers both arm the one-shot result clear timer.
    pub fn submit_answer(&mut self, raw: &str) -> SubmitOutcome {
        let Ok(value) = raw.trim().parse::<i64>() else {
            self.view.render_result(messages::INVALID_ANSWER_MESSAGE);
            return SubmitOutcome::Rejected;
        };

        match self.session.check_answer(value) {
            Err(err) => {
                self.view.render_result(&err.to_string());
                SubmitOutcome::Rejected
            }
            Ok(true) => {
                self.streak.record_hit();
                self.phase = QuizPhase::AnsweredCorrect;
                self.view.set_submit_enabled(false);
                self.view.render_result(messages::CORRECT_MESSAGE);
                self.view.render_streak(self.streak.current());
                self.schedule_result_clear();
                SubmitOutcome::Correct
            }
            Ok(false) => {
                self.streak.reset();
                self.phase = QuizPhase::AnsweredIncorrect;
                self.view.render_result(messages::INCORRECT_MESSAGE);
                self.view.render_streak(self.streak.current());
                self.schedule_result_clear();
                SubmitOutcome::Incorrect
            }
        }
    }

    /// Handles the randomize action: new pair, controls re-enabled, messages
    /// and answer input cleared immediately.
    pub fn randomize(&mut self) {
        self.session.randomize_current_notes(&mut self.rng);
        self.phase = QuizPhase::Idle;

        let (first, second) = self.session.current_notes();
        self.view.render_current_notes(first, second);
        self.view.set_submit_enabled(true);
        self.view.set_randomize_enabled(true);
        self.view.render_result("");
        self.view.render_explanation("");
        self.view.clear_answer_input();
    }

    /// Handles the give-up action: explanation shown, streak reset, submit
    /// disabled until the next randomize.
    pub fn give_up(&mut self) {
        self.phase = QuizPhase::GaveUp;
        self.streak.reset();

        let explanation = build_explanation(&self.session);
        self.view.render_explanation(&explanation);
        self.view.set_submit_enabled(false);
        self.view.render_streak(self.streak.current());
    }

    fn schedule_result_clear(&self) {
        let view = Arc::clone(&self.view);
        // The timer is never cancelled. It only clears the result slot and
        // the answer input, so firing after a randomize has already cleared
        // them is an idempotent no-op.
        self.scheduler.schedule(
            RESULT_CLEAR_DELAY,
            Box::new(move || {
                view.render_result("");
                view.clear_answer_input();
            }),
        );
    }
}
