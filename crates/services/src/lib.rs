#![forbid(unsafe_code)]

pub mod explanation;
pub mod messages;
pub mod quiz_controller;
pub mod quiz_view;
pub mod scheduler;

pub use jam_core::Clock;

pub use explanation::build_explanation;
pub use quiz_controller::{QuizController, QuizPhase, RESULT_CLEAR_DELAY, SubmitOutcome};
pub use quiz_view::QuizView;
pub use scheduler::DelayScheduler;
