use std::time::Duration;

/// One-shot deferred execution used for the timed result clear.
///
/// There is no cancellation: a scheduled task may fire after the session has
/// moved on, so tasks must be harmless when stale. Test implementations
/// collect tasks and fire them on demand; the app implementation spawns a
/// tokio sleep.
pub trait DelayScheduler: Send + Sync {
    /// Runs `task` once after roughly `delay` has elapsed.
    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce() + Send + 'static>);
}
