use serde::{Deserialize, Serialize};

/// Count of consecutive correct answers since the last reset.
///
/// `best` tracks the highest streak seen over the life of the session and is
/// unaffected by resets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    current: u32,
    best: u32,
}

impl Streak {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a correct answer.
    pub fn record_hit(&mut self) {
        self.current = self.current.saturating_add(1);
        self.best = self.best.max(self.current);
    }

    /// Resets the running streak after an incorrect answer or a give-up.
    pub fn reset(&mut self) {
        self.current = 0;
    }

    #[must_use]
    pub fn current(&self) -> u32 {
        self.current
    }

    #[must_use]
    pub fn best(&self) -> u32 {
        self.best
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hits_accumulate_and_reset_clears_only_current() {
        let mut streak = Streak::new();
        streak.record_hit();
        streak.record_hit();
        streak.record_hit();
        assert_eq!(streak.current(), 3);
        assert_eq!(streak.best(), 3);

        streak.reset();
        assert_eq!(streak.current(), 0);
        assert_eq!(streak.best(), 3);

        streak.record_hit();
        assert_eq!(streak.current(), 1);
        assert_eq!(streak.best(), 3);
    }
}
