//! Progress accounting for a generation run.
//!
//! Every stage reports completed units of work through [`Progress::tick`].
//! The tracker turns ticks into percentages and only reports a percentage
//! the first time it is reached.

/// Receives one tick per completed unit of work.
pub trait Progress {
    fn tick(&mut self);
}

/// Receives percentages as they change.
pub trait ProgressReporter {
    fn report(&mut self, percentage: u32);
}

impl<F: FnMut(u32)> ProgressReporter for F {
    fn report(&mut self, percentage: u32) {
        self(percentage)
    }
}

/// Counter state for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressState {
    completed: usize,
    total: usize,
    last_reported: Option<u32>,
}

impl ProgressState {
    pub fn new(total: usize) -> Self {
        Self {
            completed: 0,
            total,
            last_reported: None,
        }
    }

    /// Current percentage, rounded half up.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 100;
        }
        ((self.completed * 200 + self.total) / (self.total * 2)) as u32
    }

    /// Count one unit of work.
    ///
    /// Returns the new percentage if it differs from the last one reported.
    pub fn tick(&mut self) -> Option<u32> {
        self.completed += 1;
        let percentage = self.percentage();
        if self.last_reported == Some(percentage) {
            return None;
        }
        self.last_reported = Some(percentage);
        Some(percentage)
    }
}

/// [`Progress`] implementation forwarding changed percentages to a reporter.
pub struct ProgressTracker<R> {
    state: ProgressState,
    reporter: R,
}

impl<R: ProgressReporter> ProgressTracker<R> {
    pub fn new(total: usize, reporter: R) -> Self {
        Self {
            state: ProgressState::new(total),
            reporter,
        }
    }
}

impl<R: ProgressReporter> Progress for ProgressTracker<R> {
    fn tick(&mut self) {
        if let Some(percentage) = self.state.tick() {
            self.reporter.report(percentage);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_ticks(total: usize, ticks: usize) -> Vec<u32> {
        let mut reported = Vec::new();
        let mut tracker = ProgressTracker::new(total, |p: u32| reported.push(p));
        for _ in 0..ticks {
            tracker.tick();
        }
        drop(tracker);
        reported
    }

    #[test]
    fn test_nothing_reported_before_first_tick() {
        assert_eq!(ProgressState::new(12).percentage(), 0);
        assert!(run_ticks(12, 0).is_empty());
    }

    #[test]
    fn test_twelve_steps_end_at_100() {
        let reported = run_ticks(12, 12);
        assert_eq!(
            reported,
            vec![8, 17, 25, 33, 42, 50, 58, 67, 75, 83, 92, 100]
        );
    }

    #[test]
    fn test_fifteen_steps_end_at_100() {
        let reported = run_ticks(15, 15);
        assert_eq!(reported.len(), 15);
        assert_eq!(reported.first(), Some(&7));
        assert_eq!(reported.last(), Some(&100));
    }

    #[test]
    fn test_repeated_percentages_are_suppressed() {
        // 2/300 and 3/300 both round to 1%
        let reported = run_ticks(300, 3);
        assert_eq!(reported, vec![0, 1]);
    }

    #[test]
    fn test_reported_sequence_strictly_increases() {
        let reported = run_ticks(250, 250);
        assert!(reported.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(reported.last(), Some(&100));
    }

    #[test]
    fn test_ticks_past_total_exceed_100() {
        let reported = run_ticks(10, 12);
        assert_eq!(reported.last(), Some(&120));
    }

    #[test]
    fn test_rounds_half_up() {
        let mut state = ProgressState::new(8);
        state.tick();
        // 12.5% rounds to 13
        assert_eq!(state.percentage(), 13);
    }
}
