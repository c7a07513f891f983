use crate::model::{Timer, TimerKind};
use std::time::Duration;

/// Something that can call the tracker back after a delay.
///
/// Implementations hold at most one pending callback per [`TimerKind`];
/// arming a kind replaces the previous one. Expiries are delivered back to
/// `Tracker::on_timer` with the same [`Timer`] that was armed.
pub trait Scheduler {
    fn arm(&mut self, timer: Timer, after: Duration);
    fn cancel(&mut self, kind: TimerKind);
}

#[cfg(test)]
pub use manual::ManualScheduler;

#[cfg(test)]
mod manual {
    use super::*;

    /// Virtual clock for tests. Nothing fires until the test pops it.
    #[derive(Debug, Default)]
    pub struct ManualScheduler {
        now: Duration,
        debounce: Option<(Timer, Duration)>,
        loading: Option<(Timer, Duration)>,
        pub armed_total: usize,
        pub cancelled_total: usize,
    }

    impl ManualScheduler {
        pub fn now(&self) -> Duration {
            self.now
        }

        pub fn deadline(&self, kind: TimerKind) -> Option<Duration> {
            self.slot(kind).map(|(_, at)| at)
        }

        pub fn pending(&self) -> usize {
            usize::from(self.debounce.is_some()) + usize::from(self.loading.is_some())
        }

        /// Takes the earliest pending timer due at or before `until` and
        /// moves the clock to its deadline.
        pub fn pop_due(&mut self, until: Duration) -> Option<Timer> {
            let kind = [TimerKind::Debounce, TimerKind::Loading]
                .into_iter()
                .filter_map(|kind| self.slot(kind).map(|(_, at)| (kind, at)))
                .filter(|&(_, at)| at <= until)
                .min_by_key(|&(_, at)| at)
                .map(|(kind, _)| kind)?;
            let (timer, at) = self.slot_mut(kind).take()?;
            self.now = self.now.max(at);
            Some(timer)
        }

        pub fn advance_to(&mut self, until: Duration) {
            self.now = self.now.max(until);
        }

        fn slot(&self, kind: TimerKind) -> Option<(Timer, Duration)> {
            match kind {
                TimerKind::Debounce => self.debounce,
                TimerKind::Loading => self.loading,
            }
        }

        fn slot_mut(&mut self, kind: TimerKind) -> &mut Option<(Timer, Duration)> {
            match kind {
                TimerKind::Debounce => &mut self.debounce,
                TimerKind::Loading => &mut self.loading,
            }
        }
    }

    impl Scheduler for ManualScheduler {
        fn arm(&mut self, timer: Timer, after: Duration) {
            let at = self.now + after;
            *self.slot_mut(timer.kind) = Some((timer, at));
            self.armed_total += 1;
        }

        fn cancel(&mut self, kind: TimerKind) {
            if self.slot_mut(kind).take().is_some() {
                self.cancelled_total += 1;
            }
        }
    }

    mod tests {
        use super::*;

        fn timer(kind: TimerKind, generation: u64) -> Timer {
            Timer { kind, generation }
        }

        #[test]
        fn pops_in_deadline_order() {
            let mut sched = ManualScheduler::default();
            sched.arm(timer(TimerKind::Loading, 1), Duration::from_millis(300));
            sched.arm(timer(TimerKind::Debounce, 2), Duration::from_millis(100));
            let until = Duration::from_millis(1000);
            assert_eq!(sched.pop_due(until).map(|t| t.kind), Some(TimerKind::Debounce));
            assert_eq!(sched.now(), Duration::from_millis(100));
            assert_eq!(sched.pop_due(until).map(|t| t.kind), Some(TimerKind::Loading));
            assert_eq!(sched.pop_due(until), None);
        }

        #[test]
        fn rearm_replaces_same_kind() {
            let mut sched = ManualScheduler::default();
            sched.arm(timer(TimerKind::Debounce, 1), Duration::from_millis(100));
            sched.arm(timer(TimerKind::Debounce, 2), Duration::from_millis(500));
            assert_eq!(sched.pending(), 1);
            assert_eq!(sched.pop_due(Duration::from_millis(200)), None);
            assert_eq!(
                sched.pop_due(Duration::from_millis(500)).map(|t| t.generation),
                Some(2)
            );
        }
    }
}
