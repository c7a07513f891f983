// Tracker-side bookkeeping for the two chained timers.
use crate::model::{Timer, TimerKind};

/// One slot per timer kind. Arming bumps the generation so any expiry from
/// an earlier arming no longer matches and is dropped.
#[derive(Debug, Default, Clone)]
pub struct TimerSlots {
    next_generation: u64,
    debounce: Option<u64>,
    loading: Option<u64>,
}

impl TimerSlots {
    fn slot(&self, kind: TimerKind) -> Option<u64> {
        match kind {
            TimerKind::Debounce => self.debounce,
            TimerKind::Loading => self.loading,
        }
    }

    fn slot_mut(&mut self, kind: TimerKind) -> &mut Option<u64> {
        match kind {
            TimerKind::Debounce => &mut self.debounce,
            TimerKind::Loading => &mut self.loading,
        }
    }

    /// Replaces whatever was armed for `kind` with a fresh generation.
    pub fn arm(&mut self, kind: TimerKind) -> Timer {
        self.next_generation += 1;
        let generation = self.next_generation;
        *self.slot_mut(kind) = Some(generation);
        Timer { kind, generation }
    }

    /// Returns true if something was armed.
    pub fn disarm(&mut self, kind: TimerKind) -> bool {
        self.slot_mut(kind).take().is_some()
    }

    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.slot(kind).is_some()
    }

    pub fn armed_count(&self) -> usize {
        usize::from(self.debounce.is_some()) + usize::from(self.loading.is_some())
    }

    /// Consumes a firing. Only the live generation of its kind is accepted.
    pub fn expire(&mut self, timer: Timer) -> bool {
        let slot = self.slot_mut(timer.kind);
        if *slot == Some(timer.generation) {
            *slot = None;
            true
        } else {
            false
        }
    }
}
