//! Core data types shared by the picker state machine and the browser glue.

use serde::{Deserialize, Serialize};

/// Identifier the input system assigns to one physical contact.
/// Unique among active touches, may be reused once the contact ends.
pub type TouchId = i32;

/// One reported contact position. A moved contact is a new value with the same id.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Touch {
    pub id: TouchId,
    pub x: f64,
    pub y: f64,
}

impl Touch {
    pub fn new(id: TouchId, x: f64, y: f64) -> Self {
        Self { id, x, y }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Nothing on the surface.
    #[default]
    Idle,
    /// Touches are down, waiting for the surface to go quiet.
    Collecting,
    /// Quiet period elapsed; suspense before the pick.
    Loading,
    /// One touch survived. Stays here until reset or a new touch.
    Selected,
}

impl Phase {
    /// Short prompt shown above the touch surface.
    pub fn hint(self) -> &'static str {
        match self {
            Phase::Idle => "Place your fingers on the screen",
            Phase::Collecting => "Hold still\u{2026}",
            Phase::Loading => "Choosing\u{2026}",
            Phase::Selected => "Winner! Tap to play again",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TimerKind {
    Debounce,
    Loading,
}

/// Handle for one arming of a timer. The generation distinguishes a live
/// timer from an earlier, cancelled arming of the same kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timer {
    pub kind: TimerKind,
    pub generation: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_phase_is_idle() {
        assert_eq!(Phase::default(), Phase::Idle);
    }

    #[test]
    fn every_phase_has_a_hint() {
        for phase in [Phase::Idle, Phase::Collecting, Phase::Loading, Phase::Selected] {
            assert!(!phase.hint().is_empty());
        }
    }
}
