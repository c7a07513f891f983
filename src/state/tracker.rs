//! Touch tracker & selector.
//!
//! Owns the active touches and their tokens, the debounce and loading
//! timers, and the phase. Every input batch and every timer expiry goes
//! through one `&mut self` call, so a batch is never interleaved with a
//! timer firing.

use std::collections::HashMap;
use std::time::Duration;

use tracing::{debug, info, trace};

use crate::config::PickerConfig;
use crate::model::{Phase, Timer, TimerKind, Touch, TouchId};
use crate::state::random::RandomSource;
use crate::state::renderer::Renderer;
use crate::state::scheduler::Scheduler;
use crate::state::timers::TimerSlots;

pub struct Tracker<R: Renderer, S: Scheduler, G: RandomSource> {
    renderer: R,
    scheduler: S,
    random: G,
    debounce: Duration,
    loading: Duration,
    /// Active touches in arrival order; ids unique. Keys always match `tokens`.
    touches: Vec<Touch>,
    tokens: HashMap<TouchId, R::Token>,
    phase: Phase,
    timers: TimerSlots,
}

impl<R: Renderer, S: Scheduler, G: RandomSource> Tracker<R, S, G> {
    pub fn new(renderer: R, scheduler: S, random: G, config: &PickerConfig) -> Self {
        Self {
            renderer,
            scheduler,
            random,
            debounce: config.debounce(),
            loading: config.loading(),
            touches: Vec::new(),
            tokens: HashMap::new(),
            phase: Phase::Idle,
            timers: TimerSlots::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn active_ids(&self) -> Vec<TouchId> {
        self.touches.iter().map(|t| t.id).collect()
    }

    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.timers.is_armed(kind)
    }

    /// The winning touch once a selection has been made.
    pub fn survivor(&self) -> Option<TouchId> {
        match self.phase {
            Phase::Selected => self.touches.first().map(|t| t.id),
            _ => None,
        }
    }

    pub fn on_touch_start(&mut self, new_touches: &[Touch]) {
        if self.phase == Phase::Selected {
            info!("touch after selection, starting a new round");
            self.reset();
        }
        if self.phase == Phase::Loading {
            self.cancel_loading();
        }
        for touch in new_touches {
            if let Some(existing) = self.touches.iter_mut().find(|t| t.id == touch.id) {
                // Duplicate delivery of a start we already hold.
                *existing = *touch;
                if let Some(token) = self.tokens.get(&touch.id) {
                    self.renderer.move_token(token, touch.x, touch.y);
                }
                continue;
            }
            trace!(id = touch.id, x = touch.x, y = touch.y, "touch start");
            let token = self.renderer.create_token(touch.id, touch.x, touch.y);
            self.tokens.insert(touch.id, token);
            self.touches.push(*touch);
        }
        self.restart_animations();
        self.rearm_debounce();
    }

    pub fn on_touch_move(&mut self, moved_touches: &[Touch]) {
        for touch in moved_touches {
            let Some(existing) = self.touches.iter_mut().find(|t| t.id == touch.id) else {
                continue;
            };
            *existing = *touch;
            if let Some(token) = self.tokens.get(&touch.id) {
                self.renderer.move_token(token, touch.x, touch.y);
            }
        }
    }

    /// Handles both touch end and touch cancel.
    pub fn on_touch_end(&mut self, ended_touches: &[Touch]) {
        if self.phase == Phase::Loading {
            self.cancel_loading();
        }
        for touch in ended_touches {
            if let Some(token) = self.tokens.remove(&touch.id) {
                trace!(id = touch.id, "touch end");
                self.renderer.destroy_token(token);
            }
            self.touches.retain(|t| t.id != touch.id);
        }
        // Checked once per batch so a partially drained batch never resets.
        if self.touches.is_empty() {
            self.reset();
            return;
        }
        self.restart_animations();
        self.rearm_debounce();
    }

    /// Cancels both timers, destroys every token and returns to `Idle`.
    pub fn reset(&mut self) {
        self.cancel_timer(TimerKind::Debounce);
        self.cancel_timer(TimerKind::Loading);
        if !self.tokens.is_empty() {
            debug!(tokens = self.tokens.len(), "clearing touches");
        }
        for (_, token) in self.tokens.drain() {
            self.renderer.destroy_token(token);
        }
        self.touches.clear();
        self.set_phase(Phase::Idle);
    }

    /// Entry point for scheduler callbacks. Expiries of cancelled or
    /// replaced timers are dropped here.
    pub fn on_timer(&mut self, timer: Timer) {
        if !self.timers.expire(timer) {
            debug!(?timer, "ignoring stale timer");
            return;
        }
        match timer.kind {
            TimerKind::Debounce => self.begin_loading(),
            TimerKind::Loading => {
                if self.phase == Phase::Loading {
                    self.select();
                }
            }
        }
    }

    fn rearm_debounce(&mut self) {
        if !matches!(self.phase, Phase::Idle | Phase::Collecting) {
            return;
        }
        self.cancel_timer(TimerKind::Debounce);
        if self.touches.is_empty() {
            return;
        }
        let timer = self.timers.arm(TimerKind::Debounce);
        self.scheduler.arm(timer, self.debounce);
        self.set_phase(Phase::Collecting);
    }

    fn begin_loading(&mut self) {
        if self.phase != Phase::Collecting || self.touches.is_empty() {
            return;
        }
        self.set_phase(Phase::Loading);
        for token in self.tokens.values() {
            self.renderer.set_loading(token, true);
        }
        let timer = self.timers.arm(TimerKind::Loading);
        self.scheduler.arm(timer, self.loading);
    }

    fn cancel_loading(&mut self) {
        self.cancel_timer(TimerKind::Loading);
        for token in self.tokens.values() {
            self.renderer.set_loading(token, false);
        }
        self.set_phase(Phase::Collecting);
    }

    fn select(&mut self) {
        let index = self.random.pick_index(self.touches.len());
        let Some(winner) = self.touches.get(index).copied() else {
            return;
        };
        let losers: Vec<TouchId> = self
            .touches
            .iter()
            .map(|t| t.id)
            .filter(|&id| id != winner.id)
            .collect();
        for id in losers {
            if let Some(token) = self.tokens.remove(&id) {
                self.renderer.destroy_token(token);
            }
        }
        self.touches.retain(|t| t.id == winner.id);
        if let Some(token) = self.tokens.get(&winner.id) {
            self.renderer.set_loading(token, false);
            self.renderer.mark_selected(token);
        }
        info!(id = winner.id, "touch selected");
        self.set_phase(Phase::Selected);
    }

    fn cancel_timer(&mut self, kind: TimerKind) {
        // The scheduler is only told about timers this tracker still owns,
        // so an expiry being handled never cancels its own callback.
        if self.timers.disarm(kind) {
            self.scheduler.cancel(kind);
        }
    }

    fn restart_animations(&mut self) {
        for touch in &self.touches {
            if let Some(token) = self.tokens.get(&touch.id) {
                self.renderer.restart_animation(token);
            }
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        if self.phase != phase {
            debug!(from = ?self.phase, to = ?phase, "phase change");
            self.phase = phase;
        }
    }
}
