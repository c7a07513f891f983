use std::rc::Rc;
use std::time::Duration;

use tracing::{trace, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::Window;

use crate::model::{Timer, TimerKind};
use crate::state::Scheduler;

struct PendingTimeout {
    handle: i32,
    // kept alive until replaced; the browser holds only a reference
    _callback: Closure<dyn FnMut()>,
}

/// `setTimeout`-backed scheduler with one slot per timer kind.
///
/// A slot whose callback already ran keeps its closure until the next
/// `arm` of that kind replaces it, so a callback is never dropped while it
/// is executing.
pub struct DomScheduler {
    window: Window,
    on_fire: Rc<dyn Fn(Timer)>,
    debounce: Option<PendingTimeout>,
    loading: Option<PendingTimeout>,
}

impl DomScheduler {
    pub fn new(window: Window, on_fire: Rc<dyn Fn(Timer)>) -> Self {
        Self {
            window,
            on_fire,
            debounce: None,
            loading: None,
        }
    }

    fn slot_mut(&mut self, kind: TimerKind) -> &mut Option<PendingTimeout> {
        match kind {
            TimerKind::Debounce => &mut self.debounce,
            TimerKind::Loading => &mut self.loading,
        }
    }

    fn clear(&mut self, kind: TimerKind) {
        if let Some(pending) = self.slot_mut(kind).take() {
            self.window.clear_timeout_with_handle(pending.handle);
        }
    }
}

impl Scheduler for DomScheduler {
    fn arm(&mut self, timer: Timer, after: Duration) {
        self.clear(timer.kind);
        let on_fire = self.on_fire.clone();
        let callback = Closure::wrap(Box::new(move || on_fire(timer)) as Box<dyn FnMut()>);
        let millis = i32::try_from(after.as_millis()).unwrap_or(i32::MAX);
        match self
            .window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                callback.as_ref().unchecked_ref(),
                millis,
            ) {
            Ok(handle) => {
                trace!(?timer, millis, "timeout armed");
                *self.slot_mut(timer.kind) = Some(PendingTimeout {
                    handle,
                    _callback: callback,
                });
            }
            Err(e) => warn!(?timer, err = ?e, "setTimeout failed"),
        }
    }

    fn cancel(&mut self, kind: TimerKind) {
        self.clear(kind);
    }
}

impl Drop for DomScheduler {
    fn drop(&mut self) {
        self.clear(TimerKind::Debounce);
        self.clear(TimerKind::Loading);
    }
}
