use std::cell::RefCell;
use std::rc::Rc;

use tracing::{error, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{HtmlElement, TouchEvent};
use yew::prelude::*;

use crate::config::PickerConfig;
use crate::error::DomError;
use crate::model::{Phase, Timer, Touch};
use crate::platform::{self, DomRenderer, DomScheduler, storage};
use crate::state::{JsRandom, RandomSource, SeededRandom, Tracker};

pub type PickerTracker = Tracker<DomRenderer, DomScheduler, Box<dyn RandomSource>>;
type TrackerCell = Rc<RefCell<Option<PickerTracker>>>;

const TOUCH_EVENTS: [&str; 4] = ["touchstart", "touchmove", "touchend", "touchcancel"];

#[derive(Properties, PartialEq, Clone)]
pub struct TouchAreaProps {
    pub config: PickerConfig,
    /// Bumped by the reset control; each change resets the picker.
    pub reset_epoch: u32,
    pub on_phase: Callback<Phase>,
}

/// Runs `op` against the live tracker and reports the resulting phase.
fn with_tracker(cell: &TrackerCell, on_phase: &Callback<Phase>, op: impl FnOnce(&mut PickerTracker)) {
    let phase = {
        let Ok(mut slot) = cell.try_borrow_mut() else {
            warn!("tracker busy, dropping event");
            return;
        };
        let Some(tracker) = slot.as_mut() else {
            return;
        };
        op(tracker);
        tracker.phase()
    };
    on_phase.emit(phase);
}

/// Touch list of the event in area-local coordinates.
fn changed_touches(e: &TouchEvent, area: &HtmlElement) -> Vec<Touch> {
    let rect = area.get_bounding_client_rect();
    let list = e.changed_touches();
    (0..list.length())
        .filter_map(|i| list.item(i))
        .map(|t| {
            Touch::new(
                t.identifier(),
                t.client_x() as f64 - rect.left(),
                t.client_y() as f64 - rect.top(),
            )
        })
        .collect()
}

/// Registered listeners; removed again on drop.
struct TouchListeners {
    area: HtmlElement,
    callbacks: Vec<(&'static str, Closure<dyn FnMut(TouchEvent)>)>,
}

impl Drop for TouchListeners {
    fn drop(&mut self) {
        for (event, callback) in &self.callbacks {
            let _ = self
                .area
                .remove_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        }
    }
}

fn listener(
    area: &HtmlElement,
    cell: &TrackerCell,
    on_phase: &Callback<Phase>,
    op: fn(&mut PickerTracker, &[Touch]),
) -> Closure<dyn FnMut(TouchEvent)> {
    let area = area.clone();
    let cell = cell.clone();
    let on_phase = on_phase.clone();
    Closure::wrap(Box::new(move |e: TouchEvent| {
        e.prevent_default();
        let batch = changed_touches(&e, &area);
        if batch.is_empty() {
            return;
        }
        with_tracker(&cell, &on_phase, |tracker| op(tracker, &batch));
    }) as Box<dyn FnMut(_)>)
}

fn random_source() -> Box<dyn RandomSource> {
    match storage::seed_from_location() {
        Some(seed) => {
            info!(seed, "using seeded random source");
            Box::new(SeededRandom::new(seed))
        }
        None => Box::new(JsRandom),
    }
}

fn install(
    area_ref: &NodeRef,
    cell: &TrackerCell,
    config: &PickerConfig,
    on_phase: &Callback<Phase>,
) -> Result<TouchListeners, DomError> {
    let area = area_ref
        .cast::<HtmlElement>()
        .ok_or(DomError::MissingElement("touchArea"))?;
    let window = platform::window()?;
    let renderer = DomRenderer::new(area.clone())?;

    // weak: the scheduler lives inside the tracker it calls back into
    let weak = Rc::downgrade(cell);
    let fire_phase = on_phase.clone();
    let on_fire: Rc<dyn Fn(Timer)> = Rc::new(move |timer| {
        if let Some(cell) = weak.upgrade() {
            with_tracker(&cell, &fire_phase, |tracker| tracker.on_timer(timer));
        }
    });
    let scheduler = DomScheduler::new(window, on_fire);
    *cell.borrow_mut() = Some(Tracker::new(renderer, scheduler, random_source(), config));

    let ops: [fn(&mut PickerTracker, &[Touch]); 4] = [
        PickerTracker::on_touch_start,
        PickerTracker::on_touch_move,
        PickerTracker::on_touch_end,
        // cancel is handled as an end
        PickerTracker::on_touch_end,
    ];
    let mut listeners = TouchListeners {
        area: area.clone(),
        callbacks: Vec::with_capacity(TOUCH_EVENTS.len()),
    };
    for (event, op) in TOUCH_EVENTS.into_iter().zip(ops) {
        let callback = listener(&area, cell, on_phase, op);
        area.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| DomError::js("addEventListener", e))?;
        listeners.callbacks.push((event, callback));
    }
    info!(
        debounce_ms = config.debounce_ms,
        loading_ms = config.loading_ms,
        "touch area ready"
    );
    Ok(listeners)
}

#[function_component(TouchArea)]
pub fn touch_area(props: &TouchAreaProps) -> Html {
    let area_ref = use_node_ref();
    let tracker = use_mut_ref(|| None::<PickerTracker>);

    // (Re)build the tracker whenever the configuration changes.
    {
        let area_ref = area_ref.clone();
        let tracker = tracker.clone();
        let on_phase = props.on_phase.clone();
        use_effect_with(props.config.clone(), move |config| {
            let listeners = match install(&area_ref, &tracker, config, &on_phase) {
                Ok(listeners) => Some(listeners),
                Err(err) => {
                    error!(%err, "touch area setup failed");
                    None
                }
            };
            move || {
                drop(listeners);
                if let Some(mut old) = tracker.borrow_mut().take() {
                    old.reset();
                }
                on_phase.emit(Phase::Idle);
            }
        });
    }
    {
        let tracker = tracker.clone();
        let on_phase = props.on_phase.clone();
        use_effect_with(props.reset_epoch, move |_| {
            with_tracker(&tracker, &on_phase, |t| t.reset());
            || ()
        });
    }

    html! { <div ref={area_ref} id="touchArea" class="touch-area"></div> }
}
