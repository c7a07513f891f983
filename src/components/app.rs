use super::{
    reset_button::ResetButton, settings_modal::SettingsModal, status_hint::StatusHint,
    touch_area::TouchArea,
};
use crate::config::PickerConfig;
use crate::model::Phase;
use crate::platform::storage;
use tracing::{info, warn};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct AppProps {
    pub config: PickerConfig,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let config = use_state(|| props.config.clone());
    let phase = use_state(|| Phase::Idle);
    let reset_epoch = use_state(|| 0_u32);
    let open_settings = use_state(|| false);

    let on_phase = {
        let phase = phase.clone();
        Callback::from(move |p: Phase| phase.set(p))
    };
    let on_reset = {
        let reset_epoch = reset_epoch.clone();
        Callback::from(move |_| {
            info!("manual reset");
            reset_epoch.set(reset_epoch.wrapping_add(1));
        })
    };
    let open_settings_cb = {
        let open_settings = open_settings.clone();
        Callback::from(move |_| open_settings.set(true))
    };
    let close_settings = {
        let open_settings = open_settings.clone();
        Callback::from(move |_| open_settings.set(false))
    };
    // Persist, then swap the config in; the touch area rebuilds its tracker.
    let save_settings = {
        let config = config.clone();
        let open_settings = open_settings.clone();
        Callback::from(move |next: PickerConfig| {
            if let Err(err) = storage::save_config(&next) {
                warn!(%err, "settings not persisted");
            }
            info!(
                debounce_ms = next.debounce_ms,
                loading_ms = next.loading_ms,
                "settings applied"
            );
            config.set(next);
            open_settings.set(false);
        })
    };

    html! {
        <div id="root">
            <TouchArea config={(*config).clone()} reset_epoch={*reset_epoch} on_phase={on_phase} />
            <StatusHint phase={*phase} />
            <div class="controls">
                <ResetButton on_reset={on_reset} />
                <button class="settings-button" onclick={open_settings_cb}>{"Settings"}</button>
            </div>
            <SettingsModal
                show={*open_settings}
                config={(*config).clone()}
                on_close={close_settings}
                on_save={save_settings}
            />
        </div>
    }
}
