use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::config::PickerConfig;

#[derive(Properties, PartialEq, Clone)]
pub struct SettingsModalProps {
    pub show: bool,
    pub config: PickerConfig,
    pub on_close: Callback<()>,
    pub on_save: Callback<PickerConfig>,
}

fn parse_ms(field: &str, raw: &str) -> Result<u32, String> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| format!("{field} must be a whole number of milliseconds"))
}

#[function_component]
pub fn SettingsModal(props: &SettingsModalProps) -> Html {
    let debounce = use_state(|| props.config.debounce_ms.to_string());
    let loading = use_state(|| props.config.loading_ms.to_string());
    let feedback = use_state(|| None::<String>);

    // Refill the fields from the current config each time the modal opens.
    {
        let debounce = debounce.clone();
        let loading = loading.clone();
        let feedback = feedback.clone();
        let config = props.config.clone();
        use_effect_with(props.show, move |show| {
            if *show {
                debounce.set(config.debounce_ms.to_string());
                loading.set(config.loading_ms.to_string());
                feedback.set(None);
            }
            || ()
        });
    }

    if !props.show {
        return html! {};
    }

    let on_debounce = {
        let debounce = debounce.clone();
        Callback::from(move |e: InputEvent| {
            debounce.set(e.target_unchecked_into::<HtmlInputElement>().value())
        })
    };
    let on_loading = {
        let loading = loading.clone();
        Callback::from(move |e: InputEvent| {
            loading.set(e.target_unchecked_into::<HtmlInputElement>().value())
        })
    };
    let close_cb = {
        let cb = props.on_close.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let save_cb = {
        let cb = props.on_save.clone();
        let base = props.config.clone();
        let debounce = debounce.clone();
        let loading = loading.clone();
        let feedback = feedback.clone();
        Callback::from(move |_| {
            let parsed = parse_ms("Wait before choosing", &debounce)
                .and_then(|d| parse_ms("Suspense", &loading).map(|l| (d, l)));
            let (debounce_ms, loading_ms) = match parsed {
                Ok(values) => values,
                Err(msg) => {
                    feedback.set(Some(msg));
                    return;
                }
            };
            let config = PickerConfig {
                debounce_ms,
                loading_ms,
                ..base.clone()
            };
            match config.validate() {
                Ok(()) => cb.emit(config),
                Err(err) => feedback.set(Some(err.to_string())),
            }
        })
    };

    html! {<div class="modal-backdrop">
        <div class="modal">
            <div class="modal-header">
                <h3>{"Settings"}</h3>
                <button onclick={close_cb.clone()}>{"Close"}</button>
            </div>
            <label class="modal-field">
                <span>{"Wait before choosing (ms)"}</span>
                <input type="number" min="100" max="10000" step="100" value={(*debounce).clone()} oninput={on_debounce} />
            </label>
            <label class="modal-field">
                <span>{"Suspense (ms)"}</span>
                <input type="number" min="100" max="10000" step="100" value={(*loading).clone()} oninput={on_loading} />
            </label>
            { if let Some(msg) = &*feedback { html!{ <div class="modal-error">{ msg.clone() }</div> } } else { html!{} } }
            <div class="modal-actions">
                <button onclick={save_cb}>{"Save"}</button>
                <button onclick={close_cb}>{"Cancel"}</button>
            </div>
            <div class="modal-note">{"Saving restarts the current round."}</div>
        </div>
    </div>}
}
