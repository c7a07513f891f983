use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ResetButtonProps {
    pub on_reset: Callback<()>,
}

/// Manual reset. Plays a one-shot scale animation on every press.
#[function_component(ResetButton)]
pub fn reset_button(props: &ResetButtonProps) -> Html {
    let animating = use_state(|| false);

    let onclick = {
        let cb = props.on_reset.clone();
        let animating = animating.clone();
        Callback::from(move |_| {
            cb.emit(());
            animating.set(true);
        })
    };
    let onanimationend = {
        let animating = animating.clone();
        Callback::from(move |_: AnimationEvent| animating.set(false))
    };

    html! {
        <button
            id="resetButton"
            class={classes!("reset-button", animating.then_some("scale-animation"))}
            {onclick}
            {onanimationend}
        >
            {"Reset"}
        </button>
    }
}
