use crate::model::Phase;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct StatusHintProps {
    pub phase: Phase,
}

#[function_component(StatusHint)]
pub fn status_hint(props: &StatusHintProps) -> Html {
    let class = match props.phase {
        Phase::Idle => "status-hint",
        Phase::Collecting => "status-hint collecting",
        Phase::Loading => "status-hint loading",
        Phase::Selected => "status-hint selected",
    };
    html! {<div class={class}>{ props.phase.hint() }</div>}
}
