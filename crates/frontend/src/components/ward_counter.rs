//! Bed count row with increment and decrement controls.

use core_types::Ward;
use yew::prelude::*;

/// Properties for WardCounter component.
#[derive(Properties, PartialEq)]
pub struct WardCounterProps {
    pub ward: Ward,
    pub count: u32,
    pub on_adjust: Callback<(Ward, i32)>,
}

/// Bed count row component. The clamp at zero lives in the inventory,
/// not here; the decrement button stays enabled.
#[function_component(WardCounter)]
pub fn ward_counter(props: &WardCounterProps) -> Html {
    let ward = props.ward;

    let decrement = {
        let on_adjust = props.on_adjust.clone();
        Callback::from(move |_: MouseEvent| on_adjust.emit((ward, -1)))
    };

    let increment = {
        let on_adjust = props.on_adjust.clone();
        Callback::from(move |_: MouseEvent| on_adjust.emit((ward, 1)))
    };

    html! {
        <div class="card bed-row">
            <div>
                <p class="bed-ward">{ format!("{} Beds", ward.label()) }</p>
                <p class="text-secondary">{ format!("{} available", props.count) }</p>
            </div>
            <div class="bed-controls">
                <button class="count-btn" onclick={decrement}>{"−"}</button>
                <span class="bed-count">{ props.count.to_string() }</span>
                <button class="count-btn primary" onclick={increment}>{"+"}</button>
            </div>
        </div>
    }
}
