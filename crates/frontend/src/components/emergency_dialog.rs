//! Full-screen SOS confirmation dialog.

use yew::prelude::*;

/// Properties for EmergencyDialog component.
#[derive(Properties, PartialEq)]
pub struct EmergencyDialogProps {
    pub open: bool,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// SOS confirmation dialog component.
#[function_component(EmergencyDialog)]
pub fn emergency_dialog(props: &EmergencyDialogProps) -> Html {
    if !props.open {
        return html! {};
    }

    let confirm = {
        let on_confirm = props.on_confirm.clone();
        Callback::from(move |_: MouseEvent| on_confirm.emit(()))
    };

    // Clicking outside the dialog cancels, like the escape hatch on the
    // cancel button.
    let overlay_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div class="dialog-overlay" onclick={overlay_cancel}>
            <div class="dialog" onclick={keep_open}>
                <div class="dialog-icon">{"⚠"}</div>
                <h2 class="dialog-title">{"Confirm Emergency Alert"}</h2>
                <p class="dialog-text">
                    {"This will immediately alert the nearest hospitals and dispatch \
                      emergency services to your GPS location."}
                </p>
                <div class="dialog-details">
                    <p>{"• Your live location will be shared"}</p>
                    <p>{"• Nearest hospital will be notified"}</p>
                    <p>{"• Emergency contacts will be alerted"}</p>
                    <p>{"• Medical profile will be sent to responders"}</p>
                </div>
                <button class="btn btn-emergency btn-block" onclick={confirm}>
                    {"SEND EMERGENCY ALERT"}
                </button>
                <button class="btn btn-secondary btn-block" onclick={cancel}>
                    {"Cancel"}
                </button>
            </div>
        </div>
    }
}
