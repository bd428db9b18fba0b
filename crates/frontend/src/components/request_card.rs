//! Incoming request card with accept and decline actions.

use core_types::{IncomingRequest, RequestDecision};
use yew::prelude::*;

use crate::components::SeverityBadge;

/// Properties for RequestCard component.
#[derive(Properties, PartialEq)]
pub struct RequestCardProps {
    pub request: IncomingRequest,
    pub on_decide: Callback<(u32, RequestDecision)>,
}

/// Incoming request card component.
#[function_component(RequestCard)]
pub fn request_card(props: &RequestCardProps) -> Html {
    let request = &props.request;

    let accept = {
        let on_decide = props.on_decide.clone();
        let id = request.id;
        Callback::from(move |_: MouseEvent| on_decide.emit((id, RequestDecision::Accept)))
    };

    let decline = {
        let on_decide = props.on_decide.clone();
        let id = request.id;
        Callback::from(move |_: MouseEvent| on_decide.emit((id, RequestDecision::Decline)))
    };

    html! {
        <div class="card request-card">
            <div class="request-head">
                <div>
                    <p class="request-patient">{ &request.patient }</p>
                    <p class="text-secondary">{ &request.kind }</p>
                </div>
                <SeverityBadge severity={request.severity} />
            </div>
            <div class="request-meta">
                <span>{ format!("⏱ ETA: {}", request.eta) }</span>
                <span>{ &request.time }</span>
            </div>
            <div class="request-actions">
                <button class="btn btn-primary" onclick={accept}>{"✓ Accept"}</button>
                <button class="btn btn-secondary" onclick={decline}>{"✕ Decline"}</button>
            </div>
        </div>
    }
}
