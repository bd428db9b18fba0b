//! Hospital recommendation card.

use core_types::Hospital;
use yew::prelude::*;

use ui_state::dashboard::navigation_notice;

use crate::toaster::use_toaster;

/// Properties for HospitalCard component.
#[derive(Properties, PartialEq)]
pub struct HospitalCardProps {
    pub hospital: Hospital,
    /// Renders the highlighted "AI Top Pick" variant.
    #[prop_or_default]
    pub is_top: bool,
}

/// Hospital recommendation card component.
#[function_component(HospitalCard)]
pub fn hospital_card(props: &HospitalCardProps) -> Html {
    let hospital = &props.hospital;
    let toaster = use_toaster();

    let navigate = {
        let toaster = toaster.clone();
        let hospital = hospital.clone();
        Callback::from(move |_: MouseEvent| {
            toaster.notify(navigation_notice(&hospital));
        })
    };

    let card_class = if props.is_top {
        "card hospital-card top-pick"
    } else {
        "card hospital-card"
    };

    // Low ICU capacity renders as a warning.
    let icu_class = if hospital.icu > 2 {
        "pill pill-success"
    } else {
        "pill pill-warning"
    };

    html! {
        <div class={card_class}>
            if props.is_top {
                <div class="top-pick-row">
                    <span class="top-pick-label">{"⚡ AI Top Pick"}</span>
                    <span class="match-score">{ format!("{}% match", hospital.ai_score) }</span>
                </div>
            }

            <div class="hospital-head">
                <div>
                    <h3 class="hospital-name">{ &hospital.name }</h3>
                    <div class="hospital-meta">
                        <span>{ format!("📍 {}", hospital.distance) }</span>
                        <span>{ format!("⏱ {}", hospital.eta) }</span>
                        <span>{ format!("★ {}", hospital.rating) }</span>
                    </div>
                </div>
                if !props.is_top {
                    <span class="match-score muted">{ format!("{}%", hospital.ai_score) }</span>
                }
            </div>

            <div class="availability-row">
                <div class="pill pill-success">
                    <span class="pill-value">{ hospital.beds.to_string() }</span>
                    <span class="pill-label">{"Beds"}</span>
                </div>
                <div class={icu_class}>
                    <span class="pill-value">{ hospital.icu.to_string() }</span>
                    <span class="pill-label">{"ICU"}</span>
                </div>
            </div>

            <div class="specialty-row">
                { for hospital.specialties.iter().map(|specialty| {
                    html! { <span class="chip" key={specialty.clone()}>{ specialty }</span> }
                })}
            </div>

            <button class="btn btn-primary btn-block" onclick={navigate}>
                { format!("Navigate — {}", hospital.eta) }
            </button>
        </div>
    }
}
