//! Patient dashboard: profile card, map, recommendations, and the SOS flow.

use yew::prelude::*;
use yew_router::prelude::*;

use demo_data::{builtin_hospitals, builtin_profile};
use ui_state::emergency::{SosEvent, SosState};

use crate::app::Route;
use crate::components::{EmergencyDialog, HospitalCard, MapMockup};
use crate::toaster::use_toaster;

/// Patient dashboard page component.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let sos = use_state(SosState::default);
    let menu_open = use_state(|| false);
    let toaster = use_toaster();
    let navigator = use_navigator().expect("router context not found");

    let hospitals = builtin_hospitals();
    let profile = builtin_profile();

    let open_sos = {
        let sos = sos.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *sos;
            next.on_event(SosEvent::Open);
            sos.set(next);
        })
    };

    let confirm_sos = {
        let sos = sos.clone();
        let toaster = toaster.clone();
        Callback::from(move |_: ()| {
            let mut next = *sos;
            if let Some(notice) = next.on_event(SosEvent::Confirm) {
                web_sys::console::info_1(&"emergency alert dispatched".into());
                toaster.notify(notice);
            }
            sos.set(next);
        })
    };

    let cancel_sos = {
        let sos = sos.clone();
        Callback::from(move |_: ()| {
            let mut next = *sos;
            next.on_event(SosEvent::Cancel);
            sos.set(next);
        })
    };

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(!*menu_open))
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let keep_menu = Callback::from(|e: MouseEvent| e.stop_propagation());

    let sign_out = {
        let navigator = navigator.clone();
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
            navigator.push(&Route::Auth);
        })
    };

    html! {
        <div class="page dashboard-page">
            <header class="app-header">
                <button class="icon-btn" onclick={toggle_menu}>{"☰"}</button>
                <div class="brand">
                    <span class="brand-heart">{"♥"}</span>
                    <span class="brand-name">{"MedAssist AI"}</span>
                </div>
                <button class="icon-btn bell">
                    {"🔔"}
                    <span class="bell-dot"></span>
                </button>
            </header>

            if *menu_open {
                <div class="overlay" onclick={close_menu}>
                    <aside class="side-menu" onclick={keep_menu}>
                        <div class="menu-profile">
                            <div class="avatar">{"👤"}</div>
                            <div>
                                <p class="menu-name">{ &profile.name }</p>
                                <p class="text-secondary">
                                    { format!("Blood: {} | Age: {}", profile.blood_group, profile.age) }
                                </p>
                            </div>
                        </div>
                        <nav class="menu-links">
                            <button class="menu-link">{"My Profile"}</button>
                            <button class="menu-link">{"Emergency Contacts"}</button>
                            <button class="menu-link">{"Medical History"}</button>
                        </nav>
                        <button class="menu-signout" onclick={sign_out}>{"Sign Out"}</button>
                    </aside>
                </div>
            }

            <main class="page-body">
                <section class="card">
                    <div class="profile-row">
                        <div>
                            <p class="text-secondary">{"Good morning,"}</p>
                            <p class="profile-name">{ &profile.name }</p>
                        </div>
                        <div class="profile-chips">
                            <span class="chip chip-primary">{ &profile.blood_group }</span>
                            <span class="chip">{ format!("Age {}", profile.age) }</span>
                        </div>
                    </div>
                    <p class="gps-row">
                        { format!("📍 GPS Active — {}", profile.gps) }
                        <span class="live-dot"></span>
                    </p>
                </section>

                <MapMockup />

                <div class="section-header">
                    <h2>{"⚡ AI Recommended"}</h2>
                    <span class="text-secondary">{"Based on distance & availability"}</span>
                </div>

                <div class="hospital-list">
                    { for hospitals.iter().enumerate().map(|(i, hospital)| {
                        html! {
                            <HospitalCard
                                key={hospital.id.to_string()}
                                hospital={hospital.clone()}
                                is_top={i == 0}
                            />
                        }
                    })}
                </div>
            </main>

            <div class="fab-wrap">
                <button class="sos-fab" onclick={open_sos}>{"⚠ EMERGENCY SOS"}</button>
            </div>

            <EmergencyDialog
                open={sos.is_open()}
                on_confirm={confirm_sos}
                on_cancel={cancel_sos}
            />
        </div>
    }
}
