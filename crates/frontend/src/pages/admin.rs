//! Hospital admin dashboard: overview stats, bed board, request triage.

use yew::prelude::*;
use yew_router::prelude::*;

use core_types::{RequestDecision, Ward};
use demo_data::{
    ADMIN_HOSPITAL_ID, builtin_bed_inventory, builtin_hospitals, builtin_requests, hospital_by_id,
};
use ui_state::admin::{AdminTab, AdminView};

use crate::app::Route;
use crate::components::{RequestCard, SeverityBadge, StatCard, WardCounter};
use crate::toaster::use_toaster;

/// Bars for the weekly request-volume chart.
const WEEKLY_VOLUME: [(&str, u32); 7] = [
    ("Mon", 18),
    ("Tue", 24),
    ("Wed", 15),
    ("Thu", 32),
    ("Fri", 28),
    ("Sat", 22),
    ("Sun", 24),
];

/// Ceiling the chart bars scale against.
const VOLUME_CEILING: u32 = 35;

/// Admin dashboard page component.
#[function_component(AdminPage)]
pub fn admin_page() -> Html {
    let view = use_state(|| AdminView::new(builtin_bed_inventory(), builtin_requests()));
    let toaster = use_toaster();
    let navigator = use_navigator().expect("router context not found");

    let hospitals = builtin_hospitals();
    let hospital_name = hospital_by_id(&hospitals, ADMIN_HOSPITAL_ID)
        .map(|h| h.name.clone())
        .unwrap_or_default();

    let on_adjust = {
        let view = view.clone();
        let toaster = toaster.clone();
        Callback::from(move |(ward, delta): (Ward, i32)| {
            let mut next = (*view).clone();
            let notice = next.adjust_ward(ward, delta);
            toaster.notify(notice);
            view.set(next);
        })
    };

    let on_decide = {
        let view = view.clone();
        let toaster = toaster.clone();
        Callback::from(move |(id, decision): (u32, RequestDecision)| {
            if let Some(notice) = view.decide_request(id, decision) {
                toaster.notify(notice);
            }
        })
    };

    let sign_out = {
        let navigator = navigator.clone();
        Callback::from(move |_: MouseEvent| navigator.push(&Route::Auth))
    };

    let tab_content = match view.tab {
        AdminTab::Overview => html! {
            <>
                <div class="stats-grid">
                    <StatCard
                        value={view.beds.total().to_string()}
                        label={"Total Beds"}
                        tone={"primary"}
                    />
                    <StatCard
                        value={view.beds.icu.to_string()}
                        label={"ICU Available"}
                        tone={"emergency"}
                    />
                    <StatCard
                        value={"24"}
                        label={"Today's Requests"}
                        tone={"warning"}
                    />
                    <StatCard
                        value={"4.2m"}
                        label={"Avg Response"}
                        tone={"success"}
                    />
                </div>

                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">{"Emergency Requests (7 Days)"}</h2>
                    </div>
                    <div class="chart">
                        { for WEEKLY_VOLUME.iter().map(|(day, count)| {
                            let height = f64::from(*count) / f64::from(VOLUME_CEILING) * 100.0;
                            html! {
                                <div class="chart-col" key={*day}>
                                    <div class="chart-bar" style={format!("height: {height:.0}%")}></div>
                                    <span class="chart-day">{ *day }</span>
                                </div>
                            }
                        })}
                    </div>
                </div>

                <div class="card">
                    <div class="card-header">
                        <h2 class="card-title">{"Recent Incoming"}</h2>
                    </div>
                    <div class="recent-list">
                        { for view.requests.iter().take(2).map(|request| {
                            html! {
                                <div class="recent-row" key={request.id.to_string()}>
                                    <div>
                                        <p class="recent-patient">{ &request.patient }</p>
                                        <p class="text-secondary">
                                            { format!("{} · ETA {}", request.kind, request.eta) }
                                        </p>
                                    </div>
                                    <SeverityBadge severity={request.severity} />
                                </div>
                            }
                        })}
                    </div>
                </div>
            </>
        },
        AdminTab::Beds => html! {
            <div class="bed-list">
                { for Ward::ALL.iter().map(|ward| {
                    html! {
                        <WardCounter
                            key={ward.key()}
                            ward={*ward}
                            count={view.beds.count(*ward)}
                            on_adjust={on_adjust.clone()}
                        />
                    }
                })}
            </div>
        },
        AdminTab::Requests => html! {
            <div class="request-list">
                { for view.requests.iter().map(|request| {
                    html! {
                        <RequestCard
                            key={request.id.to_string()}
                            request={request.clone()}
                            on_decide={on_decide.clone()}
                        />
                    }
                })}
            </div>
        },
    };

    html! {
        <div class="page admin-page">
            <header class="app-header">
                <div class="brand">
                    <span class="brand-shield">{"🛡"}</span>
                    <div>
                        <p class="brand-name">{ hospital_name }</p>
                        <p class="text-secondary brand-sub">{"Admin Dashboard"}</p>
                    </div>
                </div>
                <div class="header-actions">
                    <button class="icon-btn bell">
                        {"🔔"}
                        <span class="bell-dot"></span>
                    </button>
                    <button class="icon-btn" onclick={sign_out}>{"⎋"}</button>
                </div>
            </header>

            <main class="page-body">
                <div class="tab-row">
                    { for AdminTab::ALL.iter().map(|tab| {
                        let tab = *tab;
                        let class = if view.tab == tab { "tab active" } else { "tab" };
                        let view = view.clone();
                        let onclick = Callback::from(move |_: MouseEvent| {
                            let mut next = (*view).clone();
                            next.select_tab(tab);
                            view.set(next);
                        });
                        html! {
                            <button {class} {onclick} key={tab.label()}>
                                { tab.label() }
                            </button>
                        }
                    })}
                </div>

                { tab_content }
            </main>
        </div>
    }
}
