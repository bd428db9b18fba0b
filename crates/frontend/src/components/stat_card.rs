//! Statistics card component.

use yew::prelude::*;

/// Properties for StatCard component.
#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub value: String,
    pub label: String,
    /// Accent color key ("primary", "emergency", "warning", "success").
    #[prop_or_default]
    pub tone: Option<String>,
}

/// Statistics card component.
#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let tone_class = props.tone.as_ref().map(|tone| format!("tone-{tone}"));

    html! {
        <div class={classes!("card", "stat-card", tone_class)}>
            <div class="stat-value">{ &props.value }</div>
            <div class="stat-label">{ &props.label }</div>
        </div>
    }
}
