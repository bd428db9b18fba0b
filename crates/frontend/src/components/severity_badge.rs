//! Severity chip for incoming requests.

use core_types::Severity;
use yew::prelude::*;

/// Properties for SeverityBadge component.
#[derive(Properties, PartialEq)]
pub struct SeverityBadgeProps {
    pub severity: Severity,
}

/// Severity chip component.
#[function_component(SeverityBadge)]
pub fn severity_badge(props: &SeverityBadgeProps) -> Html {
    let class = match props.severity {
        Severity::Critical => "severity-badge critical",
        Severity::High => "severity-badge high",
        Severity::Medium => "severity-badge medium",
    };

    html! {
        <span {class}>{ props.severity.label() }</span>
    }
}
