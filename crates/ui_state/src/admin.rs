//! Admin dashboard state: tab selection, bed counts, request triage.

use serde::{Deserialize, Serialize};

use core_types::{BedInventory, IncomingRequest, RequestDecision, Ward};

use crate::toast::Notice;

/// Top-level admin dashboard tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdminTab {
    #[default]
    Overview,
    Beds,
    Requests,
}

impl AdminTab {
    /// All tabs, in display order.
    pub const ALL: [AdminTab; 3] = [AdminTab::Overview, AdminTab::Beds, AdminTab::Requests];

    pub fn label(&self) -> &'static str {
        match self {
            AdminTab::Overview => "Overview",
            AdminTab::Beds => "Beds",
            AdminTab::Requests => "Requests",
        }
    }
}

/// Mutable state behind the admin dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminView {
    pub tab: AdminTab,
    pub beds: BedInventory,
    pub requests: Vec<IncomingRequest>,
}

impl AdminView {
    pub fn new(beds: BedInventory, requests: Vec<IncomingRequest>) -> Self {
        Self {
            tab: AdminTab::default(),
            beds,
            requests,
        }
    }

    pub fn select_tab(&mut self, tab: AdminTab) {
        self.tab = tab;
    }

    /// Adjust one ward count (floor-clamped at zero) and report it.
    ///
    /// The notice fires even when the clamp left the count unchanged.
    pub fn adjust_ward(&mut self, ward: Ward, delta: i32) -> Notice {
        self.beds.adjust(ward, delta);
        Notice::new(
            "Availability updated",
            format!("{} beds updated.", ward.key()),
        )
    }

    /// Report a decision on a request. Returns `None` for unknown ids.
    ///
    /// The request list itself never changes; deciding only notifies,
    /// and deciding the same request again notifies again.
    pub fn decide_request(&self, id: u32, decision: RequestDecision) -> Option<Notice> {
        if !self.requests.iter().any(|request| request.id == id) {
            return None;
        }
        let notice = match decision {
            RequestDecision::Accept => Notice::new(
                "Request accepted",
                format!("Emergency request #{id} accepted. Preparing bay."),
            ),
            RequestDecision::Decline => Notice::new(
                "Request declined",
                format!("Emergency request #{id} declined."),
            ),
        };
        Some(notice)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::Severity;

    fn sample_view() -> AdminView {
        AdminView::new(
            BedInventory {
                general: 45,
                icu: 8,
                emergency: 12,
                pediatric: 6,
            },
            vec![
                IncomingRequest {
                    id: 1,
                    patient: "Jane Smith".into(),
                    kind: "Cardiac Emergency".into(),
                    severity: Severity::Critical,
                    eta: "3 min".into(),
                    time: "12:34 PM".into(),
                },
                IncomingRequest {
                    id: 2,
                    patient: "Mike Johnson".into(),
                    kind: "Trauma".into(),
                    severity: Severity::High,
                    eta: "7 min".into(),
                    time: "12:31 PM".into(),
                },
            ],
        )
    }

    #[test]
    fn test_starts_on_overview_tab() {
        assert_eq!(sample_view().tab, AdminTab::Overview);
    }

    #[test]
    fn test_select_tab() {
        let mut view = sample_view();

        view.select_tab(AdminTab::Requests);
        assert_eq!(view.tab, AdminTab::Requests);

        view.select_tab(AdminTab::Beds);
        assert_eq!(view.tab, AdminTab::Beds);
    }

    #[test]
    fn test_tab_labels_in_order() {
        let labels: Vec<&str> = AdminTab::ALL.iter().map(AdminTab::label).collect();
        assert_eq!(labels, vec!["Overview", "Beds", "Requests"]);
    }

    #[test]
    fn test_adjust_ward_updates_and_notifies() {
        let mut view = sample_view();

        let notice = view.adjust_ward(Ward::Icu, 1);

        assert_eq!(view.beds.icu, 9);
        assert_eq!(notice.title, "Availability updated");
        assert_eq!(notice.body, "icu beds updated.");
    }

    #[test]
    fn test_adjust_ward_clamps_but_still_notifies() {
        let mut view = sample_view();
        view.beds.pediatric = 0;

        let notice = view.adjust_ward(Ward::Pediatric, -1);

        assert_eq!(view.beds.pediatric, 0);
        assert_eq!(notice.body, "pediatric beds updated.");
    }

    #[test]
    fn test_accept_request_notice() {
        let view = sample_view();

        let notice = view.decide_request(1, RequestDecision::Accept).unwrap();

        assert_eq!(notice.title, "Request accepted");
        assert_eq!(notice.body, "Emergency request #1 accepted. Preparing bay.");
    }

    #[test]
    fn test_decline_request_notice() {
        let view = sample_view();

        let notice = view.decide_request(2, RequestDecision::Decline).unwrap();

        assert_eq!(notice.title, "Request declined");
        assert_eq!(notice.body, "Emergency request #2 declined.");
    }

    #[test]
    fn test_unknown_request_id_yields_nothing() {
        let view = sample_view();
        assert!(view.decide_request(99, RequestDecision::Accept).is_none());
    }

    #[test]
    fn test_deciding_twice_notifies_twice() {
        let view = sample_view();

        let first = view.decide_request(1, RequestDecision::Accept);
        let second = view.decide_request(1, RequestDecision::Accept);

        assert_eq!(first, second);
        assert!(second.is_some());
    }

    #[test]
    fn test_decisions_leave_request_list_intact() {
        let view = sample_view();

        view.decide_request(1, RequestDecision::Accept);
        view.decide_request(2, RequestDecision::Decline);

        assert_eq!(view.requests.len(), 2);
        assert_eq!(view.requests[0].patient, "Jane Smith");
    }

    #[test]
    fn test_view_serialization_round_trip() {
        let mut view = sample_view();
        view.select_tab(AdminTab::Beds);
        view.adjust_ward(Ward::General, -3);

        let json = serde_json::to_string(&view).unwrap();
        let parsed: AdminView = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, view);
    }
}
