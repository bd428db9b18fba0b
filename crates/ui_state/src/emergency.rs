//! SOS confirm flow: a two-state machine behind the emergency button.

use serde::{Deserialize, Serialize};

use crate::toast::Notice;

/// Where the SOS flow currently is.
///
/// There is no "dispatched" state: confirming returns to `Closed`
/// immediately and the dispatch exists only as the returned notice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SosState {
    /// Dialog hidden, button armed
    #[default]
    Closed,
    /// Dialog visible, awaiting confirm or cancel
    Confirming,
}

/// User interactions with the SOS flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SosEvent {
    Open,
    Confirm,
    Cancel,
}

impl SosState {
    /// Advance the machine; a confirm yields the dispatch notice.
    ///
    /// Events that do not apply to the current state are ignored, so a
    /// stray confirm while the dialog is closed can never dispatch.
    pub fn on_event(&mut self, event: SosEvent) -> Option<Notice> {
        match (*self, event) {
            (SosState::Closed, SosEvent::Open) => {
                *self = SosState::Confirming;
                None
            }
            (SosState::Confirming, SosEvent::Confirm) => {
                *self = SosState::Closed;
                Some(dispatch_notice())
            }
            (SosState::Confirming, SosEvent::Cancel) => {
                *self = SosState::Closed;
                None
            }
            _ => None,
        }
    }

    /// Whether the confirmation dialog is showing.
    pub fn is_open(&self) -> bool {
        matches!(self, SosState::Confirming)
    }
}

fn dispatch_notice() -> Notice {
    Notice::new(
        "🚨 Emergency Alert Sent!",
        "Nearest hospital notified. Ambulance dispatched. ETA: 4 minutes.",
    )
}
