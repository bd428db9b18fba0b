//! View state for the MedAssist mockup, kept apart from rendering.
//!
//! Every screen's interactive state lives here as plain serializable data
//! with pure update functions. Updates return effect values (notices,
//! redirects) instead of touching the DOM, so this whole layer is unit
//! tested without a browser.

use serde::{Deserialize, Serialize};

pub mod admin;
pub mod auth;
pub mod dashboard;
pub mod emergency;
pub mod toast;

/// A top-level screen, one per route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    Auth,
    Dashboard,
    Admin,
}
