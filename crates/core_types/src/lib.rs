//! Core types for the MedAssist emergency-locator mockup.
//!
//! This crate defines the shared data structures used across the demo
//! catalog, the view-state layer, and the Yew frontend. Everything here is
//! plain data: the only behavior is the floor-clamped bed-count adjustment.

use serde::{Deserialize, Serialize};

/// Triage severity tier attached to an incoming request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Life-threatening, immediate attention
    Critical,
    /// Urgent, degrading condition
    High,
    /// Stable but needs care
    Medium,
}

impl Severity {
    /// Display label as shown on severity chips.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
        }
    }
}

/// A bed category with an independently tracked count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ward {
    General,
    Icu,
    Emergency,
    Pediatric,
}

impl Ward {
    /// All wards, in display order.
    pub const ALL: [Ward; 4] = [Ward::General, Ward::Icu, Ward::Emergency, Ward::Pediatric];

    /// Heading label ("General", "ICU", ...).
    pub fn label(&self) -> &'static str {
        match self {
            Ward::General => "General",
            Ward::Icu => "ICU",
            Ward::Emergency => "Emergency",
            Ward::Pediatric => "Pediatric",
        }
    }

    /// Lowercase key, matching the serde name; used in notification copy.
    pub fn key(&self) -> &'static str {
        match self {
            Ward::General => "general",
            Ward::Icu => "icu",
            Ward::Emergency => "emergency",
            Ward::Pediatric => "pediatric",
        }
    }
}

/// One hospital in the demo directory.
///
/// Immutable at runtime: entries come from the fixed literal list in
/// `demo_data` and are never created, mutated, or destroyed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hospital {
    /// Unique hospital identifier
    pub id: u32,
    /// Display name
    pub name: String,
    /// Distance label (e.g. "1.2 km"); static, no geolocation behind it
    pub distance: String,
    /// ETA label (e.g. "4 min"); static literal, never computed
    pub eta: String,
    /// Open general beds
    pub beds: u32,
    /// Open ICU beds
    pub icu: u32,
    /// Patient rating out of 5.0
    pub rating: f32,
    /// Specialty tags ("Trauma", "Cardiology", ...)
    pub specialties: Vec<String>,
    /// Precomputed AI match score, 0-100; presented, never computed
    pub ai_score: u8,
}

/// Per-ward open-bed counts for the admin's hospital.
///
/// Carries the one numeric invariant in the system: a count never goes
/// below zero. There is no upper bound and nothing is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BedInventory {
    pub general: u32,
    pub icu: u32,
    pub emergency: u32,
    pub pediatric: u32,
}

impl BedInventory {
    /// Current count for one ward.
    pub fn count(&self, ward: Ward) -> u32 {
        match ward {
            Ward::General => self.general,
            Ward::Icu => self.icu,
            Ward::Emergency => self.emergency,
            Ward::Pediatric => self.pediatric,
        }
    }

    /// Apply a signed adjustment to one ward, floor-clamped at zero.
    pub fn adjust(&mut self, ward: Ward, delta: i32) {
        let slot = match ward {
            Ward::General => &mut self.general,
            Ward::Icu => &mut self.icu,
            Ward::Emergency => &mut self.emergency,
            Ward::Pediatric => &mut self.pediatric,
        };
        *slot = if delta >= 0 {
            slot.saturating_add(delta as u32)
        } else {
            slot.saturating_sub(delta.unsigned_abs())
        };
    }

    /// Sum of all ward counts.
    pub fn total(&self) -> u32 {
        self.general + self.icu + self.emergency + self.pediatric
    }
}

/// Decision an admin can take on an incoming request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestDecision {
    Accept,
    Decline,
}

/// An incoming emergency request shown on the admin dashboard.
///
/// Static demo record: accept/decline notify but never remove or
/// transition it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomingRequest {
    /// Unique request identifier
    pub id: u32,
    /// Patient display name
    pub patient: String,
    /// Request type ("Cardiac Emergency", "Trauma", ...)
    pub kind: String,
    /// Triage severity tier
    pub severity: Severity,
    /// Ambulance ETA label (static literal)
    pub eta: String,
    /// Arrival timestamp label (static literal)
    pub time: String,
}

/// The signed-in patient's profile card data.
///
/// Display values only; no identity or location provider behind them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub blood_group: String,
    pub age: u8,
    /// GPS coordinate label (e.g. "40.7128° N, 74.0060° W"); static
    pub gps: String,
}

/// A decorative pin on the map mockup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapPin {
    /// Horizontal position, percent of map width
    pub x: u8,
    /// Vertical position, percent of map height
    pub y: u8,
    /// Short hospital label
    pub name: String,
}
