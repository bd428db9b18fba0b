//! Hardcoded demo catalog for the MedAssist mockup.
//!
//! Every record the app displays lives here as a literal: the hospital
//! directory, the admin's bed inventory, incoming requests, the demo
//! patient profile, and the map pins. Nothing is fetched or persisted.

use core_types::{BedInventory, Hospital, IncomingRequest, MapPin, Severity, UserProfile};
use std::path::Path;
use thiserror::Error;

/// Errors from catalog loading.
#[derive(Error, Debug)]
pub enum DemoDataError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for catalog loading.
pub type Result<T> = std::result::Result<T, DemoDataError>;

/// The hospital the admin dashboard administers.
pub const ADMIN_HOSPITAL_ID: u32 = 1;

/// The hospital directory, already in recommendation order.
///
/// Order is part of the fixture: entries are sorted by AI match score
/// descending and the first entry renders as the top pick.
pub fn builtin_hospitals() -> Vec<Hospital> {
    vec![
        Hospital {
            id: 1,
            name: "City General Hospital".into(),
            distance: "1.2 km".into(),
            eta: "4 min".into(),
            beds: 12,
            icu: 3,
            rating: 4.8,
            specialties: vec!["Trauma".into(), "Cardiology".into()],
            ai_score: 95,
        },
        Hospital {
            id: 2,
            name: "St. Mary's Medical Center".into(),
            distance: "2.8 km".into(),
            eta: "8 min".into(),
            beds: 5,
            icu: 1,
            rating: 4.6,
            specialties: vec!["Neurology".into(), "Orthopedics".into()],
            ai_score: 87,
        },
        Hospital {
            id: 3,
            name: "Metro Emergency Care".into(),
            distance: "3.5 km".into(),
            eta: "11 min".into(),
            beds: 20,
            icu: 6,
            rating: 4.9,
            specialties: vec!["Emergency".into(), "Pediatrics".into()],
            ai_score: 82,
        },
        Hospital {
            id: 4,
            name: "University Hospital".into(),
            distance: "5.1 km".into(),
            eta: "15 min".into(),
            beds: 8,
            icu: 2,
            rating: 4.7,
            specialties: vec!["Trauma".into(), "Burns".into()],
            ai_score: 75,
        },
    ]
}

/// Starting bed counts for the admin's hospital.
pub fn builtin_bed_inventory() -> BedInventory {
    BedInventory {
        general: 45,
        icu: 8,
        emergency: 12,
        pediatric: 6,
    }
}

/// Incoming emergency requests shown on the admin dashboard.
pub fn builtin_requests() -> Vec<IncomingRequest> {
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
        IncomingRequest {
            id: 3,
            patient: "Sarah Lee".into(),
            kind: "Respiratory".into(),
            severity: Severity::Medium,
            eta: "12 min".into(),
            time: "12:28 PM".into(),
        },
    ]
}

/// The demo patient shown on the dashboard and sidebar.
pub fn builtin_profile() -> UserProfile {
    UserProfile {
        name: "John Doe".into(),
        blood_group: "O+".into(),
        age: 28,
        gps: "40.7128° N, 74.0060° W".into(),
    }
}

/// Decorative hospital pins for the map mockup.
pub fn builtin_map_pins() -> Vec<MapPin> {
    vec![
        MapPin {
            x: 35,
            y: 30,
            name: "City General".into(),
        },
        MapPin {
            x: 60,
            y: 55,
            name: "St. Mary's".into(),
        },
        MapPin {
            x: 25,
            y: 70,
            name: "Metro Emergency".into(),
        },
        MapPin {
            x: 75,
            y: 35,
            name: "University Hospital".into(),
        },
    ]
}

/// Look up a hospital by id.
pub fn hospital_by_id(hospitals: &[Hospital], id: u32) -> Option<&Hospital> {
    hospitals.iter().find(|h| h.id == id)
}

/// Load a hospital directory from a JSON string.
pub fn hospitals_from_json(json: &str) -> Result<Vec<Hospital>> {
    Ok(serde_json::from_str(json)?)
}

/// Load a hospital directory from a JSON file.
pub fn hospitals_from_file(path: &Path) -> Result<Vec<Hospital>> {
    let content = std::fs::read_to_string(path)?;
    hospitals_from_json(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_hospitals() {
        let hospitals = builtin_hospitals();

        assert_eq!(hospitals.len(), 4);

        // Ids are unique
        for hospital in &hospitals {
            assert_eq!(hospitals.iter().filter(|h| h.id == hospital.id).count(), 1);
        }

        assert_eq!(hospitals[0].name, "City General Hospital");
        assert_eq!(hospitals[0].specialties, vec!["Trauma", "Cardiology"]);
    }

    #[test]
    fn test_hospitals_in_recommendation_order() {
        let hospitals = builtin_hospitals();

        // Sorted by AI score descending; the first entry is the top pick
        for pair in hospitals.windows(2) {
            assert!(pair[0].ai_score >= pair[1].ai_score);
        }
        assert_eq!(hospitals[0].ai_score, 95);
    }

    #[test]
    fn test_builtin_bed_inventory() {
        let beds = builtin_bed_inventory();

        assert_eq!(beds.general, 45);
        assert_eq!(beds.icu, 8);
        assert_eq!(beds.emergency, 12);
        assert_eq!(beds.pediatric, 6);
        assert_eq!(beds.total(), 71);
    }

    #[test]
    fn test_builtin_requests() {
        let requests = builtin_requests();

        assert_eq!(requests.len(), 3);
        assert_eq!(requests[0].severity, Severity::Critical);
        assert_eq!(requests[1].severity, Severity::High);
        assert_eq!(requests[2].severity, Severity::Medium);
        assert_eq!(requests[2].patient, "Sarah Lee");
    }

    #[test]
    fn test_builtin_profile() {
        let profile = builtin_profile();

        assert_eq!(profile.name, "John Doe");
        assert_eq!(profile.blood_group, "O+");
        assert_eq!(profile.age, 28);
        assert_eq!(profile.gps, "40.7128° N, 74.0060° W");
    }

    #[test]
    fn test_builtin_map_pins() {
        let pins = builtin_map_pins();

        assert_eq!(pins.len(), 4);

        // Percent coordinates stay on the map
        for pin in &pins {
            assert!(pin.x <= 100);
            assert!(pin.y <= 100);
        }
    }

    #[test]
    fn test_admin_hospital_is_in_directory() {
        let hospitals = builtin_hospitals();

        let admin = hospital_by_id(&hospitals, ADMIN_HOSPITAL_ID);
        assert_eq!(admin.map(|h| h.name.as_str()), Some("City General Hospital"));
    }

    #[test]
    fn test_hospital_by_id_missing() {
        let hospitals = builtin_hospitals();
        assert!(hospital_by_id(&hospitals, 99).is_none());
    }

    #[test]
    fn test_hospitals_from_json() {
        let json = r#"[
            {
                "id": 7,
                "name": "Riverside Clinic",
                "distance": "0.9 km",
                "eta": "3 min",
                "beds": 2,
                "icu": 0,
                "rating": 4.1,
                "specialties": ["General"],
                "ai_score": 64
            }
        ]"#;

        let hospitals = hospitals_from_json(json).unwrap();
        assert_eq!(hospitals.len(), 1);
        assert_eq!(hospitals[0].name, "Riverside Clinic");
        assert_eq!(hospitals[0].ai_score, 64);
    }

    #[test]
    fn test_hospitals_from_json_rejects_garbage() {
        let err = hospitals_from_json("not json").unwrap_err();
        assert!(matches!(err, DemoDataError::Json(_)));
    }

    #[test]
    fn test_hospitals_from_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let file_path = temp_dir.path().join("hospitals.json");

        let json = serde_json::to_string(&builtin_hospitals()).unwrap();
        std::fs::write(&file_path, json).unwrap();

        let hospitals = hospitals_from_file(&file_path).unwrap();
        assert_eq!(hospitals.len(), 4);
        assert_eq!(hospitals[1].name, "St. Mary's Medical Center");
    }

    #[test]
    fn test_hospitals_from_missing_file() {
        let err = hospitals_from_file(Path::new("/nonexistent/hospitals.json")).unwrap_err();
        assert!(matches!(err, DemoDataError::Io(_)));
    }

    #[test]
    fn test_catalog_serialization_roundtrip() {
        let hospitals = builtin_hospitals();

        let json = serde_json::to_string(&hospitals).unwrap();
        let loaded: Vec<Hospital> = serde_json::from_str(&json).unwrap();

        assert_eq!(loaded, hospitals);
    }
}
