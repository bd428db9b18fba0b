//! Patient dashboard helpers.

use core_types::Hospital;

use crate::toast::Notice;

/// Notice shown when the patient starts navigation to a hospital.
///
/// Display only: no route is computed and the ETA is the hospital's
/// static label.
pub fn navigation_notice(hospital: &Hospital) -> Notice {
    Notice::new(
        "Navigation started",
        format!("Fastest route to {}. ETA: {}", hospital.name, hospital.eta),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigation_notice_copy() {
        let hospital = Hospital {
            id: 1,
            name: "City General Hospital".into(),
            distance: "1.2 km".into(),
            eta: "4 min".into(),
            beds: 12,
            icu: 3,
            rating: 4.8,
            specialties: vec!["Trauma".into()],
            ai_score: 95,
        };

        let notice = navigation_notice(&hospital);

        assert_eq!(notice.title, "Navigation started");
        assert_eq!(
            notice.body,
            "Fastest route to City General Hospital. ETA: 4 min"
        );
    }
}
