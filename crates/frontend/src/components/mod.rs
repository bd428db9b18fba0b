//! Reusable UI components.

mod emergency_dialog;
mod hospital_card;
mod map_mockup;
mod request_card;
mod severity_badge;
mod stat_card;
mod ward_counter;

pub use emergency_dialog::EmergencyDialog;
pub use hospital_card::HospitalCard;
pub use map_mockup::MapMockup;
pub use request_card::RequestCard;
pub use severity_badge::SeverityBadge;
pub use stat_card::StatCard;
pub use ward_counter::WardCounter;
