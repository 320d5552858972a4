//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod badge_repo;
pub mod certificate_repo;
pub mod mission_place_repo;
pub mod mission_repo;
pub mod place_repo;
pub mod report_repo;
pub mod visit_repo;

pub use badge_repo::BadgeRepo;
pub use certificate_repo::CertificateRepo;
pub use mission_place_repo::MissionPlaceRepo;
pub use mission_repo::MissionRepo;
pub use place_repo::PlaceRepo;
pub use report_repo::ReportRepo;
pub use visit_repo::VisitRepo;
