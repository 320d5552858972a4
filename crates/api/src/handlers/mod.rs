pub mod badges;
pub mod certificates;
pub mod health;
pub mod missions;
pub mod places;
pub mod progress;
pub mod reports;
pub mod visits;
