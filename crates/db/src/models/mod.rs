//! Row structs and DTOs.
//!
//! Each submodule holds the `FromRow` + `Serialize` row type for a table
//! and the `Deserialize` DTOs the API accepts for it.

pub mod badge;
pub mod certificate;
pub mod mission;
pub mod place;
pub mod report;
pub mod visit;
