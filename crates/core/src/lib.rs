//! Domain logic for the pilgrimage tracker.
//!
//! Nothing in here touches the database or the network: progress
//! aggregation, place grouping, upload path rules, validation and
//! certificate rendering are plain functions over plain data, and the
//! object store is reached through the [`storage::ObjectStorage`] trait.

pub mod certificate;
pub mod error;
pub mod geo;
pub mod missions;
pub mod places;
pub mod progress;
pub mod report;
pub mod storage;
pub mod types;
pub mod upload;
pub mod visit;
