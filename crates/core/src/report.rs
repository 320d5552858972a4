//! Moderation report target types and validation.

use crate::error::CoreError;

/// A report about a single visit.
pub const TARGET_VISIT: &str = "visit";
/// A report about a place.
pub const TARGET_PLACE: &str = "place";

/// All valid report target types.
pub const VALID_TARGET_TYPES: &[&str] = &[TARGET_VISIT, TARGET_PLACE];

/// Minimum length of the reason text, in UTF-16 code units.
pub const MIN_REASON_LENGTH: usize = 5;
/// Maximum length of the reason text, in UTF-16 code units.
pub const MAX_REASON_LENGTH: usize = 1000;

/// Validate that a target type is one of the known types.
pub fn validate_target_type(target_type: &str) -> Result<(), CoreError> {
    if VALID_TARGET_TYPES.contains(&target_type) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Invalid report target type '{target_type}'. Must be one of: {VALID_TARGET_TYPES:?}"
        )))
    }
}

/// Validate the reason length.
pub fn validate_reason(reason: &str) -> Result<(), CoreError> {
    let len = reason.encode_utf16().count();
    if !(MIN_REASON_LENGTH..=MAX_REASON_LENGTH).contains(&len) {
        return Err(CoreError::Validation(format!(
            "Reason must be between {MIN_REASON_LENGTH} and {MAX_REASON_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}
