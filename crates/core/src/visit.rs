//! Visit validation rules.

use crate::error::CoreError;

/// Maximum length of a visit note, in UTF-16 code units as browsers count it.
pub const MAX_NOTE_LENGTH: usize = 2000;

/// Maximum number of photos handled by one signing or finalize request.
pub const MAX_PHOTOS_PER_REQUEST: usize = 10;

/// Validate the optional free-text note.
pub fn validate_note(note: &str) -> Result<(), CoreError> {
    let len = note.encode_utf16().count();
    if len > MAX_NOTE_LENGTH {
        return Err(CoreError::Validation(format!(
            "Note exceeds maximum length of {MAX_NOTE_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

/// Validate the number of files or paths in one photo request.
pub fn validate_photo_count(count: usize) -> Result<(), CoreError> {
    if count > MAX_PHOTOS_PER_REQUEST {
        return Err(CoreError::Validation(format!(
            "At most {MAX_PHOTOS_PER_REQUEST} photos per request (got {count})"
        )));
    }
    Ok(())
}

/// Reject empty strings for required text fields.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::Validation(format!("'{field}' must not be empty")));
    }
    Ok(())
}
