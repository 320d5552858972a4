//! Visit photo uploads: storage path layout and file-name sanitizing.
//!
//! Photos never pass through the API. The client asks for one signed upload
//! URL per file, PUTs the bytes straight to object storage, then finalizes
//! the visit with the list of stored paths.

use std::sync::LazyLock;
use std::time::Duration;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::types::DbId;

/// Bucket holding visit photos.
pub const VISIT_PHOTO_BUCKET: &str = "visit-photos";

/// Lifetime of a signed upload URL.
pub const UPLOAD_URL_TTL: Duration = Duration::from_secs(2 * 60 * 60);

/// Maximum length of a sanitized file name.
pub const MAX_FILENAME_LENGTH: usize = 120;

/// Base name used when nothing of the original name survives sanitizing.
pub const FALLBACK_FILENAME: &str = "upload";

const MAX_EXTENSION_LENGTH: usize = 20;

static DISALLOWED_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_.\-]+").expect("valid regex"));
static UNDERSCORE_RUN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_+").expect("valid regex"));
static TRAILING_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\.([A-Za-z0-9]+)$").expect("valid regex"));
static DISALLOWED_IN_EXTENSION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\-]+").expect("valid regex"));

/// Map an arbitrary user-supplied file name to a safe path segment.
///
/// The result only contains `[A-Za-z0-9_.-]`, never starts or ends with `_`,
/// and is at most [`MAX_FILENAME_LENGTH`] characters.
///
/// ```
/// use junrei_core::upload::sanitize_file_name;
///
/// assert_eq!(sanitize_file_name("a b/c.PNG"), "a_b_c.PNG");
/// assert_eq!(sanitize_file_name("???"), "upload");
/// ```
pub fn sanitize_file_name(name: &str) -> String {
    let trimmed = name.trim();
    let normalized: String = trimmed.nfkd().collect();
    let replaced = DISALLOWED_RUN.replace_all(&normalized, "_");
    let collapsed = UNDERSCORE_RUN.replace_all(&replaced, "_");
    let sanitized: String = collapsed
        .trim_matches('_')
        .chars()
        .take(MAX_FILENAME_LENGTH)
        .collect();

    if !sanitized.is_empty() {
        return sanitized;
    }

    let extension = TRAILING_EXTENSION
        .captures(trimmed)
        .and_then(|caps| caps.get(1))
        .map(|m| sanitize_extension(m.as_str()))
        .unwrap_or_default();

    if extension.is_empty() {
        return FALLBACK_FILENAME.chars().take(MAX_FILENAME_LENGTH).collect();
    }

    let base_len = MAX_FILENAME_LENGTH
        .saturating_sub(extension.len() + 1)
        .max(1);
    let base: String = FALLBACK_FILENAME.chars().take(base_len).collect();
    format!("{base}.{extension}")
}

fn sanitize_extension(extension: &str) -> String {
    let normalized: String = extension.nfkd().collect();
    DISALLOWED_IN_EXTENSION
        .replace_all(&normalized, "")
        .chars()
        .take(MAX_EXTENSION_LENGTH)
        .collect::<String>()
        .to_lowercase()
}

/// Storage path for the `index`-th photo of one upload request.
///
/// Layout: `visit-photos/{user_id}/{visit_id}/{uploaded_at_ms}-{index}-{name}`.
/// The timestamp and index keep paths unique across repeated requests.
pub fn visit_photo_path(
    user_id: DbId,
    visit_id: DbId,
    uploaded_at_ms: i64,
    index: usize,
    file_name: &str,
) -> String {
    format!(
        "{VISIT_PHOTO_BUCKET}/{user_id}/{visit_id}/{uploaded_at_ms}-{index}-{}",
        sanitize_file_name(file_name)
    )
}
