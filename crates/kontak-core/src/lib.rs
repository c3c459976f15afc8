//! Contact-information detection for moderation pre-checks.
//!
//! Scans free-form text for personally-identifiable contact information –
//! email addresses, Philippine-format phone numbers, and social-media
//! handles/links – and reports a single yes/no signal plus categorized
//! evidence. Matching is purely syntactic; nothing is validated for
//! deliverability and nothing is redacted.
//!
//! The engine is stateless and lock-free: compiled patterns live in
//! process-wide statics, every call is independent, and the non-backtracking
//! regex engine keeps matching linear in the input length even on
//! adversarial text.
//!
//! ```
//! let result = kontak_core::detect_contact_info("Email me at test@example.com");
//! assert!(result.has_contact_info);
//! assert_eq!(result.details.emails, vec!["test@example.com"]);
//! ```

pub mod detector;
pub mod error;
pub mod recognizers;
pub mod types;

pub use detector::{ContactDetector, Detection, Recognizer};
pub use error::InvalidInputError;
pub use types::{ContactKind, DetectionDetails, DetectionResult};

/// Scan `text` and return the merged signal plus categorized evidence.
///
/// Runs the Email, Phone, and Social recognizers in that order; spans
/// claimed by Email are withheld from Social. Never fails on any `&str`.
pub fn detect_contact_info(text: &str) -> DetectionResult {
    ContactDetector::new().detect(text)
}

/// Boolean pre-check: does `text` contain any contact information?
///
/// Defined as `detect_contact_info(text).has_contact_info`, so it can never
/// diverge from the detailed path.
pub fn check(text: &str) -> bool {
    detect_contact_info(text).has_contact_info
}

/// Alias of [`check`], kept for callers that prefer the explicit name.
pub fn contains_contact_info(text: &str) -> bool {
    check(text)
}

/// Byte-level entry point for callers holding raw input (file contents,
/// request bodies). Rejects non-text input with [`InvalidInputError`];
/// valid UTF-8 is handled exactly like [`detect_contact_info`].
pub fn detect_contact_info_bytes(bytes: &[u8]) -> Result<DetectionResult, InvalidInputError> {
    let text = std::str::from_utf8(bytes)?;
    Ok(detect_contact_info(text))
}
