use crate::recognizers::{EmailRecognizer, PhoneRecognizer, SocialRecognizer};
use crate::types::{ContactKind, DetectionDetails, DetectionResult};
use zeroize::Zeroize;

/// A single match with memory safety guarantees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub kind: ContactKind,
    pub start: usize,     // UTF-8 byte offset (NOT char index)
    pub end: usize,       // UTF-8 byte offset
    pub text: String,     // Matched substring – will be zeroized on drop
}

impl Zeroize for Detection {
    fn zeroize(&mut self) {
        self.text.zeroize();
    }
}

impl Drop for Detection {
    fn drop(&mut self) {
        self.zeroize();
    }
}

/// Core recognition trait – one implementation per contact-info category.
pub trait Recognizer: Send + Sync {
    fn kind(&self) -> ContactKind;

    /// Recognize contact info in text – returns sorted, non-overlapping
    /// detections.
    ///
    /// Contract:
    /// - MUST return detections sorted by `start` ascending
    /// - MUST NOT return overlapping detections (resolve conflicts internally)
    /// - MUST be pure: same text, same detections, no state between calls
    /// - MUST handle UTF-8 boundaries correctly (offsets are byte offsets)
    fn recognize(&self, text: &str) -> Vec<Detection>;
}

/// Half-open byte ranges overlap check, shared by the aggregator and the
/// per-recognizer conflict resolution.
pub(crate) fn overlaps(a: (usize, usize), b: (usize, usize)) -> bool {
    a.0 < b.1 && a.1 > b.0
}

/// The aggregator: runs every recognizer over the input and merges their
/// output into a single [`DetectionResult`].
///
/// Recognizers run in the fixed order Email → Phone → Social. Spans claimed
/// by the Email recognizer are withheld from Social, so an `@` inside a
/// matched email address is never double-counted as a bare handle.
pub struct ContactDetector {
    recognizers: Vec<Box<dyn Recognizer>>,
}

impl ContactDetector {
    /// Detector with the standard three recognizers.
    pub fn new() -> Self {
        Self::with_recognizers(vec![
            Box::new(EmailRecognizer),
            Box::new(PhoneRecognizer),
            Box::new(SocialRecognizer),
        ])
    }

    /// Detector with a caller-supplied pipeline. Recognizers run in the
    /// given order; Social recognizers are excluded from spans claimed by
    /// Email recognizers that ran before them.
    pub fn with_recognizers(recognizers: Vec<Box<dyn Recognizer>>) -> Self {
        Self { recognizers }
    }

    /// Scan `text` and return categorized evidence plus the merged signal.
    ///
    /// Never fails: empty input, control characters, and adversarial
    /// near-matches all yield a (possibly empty) result.
    pub fn detect(&self, text: &str) -> DetectionResult {
        let mut details = DetectionDetails::default();
        let mut claimed_by_email: Vec<(usize, usize)> = Vec::new();

        for recognizer in &self.recognizers {
            let mut found = recognizer.recognize(text);

            if recognizer.kind() == ContactKind::Social {
                // Interval exclusion: an @-match inside an email span is the
                // email's, not a handle.
                found.retain(|d| {
                    !claimed_by_email
                        .iter()
                        .any(|&span| overlaps((d.start, d.end), span))
                });
            }

            if recognizer.kind() == ContactKind::Email {
                claimed_by_email.extend(found.iter().map(|d| (d.start, d.end)));
            }

            for detection in &found {
                details.push(recognizer.kind(), detection.text.clone());
            }
        }

        DetectionResult::from_details(details)
    }
}

impl Default for ContactDetector {
    fn default() -> Self {
        Self::new()
    }
}
