use serde::{Deserialize, Serialize};

/// Contact-info categories with deterministic detection.
///
/// Design principles:
/// - Closed set: the three categories are fixed, not extensible at runtime
/// - Purely syntactic matching (no deliverability checks, no NER)
/// - No heap allocations in enum (all variants are `Copy`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKind {
    Email,
    Phone,
    Social,
}

impl ContactKind {
    /// All categories, in the order the aggregator runs them.
    pub const ALL: [ContactKind; 3] = [Self::Email, Self::Phone, Self::Social];

    /// Fixed key used for this category in the serialized result.
    pub fn key(&self) -> &'static str {
        match self {
            Self::Email => "emails",
            Self::Phone => "phones",
            Self::Social => "social",
        }
    }
}

/// Matched substrings per category, in first-occurrence order.
///
/// Every key is always present in the serialized form, even when empty,
/// so downstream filters never have to probe for missing fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionDetails {
    pub emails: Vec<String>,
    pub phones: Vec<String>,
    pub social: Vec<String>,
}

impl DetectionDetails {
    /// Matched substrings for one category.
    pub fn for_kind(&self, kind: ContactKind) -> &[String] {
        match kind {
            ContactKind::Email => &self.emails,
            ContactKind::Phone => &self.phones,
            ContactKind::Social => &self.social,
        }
    }

    pub(crate) fn push(&mut self, kind: ContactKind, text: String) {
        match kind {
            ContactKind::Email => self.emails.push(text),
            ContactKind::Phone => self.phones.push(text),
            ContactKind::Social => self.social.push(text),
        }
    }

    /// True when no category matched anything.
    pub fn is_empty(&self) -> bool {
        self.emails.is_empty() && self.phones.is_empty() && self.social.is_empty()
    }
}

/// Result of a single detection call. Constructed fresh per call; carries
/// no state across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    pub has_contact_info: bool,
    pub details: DetectionDetails,
}

impl DetectionResult {
    /// `has_contact_info` is derived, never set independently: true iff at
    /// least one category list is non-empty.
    pub(crate) fn from_details(details: DetectionDetails) -> Self {
        Self {
            has_contact_info: !details.is_empty(),
            details,
        }
    }
}
