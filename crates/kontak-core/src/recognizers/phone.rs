use std::sync::LazyLock;

use regex::Regex;

use crate::detector::{overlaps, Detection, Recognizer};
use crate::types::ContactKind;

macro_rules! phone_pattern {
    ($name:ident, $re:expr) => {
        static $name: LazyLock<Regex> =
            LazyLock::new(|| Regex::new($re).expect("phone pattern must compile"));
    };
}

// PH mobile: 0917-123-4567, 0917 123 4567, 09171234567.
// Word boundaries reject digits or letters touching either end, so order
// codes and longer numeric runs never produce a partial match.
phone_pattern!(RE_MOBILE, r"\b09\d{2}[-\s]?\d{3}[-\s]?\d{4}\b");

// PH mobile with country code: +63 917 123 4567, +639171234567.
phone_pattern!(RE_INTL_MOBILE, r"\+63[-\s]?9\d{2}[-\s]?\d{3}[-\s]?\d{4}\b");

// Metro Manila landline with country code: +63 2 8123 4567.
phone_pattern!(RE_INTL_LANDLINE_MM, r"\+63[-\s]?2[-\s]?\d{4}[-\s]?\d{4}\b");

// Provincial landline with country code: +63 XX XXX XXXX.
phone_pattern!(RE_INTL_LANDLINE_PROV, r"\+63[-\s]?\d{2}[-\s]?\d{3}[-\s]?\d{4}\b");

// Metro Manila 8-digit landline: (02) 8123-4567, 02-8123-4567.
phone_pattern!(RE_LANDLINE_MM_8, r"\(?\b02\)?[-\s]?\d{4}[-\s]?\d{4}\b");

// Metro Manila legacy 7-digit landline: (02) 123-4567, 02-123-4567.
phone_pattern!(RE_LANDLINE_MM_7, r"\(?\b02\)?[-\s]?\d{3}[-\s]?\d{4}\b");

// Provincial landline: (044) 123-4567, 044-123-4567.
phone_pattern!(RE_LANDLINE_PROV, r"\(?\b0\d{2}\)?[-\s]?\d{3}[-\s]?\d{4}\b");

struct PhoneRule {
    name: &'static str,
    regex: &'static LazyLock<Regex>,
}

/// The tie-break among overlapping formats is an explicit priority list,
/// not an accident of pattern order: mobile-with-prefix → international →
/// landline. The first rule to claim a span wins; later rules never report
/// a substring overlapping a claimed span.
static RULES: [PhoneRule; 7] = [
    PhoneRule { name: "mobile", regex: &RE_MOBILE },
    PhoneRule { name: "intl_mobile", regex: &RE_INTL_MOBILE },
    PhoneRule { name: "intl_landline_mm", regex: &RE_INTL_LANDLINE_MM },
    PhoneRule { name: "intl_landline_prov", regex: &RE_INTL_LANDLINE_PROV },
    PhoneRule { name: "landline_mm_8", regex: &RE_LANDLINE_MM_8 },
    PhoneRule { name: "landline_mm_7", regex: &RE_LANDLINE_MM_7 },
    PhoneRule { name: "landline_prov", regex: &RE_LANDLINE_PROV },
];

/// Recognizes Philippine phone number conventions: mobile (`09…`),
/// international (`+63…`), and landline (area code + subscriber number).
///
/// A bare 7-digit run with no area code and no PH prefix is deliberately
/// not a match; it is indistinguishable from IDs, prices, and other
/// numeric data.
pub struct PhoneRecognizer;

impl Recognizer for PhoneRecognizer {
    fn kind(&self) -> ContactKind {
        ContactKind::Phone
    }

    fn recognize(&self, text: &str) -> Vec<Detection> {
        let mut claimed: Vec<(usize, usize)> = Vec::new();
        let mut found: Vec<Detection> = Vec::new();

        for rule in &RULES {
            for m in rule.regex.find_iter(text) {
                let span = (m.start(), m.end());
                if claimed.iter().any(|&c| overlaps(span, c)) {
                    continue;
                }
                claimed.push(span);
                found.push(Detection {
                    kind: ContactKind::Phone,
                    start: m.start(),
                    end: m.end(),
                    text: m.as_str().to_string(),
                });
            }
        }

        // Rules were visited in priority order; report in text order.
        found.sort_by_key(|d| d.start);
        found
    }
}
