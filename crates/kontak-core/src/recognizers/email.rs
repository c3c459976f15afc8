use std::sync::LazyLock;

use regex::Regex;

use crate::detector::{Detection, Recognizer};
use crate::types::ContactKind;

// Standard local@domain.tld syntax. Purely syntactic: no MX lookups, no
// deliverability checks. Domain matching is case-insensitive.
static RE_EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,}")
        .expect("email pattern must compile")
});

/// Recognizes standard email addresses (`local@domain.tld`).
pub struct EmailRecognizer;

impl Recognizer for EmailRecognizer {
    fn kind(&self) -> ContactKind {
        ContactKind::Email
    }

    fn recognize(&self, text: &str) -> Vec<Detection> {
        RE_EMAIL
            .find_iter(text)
            .map(|m| Detection {
                kind: ContactKind::Email,
                start: m.start(),
                end: m.end(),
                text: m.as_str().to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emails(text: &str) -> Vec<String> {
        EmailRecognizer
            .recognize(text)
            .iter()
            .map(|d| d.text.clone())
            .collect()
    }

    #[test]
    fn test_plain_address() {
        assert_eq!(emails("Email me at test@example.com"), vec!["test@example.com"]);
    }

    #[test]
    fn test_local_part_special_characters() {
        assert_eq!(
            emails("john.doe+tag_1%x-y@mail-server.example.org"),
            vec!["john.doe+tag_1%x-y@mail-server.example.org"]
        );
    }

    #[test]
    fn test_domain_case_insensitive() {
        assert_eq!(emails("TEST@EXAMPLE.COM"), vec!["TEST@EXAMPLE.COM"]);
    }

    #[test]
    fn test_first_occurrence_order_with_duplicates() {
        let found = emails("a@x.com then b@y.com then a@x.com again");
        assert_eq!(found, vec!["a@x.com", "b@y.com", "a@x.com"]);
    }

    #[test]
    fn test_missing_domain_rejected() {
        assert!(emails("write to test@ please").is_empty());
    }

    #[test]
    fn test_missing_tld_rejected() {
        assert!(emails("test@localhost").is_empty());
    }

    #[test]
    fn test_single_letter_tld_rejected() {
        assert!(emails("test@example.c").is_empty());
    }

    #[test]
    fn test_trailing_punctuation_not_included() {
        assert_eq!(emails("mail test@example.com."), vec!["test@example.com"]);
    }
}
