use std::sync::LazyLock;

use regex::Regex;

use crate::detector::{overlaps, Detection, Recognizer};
use crate::types::ContactKind;

// Bare @handle: 3-30 chars of [A-Za-z0-9_] after the @, preceded by
// start-of-text, whitespace, or an opening paren. The regex crate has no
// lookbehind, so the leading delimiter is consumed and trimmed off the
// reported span afterwards.
static RE_HANDLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[\s(])@[A-Za-z0-9_]{3,30}\b").expect("handle pattern must compile")
});

// Platform URLs, matched by each platform's characteristic path prefix.
// Scheme and www. are optional; matching is case-insensitive.
static PLATFORM_RULES: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("linkedin", r"(?i)(?:https?://)?(?:www\.)?\blinkedin\.com/in/[a-z0-9_\-]+"),
        ("github", r"(?i)(?:https?://)?(?:www\.)?\bgithub\.com/[a-z0-9_\-]+"),
        ("twitter", r"(?i)(?:https?://)?(?:www\.)?\b(?:twitter|x)\.com/[a-z0-9_]+"),
        ("instagram", r"(?i)(?:https?://)?(?:www\.)?\binstagram\.com/[a-z0-9_.]+"),
        ("facebook", r"(?i)(?:https?://)?(?:www\.)?\b(?:facebook|fb)\.com/[a-z0-9.]+"),
        ("telegram", r"(?i)(?:https?://)?\b(?:t\.me|telegram\.me)/[a-z0-9_]+"),
        (
            "whatsapp",
            r"(?i)(?:https?://)?\b(?:wa\.me/\d+|(?:www\.)?whatsapp\.com/[a-z0-9_]+)",
        ),
    ]
    .into_iter()
    .map(|(name, re)| {
        (
            name,
            Regex::new(re).unwrap_or_else(|e| panic!("{name} pattern must compile: {e}")),
        )
    })
    .collect()
});

/// Recognizes social-media contact points: platform profile URLs and bare
/// `@handle` mentions.
///
/// A handle that sits inside a recognized platform URL is reported once,
/// as the platform match. Handles inside claimed email spans are excluded
/// by the aggregator, which owns that cross-category rule.
pub struct SocialRecognizer;

impl Recognizer for SocialRecognizer {
    fn kind(&self) -> ContactKind {
        ContactKind::Social
    }

    fn recognize(&self, text: &str) -> Vec<Detection> {
        let mut claimed: Vec<(usize, usize)> = Vec::new();
        let mut found: Vec<Detection> = Vec::new();

        for (_, regex) in PLATFORM_RULES.iter() {
            for m in regex.find_iter(text) {
                let span = (m.start(), m.end());
                if claimed.iter().any(|&c| overlaps(span, c)) {
                    continue;
                }
                claimed.push(span);
                found.push(Detection {
                    kind: ContactKind::Social,
                    start: m.start(),
                    end: m.end(),
                    text: m.as_str().to_string(),
                });
            }
        }

        for m in RE_HANDLE.find_iter(text) {
            // Drop the consumed leading delimiter, if any.
            let at = m.as_str().find('@').unwrap_or(0);
            let start = m.start() + at;
            let span = (start, m.end());
            if claimed.iter().any(|&c| overlaps(span, c)) {
                continue;
            }
            claimed.push(span);
            found.push(Detection {
                kind: ContactKind::Social,
                start,
                end: m.end(),
                text: text[start..m.end()].to_string(),
            });
        }

        found.sort_by_key(|d| d.start);
        found
    }
}
