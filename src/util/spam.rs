//! Content heuristics for contact-form spam.
//!
//! TRADE-OFFS
//! ==========
//! These are blunt signatures. A legitimate message that happens to carry
//! three links or a long `----------` divider is dropped exactly like spam,
//! and the sender is never told. Keep the lists short.

#[cfg(test)]
#[path = "spam_test.rs"]
mod spam_test;

use std::sync::LazyLock;

use regex::Regex;

/// Link count at which a message is treated as spam.
pub const MAX_LINKS: usize = 3;

/// Run length at which a repeated character is treated as spam.
pub const MAX_CHAR_RUN: usize = 10;

static KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(viagra|cialis|casino|lottery|jackpot|porn|xxx|payday|forex|backlinks?|seo services|crypto ?currency investment)\b",
    )
    .unwrap()
});

static CALL_TO_ACTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(click here|buy now|order now|act now|limited time offer|earn money|make money fast|free money|100% free|risk[- ]free|special promotion|guaranteed income)",
    )
    .unwrap()
});

/// One match per URL: the whole token after the scheme or `www.` prefix is
/// consumed, so `https://www.` counts once.
static LINK_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)(?:https?://|www\.)\S+").unwrap());

/// Which signature a message matched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpamSignal {
    Keyword(String),
    CallToAction(String),
    TooManyLinks(usize),
    RepeatedCharacter(char),
}

/// Check `text` against every signature, first match wins.
#[must_use]
pub fn detect(text: &str) -> Option<SpamSignal> {
    if let Some(m) = KEYWORD_RE.find(text) {
        return Some(SpamSignal::Keyword(m.as_str().to_lowercase()));
    }
    if let Some(m) = CALL_TO_ACTION_RE.find(text) {
        return Some(SpamSignal::CallToAction(m.as_str().to_lowercase()));
    }
    let links = count_links(text);
    if links >= MAX_LINKS {
        return Some(SpamSignal::TooManyLinks(links));
    }
    longest_run(text).map(SpamSignal::RepeatedCharacter)
}

#[must_use]
pub fn count_links(text: &str) -> usize {
    LINK_RE.find_iter(text).count()
}

/// First non-whitespace character repeated at least [`MAX_CHAR_RUN`] times
/// in a row.
fn longest_run(text: &str) -> Option<char> {
    let mut current = None;
    let mut run = 0usize;
    for ch in text.chars() {
        if Some(ch) == current {
            run += 1;
        } else {
            current = Some(ch);
            run = 1;
        }
        if run >= MAX_CHAR_RUN && !ch.is_whitespace() {
            return Some(ch);
        }
    }
    None
}
