//! Contact details kept out of the shipped HTML in plain form.
//!
//! Each value is reversed then base64-encoded, and only decoded at render
//! time. This stops naive address harvesters and nothing more.

#[cfg(test)]
#[path = "obfuscate_test.rs"]
mod obfuscate_test;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

const PERSONAL_EMAIL: &str = "dmVkLm9pbG9mdHJvcEBvbGxlaA==";
const WORK_EMAIL: &str = "dmVkLm9pbG9mdHJvcEBrcm93";
const PHONE: &str = "MDAgMDAgMDAgMDAgNiAzMys=";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EmailKind {
    #[default]
    Personal,
    Work,
}

/// Decode a reversed-base64 constant; malformed input yields `""`.
#[must_use]
pub fn decode(encoded: &str) -> String {
    STANDARD
        .decode(encoded)
        .ok()
        .and_then(|bytes| String::from_utf8(bytes).ok())
        .map(|s| s.chars().rev().collect())
        .unwrap_or_default()
}

#[must_use]
pub fn email(kind: EmailKind) -> String {
    match kind {
        EmailKind::Personal => decode(PERSONAL_EMAIL),
        EmailKind::Work => decode(WORK_EMAIL),
    }
}

#[must_use]
pub fn phone() -> String {
    decode(PHONE)
}

#[must_use]
pub fn mailto_link(kind: EmailKind) -> String {
    format!("mailto:{}", email(kind))
}

#[must_use]
pub fn tel_link() -> String {
    let digits: String = phone().chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}
