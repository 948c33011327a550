use super::*;

#[test]
fn decode_reverses_after_base64() {
    // base64("olleh") == "b2xsZWg="
    assert_eq!(decode("b2xsZWg="), "hello");
}

#[test]
fn decode_malformed_input_is_empty() {
    assert_eq!(decode("%%% not base64"), "");
}

#[test]
fn emails_decode_to_addresses() {
    assert_eq!(email(EmailKind::Personal), "hello@portfolio.dev");
    assert_eq!(email(EmailKind::Work), "work@portfolio.dev");
}

#[test]
fn mailto_link_prefixes_scheme() {
    assert_eq!(mailto_link(EmailKind::Work), "mailto:work@portfolio.dev");
}

#[test]
fn tel_link_strips_whitespace() {
    assert_eq!(phone(), "+33 6 00 00 00 00");
    assert_eq!(tel_link(), "tel:+33600000000");
}
