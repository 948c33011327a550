use super::*;

#[test]
fn user_info_parses_provider_response() {
    let raw = r#"{
        "sub": "1234",
        "email": "owner@portfolio.dev",
        "email_verified": true,
        "name": "Site Owner",
        "picture": "https://example.com/p.png",
        "locale": "fr"
    }"#;
    let info: UserInfo = serde_json::from_str(raw).unwrap();
    assert_eq!(info.email, "owner@portfolio.dev");
    assert_eq!(info.sub.as_deref(), Some("1234"));
}

#[test]
fn user_info_tolerates_missing_fields() {
    let info: UserInfo = serde_json::from_str("{}").unwrap();
    assert_eq!(info.email, "");
    assert!(info.picture.is_none());
}

#[test]
fn user_from_user_info_keeps_profile_fields() {
    let info = UserInfo {
        email: "a@b.co".to_owned(),
        name: "A".to_owned(),
        picture: None,
        sub: Some("x".to_owned()),
    };
    let user = User::from(info);
    assert_eq!(user, User { email: "a@b.co".to_owned(), name: "A".to_owned(), picture: None });
}

#[test]
fn relay_payload_uses_underscored_meta_fields() {
    let payload = RelayPayload {
        name: "Jo".to_owned(),
        email: "jo@x.com".to_owned(),
        message: "Hello there!".to_owned(),
        subject: "Portfolio contact from Jo".to_owned(),
        template: "table".to_owned(),
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["_subject"], "Portfolio contact from Jo");
    assert_eq!(value["_template"], "table");
    assert_eq!(value["message"], "Hello there!");
    assert!(value.get("subject").is_none());
}
