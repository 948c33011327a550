use super::*;

#[test]
fn bearer_header_formats_token() {
    assert_eq!(bearer_header("ya29.abc"), "Bearer ya29.abc");
}

#[test]
fn status_error_names_service_and_code() {
    let err = ApiError::Status { service: "relay", status: 422 };
    assert_eq!(err.to_string(), "relay request failed: 422");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn relay_is_unavailable_off_browser() {
    let relay = HttpRelay::new("https://relay.example/f/abc");
    let payload = RelayPayload {
        name: "Jo".to_owned(),
        email: "jo@x.com".to_owned(),
        message: "0123456789".to_owned(),
        subject: "s".to_owned(),
        template: "table".to_owned(),
    };
    let result = futures::executor::block_on(relay.forward(&payload));
    assert!(matches!(result, Err(ApiError::Unavailable)));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn identity_is_unavailable_off_browser() {
    let identity = HttpIdentity::new("https://id.example/userinfo");
    let result = futures::executor::block_on(identity.fetch_user_info("token"));
    assert!(matches!(result, Err(ApiError::Unavailable)));
}
