//! Google Identity Services token client.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page shell loads [`GIS_SCRIPT_SRC`], which defines
//! `google.accounts.oauth2`. The admin modal asks this module for an access
//! token; `state::admin` then validates it against the userinfo endpoint.
//!
//! TRADE-OFFS
//! ==========
//! The JS callbacks are leaked with `Closure::forget` because GIS keeps them
//! for the lifetime of the token client. One small allocation per sign-in
//! attempt is acceptable for an admin-only flow.

#[cfg(test)]
#[path = "oauth_test.rs"]
mod oauth_test;

use crate::state::admin::AdminLoginError;

pub const GIS_SCRIPT_SRC: &str = "https://accounts.google.com/gsi/client";
pub const ADMIN_SCOPE: &str = "openid email profile";

/// Interpret a token response: an `access_token` wins, anything else is a
/// provider failure.
fn token_from_response(access_token: Option<String>, error: Option<String>) -> Result<String, AdminLoginError> {
    match (access_token, error) {
        (Some(token), None) if !token.is_empty() => Ok(token),
        (_, error) => {
            log::warn!("oauth token request failed: {}", error.as_deref().unwrap_or("no token"));
            Err(AdminLoginError::Provider)
        }
    }
}

#[cfg(feature = "hydrate")]
mod gis {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        pub type TokenClient;

        #[wasm_bindgen(catch, js_namespace = ["google", "accounts", "oauth2"], js_name = initTokenClient)]
        pub fn init_token_client(config: &js_sys::Object) -> Result<TokenClient, JsValue>;

        #[wasm_bindgen(method, js_name = requestAccessToken)]
        pub fn request_access_token(this: &TokenClient);
    }
}

/// Open the provider's consent popup and report the outcome to `on_result`.
/// Off-browser this reports a provider error immediately.
pub fn request_access_token(client_id: &str, on_result: impl Fn(Result<String, AdminLoginError>) + 'static) {
    #[cfg(feature = "hydrate")]
    {
        use std::rc::Rc;
        use wasm_bindgen::JsValue;
        use wasm_bindgen::prelude::Closure;

        let on_result = Rc::new(on_result);
        let read = |obj: &JsValue, field: &str| {
            js_sys::Reflect::get(obj, &JsValue::from_str(field))
                .ok()
                .and_then(|v| v.as_string())
        };

        let on_token = {
            let on_result = Rc::clone(&on_result);
            Closure::<dyn Fn(JsValue)>::new(move |resp: JsValue| {
                on_result(token_from_response(read(&resp, "access_token"), read(&resp, "error")));
            })
        };
        let on_error = {
            let on_result = Rc::clone(&on_result);
            Closure::<dyn Fn(JsValue)>::new(move |err: JsValue| {
                on_result(token_from_response(None, read(&err, "type")));
            })
        };

        let config = js_sys::Object::new();
        let set = |key: &str, value: &JsValue| {
            let _ = js_sys::Reflect::set(&config, &JsValue::from_str(key), value);
        };
        set("client_id", &JsValue::from_str(client_id));
        set("scope", &JsValue::from_str(ADMIN_SCOPE));
        set("callback", on_token.as_ref());
        set("error_callback", on_error.as_ref());

        match gis::init_token_client(&config) {
            Ok(client) => {
                on_token.forget();
                on_error.forget();
                client.request_access_token();
            }
            Err(e) => {
                log::warn!("identity services unavailable: {e:?}");
                on_result(Err(AdminLoginError::Provider));
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = client_id;
        on_result(token_from_response(None, Some("not available on server".to_owned())));
    }
}
