//! Site configuration baked in at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site ships as static WASM, so there is no runtime environment to read.
//! Values come from `option_env!` when the crate is compiled and fall back
//! to defaults when unset or blank.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_ADMIN_EMAIL: &str = "admin@portfolio.dev";
pub const DEFAULT_RELAY_ENDPOINT: &str = "https://formspree.io/f/portfolio";
pub const USERINFO_ENDPOINT: &str = "https://www.googleapis.com/oauth2/v3/userinfo";

pub const ADMIN_EMAIL_VAR: &str = "PORTFOLIO_ADMIN_EMAIL";
pub const GOOGLE_CLIENT_ID_VAR: &str = "PORTFOLIO_GOOGLE_CLIENT_ID";
pub const RELAY_ENDPOINT_VAR: &str = "PORTFOLIO_RELAY_ENDPOINT";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Only this account may open the admin panel.
    pub admin_email: String,
    /// OAuth client id for the token flow. Admin sign-in is hidden when `None`.
    pub google_client_id: Option<String>,
    pub relay_endpoint: String,
    pub userinfo_endpoint: String,
}

impl SiteConfig {
    /// Build from the compile-time environment.
    #[must_use]
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| {
            match key {
                ADMIN_EMAIL_VAR => option_env!("PORTFOLIO_ADMIN_EMAIL"),
                GOOGLE_CLIENT_ID_VAR => option_env!("PORTFOLIO_GOOGLE_CLIENT_ID"),
                RELAY_ENDPOINT_VAR => option_env!("PORTFOLIO_RELAY_ENDPOINT"),
                _ => None,
            }
            .map(str::to_owned)
        })
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());
        Self {
            admin_email: non_blank(ADMIN_EMAIL_VAR).unwrap_or_else(|| DEFAULT_ADMIN_EMAIL.to_owned()),
            google_client_id: non_blank(GOOGLE_CLIENT_ID_VAR),
            relay_endpoint: non_blank(RELAY_ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_RELAY_ENDPOINT.to_owned()),
            userinfo_endpoint: USERINFO_ENDPOINT.to_owned(),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}
