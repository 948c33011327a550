//! Admin sign-in: exchange an OAuth access token for an authorized session.
//!
//! SYSTEM CONTEXT
//! ==============
//! The token comes from the OAuth token client in the admin modal. This
//! module owns the only write of `is_authenticated = true`, and only after
//! the provider's email matches the configured address exactly.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use super::auth::AuthStore;
use crate::net::api::{ApiError, IdentityProvider};
use crate::net::types::User;

#[derive(Debug, thiserror::Error)]
pub enum AdminLoginError {
    #[error("access denied: only {allowed} may sign in")]
    AccessDenied { allowed: String },
    #[error("sign-in failed: {0}")]
    Lookup(#[from] ApiError),
    #[error("sign-in was cancelled or rejected by the provider")]
    Provider,
}

impl AdminLoginError {
    /// Translation key for the modal's error line.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            Self::AccessDenied { .. } => "admin.errors.access_denied",
            Self::Lookup(_) => "admin.errors.lookup_failed",
            Self::Provider => "admin.errors.provider",
        }
    }
}

/// Look up the profile behind `access_token` and sign it in if it belongs to
/// `allowed_email`. The auth store is untouched on every error path.
///
/// # Errors
///
/// Returns [`AdminLoginError::Lookup`] when the provider call fails and
/// [`AdminLoginError::AccessDenied`] when the email does not match.
pub async fn complete_admin_login<P: IdentityProvider>(
    provider: &P,
    access_token: &str,
    allowed_email: &str,
    auth: &AuthStore,
) -> Result<User, AdminLoginError> {
    let info = provider.fetch_user_info(access_token).await?;
    if info.email != allowed_email {
        log::warn!("admin sign-in refused for a non-allowed account");
        return Err(AdminLoginError::AccessDenied { allowed: allowed_email.to_owned() });
    }
    let user = User::from(info);
    auth.set_authenticated(true, Some(user.clone()));
    Ok(user)
}
