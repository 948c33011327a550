//! Networking modules for the form relay and the identity provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` holds the HTTP clients behind the `ContactRelay` and
//! `IdentityProvider` seams, `oauth` binds the browser token client, and
//! `types` defines the wire schema.

pub mod api;
pub mod oauth;
pub mod types;
