//! Client state stores and the contact/admin flows that drive them.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` is the persisted container; `auth`, `ui`, `language` and `theme`
//! are its four records. `contact` and `admin` are the two flows that turn
//! user actions into store writes or relay calls.

pub mod admin;
pub mod auth;
pub mod contact;
pub mod language;
pub mod store;
pub mod theme;
pub mod ui;
