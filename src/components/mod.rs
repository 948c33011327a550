//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each section renders from static content tables and the language signal;
//! the navbar, contact form and admin modal also write to the stores provided
//! by `app`.

pub mod about;
pub mod admin_modal;
pub mod contact;
pub mod education;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod projects;
pub mod skills;
