//! Utility helpers shared across the site.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, timers, scrolling) and
//! pure rules (validation, spam screening, contact decoding) from components,
//! so the rules can be tested without a DOM.

pub mod obfuscate;
pub mod scroll;
pub mod spam;
pub mod storage;
pub mod timer;
pub mod validation;
