//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, blobs, object URLs)
//! from page and component logic so the latter stay testable natively.

pub mod download;
pub mod theme;
