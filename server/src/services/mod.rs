//! Domain services used by route handlers.

pub mod priorities;
