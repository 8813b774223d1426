//! Networking for the dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single `GET /api/priorities` request. The wire schema
//! and error taxonomy are shared with the server and CLI via `feedback`.

pub mod api;
