//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Feedback data, filter, and selection live in `feedback::ViewState`, owned
//! by the dashboard page. This module only holds chrome state (theme and
//! navigation) that outlives any one page.

pub mod ui;
