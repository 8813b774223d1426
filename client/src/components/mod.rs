//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the dashboard regions. Panes receive the page-owned
//! `RwSignal<ViewState>` as a prop and only call its operations; sidebar
//! chrome reads `UiState` from context.

pub mod detail_pane;
pub mod feedback_card;
pub mod list_pane;
pub mod sidebar;
pub mod status_view;
pub mod summary_bar;
