#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::util::theme::Theme;

/// UI chrome state: theme and sidebar navigation.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub theme: Theme,
    pub active_nav: NavTab,
}

/// Sidebar navigation targets.
///
/// Only `Dashboard` has content; the others render a placeholder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NavTab {
    #[default]
    Dashboard,
    Reports,
    Settings,
}

impl NavTab {
    pub const ALL: [Self; 3] = [Self::Dashboard, Self::Reports, Self::Settings];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Reports => "Reports",
            Self::Settings => "Settings",
        }
    }

    /// Whether this tab renders the priorities view.
    #[must_use]
    pub fn has_content(self) -> bool {
        matches!(self, Self::Dashboard)
    }
}
