//! Rendered shell state (theme, active tab, units).

use pitstop::prefs::Units;
use pitstop::tabs::TabSelection;
use pitstop::theme::ThemeView;

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Last rendered view of each shell control.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: ThemeView,
    pub tabs: TabSelection,
    pub units: Units,
}

impl UiState {
    /// Whether the section `id` is the active tab.
    #[must_use]
    pub fn tab_active(&self, id: &str) -> bool {
        self.tabs.is_active(id)
    }

    /// Whether the button targeting `id` is selected.
    #[must_use]
    pub fn tab_selected(&self, id: &str) -> bool {
        self.tabs.buttons.iter().any(|b| b.selected && b.target == id)
    }

    /// `aria-selected` value for the button targeting `id`.
    #[must_use]
    pub fn aria_selected(&self, id: &str) -> &'static str {
        if self.tab_selected(id) { "true" } else { "false" }
    }
}
