//! Template list and selection state.

#[cfg(test)]
#[path = "templates_test.rs"]
mod templates_test;

use crate::net::types::TemplateMeta;

/// Prompt-template list fetched once at startup, plus the current selection.
///
/// Selection is local UI state only; changing it triggers no network
/// activity.
#[derive(Clone, Debug, Default)]
pub struct TemplatesState {
    pub items: Vec<TemplateMeta>,
    pub selected: Option<String>,
    pub loading: bool,
    pub error: Option<String>,
}

impl TemplatesState {
    /// Record a fetched template list. Default-selects the first entry when
    /// nothing is selected yet; an explicit prior selection is kept.
    pub fn loaded(&mut self, items: Vec<TemplateMeta>) {
        if self.selected.is_none() {
            self.selected = items.first().map(|t| t.template_id.clone());
        }
        self.items = items;
        self.loading = false;
        self.error = None;
    }

    /// Record a failed template fetch. The chat stays usable without
    /// templates.
    pub fn failed(&mut self, message: String) {
        self.items = Vec::new();
        self.loading = false;
        self.error = Some(message);
    }

    pub fn select(&mut self, template_id: String) {
        self.selected = Some(template_id);
    }

    /// Metadata for the currently selected template, if any.
    pub fn selected_meta(&self) -> Option<&TemplateMeta> {
        let selected = self.selected.as_deref()?;
        self.items.iter().find(|t| t.template_id == selected)
    }
}
