//! View state of the stock panel.
//!
//! All mutation goes through [`PanelState::apply`], so the panel logic can be exercised without
//! any rendering layer.

use crate::domain::draft::{DraftEntry, DraftField};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PanelAction {
    OpenAddDialog,
    /// Cancel or dismiss; the draft is discarded.
    CloseAddDialog,
    EditDraft(DraftField, String),
    /// The create request succeeded: close the dialog and reset the draft.
    DraftAccepted,
    Select(String),
    ClearSelection,
    /// Text typed into a row's price input, not yet committed.
    EditPrice { id: String, value: String },
    DiscardPriceEdits,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PanelState {
    draft: DraftEntry,
    add_dialog_open: bool,
    selected_id: Option<String>,
    price_inputs: BTreeMap<String, String>,
}

impl PanelState {
    pub fn apply(&mut self, action: PanelAction) {
        match action {
            PanelAction::OpenAddDialog => self.add_dialog_open = true,
            PanelAction::CloseAddDialog | PanelAction::DraftAccepted => {
                self.add_dialog_open = false;
                self.draft = DraftEntry::default();
            }
            PanelAction::EditDraft(field, value) => self.draft.set(field, value),
            PanelAction::Select(id) => self.selected_id = Some(id),
            PanelAction::ClearSelection => self.selected_id = None,
            PanelAction::EditPrice { id, value } => {
                self.price_inputs.insert(id, value);
            }
            PanelAction::DiscardPriceEdits => self.price_inputs.clear(),
        }
    }

    pub fn draft(&self) -> &DraftEntry {
        &self.draft
    }

    pub fn is_add_dialog_open(&self) -> bool {
        self.add_dialog_open
    }

    pub fn can_submit_draft(&self) -> bool {
        self.draft.can_submit()
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    pub fn price_input(&self, id: &str) -> Option<&str> {
        self.price_inputs.get(id).map(String::as_str)
    }

    pub(crate) fn take_price_input(&mut self, id: &str) -> Option<String> {
        self.price_inputs.remove(id)
    }
}
