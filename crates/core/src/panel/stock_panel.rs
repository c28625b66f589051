use crate::client::{AdminApiError, StockAdminClient};
use crate::domain::stock::StockEntry;
use crate::domain::summary::StockSummary;
use crate::panel::prompt::{NoticeLevel, Prompter};
use crate::panel::state::{PanelAction, PanelState};
use crate::panel::Refresh;

const CONFIRM_DELETE: &str = "Are you sure you want to remove this stock?";

struct Notices {
    operation: &'static str,
    success: &'static str,
    rejected: &'static str,
    transport: &'static str,
}

const CREATE: Notices = Notices {
    operation: "create_stock",
    success: "Stock added successfully!",
    rejected: "Failed to add stock",
    transport: "Error adding stock",
};

const DELETE: Notices = Notices {
    operation: "delete_stock",
    success: "Stock removed successfully!",
    rejected: "Failed to remove stock",
    transport: "Error removing stock",
};

const UPDATE_PRICE: Notices = Notices {
    operation: "update_price",
    success: "Stock price updated!",
    rejected: "Failed to update price",
    transport: "Error updating price",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Request accepted; the owner was asked to refresh.
    Completed,
    /// Request failed; the user was notified and nothing else changed.
    Failed,
    /// The user declined the confirmation.
    Cancelled,
    /// Nothing to send.
    Skipped,
}

/// What caused a row's price input to be committed. Both commit the same way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceCommit {
    Blur,
    Enter,
}

pub struct StockPanel<C, P, R> {
    client: C,
    prompter: P,
    refresh: R,
    entries: Vec<StockEntry>,
    state: PanelState,
}

impl<C, P, R> StockPanel<C, P, R>
where
    C: StockAdminClient,
    P: Prompter,
    R: Refresh,
{
    pub fn new(client: C, prompter: P, refresh: R) -> Self {
        Self {
            client,
            prompter,
            refresh,
            entries: Vec::new(),
            state: PanelState::default(),
        }
    }

    /// Replaces the displayed list. Uncommitted price inputs revert to the snapshot's values.
    pub fn set_snapshot(&mut self, entries: Vec<StockEntry>) {
        self.entries = entries;
        self.state.apply(PanelAction::DiscardPriceEdits);
    }

    pub fn entries(&self) -> &[StockEntry] {
        &self.entries
    }

    pub fn summary(&self) -> StockSummary {
        StockSummary::from_entries(&self.entries)
    }

    pub fn state(&self) -> &PanelState {
        &self.state
    }

    pub fn dispatch(&mut self, action: PanelAction) {
        self.state.apply(action);
    }

    pub fn selected(&self) -> Option<&StockEntry> {
        let id = self.state.selected_id()?;
        self.entries.iter().find(|e| e.id == id)
    }

    pub async fn submit_draft(&mut self) -> ActionOutcome {
        if !self.state.is_add_dialog_open() || !self.state.can_submit_draft() {
            tracing::debug!("submit ignored; add dialog closed or symbol/name missing");
            return ActionOutcome::Skipped;
        }

        let draft = self.state.draft().clone();
        match self.client.create_stock(&draft).await {
            Ok(()) => {
                tracing::info!(symbol = %draft.symbol, "stock added");
                self.state.apply(PanelAction::DraftAccepted);
                self.complete(&CREATE).await
            }
            Err(err) => self.fail(&CREATE, &err),
        }
    }

    pub async fn delete_entry(&self, id: &str) -> ActionOutcome {
        if !self.prompter.confirm(CONFIRM_DELETE) {
            tracing::debug!(id, "delete cancelled");
            return ActionOutcome::Cancelled;
        }

        match self.client.delete_stock(id).await {
            Ok(()) => {
                tracing::info!(id, "stock removed");
                self.complete(&DELETE).await
            }
            Err(err) => self.fail(&DELETE, &err),
        }
    }

    /// Commits the row's pending price input. A successful commit clears it, so a blur right
    /// after an Enter commit has nothing left to send. A failed commit leaves the typed value in
    /// place until the next snapshot replaces it.
    pub async fn commit_price(&mut self, id: &str, trigger: PriceCommit) -> ActionOutcome {
        let Some(input) = self.state.price_input(id).map(str::to_string) else {
            return ActionOutcome::Skipped;
        };

        let Some(last_price) = self.entries.iter().find(|e| e.id == id).map(|e| e.price) else {
            tracing::warn!(id, "price edit for an entry missing from the snapshot");
            self.state.take_price_input(id);
            return ActionOutcome::Skipped;
        };

        if !price_differs(&input, last_price) {
            tracing::debug!(id, ?trigger, "price unchanged; nothing to send");
            self.state.take_price_input(id);
            return ActionOutcome::Skipped;
        }

        match self.client.update_price(id, &input).await {
            Ok(()) => {
                tracing::info!(id, price = %input, ?trigger, "stock price updated");
                self.state.take_price_input(id);
                self.complete(&UPDATE_PRICE).await
            }
            Err(err) => self.fail(&UPDATE_PRICE, &err),
        }
    }

    async fn complete(&self, notices: &Notices) -> ActionOutcome {
        self.refresh.refresh().await;
        self.prompter.notify(notices.success, NoticeLevel::Success);
        ActionOutcome::Completed
    }

    fn fail(&self, notices: &Notices, err: &anyhow::Error) -> ActionOutcome {
        let message = match err.downcast_ref::<AdminApiError>() {
            Some(diag) if !diag.is_transport() => notices.rejected,
            _ => notices.transport,
        };
        tracing::error!(operation = notices.operation, error = %err, "admin API call failed");
        self.prompter.notify(message, NoticeLevel::Error);
        ActionOutcome::Failed
    }
}

/// Unparseable input counts as a change and is sent as typed.
fn price_differs(input: &str, last_price: f64) -> bool {
    match input.trim().parse::<f64>() {
        Ok(value) => value != last_price,
        Err(_) => true,
    }
}
