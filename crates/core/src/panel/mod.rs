pub mod prompt;
pub mod state;
pub mod stock_panel;

pub use prompt::{NoticeLevel, Prompter};
pub use state::{PanelAction, PanelState};
pub use stock_panel::{ActionOutcome, PriceCommit, StockPanel};

/// Owner-supplied action that re-fetches the authoritative list and hands it back to the panel.
#[async_trait::async_trait]
pub trait Refresh: Send + Sync {
    async fn refresh(&self);
}
