pub mod error;
pub mod http;
pub mod types;

use crate::domain::draft::DraftEntry;
use crate::domain::stock::StockEntry;

pub use error::{AdminApiError, FailureKind};
pub use http::HttpStockAdminClient;

/// Remote stock administration API. Every mutating call succeeds iff the server answers 2xx.
#[async_trait::async_trait]
pub trait StockAdminClient: Send + Sync {
    async fn create_stock(&self, draft: &DraftEntry) -> anyhow::Result<()>;

    async fn delete_stock(&self, id: &str) -> anyhow::Result<()>;

    async fn update_price(&self, id: &str, price: &str) -> anyhow::Result<()>;

    /// Authoritative list, used by the panel's owner when refreshing.
    async fn list_stocks(&self) -> anyhow::Result<Vec<StockEntry>>;
}
