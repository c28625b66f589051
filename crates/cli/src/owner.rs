use stockdesk_core::client::StockAdminClient;
use stockdesk_core::domain::stock::StockEntry;
use stockdesk_core::panel::Refresh;
use tokio::sync::watch;

/// Refresh callback handed to the panel. Each refresh re-fetches the list and publishes it;
/// the command loop picks it up and supplies it back to the panel.
pub struct SnapshotRefresher<C> {
    client: C,
    tx: watch::Sender<Vec<StockEntry>>,
}

impl<C: StockAdminClient> SnapshotRefresher<C> {
    pub fn new(client: C) -> (Self, watch::Receiver<Vec<StockEntry>>) {
        let (tx, rx) = watch::channel(Vec::new());
        (Self { client, tx }, rx)
    }
}

#[async_trait::async_trait]
impl<C: StockAdminClient> Refresh for SnapshotRefresher<C> {
    async fn refresh(&self) {
        match self.client.list_stocks().await {
            Ok(stocks) => {
                tracing::debug!(count = stocks.len(), "stock list refreshed");
                self.tx.send_replace(stocks);
            }
            Err(err) => {
                tracing::warn!(error = %err, "refresh failed; keeping previous snapshot");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockdesk_core::domain::draft::DraftEntry;
    use stockdesk_core::domain::stock::Sector;

    struct FixedList(anyhow::Result<Vec<StockEntry>>);

    #[async_trait::async_trait]
    impl StockAdminClient for FixedList {
        async fn create_stock(&self, _draft: &DraftEntry) -> anyhow::Result<()> {
            Ok(())
        }

        async fn delete_stock(&self, _id: &str) -> anyhow::Result<()> {
            Ok(())
        }

        async fn update_price(&self, _id: &str, _price: &str) -> anyhow::Result<()> {
            Ok(())
        }

        async fn list_stocks(&self) -> anyhow::Result<Vec<StockEntry>> {
            match &self.0 {
                Ok(stocks) => Ok(stocks.clone()),
                Err(err) => Err(anyhow::anyhow!("{err}")),
            }
        }
    }

    #[tokio::test]
    async fn publishes_fetched_list() {
        let entry = StockEntry {
            id: "1".to_string(),
            symbol: "AAPL".to_string(),
            name: "Apple Inc.".to_string(),
            sector: Sector::Technology,
            price: 175.43,
            change_percent: 2.15,
        };
        let (refresher, mut rx) = SnapshotRefresher::new(FixedList(Ok(vec![entry.clone()])));
        assert!(!rx.has_changed().unwrap());

        refresher.refresh().await;

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), vec![entry]);
    }

    #[tokio::test]
    async fn failed_fetch_leaves_snapshot_untouched() {
        let (refresher, rx) =
            SnapshotRefresher::new(FixedList(Err(anyhow::anyhow!("connection refused"))));

        refresher.refresh().await;

        assert!(!rx.has_changed().unwrap());
        assert!(rx.borrow().is_empty());
    }
}
