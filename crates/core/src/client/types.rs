use crate::domain::stock::StockEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct UpdatePriceRequest<'a> {
    pub price: &'a str,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListStocksResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub stocks: Vec<StockEntry>,
}

fn default_success() -> bool {
    true
}
