use crate::domain::stock::StockEntry;
use std::collections::BTreeSet;

/// Counters shown above the table, recomputed from the current snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StockSummary {
    pub total: usize,
    pub gainers: usize,
    pub losers: usize,
    pub sectors: usize,
}

impl StockSummary {
    pub fn from_entries(entries: &[StockEntry]) -> Self {
        let total = entries.len();
        let gainers = entries.iter().filter(|e| e.is_gainer()).count();
        let sectors = entries
            .iter()
            .map(|e| e.sector.label())
            .collect::<BTreeSet<_>>()
            .len();

        Self {
            total,
            gainers,
            losers: total - gainers,
            sectors,
        }
    }
}
