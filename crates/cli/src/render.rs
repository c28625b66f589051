use std::fmt::Write;
use stockdesk_core::domain::stock::StockEntry;
use stockdesk_core::domain::summary::StockSummary;

const HEADERS: [&str; 6] = ["ID", "Symbol", "Name", "Sector", "Price", "Change %"];

pub fn render_panel(summary: StockSummary, entries: &[StockEntry]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Total Stocks: {}  Gainers: {}  Losers: {}  Sectors: {}",
        summary.total, summary.gainers, summary.losers, summary.sectors
    );
    out.push('\n');

    if entries.is_empty() {
        out.push_str("No stocks found\nAdd stocks to manage them here\n");
        return out;
    }

    let rows: Vec<[String; 6]> = entries.iter().map(row).collect();
    let mut widths = HEADERS.map(str::len);
    for cells in &rows {
        for (width, cell) in widths.iter_mut().zip(cells) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_line(&mut out, &HEADERS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("  "));
    for cells in &rows {
        write_line(&mut out, cells, &widths);
    }
    out
}

pub fn render_detail(entry: &StockEntry) -> String {
    format!(
        "ID:       {}\nSymbol:   {}\nName:     {}\nSector:   {}\nPrice:    ${:.2}\nChange:   {}\n",
        entry.id,
        entry.symbol,
        entry.name,
        entry.sector,
        entry.price,
        entry.change_label()
    )
}

fn row(entry: &StockEntry) -> [String; 6] {
    [
        entry.id.clone(),
        entry.symbol.clone(),
        entry.name.clone(),
        entry.sector.to_string(),
        format!("${:.2}", entry.price),
        entry.change_label(),
    ]
}

fn write_line(out: &mut String, cells: &[String; 6], widths: &[usize; 6]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    let _ = writeln!(out, "{}", padded.join("  ").trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;
    use stockdesk_core::domain::stock::Sector;

    fn entries() -> Vec<StockEntry> {
        vec![
            StockEntry {
                id: "1".to_string(),
                symbol: "AAPL".to_string(),
                name: "Apple Inc.".to_string(),
                sector: Sector::Technology,
                price: 175.43,
                change_percent: 1.2,
            },
            StockEntry {
                id: "2".to_string(),
                symbol: "XOM".to_string(),
                name: "Exxon Mobil".to_string(),
                sector: Sector::RealEstate,
                price: 104.0,
                change_percent: -0.5,
            },
        ]
    }

    #[test]
    fn renders_counters_and_rows() {
        let entries = entries();
        let out = render_panel(StockSummary::from_entries(&entries), &entries);

        assert!(out.starts_with("Total Stocks: 2  Gainers: 1  Losers: 1  Sectors: 2\n"));
        assert!(out.contains("Change %"));
        assert!(out.contains("$175.43"));
        assert!(out.contains("+1.2%"));
        assert!(out.contains("-0.5%"));
        assert!(out.contains("Real Estate"));
    }

    #[test]
    fn columns_are_aligned() {
        let entries = entries();
        let out = render_panel(StockSummary::from_entries(&entries), &entries);
        let lines: Vec<&str> = out.lines().skip(2).collect();
        let name_col = lines[0].find("Name").unwrap();
        assert_eq!(lines[2].find("Apple Inc.").unwrap(), name_col);
        assert_eq!(lines[3].find("Exxon Mobil").unwrap(), name_col);
    }

    #[test]
    fn empty_list_shows_hint() {
        let out = render_panel(StockSummary::default(), &[]);
        assert!(out.contains("Total Stocks: 0"));
        assert!(out.contains("No stocks found"));
    }

    #[test]
    fn detail_shows_every_field() {
        let out = render_detail(&entries()[1]);
        assert!(out.contains("Symbol:   XOM"));
        assert!(out.contains("Price:    $104.00"));
        assert!(out.contains("Change:   -0.5%"));
    }
}
