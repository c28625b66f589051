use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Sector {
    Technology,
    Healthcare,
    Finance,
    Energy,
    Consumer,
    Industrial,
    RealEstate,
    /// Any label outside the listed set, including the empty label of an unset draft.
    Other(String),
}

impl Sector {
    pub const LISTED: [Sector; 7] = [
        Sector::Technology,
        Sector::Healthcare,
        Sector::Finance,
        Sector::Energy,
        Sector::Consumer,
        Sector::Industrial,
        Sector::RealEstate,
    ];

    pub fn label(&self) -> &str {
        match self {
            Sector::Technology => "Technology",
            Sector::Healthcare => "Healthcare",
            Sector::Finance => "Finance",
            Sector::Energy => "Energy",
            Sector::Consumer => "Consumer",
            Sector::Industrial => "Industrial",
            Sector::RealEstate => "Real Estate",
            Sector::Other(label) => label,
        }
    }

    pub fn is_listed(&self) -> bool {
        !matches!(self, Sector::Other(_))
    }

    /// Exact match against the listed labels; anything else is kept verbatim so the label
    /// reads back exactly as the store sent it.
    pub fn from_wire(label: String) -> Self {
        match Self::LISTED.iter().find(|s| s.label() == label) {
            Some(listed) => listed.clone(),
            None => Sector::Other(label),
        }
    }

    /// Case-insensitive match for operator input; anything else is kept verbatim.
    pub fn from_label(label: &str) -> Self {
        let trimmed = label.trim();
        Self::LISTED
            .iter()
            .find(|s| s.label().eq_ignore_ascii_case(trimmed))
            .cloned()
            .unwrap_or_else(|| Sector::Other(label.to_string()))
    }
}

impl From<String> for Sector {
    fn from(label: String) -> Self {
        Sector::from_wire(label)
    }
}

impl From<Sector> for String {
    fn from(sector: Sector) -> Self {
        match sector {
            Sector::Other(label) => label,
            listed => listed.label().to_string(),
        }
    }
}

impl fmt::Display for Sector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireStockEntry")]
pub struct StockEntry {
    pub id: String,
    pub symbol: String,
    pub name: String,
    pub sector: Sector,
    pub price: f64,
    pub change_percent: f64,
}

impl StockEntry {
    pub fn is_gainer(&self) -> bool {
        self.change_percent >= 0.0
    }

    pub fn change_label(&self) -> String {
        if self.is_gainer() {
            format!("+{}%", self.change_percent)
        } else {
            format!("{}%", self.change_percent)
        }
    }
}

#[derive(Deserialize)]
struct WireStockEntry {
    #[serde(default, deserialize_with = "id_from_string_or_number")]
    id: Option<String>,
    symbol: String,
    name: String,
    sector: Sector,
    price: f64,
    change_percent: f64,
}

/// Rows without an id are keyed by their symbol.
impl From<WireStockEntry> for StockEntry {
    fn from(wire: WireStockEntry) -> Self {
        Self {
            id: wire
                .id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| wire.symbol.clone()),
            symbol: wire.symbol,
            name: wire.name,
            sector: wire.sector,
            price: wire.price,
            change_percent: wire.change_percent,
        }
    }
}

fn id_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Int(i64),
        Float(f64),
    }

    Ok(Option::<RawId>::deserialize(deserializer)?.map(|raw| match raw {
        RawId::Text(s) => s,
        RawId::Int(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    }))
}
