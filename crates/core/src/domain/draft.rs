use serde::Serialize;

/// Unsaved new-entry form. Every field is kept as typed and submitted as a string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DraftEntry {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub price: String,
    pub change_percent: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Symbol,
    Name,
    Sector,
    Price,
    ChangePercent,
}

impl DraftEntry {
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Symbol => &self.symbol,
            DraftField::Name => &self.name,
            DraftField::Sector => &self.sector,
            DraftField::Price => &self.price,
            DraftField::ChangePercent => &self.change_percent,
        }
    }

    /// The symbol is upper-cased as typed.
    pub fn set(&mut self, field: DraftField, value: impl Into<String>) {
        let value = value.into();
        match field {
            DraftField::Symbol => self.symbol = value.to_uppercase(),
            DraftField::Name => self.name = value,
            DraftField::Sector => self.sector = value,
            DraftField::Price => self.price = value,
            DraftField::ChangePercent => self.change_percent = value,
        }
    }

    pub fn can_submit(&self) -> bool {
        !self.symbol.is_empty() && !self.name.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn symbol_is_upper_cased_as_typed() {
        let mut draft = DraftEntry::default();
        draft.set(DraftField::Symbol, "brk.b");
        draft.set(DraftField::Name, "Berkshire Hathaway");
        assert_eq!(draft.get(DraftField::Symbol), "BRK.B");
        assert_eq!(draft.get(DraftField::Name), "Berkshire Hathaway");
    }

    #[test]
    fn submit_requires_symbol_and_name_only() {
        let mut draft = DraftEntry::default();
        assert!(!draft.can_submit());

        draft.set(DraftField::Sector, "Energy");
        draft.set(DraftField::Price, "12.50");
        draft.set(DraftField::ChangePercent, "-1");
        assert!(!draft.can_submit());

        draft.set(DraftField::Symbol, "xom");
        assert!(!draft.can_submit());

        draft.set(DraftField::Name, "Exxon Mobil");
        assert!(draft.can_submit());

        draft.set(DraftField::Symbol, "");
        assert!(!draft.can_submit());
    }

    #[test]
    fn serializes_every_field_as_a_string() {
        let mut draft = DraftEntry::default();
        draft.set(DraftField::Symbol, "aapl");
        draft.set(DraftField::Name, "Apple Inc.");
        draft.set(DraftField::Price, "175.50");

        assert_eq!(
            serde_json::to_value(&draft).unwrap(),
            json!({
                "symbol": "AAPL",
                "name": "Apple Inc.",
                "sector": "",
                "price": "175.50",
                "change_percent": ""
            })
        );
    }
}
