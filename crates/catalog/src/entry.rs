use serde::{Deserialize, Serialize};

use cartkit_core::{DomainError, DomainResult, Entity, ItemId, Money, ids_unique};

/// One purchasable entry: id, display name, unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: ItemId,
    pub name: String,
    pub unit_price: Money,
}

impl CatalogEntry {
    pub fn new(id: u64, name: impl Into<String>, unit_price: Money) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.into(),
            unit_price,
        }
    }
}

impl Entity for CatalogEntry {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Ordered, read-only list of catalog entries.
///
/// Supplied once at startup and never edited afterwards; carts copy the fields
/// they need out of an entry when it is added.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids and blank names.
    pub fn new(entries: Vec<CatalogEntry>) -> DomainResult<Self> {
        if let Some(blank) = entries.iter().find(|e| e.name.trim().is_empty()) {
            return Err(DomainError::validation(format!(
                "catalog entry {} has a blank name",
                blank.id
            )));
        }
        if !ids_unique(&entries) {
            return Err(DomainError::validation("catalog ids must be unique"));
        }
        Ok(Self { entries })
    }

    /// Parse a JSON array of `{ "id", "name", "unit_price" }` objects.
    ///
    /// Prices are decimals in whole units: `29.99`, `10` or `"29.99"`.
    pub fn from_json(json: &str) -> DomainResult<Self> {
        let entries: Vec<CatalogEntry> = serde_json::from_str(json)
            .map_err(|e| DomainError::validation(format!("malformed catalog: {e}")))?;
        Self::new(entries)
    }

    /// Three-entry catalog used by the demo session.
    pub fn sample() -> Self {
        Self {
            entries: vec![
                CatalogEntry::new(1, "React Book", Money::from_cents(2999)),
                CatalogEntry::new(2, "TypeScript Guide", Money::from_cents(3499)),
                CatalogEntry::new(3, "Web Dev Course", Money::from_cents(4999)),
            ],
        }
    }

    pub fn get(&self, id: ItemId) -> Option<&CatalogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.entries.iter()
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
