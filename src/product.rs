//! Product records owned by the catalog
use super::history::{Change, HistoryEntry};
use std::borrow::Borrow;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(String);

impl ProductId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ProductId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProductId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A catalog item. Only the catalog can change one; everyone else gets read accessors.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    id: ProductId,
    name: String,
    price: f64,
    stock: u32,
    history: Vec<HistoryEntry>,
}

impl Product {
    /// Build a product whose history opens with its `Created` entry
    pub(crate) fn new(id: ProductId, name: String, price: f64, stock: u32) -> Self {
        let created = HistoryEntry::now(Change::Created {
            name: name.clone(),
            price,
            stock,
        });
        Self {
            id,
            name,
            price,
            stock,
            history: vec![created],
        }
    }

    pub fn id(&self) -> &ProductId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Every price the product has carried, oldest first
    pub fn price_timeline(&self) -> Vec<f64> {
        self.history
            .iter()
            .filter_map(|entry| entry.change.resulting_price())
            .collect()
    }

    /// Every stock level the product has held, oldest first
    pub fn stock_timeline(&self) -> Vec<u32> {
        self.history
            .iter()
            .filter_map(|entry| entry.change.resulting_stock())
            .collect()
    }

    // Callers validate first; these only apply and record.

    pub(crate) fn apply_price(&mut self, new_price: f64) {
        let from = self.price;
        self.price = new_price;
        self.history.push(HistoryEntry::now(Change::PriceChanged { from, to: new_price }));
    }

    pub(crate) fn apply_stock_in(&mut self, added: u32, total: u32) {
        self.stock = total;
        self.history.push(HistoryEntry::now(Change::StockIn { added, total }));
    }

    pub(crate) fn apply_stock_out(&mut self, removed: u32, remaining: u32) {
        self.stock = remaining;
        self.history.push(HistoryEntry::now(Change::StockOut { removed, remaining }));
    }
}
