//! Append-only change records kept on every product
use chrono::{DateTime, TimeZone, Utc};
use std::fmt;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone)]
pub struct TimeStamp<T: TimeZone>(DateTime<T>);

impl TimeStamp<Utc> {
    pub fn new() -> Self {
        Self(Utc::now())
    }
    pub fn to_datetime_utc(&self) -> DateTime<Utc> {
        self.0
    }
}

impl Default for TimeStamp<Utc> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: TimeZone> From<DateTime<T>> for TimeStamp<T> {
    fn from(value: DateTime<T>) -> Self {
        TimeStamp(value)
    }
}

impl fmt::Display for TimeStamp<Utc> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d %H:%M:%S"))
    }
}

/// One successful mutation of a product and the value it left behind.
#[derive(Debug, PartialEq, Clone)]
pub struct HistoryEntry {
    pub recorded_at: TimeStamp<Utc>,
    pub change: Change,
}

#[derive(Debug, PartialEq, Clone)]
pub enum Change {
    Created {
        name: String,
        price: f64,
        stock: u32,
    },
    PriceChanged {
        from: f64,
        to: f64,
    },
    StockIn {
        added: u32,
        total: u32,
    },
    StockOut {
        removed: u32,
        remaining: u32,
    },
}

impl HistoryEntry {
    pub fn new(recorded_at: TimeStamp<Utc>, change: Change) -> Self {
        Self {
            recorded_at,
            change,
        }
    }

    /// Stamp a change with the current time
    pub fn now(change: Change) -> Self {
        Self::new(TimeStamp::new(), change)
    }
}

impl Change {
    /// Price in effect after this change, if the change touched the price
    pub fn resulting_price(&self) -> Option<f64> {
        match self {
            Change::Created { price, .. } => Some(*price),
            Change::PriceChanged { to, .. } => Some(*to),
            _ => None,
        }
    }

    /// Stock level after this change, if the change touched the stock
    pub fn resulting_stock(&self) -> Option<u32> {
        match self {
            Change::Created { stock, .. } => Some(*stock),
            Change::StockIn { total, .. } => Some(*total),
            Change::StockOut { remaining, .. } => Some(*remaining),
            Change::PriceChanged { .. } => None,
        }
    }
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Created { name, price, stock } => {
                write!(f, "Added - Name: {name}, Price: {price:.2}, Stock: {stock}")
            }
            Change::PriceChanged { from, to } => {
                write!(f, "Price updated from {from:.2} to {to:.2}")
            }
            Change::StockIn { added, total } => {
                write!(f, "Stock increased by {added}, Total stock: {total}")
            }
            Change::StockOut { removed, remaining } => {
                write!(f, "Stock reduced by {removed}, Remaining stock: {remaining}")
            }
        }
    }
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.recorded_at, self.change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_descriptions() {
        let created = Change::Created {
            name: "Pen".into(),
            price: 10.0,
            stock: 5,
        };
        assert_eq!(
            created.to_string(),
            "Added - Name: Pen, Price: 10.00, Stock: 5"
        );
        assert_eq!(
            Change::PriceChanged { from: 10.0, to: 12.5 }.to_string(),
            "Price updated from 10.00 to 12.50"
        );
        assert_eq!(
            Change::StockOut {
                removed: 4,
                remaining: 1
            }
            .to_string(),
            "Stock reduced by 4, Remaining stock: 1"
        );
    }

    #[test]
    fn price_change_carries_no_stock() {
        let change = Change::PriceChanged { from: 1.0, to: 2.0 };
        assert_eq!(change.resulting_price(), Some(2.0));
        assert_eq!(change.resulting_stock(), None);
    }

    #[test]
    fn entry_display_prefixes_timestamp() {
        let ts: TimeStamp<Utc> = Utc.with_ymd_and_hms(2024, 6, 15, 10, 30, 0).unwrap().into();
        let entry = HistoryEntry::new(ts, Change::StockIn { added: 3, total: 8 });

        assert_eq!(
            entry.to_string(),
            "[2024-06-15 10:30:00] Stock increased by 3, Total stock: 8"
        );
    }
}
