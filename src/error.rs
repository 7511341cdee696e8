use crate::product::ProductId;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum CatalogError {
    #[error("Product ID already exists: {0}")]
    DuplicateId(ProductId),
    #[error("No product with ID: {0}")]
    NotFound(ProductId),
    #[error("Not enough stock: requested {requested}, available {available}")]
    InsufficientStock { requested: u32, available: u32 },
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InputError),
}

#[derive(thiserror::Error, Debug)]
pub enum ConsoleError {
    #[error("input stream closed")]
    InputClosed,
    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Malformed primitives the core refuses even when the caller claims to have validated them.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum InputError {
    #[error("product ID must not be empty")]
    EmptyId,
    #[error("product name must not be empty")]
    EmptyName,
    #[error("price must not be negative, got {0}")]
    NegativePrice(f64),
    #[error("price must be a finite number")]
    NonFinitePrice,
    #[error("adding {added} to a stock of {current} overflows")]
    StockOverflow { current: u32, added: u32 },
}
