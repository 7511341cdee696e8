//! Service layer API for catalog operations
use super::error::{CatalogError, InputError};
use super::product::{Product, ProductId};
use std::collections::HashMap;

#[derive(Debug, Default)]
pub struct Catalog {
    products: Vec<Product>, // insertion order
    index: HashMap<ProductId, usize>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Look up a product by id
    pub fn find(&self, id: &str) -> Result<&Product, CatalogError> {
        self.index
            .get(id)
            .map(|&slot| &self.products[slot])
            .ok_or_else(|| CatalogError::NotFound(id.into()))
    }

    /// All products in the order they were added
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Smallest free zero-padded id starting from `len + 1`, e.g. `001`
    pub fn next_sequential_id(&self) -> ProductId {
        let mut n = self.products.len() + 1;
        loop {
            let candidate = format!("{n:03}");
            if !self.contains(&candidate) {
                return ProductId::new(candidate);
            }
            n += 1;
        }
    }

    /// Add a new product; its history starts with one creation entry
    pub fn create_product(
        &mut self,
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        initial_stock: u32,
    ) -> Result<&Product, CatalogError> {
        let id = id.into();
        let name = name.into();

        if id.trim().is_empty() {
            return Err(InputError::EmptyId.into());
        }
        if name.trim().is_empty() {
            return Err(InputError::EmptyName.into());
        }
        let price = validate_price(price)?;

        let id = ProductId::new(id);
        if self.index.contains_key(&id) {
            return Err(CatalogError::DuplicateId(id));
        }

        let slot = self.products.len();
        self.index.insert(id.clone(), slot);
        self.products.push(Product::new(id, name, price, initial_stock));

        Ok(&self.products[slot])
    }

    /// Replace the price and record the old and new values
    pub fn set_price(&mut self, id: &str, new_price: f64) -> Result<&Product, CatalogError> {
        let product = self.find_mut(id)?;
        let new_price = validate_price(new_price)?;

        product.apply_price(new_price);
        Ok(product)
    }

    /// Add `quantity` units; zero is accepted and still recorded
    pub fn stock_in(&mut self, id: &str, quantity: u32) -> Result<&Product, CatalogError> {
        let product = self.find_mut(id)?;
        let current = product.stock();
        let total = current
            .checked_add(quantity)
            .ok_or(InputError::StockOverflow {
                current,
                added: quantity,
            })?;

        product.apply_stock_in(quantity, total);
        Ok(product)
    }

    /// Remove `quantity` units, or reject without touching the product
    pub fn stock_out(&mut self, id: &str, quantity: u32) -> Result<&Product, CatalogError> {
        let product = self.find_mut(id)?;
        let available = product.stock();

        // an empty product rejects any request, including zero
        if available == 0 || quantity > available {
            return Err(CatalogError::InsufficientStock {
                requested: quantity,
                available,
            });
        }

        product.apply_stock_out(quantity, available - quantity);
        Ok(product)
    }

    fn find_mut(&mut self, id: &str) -> Result<&mut Product, CatalogError> {
        match self.index.get(id) {
            Some(&slot) => Ok(&mut self.products[slot]),
            None => Err(CatalogError::NotFound(id.into())),
        }
    }
}

/// Accepted price with `-0.0` folded into `0.0`
fn validate_price(price: f64) -> Result<f64, InputError> {
    if !price.is_finite() {
        return Err(InputError::NonFinitePrice);
    }
    if price < 0.0 {
        return Err(InputError::NegativePrice(price));
    }
    Ok(if price == 0.0 { 0.0 } else { price })
}
