// Product model representing one requested item and its purchase options

use crate::models::{Cost, StoreId};

/// One way to buy a product: a store and its unit price
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Offer {
    /// Store selling at this price
    pub store: StoreId,

    /// Price per unit
    pub unit_price: Cost,
}

/// Represents a product to buy, with the quantity requested and every
/// offer discovered for it
///
/// Offer order is discovery order; it is also the index space the search
/// enumerates, so it must not be reordered once offers are attached.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    /// Name of the product
    pub name: String,

    /// Number of units to purchase
    pub quantity: u32,

    /// Purchase options in discovery order
    pub offers: Vec<Offer>,
}

impl Product {
    /// Creates a new product with the given name and quantity
    pub fn new<S: Into<String>>(name: S, quantity: u32) -> Self {
        Self {
            name: name.into(),
            quantity,
            offers: Vec::new(),
        }
    }

    /// Creates a product for a single unit
    pub fn single<S: Into<String>>(name: S) -> Self {
        Self::new(name, 1)
    }

    /// Appends an offer and returns the index it was assigned.
    ///
    /// Offers are never de-duplicated: the same store attached twice with
    /// different prices stays as two alternatives sharing one shipping
    /// entity.
    pub fn add_offer(&mut self, store: StoreId, unit_price: Cost) -> usize {
        let index = self.offers.len();
        self.offers.push(Offer { store, unit_price });
        index
    }

    /// Number of offers attached so far
    pub fn offer_count(&self) -> usize {
        self.offers.len()
    }
}
