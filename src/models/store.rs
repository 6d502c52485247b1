// Store model representing a shipping-fee entity shared by many offers

use crate::models::{Cost, StoreId};

/// Represents a store products can be bought from
///
/// The shipping cost is charged once per order no matter how many
/// products are bought from the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    /// Unique identifier for the store, allocated by the registry
    pub id: StoreId,

    /// Store name; two offers belong to the same store iff the names match
    pub name: String,

    /// Cheapest shipping quote observed so far
    pub shipping_cost: Cost,
}

impl Store {
    /// Creates a new store with the given ID, name and shipping quote
    pub fn new<S: Into<String>>(id: StoreId, name: S, shipping_cost: Cost) -> Self {
        Self {
            id,
            name: name.into(),
            shipping_cost,
        }
    }

    /// Records a new shipping quote, keeping the minimum seen.
    ///
    /// Equal or higher quotes are ignored; the shipping cost never
    /// increases over the store's lifetime.
    pub fn update_shipping(&mut self, candidate: Cost) {
        if candidate < self.shipping_cost {
            self.shipping_cost = candidate;
        }
    }
}
