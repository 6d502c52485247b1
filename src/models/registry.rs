// Registry interning stores by name so repeated quotes merge into one entity

use crate::models::{Cost, Store, StoreId};
use std::collections::HashMap;

/// Owns every store seen during one optimization run.
///
/// Stores are interned by name: the first quote for a name creates the
/// entity, later quotes for the same name only lower its shipping cost.
/// IDs are handed out sequentially in intern order, so building the same
/// catalog twice yields identical IDs.
#[derive(Debug, Clone, Default)]
pub struct StoreRegistry {
    stores: HashMap<StoreId, Store>,
    ids_by_name: HashMap<String, StoreId>,
    next_id: StoreId,
}

impl StoreRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Looks up or creates the store for `name` and returns its ID.
    ///
    /// An existing store keeps its ID; `shipping_quote` is applied through
    /// `update_shipping`, so only a strictly cheaper quote changes it.
    pub fn intern<S: AsRef<str>>(&mut self, name: S, shipping_quote: Cost) -> StoreId {
        let name = name.as_ref();

        if let Some(&id) = self.ids_by_name.get(name) {
            if let Some(store) = self.stores.get_mut(&id) {
                store.update_shipping(shipping_quote);
            }
            return id;
        }

        let id = self.next_id;
        self.next_id += 1;
        self.stores.insert(id, Store::new(id, name, shipping_quote));
        self.ids_by_name.insert(name.to_string(), id);
        id
    }

    /// Gets a store by ID
    pub fn get(&self, id: StoreId) -> Option<&Store> {
        self.stores.get(&id)
    }

    /// Shipping cost of a store.
    ///
    /// IDs are only handed out by `intern`, so a miss means the caller
    /// mixed up registries; that is a bug worth failing loudly on.
    pub fn shipping_cost(&self, id: StoreId) -> Cost {
        self.stores[&id].shipping_cost
    }

    /// Whether `id` was allocated by this registry
    pub fn contains(&self, id: StoreId) -> bool {
        self.stores.contains_key(&id)
    }

    /// Number of distinct stores seen so far
    pub fn len(&self) -> usize {
        self.stores.len()
    }

    /// True if no store has been interned yet
    pub fn is_empty(&self) -> bool {
        self.stores.is_empty()
    }
}
