// Models module - exports all model types

mod plan;
mod product;
mod registry;
mod store;

// Re-export model types
pub use self::plan::{OrderLine, PurchasePlan, StoreOrder};
pub use self::product::{Offer, Product};
pub use self::registry::StoreRegistry;
pub use self::store::Store;

// Common type aliases for improved code readability
pub type StoreId = u32;
pub type Cost = f64;
