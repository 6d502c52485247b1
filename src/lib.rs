// Public modules
pub mod algorithms;
pub mod models;
pub mod utils;

// Re-exports for convenience
pub use algorithms::exhaustive::ExhaustiveSearch;
pub use algorithms::CartSolver;
pub use models::{Offer, OrderLine, Product, PurchasePlan, Store, StoreOrder, StoreRegistry};
pub use utils::error::{CartError, Result};
