pub mod exhaustive;

// Common algorithm traits
use crate::models::Product;
use crate::models::PurchasePlan;
use crate::utils::error::Result;

/// Trait for cheapest-cart solvers
pub trait CartSolver {
    /// Find the cheapest assignment of one offer per product.
    ///
    /// Returns the infeasibility error when some product has no offers;
    /// an empty cart is valid and yields the empty plan.
    fn solve(&self, cart: &[Product]) -> Result<PurchasePlan>;
}
