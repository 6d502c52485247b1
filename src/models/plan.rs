// Result models for the winning assignment and its per-store breakdown

use crate::models::{Cost, StoreId};

/// The winning assignment: one offer index per product, plus its total
///
/// `choices[i]` selects an entry of the i-th product's offer list. An empty
/// cart yields an empty choice list with a total of zero.
#[derive(Debug, Clone, PartialEq)]
pub struct PurchasePlan {
    /// Chosen offer index for each product, in cart order
    pub choices: Vec<usize>,

    /// Item costs plus one shipping fee per distinct store used
    pub total_cost: Cost,
}

impl PurchasePlan {
    /// Creates a new purchase plan
    pub fn new(choices: Vec<usize>, total_cost: Cost) -> Self {
        Self {
            choices,
            total_cost,
        }
    }

    /// The plan for an empty cart
    pub fn empty() -> Self {
        Self::new(Vec::new(), 0.0)
    }
}

/// One product line inside a store's order
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLine {
    /// Product bought at this store
    pub product: String,

    /// Unit price of the chosen offer
    pub unit_price: Cost,

    /// Number of units to buy
    pub quantity: u32,
}

/// Everything bought from one store under the winning assignment
#[derive(Debug, Clone, PartialEq)]
pub struct StoreOrder {
    /// Store the products are bought from
    pub store: StoreId,

    /// Store name for display
    pub store_name: String,

    /// Shipping fee charged once for this order
    pub shipping_cost: Cost,

    /// Products bought here, in cart order
    pub lines: Vec<OrderLine>,
}

impl StoreOrder {
    /// Sum of the line item costs, without shipping
    pub fn items_total(&self) -> Cost {
        self.lines
            .iter()
            .map(|line| line.unit_price * line.quantity as Cost)
            .sum()
    }
}
