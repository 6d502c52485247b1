use tracing::{debug, trace};

use crate::algorithms::CartSolver;
use crate::models::{Cost, OrderLine, Product, PurchasePlan, StoreId, StoreOrder, StoreRegistry};
use crate::utils::error::{CartError, Result};

/// Exhaustive cheapest-cart solver
///
/// Enumerates every assignment of one offer per product and keeps the
/// cheapest, charging each distinct store's shipping fee once per
/// assignment. The enumeration is exact; pruning only skips candidates
/// whose item costs alone already reach the best total found.
#[derive(Debug, Clone)]
pub struct ExhaustiveSearch {
    /// Every store referenced by the cart's offers
    registry: StoreRegistry,
}

impl ExhaustiveSearch {
    /// Creates a solver over the given store registry
    pub fn new(registry: StoreRegistry) -> Self {
        Self { registry }
    }

    /// The registry the solver resolves store IDs against
    pub fn registry(&self) -> &StoreRegistry {
        &self.registry
    }

    /// Total price of one candidate assignment, or `None` if it was pruned.
    ///
    /// `choice[i]` selects an offer of `cart[i]`. Item costs accumulate in
    /// cart order; as soon as the running item sum alone reaches `bound`
    /// the candidate is abandoned, since shipping costs are non-negative
    /// and no later addition can bring the total back under an incumbent.
    /// Passing `Cost::INFINITY` as the bound disables pruning.
    pub fn total_price(&self, cart: &[Product], choice: &[usize], bound: Cost) -> Option<Cost> {
        let mut item_sum: Cost = 0.0;
        // First-use order keeps the shipping sum deterministic
        let mut chosen_stores: Vec<StoreId> = Vec::new();

        for (product, &offer_index) in cart.iter().zip(choice) {
            let offer = &product.offers[offer_index];
            item_sum += offer.unit_price * product.quantity as Cost;
            if !chosen_stores.contains(&offer.store) {
                chosen_stores.push(offer.store);
            }

            if item_sum >= bound {
                return None;
            }
        }

        let shipping_sum: Cost = chosen_stores
            .iter()
            .map(|&store| self.registry.shipping_cost(store))
            .sum();

        Some(item_sum + shipping_sum)
    }

    /// Groups the winning assignment by chosen store, in first-use order.
    ///
    /// Each store appears once with its shipping cost and the products
    /// bought there, ready for display.
    pub fn purchase_orders(&self, cart: &[Product], plan: &PurchasePlan) -> Vec<StoreOrder> {
        let mut orders: Vec<StoreOrder> = Vec::new();

        for (product, &offer_index) in cart.iter().zip(&plan.choices) {
            let offer = &product.offers[offer_index];

            let position = orders.iter().position(|order| order.store == offer.store);
            let order = match position {
                Some(i) => &mut orders[i],
                None => {
                    orders.push(StoreOrder {
                        store: offer.store,
                        store_name: self
                            .registry
                            .get(offer.store)
                            .map(|s| s.name.clone())
                            .unwrap_or_default(),
                        shipping_cost: self.registry.shipping_cost(offer.store),
                        lines: Vec::new(),
                    });
                    orders.last_mut().unwrap()
                }
            };

            order.lines.push(OrderLine {
                product: product.name.clone(),
                unit_price: offer.unit_price,
                quantity: product.quantity,
            });
        }

        orders
    }

    /// Checks the cart is solvable before enumeration starts
    fn check_feasible(&self, cart: &[Product]) -> Result<()> {
        for product in cart {
            if product.offers.is_empty() {
                return Err(CartError::NoOffers {
                    product: product.name.clone(),
                });
            }

            debug_assert!(
                product.offers.iter().all(|o| self.registry.contains(o.store)),
                "offer for {:?} references a store the registry never interned",
                product.name
            );
        }

        Ok(())
    }
}

impl CartSolver for ExhaustiveSearch {
    fn solve(&self, cart: &[Product]) -> Result<PurchasePlan> {
        self.check_feasible(cart)?;

        if cart.is_empty() {
            return Ok(PurchasePlan::empty());
        }

        let search_space: usize = cart.iter().map(|p| p.offers.len()).product();
        debug!(
            "searching {} assignments over {} products",
            search_space,
            cart.len()
        );

        // Odometer over per-product offer indices: advance the last counter
        // each step, carry on overflow. Lexicographic order over the index
        // space, so ties keep the earliest assignment. The first candidate
        // runs against an infinite bound and always becomes the incumbent.
        let mut choice = vec![0usize; cart.len()];
        let mut best_choice = choice.clone();
        let mut best_total = Cost::INFINITY;
        let mut evaluated: u64 = 0;
        let mut pruned: u64 = 0;

        'search: loop {
            evaluated += 1;
            match self.total_price(cart, &choice, best_total) {
                Some(total) if total < best_total => {
                    trace!("new best {:.2} at {:?}", total, choice);
                    best_total = total;
                    best_choice.copy_from_slice(&choice);
                }
                Some(_) => {}
                None => pruned += 1,
            }

            let mut axis = cart.len() - 1;
            loop {
                choice[axis] += 1;
                if choice[axis] < cart[axis].offers.len() {
                    break;
                }
                choice[axis] = 0;
                if axis == 0 {
                    break 'search;
                }
                axis -= 1;
            }
        }

        debug!(
            "evaluated {} assignments ({} pruned), best total {:.2}",
            evaluated, pruned, best_total
        );

        Ok(PurchasePlan::new(best_choice, best_total))
    }
}
