// End-to-end scenarios for the exhaustive cheapest-cart search

use cheapest_cart::{CartError, CartSolver, ExhaustiveSearch, Product, StoreRegistry};

/// Reference scenario: two products, two stores, all-X wins
///
///   A (qty 1): X 10, Y 8
///   B (qty 2): X 5,  Y 6
///   shipping:  X 3,  Y 4
///
///   all-X = 10 + 5*2 + 3      = 23
///   all-Y = 8 + 6*2 + 4       = 24
///   mixed = 8 + 5*2 + 4 + 3   = 25
fn reference_cart() -> (StoreRegistry, Vec<Product>) {
    let mut registry = StoreRegistry::new();
    let x = registry.intern("Store X", 3.0);
    let y = registry.intern("Store Y", 4.0);

    let mut a = Product::single("Product A");
    a.add_offer(x, 10.0);
    a.add_offer(y, 8.0);

    let mut b = Product::new("Product B", 2);
    b.add_offer(x, 5.0);
    b.add_offer(y, 6.0);

    (registry, vec![a, b])
}

#[test]
fn test_reference_scenario_all_x_wins() {
    let (registry, cart) = reference_cart();
    let solver = ExhaustiveSearch::new(registry);

    let plan = solver.solve(&cart).unwrap();
    assert_eq!(plan.choices, vec![0, 0]);
    assert_eq!(plan.total_cost, 23.0);

    // The alternatives really are worse
    assert_eq!(solver.total_price(&cart, &[1, 1], f64::INFINITY), Some(24.0));
    assert_eq!(solver.total_price(&cart, &[1, 0], f64::INFINITY), Some(25.0));
}

#[test]
fn test_single_product_single_offer() {
    let mut registry = StoreRegistry::new();
    let x = registry.intern("Store X", 2.5);

    let mut a = Product::new("Product A", 3);
    a.add_offer(x, 4.0);

    let solver = ExhaustiveSearch::new(registry);
    let plan = solver.solve(&[a]).unwrap();

    assert_eq!(plan.choices, vec![0]);
    assert_eq!(plan.total_cost, 4.0 * 3.0 + 2.5);
}

#[test]
fn test_shared_store_shipping_counted_once() {
    let mut registry = StoreRegistry::new();
    let x = registry.intern("Store X", 5.0);

    let mut a = Product::single("Product A");
    a.add_offer(x, 10.0);
    let mut b = Product::single("Product B");
    b.add_offer(x, 20.0);

    let solver = ExhaustiveSearch::new(registry);
    let plan = solver.solve(&[a, b]).unwrap();

    // 10 + 20 + one 5.0 fee, not two
    assert_eq!(plan.total_cost, 35.0);
}

#[test]
fn test_splitting_across_stores_can_win() {
    let mut registry = StoreRegistry::new();
    let x = registry.intern("Store X", 1.0);
    let y = registry.intern("Store Y", 1.0);

    let mut a = Product::single("Product A");
    a.add_offer(x, 10.0);
    a.add_offer(y, 1.0);

    let mut b = Product::single("Product B");
    b.add_offer(x, 1.0);
    b.add_offer(y, 10.0);

    let solver = ExhaustiveSearch::new(registry);
    let plan = solver.solve(&[a, b]).unwrap();

    // Paying both shipping fees beats either single-store cart
    assert_eq!(plan.choices, vec![1, 0]);
    assert_eq!(plan.total_cost, 4.0);
}

#[test]
fn test_product_without_offers_is_infeasible() {
    let (registry, mut cart) = reference_cart();
    cart.push(Product::new("Product C", 1));

    let solver = ExhaustiveSearch::new(registry);
    let err = solver.solve(&cart).unwrap_err();

    assert!(matches!(err, CartError::NoOffers { ref product } if product == "Product C"));
}

#[test]
fn test_empty_cart_yields_empty_plan() {
    let solver = ExhaustiveSearch::new(StoreRegistry::new());
    let plan = solver.solve(&[]).unwrap();

    assert!(plan.choices.is_empty());
    assert_eq!(plan.total_cost, 0.0);
}

#[test]
fn test_solver_is_deterministic() {
    let (registry, cart) = reference_cart();
    let solver = ExhaustiveSearch::new(registry);

    let first = solver.solve(&cart).unwrap();
    let second = solver.solve(&cart).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_equal_totals_keep_earliest_assignment() {
    let mut registry = StoreRegistry::new();
    let x = registry.intern("Store X", 2.0);
    let y = registry.intern("Store Y", 2.0);

    let mut a = Product::single("Product A");
    a.add_offer(x, 5.0);
    a.add_offer(y, 5.0);

    let solver = ExhaustiveSearch::new(registry);
    let plan = solver.solve(&[a]).unwrap();

    // Both assignments cost 7.0; enumeration order breaks the tie
    assert_eq!(plan.choices, vec![0]);
    assert_eq!(plan.total_cost, 7.0);
}

#[test]
fn test_duplicate_store_offers_use_cheapest() {
    let mut registry = StoreRegistry::new();
    let x = registry.intern("Store X", 2.0);

    // Same store observed twice at different prices
    let mut a = Product::single("Product A");
    a.add_offer(x, 9.0);
    a.add_offer(x, 6.5);

    let solver = ExhaustiveSearch::new(registry);
    let plan = solver.solve(&[a]).unwrap();

    assert_eq!(plan.choices, vec![1]);
    assert_eq!(plan.total_cost, 8.5);
}

#[test]
fn test_purchase_orders_follow_first_use_order() {
    let mut registry = StoreRegistry::new();
    let x = registry.intern("Store X", 1.0);
    let y = registry.intern("Store Y", 1.0);

    let mut a = Product::single("Product A");
    a.add_offer(y, 2.0);
    let mut b = Product::single("Product B");
    b.add_offer(x, 3.0);
    let mut c = Product::single("Product C");
    c.add_offer(y, 4.0);

    let cart = vec![a, b, c];
    let solver = ExhaustiveSearch::new(registry);
    let plan = solver.solve(&cart).unwrap();
    let orders = solver.purchase_orders(&cart, &plan);

    // Y first (Product A), X second; Products A and C share Y's order
    assert_eq!(orders.len(), 2);
    assert_eq!(orders[0].store_name, "Store Y");
    assert_eq!(orders[0].lines.len(), 2);
    assert_eq!(orders[1].store_name, "Store X");
    assert_eq!(plan.total_cost, 2.0 + 3.0 + 4.0 + 1.0 + 1.0);
}
