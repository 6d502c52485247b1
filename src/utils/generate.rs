// Synthetic catalog generation for benchmarks and stress tests

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::models::{Product, StoreRegistry};

/// Builds a seeded random catalog.
///
/// Store names come from a fixed pool roughly twice the offers-per-product
/// count, so assignments share stores often enough for shipping
/// amortization to matter. The same seed always yields the same catalog.
pub fn synthetic_catalog(
    num_products: usize,
    offers_per_product: usize,
    seed: u64,
) -> (StoreRegistry, Vec<Product>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut registry = StoreRegistry::new();

    let store_pool: Vec<String> = (0..offers_per_product.max(1) * 2)
        .map(|i| format!("Store {}", i + 1))
        .collect();

    let mut cart = Vec::with_capacity(num_products);
    for p in 0..num_products {
        let quantity = rng.gen_range(1..=3);
        let mut product = Product::new(format!("Product {}", p + 1), quantity);

        for _ in 0..offers_per_product {
            let store_name = &store_pool[rng.gen_range(0..store_pool.len())];
            // Prices in whole cents to keep printed totals tidy
            let shipping = (rng.gen_range(0.0..10.0_f64) * 100.0).round() / 100.0;
            let price = (rng.gen_range(1.0..50.0_f64) * 100.0).round() / 100.0;

            let store = registry.intern(store_name, shipping);
            product.add_offer(store, price);
        }

        cart.push(product);
    }

    (registry, cart)
}
