use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use cheapest_cart::utils::{catalog, fetch::PageFetcher, logger};
use cheapest_cart::{CartSolver, ExhaustiveSearch, StoreRegistry};

#[derive(Parser)]
#[command(name = "cheapest-cart")]
#[command(about = "Find the cheapest way to buy a list of products across online stores")]
struct Args {
    /// Product page URLs, each followed by the quantity to buy
    #[arg(required = true)]
    inputs: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    logger::init_cli_logger(args.verbose);

    if args.inputs.len() % 2 != 0 {
        bail!("each URL must be followed by its quantity");
    }

    let mut registry = StoreRegistry::new();
    let mut cart = Vec::new();
    let fetcher = PageFetcher::new()?;

    for pair in args.inputs.chunks(2) {
        let url = &pair[0];
        let quantity: u32 = pair[1]
            .parse()
            .with_context(|| format!("invalid quantity {:?} for {}", pair[1], url))?;
        if quantity == 0 {
            bail!("quantity for {} must be at least 1", url);
        }

        let html = fetcher
            .fetch_html(url)
            .with_context(|| format!("failed to fetch {}", url))?;
        let product = catalog::product_from_page(&html, quantity, &mut registry)
            .with_context(|| format!("failed to extract offers from {}", url))?;

        info!(
            "loaded {} with {} offers",
            product.name,
            product.offer_count()
        );
        cart.push(product);
    }

    info!(
        "optimizing {} products across {} stores",
        cart.len(),
        registry.len()
    );

    let solver = ExhaustiveSearch::new(registry);
    let plan = solver.solve(&cart)?;
    let orders = solver.purchase_orders(&cart, &plan);

    println!("Lowest price: {}", plan.total_cost);
    for order in &orders {
        println!("-------");
        println!(
            "Store: {} - Shipping: {} EUR",
            order.store_name, order.shipping_cost
        );
        for line in &order.lines {
            println!(
                "Product: {} - Price: {} EUR - Quantity: {}",
                line.product, line.unit_price, line.quantity
            );
        }
    }

    Ok(())
}
