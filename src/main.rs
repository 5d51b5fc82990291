mod analyzer;
mod catalog;
mod currency;
mod model;

use analyzer::{CatalogAnalytics, CatalogQueries};
use catalog::load_catalog;
use tracing::{error, info};

const DEFAULT_CATALOG_PATH: &str = "data/products.json";
const CLEARANCE_THRESHOLD: f64 = 20.0;

fn main() {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CATALOG_PATH.to_string());

    // Load the catalog once; every query below runs against this snapshot.
    let products = match load_catalog(&path) {
        Ok(products) => products,
        Err(e) => {
            error!("Catalog load error: {}", e);
            return;
        }
    };
    info!("Loaded {} products from {}", products.len(), path);

    let analytics = CatalogAnalytics::new(products);

    let clearance = analytics.clearance_under(CLEARANCE_THRESHOLD);
    info!(
        "Out-of-stock sale items under {}: {}",
        currency::encode(CLEARANCE_THRESHOLD),
        clearance.len()
    );
    for item in &clearance {
        info!("  {} — {}", item.name, item.price);
    }

    match analytics.top_category() {
        Some(category) => info!("Most common category: {}", category),
        None => info!("Catalog carries no categories"),
    }

    info!("Average price: {}", analytics.average_sale_price());

    info!("Women's out-of-stock products by color:");
    for (color, count) in analytics.women_out_of_stock_by_color() {
        info!("  {}: {}", color, count);
    }
}
