// Catalog queries: the four questions asked of the loaded product list.
use crate::currency;
use crate::model::Product;
use std::collections::{HashMap, HashSet};

/// Trait defining the read-only query interface over a loaded catalog.
pub trait CatalogQueries {
    fn clearance_under(&self, threshold: f64) -> Vec<Product>;
    fn top_category(&self) -> Option<String>;
    fn average_sale_price(&self) -> String;
    fn women_out_of_stock_by_color(&self) -> Vec<(String, usize)>;
}

/// Owns the product collection for the lifetime of the process and
/// answers every query with a fresh scan. Nothing here mutates.
pub struct CatalogAnalytics {
    products: Vec<Product>,
}

impl CatalogAnalytics {
    pub fn new(products: Vec<Product>) -> Self {
        Self { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

impl CatalogQueries for CatalogAnalytics {
    /// Out-of-stock items still marked on sale whose price decodes below
    /// `threshold`, in catalog order. Undecodable prices never qualify.
    fn clearance_under(&self, threshold: f64) -> Vec<Product> {
        self.products
            .iter()
            .filter(|p| !p.in_stock && p.on_sale && currency::decode(&p.price) < threshold)
            .cloned()
            .collect()
    }

    /// The category attached to the most products. A product counts once
    /// per category it carries. Ties go to the category seen first in
    /// catalog order; an empty catalog has no answer.
    fn top_category(&self) -> Option<String> {
        let mut counts: HashMap<&str, u32> = HashMap::new();
        let mut first_seen: Vec<&str> = Vec::new();

        for product in &self.products {
            for category in &product.categories {
                let count = counts.entry(category.as_str()).or_insert(0);
                if *count == 0 {
                    first_seen.push(category.as_str());
                }
                *count += 1;
            }
        }

        let mut best: Option<(&str, u32)> = None;
        for category in first_seen {
            let count = counts[category];
            if best.is_none_or(|(_, top)| count > top) {
                best = Some((category, count));
            }
        }
        best.map(|(category, _)| category.to_string())
    }

    /// Mean price across the catalog, formatted for display. The mean runs
    /// over every product, sale or not. An empty catalog or any
    /// undecodable price turns the mean into NaN, encoded as "$NaN".
    fn average_sale_price(&self) -> String {
        let total: f64 = self
            .products
            .iter()
            .map(|p| currency::decode(&p.price))
            .sum();
        currency::encode(total / self.products.len() as f64)
    }

    /// How many women's products are out of stock, broken down by color.
    /// Colors are discovered from the full catalog, so a color with no
    /// matching women's product still shows up with a zero count. Entries
    /// land in first-occurrence order of the color.
    fn women_out_of_stock_by_color(&self) -> Vec<(String, usize)> {
        let target: Vec<&Product> = self
            .products
            .iter()
            .filter(|p| p.gender == "female" && !p.in_stock)
            .collect();

        let mut seen: HashSet<&str> = HashSet::new();
        let mut breakdown: Vec<(String, usize)> = Vec::new();
        for product in &self.products {
            if seen.insert(product.color.as_str()) {
                let count = target.iter().filter(|p| p.color == product.color).count();
                breakdown.push((product.color.clone(), count));
            }
        }
        breakdown
    }
}
