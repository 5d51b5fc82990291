// Core structs: Product, CatalogError
use serde::Deserialize;
use thiserror::Error;

/// One entry of the product catalog, exactly as the data file carries it.
/// `price` stays a display string until a query decodes it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: String,
    pub guid: String,
    pub in_stock: bool,
    pub on_sale: bool,
    pub name: String,
    pub picture: String,
    pub gender: String,
    pub categories: Vec<String>,
    pub color: String,
    pub price: String,
    pub description: String,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed catalog data: {0}")]
    Malformed(#[from] serde_json::Error),
}
