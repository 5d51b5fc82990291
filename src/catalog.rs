use crate::model::{CatalogError, Product};
use std::fs;

/// Reads a JSON catalog file (an array of product objects) into memory.
/// Loading happens once, before any query runs.
pub fn load_catalog(path: &str) -> Result<Vec<Product>, CatalogError> {
    let raw = fs::read_to_string(path)?;
    let products: Vec<Product> = serde_json::from_str(&raw)?;
    Ok(products)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::fs;

    const SAMPLE: &str = r#"[
        {
            "id": "p-1",
            "guid": "0f3a2b1c-9d8e-4f00-a1b2-c3d4e5f60789",
            "in_stock": true,
            "on_sale": false,
            "name": "Trail Jacket",
            "picture": "http://placehold.it/32x32",
            "gender": "male",
            "categories": ["jackets", "outdoor"],
            "color": "green",
            "price": "$149.99",
            "description": "Windproof shell."
        }
    ]"#;

    #[test]
    fn loads_a_well_formed_file() {
        let path = env::temp_dir().join("catalog-insight-load-ok.json");
        fs::write(&path, SAMPLE).unwrap();

        let products = load_catalog(path.to_str().unwrap()).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].id, "p-1");
        assert_eq!(products[0].categories, vec!["jackets", "outdoor"]);
        assert!(products[0].in_stock);

        fs::remove_file(&path).ok();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = load_catalog("/nonexistent/products.json").unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }

    #[test]
    fn bad_json_is_a_malformed_error() {
        let path = env::temp_dir().join("catalog-insight-load-bad.json");
        fs::write(&path, "{ not json ]").unwrap();

        let err = load_catalog(path.to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CatalogError::Malformed(_)));

        fs::remove_file(&path).ok();
    }
}
