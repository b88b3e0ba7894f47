//! # Product Catalog Client
//!
//! Fetches the product catalog from the backend. The mock serves a
//! fixed pharmacy catalog from memory after the configured latency.

use async_trait::async_trait;
use tracing::debug;

use crate::config::ApiConfig;
use crate::error::{ApiError, ApiResult};
use carepoint_core::{Category, Product};

/// Remote catalog operations.
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// Fetches the complete catalog.
    async fn get_all_products(&self) -> ApiResult<Vec<Product>>;

    /// Fetches a single product by id.
    async fn get_product(&self, id: &str) -> ApiResult<Product>;

    /// Fetches every product in one category.
    async fn get_by_category(&self, category: Category) -> ApiResult<Vec<Product>>;

    /// Case-insensitive substring search over name and brand.
    async fn search(&self, query: &str) -> ApiResult<Vec<Product>>;
}

/// In-memory catalog client with a fixed pharmacy inventory.
#[derive(Debug, Clone)]
pub struct MockProductApi {
    config: ApiConfig,
    products: Vec<Product>,
}

impl MockProductApi {
    pub fn new(config: ApiConfig) -> Self {
        MockProductApi {
            config,
            products: seed_catalog(),
        }
    }

    /// Replaces the seeded catalog, for tests that need specific stock
    /// or pricing.
    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    async fn simulate_request(&self, path: &str) {
        debug!(url = %self.config.endpoint(path), "GET (mocked)");
        tokio::time::sleep(self.config.catalog_delay()).await;
    }
}

#[async_trait]
impl ProductApi for MockProductApi {
    async fn get_all_products(&self) -> ApiResult<Vec<Product>> {
        self.simulate_request("products").await;
        Ok(self.products.clone())
    }

    async fn get_product(&self, id: &str) -> ApiResult<Product> {
        self.simulate_request(&format!("products/{id}")).await;
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ApiError::not_found("Product", id))
    }

    async fn get_by_category(&self, category: Category) -> ApiResult<Vec<Product>> {
        self.simulate_request(&format!("products?category={category}"))
            .await;
        Ok(self
            .products
            .iter()
            .filter(|p| p.category == category)
            .cloned()
            .collect())
    }

    async fn search(&self, query: &str) -> ApiResult<Vec<Product>> {
        self.simulate_request(&format!("products/search?q={query}"))
            .await;
        let needle = query.to_lowercase();
        Ok(self
            .products
            .iter()
            .filter(|p| {
                p.name.to_lowercase().contains(&needle)
                    || p.brand.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect())
    }
}

// =============================================================================
// Seed Catalog
// =============================================================================

fn product(
    id: &str,
    name: &str,
    brand: &str,
    category: Category,
    description: &str,
    mrp_cents: i64,
    price_cents: i64,
    discounted_price_cents: i64,
    prescription_required: bool,
    in_stock: bool,
) -> Product {
    Product {
        id: id.to_string(),
        name: name.to_string(),
        brand: brand.to_string(),
        category,
        description: Some(description.to_string()),
        image: format!("/images/products/{id}.jpg"),
        mrp_cents,
        price_cents,
        discounted_price_cents,
        prescription_required,
        in_stock,
        max_quantity: Some(10),
    }
}

fn seed_catalog() -> Vec<Product> {
    vec![
        product(
            "asp-500",
            "Aspirin 500mg Tablets",
            "Bayer",
            Category::Medicines,
            "Pain relief and fever reducer, pack of 30 tablets.",
            3499,
            2999,
            2735,
            false,
            true,
        ),
        product(
            "amx-250",
            "Amoxicillin 250mg Capsules",
            "GSK",
            Category::Medicines,
            "Broad-spectrum antibiotic, pack of 21 capsules.",
            5999,
            5499,
            4999,
            true,
            true,
        ),
        product(
            "ibf-400",
            "Ibuprofen 400mg Tablets",
            "Advil",
            Category::Medicines,
            "Anti-inflammatory pain relief, pack of 24 tablets.",
            2899,
            2599,
            2349,
            false,
            true,
        ),
        product(
            "vitd-1000",
            "Vitamin D3 1000 IU Softgels",
            "Nature Made",
            Category::Supplements,
            "Daily vitamin D supplement, 90 softgels.",
            1999,
            1799,
            1599,
            false,
            true,
        ),
        product(
            "omega-3",
            "Omega-3 Fish Oil 1200mg",
            "Nordic Naturals",
            Category::Supplements,
            "Heart and brain support, 60 softgels.",
            4599,
            4199,
            3899,
            false,
            true,
        ),
        product(
            "multi-gummy",
            "Adult Multivitamin Gummies",
            "Centrum",
            Category::Supplements,
            "Complete daily multivitamin, 120 gummies.",
            2499,
            2299,
            1999,
            false,
            false,
        ),
        product(
            "bp-monitor",
            "Digital Blood Pressure Monitor",
            "Omron",
            Category::Devices,
            "Upper arm monitor with irregular heartbeat detection.",
            8999,
            7999,
            6999,
            false,
            true,
        ),
        product(
            "thermo-ir",
            "Infrared Forehead Thermometer",
            "Braun",
            Category::Devices,
            "No-touch thermometer with fever alert.",
            5499,
            4999,
            4499,
            false,
            true,
        ),
        product(
            "sunscreen-50",
            "Sunscreen Lotion SPF 50",
            "Neutrogena",
            Category::PersonalCare,
            "Broad-spectrum water-resistant sunscreen, 88ml.",
            1599,
            1399,
            1249,
            false,
            true,
        ),
        product(
            "baby-wipes",
            "Sensitive Baby Wipes",
            "Pampers",
            Category::BabyCare,
            "Fragrance-free wipes, 3 packs of 72.",
            1299,
            1199,
            999,
            false,
            true,
        ),
        product(
            "bandage-kit",
            "Adhesive Bandage Variety Kit",
            "Band-Aid",
            Category::FirstAid,
            "Assorted sizes, 100 count.",
            899,
            799,
            699,
            false,
            true,
        ),
        product(
            "antiseptic",
            "Antiseptic Liquid 500ml",
            "Dettol",
            Category::FirstAid,
            "First aid antiseptic for cuts and scrapes.",
            1099,
            999,
            899,
            false,
            true,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api() -> MockProductApi {
        MockProductApi::new(ApiConfig::instant())
    }

    #[tokio::test]
    async fn test_catalog_has_all_categories() {
        let products = api().get_all_products().await.unwrap();
        assert!(products.len() >= 10);
        for category in [
            Category::Medicines,
            Category::Supplements,
            Category::Devices,
            Category::PersonalCare,
            Category::BabyCare,
            Category::FirstAid,
        ] {
            assert!(
                products.iter().any(|p| p.category == category),
                "no products in {category}"
            );
        }
    }

    #[tokio::test]
    async fn test_get_product_by_id() {
        let product = api().get_product("asp-500").await.unwrap();
        assert_eq!(product.name, "Aspirin 500mg Tablets");
        assert_eq!(product.discounted_price_cents, 2735);

        let err = api().get_product("ghost").await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_category_filter() {
        let meds = api().get_by_category(Category::Medicines).await.unwrap();
        assert!(meds.iter().all(|p| p.category == Category::Medicines));
        assert!(!meds.is_empty());
    }

    #[tokio::test]
    async fn test_search_matches_name_and_brand() {
        let by_name = api().search("aspirin").await.unwrap();
        assert_eq!(by_name.len(), 1);

        let by_brand = api().search("omron").await.unwrap();
        assert_eq!(by_brand.len(), 1);
        assert_eq!(by_brand[0].id, "bp-monitor");

        let none = api().search("zzz").await.unwrap();
        assert!(none.is_empty());
    }
}
