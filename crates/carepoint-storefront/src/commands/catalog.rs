//! # Catalog Commands
//!
//! Thin pass-through to the catalog service, mapping its errors into the
//! command error type. The storefront keeps no catalog cache; prices are
//! frozen into cart lines only when a product is added.

use tracing::debug;

use crate::error::StorefrontResult;
use crate::Storefront;
use carepoint_core::{Category, Product};

impl Storefront {
    /// Gets the complete catalog.
    pub async fn get_products(&self) -> StorefrontResult<Vec<Product>> {
        debug!("get_products command");
        Ok(self.products.get_all_products().await?)
    }

    /// Gets one product by id.
    pub async fn get_product(&self, product_id: &str) -> StorefrontResult<Product> {
        debug!(product_id = %product_id, "get_product command");
        Ok(self.products.get_product(product_id).await?)
    }

    /// Gets all products in one category.
    pub async fn get_products_by_category(
        &self,
        category: Category,
    ) -> StorefrontResult<Vec<Product>> {
        debug!(%category, "get_products_by_category command");
        Ok(self.products.get_by_category(category).await?)
    }

    /// Searches the catalog by name or brand.
    pub async fn search_products(&self, query: &str) -> StorefrontResult<Vec<Product>> {
        debug!(query = %query, "search_products command");
        Ok(self.products.search(query).await?)
    }
}
