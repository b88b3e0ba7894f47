//! # Compare Commands
//!
//! Commands for the side-by-side comparison list.
//!
//! ## Soft Failures
//! Compare-list rule violations (duplicate, wrong category, list full)
//! are ordinary shopping feedback, not faults, so `add_to_compare`
//! reports them as a [`CompareOutcome`] the UI can toast instead of an
//! error the UI would have to catch. Catalog misses are still errors.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::StorefrontResult;
use crate::Storefront;
use carepoint_core::{CompareItem, CoreError};

/// Result of an add-to-compare attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompareOutcome {
    pub success: bool,
    pub message: String,
    pub items: Vec<CompareItem>,
}

impl Storefront {
    /// Gets the compare-list items.
    pub fn get_compare(&self) -> Vec<CompareItem> {
        debug!("get_compare command");
        self.compare.with_list(|c| c.items.clone())
    }

    /// Tries to add a product to the compare list.
    ///
    /// ## Errors
    /// Only when the product does not exist in the catalog. Rule
    /// violations come back as an unsuccessful [`CompareOutcome`].
    pub async fn add_to_compare(&self, product_id: &str) -> StorefrontResult<CompareOutcome> {
        debug!(product_id = %product_id, "add_to_compare command");

        let product = self.products.get_product(product_id).await?;

        let outcome = self.compare.with_list_mut(|list| {
            match list.add(&product) {
                Ok(()) => CompareOutcome {
                    success: true,
                    message: format!("{} added to comparison", product.name),
                    items: list.items.clone(),
                },
                Err(e) => CompareOutcome {
                    success: false,
                    message: e.to_string(),
                    items: list.items.clone(),
                },
            }
        });

        if outcome.success {
            self.persist_compare();
        }
        Ok(outcome)
    }

    /// Removes a product from the compare list.
    pub fn remove_from_compare(&self, product_id: &str) -> StorefrontResult<Vec<CompareItem>> {
        debug!(product_id = %product_id, "remove_from_compare command");

        let items = self.compare.with_list_mut(|list| {
            list.remove(product_id)?;
            Ok::<Vec<CompareItem>, CoreError>(list.items.clone())
        })?;

        self.persist_compare();
        Ok(items)
    }

    /// Clears the compare list.
    pub fn clear_compare(&self) {
        debug!("clear_compare command");
        self.compare.with_list_mut(|list| list.clear());
        self.persist_compare();
    }

    /// Writes the in-memory compare list through to the store.
    pub(crate) fn persist_compare(&self) {
        let result = self.compare.with_list(|c| self.store.compare().save(c));
        if let Err(e) = result {
            warn!(error = %e, "Compare persist failed; continuing with in-memory list");
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::tests::instant_storefront;

    #[tokio::test]
    async fn test_category_mismatch_is_soft() {
        let front = instant_storefront();

        assert!(front.add_to_compare("asp-500").await.unwrap().success);

        // bp-monitor is a device, the list is locked to medicines
        let outcome = front.add_to_compare("bp-monitor").await.unwrap();
        assert!(!outcome.success);
        assert_eq!(outcome.items.len(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_is_soft() {
        let front = instant_storefront();

        front.add_to_compare("asp-500").await.unwrap();
        let outcome = front.add_to_compare("asp-500").await.unwrap();
        assert!(!outcome.success);
    }

    #[tokio::test]
    async fn test_same_category_products_accumulate() {
        let front = instant_storefront();

        for id in ["asp-500", "amx-250", "ibf-400"] {
            assert!(front.add_to_compare(id).await.unwrap().success);
        }
        assert_eq!(front.get_compare().len(), 3);
    }

    #[tokio::test]
    async fn test_clear_unlocks_category() {
        let front = instant_storefront();

        front.add_to_compare("asp-500").await.unwrap();
        front.clear_compare();

        assert!(front.add_to_compare("bp-monitor").await.unwrap().success);
    }
}
