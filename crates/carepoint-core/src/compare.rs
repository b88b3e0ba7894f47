//! # Compare List
//!
//! Side-by-side product comparison with two hard invariants:
//!
//! 1. Every entry shares one category (the first item fixes it)
//! 2. Never more than [`MAX_COMPARE_ITEMS`] entries
//!
//! ## Invariant Enforcement
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  add(product)                                                           │
//! │       │                                                                 │
//! │       ├── already on list? ──────► Err(AlreadyInCompare)                │
//! │       │                                                                 │
//! │       ├── category ≠ list's? ────► Err(CompareCategoryMismatch)         │
//! │       │                                                                 │
//! │       ├── len == 4? ─────────────► Err(CompareListFull)                 │
//! │       │                                                                 │
//! │       └── OK ────────────────────► push snapshot                        │
//! │                                                                         │
//! │  Violations are typed errors, not panics: the storefront surfaces       │
//! │  them as soft {success, message} responses at the command boundary.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::types::{Category, Product};
use crate::MAX_COMPARE_ITEMS;

/// A compare entry: a frozen product snapshot with its category attached.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CompareItem {
    pub product_id: String,
    pub name: String,
    pub brand: String,
    pub category: Category,
    pub image: String,
    pub price_cents: i64,
    pub discounted_price_cents: i64,
    pub mrp_cents: i64,
    pub prescription_required: bool,
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

impl CompareItem {
    pub fn from_product(product: &Product) -> Self {
        CompareItem {
            product_id: product.id.clone(),
            name: product.name.clone(),
            brand: product.brand.clone(),
            category: product.category,
            image: product.image.clone(),
            price_cents: product.price_cents,
            discounted_price_cents: product.discounted_price_cents,
            mrp_cents: product.mrp_cents,
            prescription_required: product.prescription_required,
            added_at: Utc::now(),
        }
    }
}

/// The comparison list.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CompareList {
    pub items: Vec<CompareItem>,
}

impl CompareList {
    pub fn new() -> Self {
        CompareList { items: Vec::new() }
    }

    /// The category the list is locked to, if any item is present.
    pub fn category(&self) -> Option<Category> {
        self.items.first().map(|i| i.category)
    }

    /// Adds a product snapshot, enforcing both invariants.
    ///
    /// ## Errors
    /// - [`CoreError::AlreadyInCompare`] - duplicate product id
    /// - [`CoreError::CompareCategoryMismatch`] - category differs from the
    ///   list's fixed category
    /// - [`CoreError::CompareListFull`] - list already holds 4 entries
    pub fn add(&mut self, product: &Product) -> CoreResult<()> {
        if self.contains(&product.id) {
            return Err(CoreError::AlreadyInCompare(product.id.clone()));
        }

        if let Some(category) = self.category() {
            if category != product.category {
                return Err(CoreError::CompareCategoryMismatch {
                    expected: category.to_string(),
                    found: product.category.to_string(),
                });
            }
        }

        if self.items.len() >= MAX_COMPARE_ITEMS {
            return Err(CoreError::CompareListFull {
                max: MAX_COMPARE_ITEMS,
            });
        }

        self.items.push(CompareItem::from_product(product));
        Ok(())
    }

    /// Removes an entry by product id.
    ///
    /// Removing the last entry unlocks the category for the next add.
    pub fn remove(&mut self, product_id: &str) -> CoreResult<()> {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product_id != product_id);

        if self.items.len() == initial_len {
            Err(CoreError::ProductNotFound(product_id.to_string()))
        } else {
            Ok(())
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.items.iter().any(|i| i.product_id == product_id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn product_in(id: &str, category: Category) -> Product {
        let mut p = Product::sample(id, 1000);
        p.category = category;
        p
    }

    #[test]
    fn test_first_item_fixes_category() {
        let mut list = CompareList::new();
        assert_eq!(list.category(), None);

        list.add(&product_in("1", Category::Devices)).unwrap();
        assert_eq!(list.category(), Some(Category::Devices));

        let err = list
            .add(&product_in("2", Category::Medicines))
            .unwrap_err();
        assert!(matches!(err, CoreError::CompareCategoryMismatch { .. }));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_capacity_is_four() {
        let mut list = CompareList::new();
        for i in 0..4 {
            list.add(&product_in(&i.to_string(), Category::Devices))
                .unwrap();
        }

        let err = list.add(&product_in("4", Category::Devices)).unwrap_err();
        assert!(matches!(err, CoreError::CompareListFull { max: 4 }));
        assert_eq!(list.len(), 4);
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut list = CompareList::new();
        let product = product_in("1", Category::Devices);

        list.add(&product).unwrap();
        let err = list.add(&product).unwrap_err();
        assert!(matches!(err, CoreError::AlreadyInCompare(_)));
    }

    #[test]
    fn test_clearing_unlocks_category() {
        let mut list = CompareList::new();
        list.add(&product_in("1", Category::Devices)).unwrap();

        list.clear();
        assert_eq!(list.category(), None);

        // A different category is fine after the reset
        list.add(&product_in("2", Category::Medicines)).unwrap();
        assert_eq!(list.category(), Some(Category::Medicines));
    }

    #[test]
    fn test_removing_last_entry_unlocks_category() {
        let mut list = CompareList::new();
        list.add(&product_in("1", Category::Devices)).unwrap();
        list.remove("1").unwrap();

        list.add(&product_in("2", Category::BabyCare)).unwrap();
        assert_eq!(list.category(), Some(Category::BabyCare));
    }
}
