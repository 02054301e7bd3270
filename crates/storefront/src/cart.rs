//! The shopping cart store.
//!
//! The cart is an ordered sequence of product copies; adding the same
//! product twice yields two entries (repetition is the quantity). Persisted
//! storage is the source of truth: the in-memory sequence is rebuilt from
//! storage at load, and every mutation is written back before the caller
//! renders anything that depends on it.

use core::fmt;

use daily_grind_core::{Price, ProductId};

use crate::catalog::{Catalog, Product};
use crate::storage::KeyValueStorage;

/// Storage slot holding the serialized cart.
pub const CART_STORAGE_KEY: &str = "shoppingCart";

/// The persisted shopping cart.
pub struct CartStore {
    entries: Vec<Product>,
    storage: Box<dyn KeyValueStorage>,
}

impl CartStore {
    /// Rebuild the cart from persisted storage.
    ///
    /// Missing or malformed persisted content yields an empty cart; the
    /// malformed case is logged and never surfaced to the caller.
    #[must_use]
    pub fn load(storage: Box<dyn KeyValueStorage>) -> Self {
        let entries = storage.get(CART_STORAGE_KEY).map_or_else(Vec::new, |raw| {
            serde_json::from_str(&raw).unwrap_or_else(|error| {
                tracing::warn!(%error, "persisted cart is malformed, starting empty");
                Vec::new()
            })
        });

        Self { entries, storage }
    }

    /// Add the catalog product with `id` to the cart and persist.
    ///
    /// Returns a copy of the added product so the caller can surface a
    /// confirmation notice. An id not present in the catalog is a silent
    /// no-op returning `None`.
    pub fn add(&mut self, id: ProductId, catalog: &Catalog) -> Option<Product> {
        let Some(product) = catalog.find(id) else {
            tracing::debug!(%id, "ignoring add-to-cart for unknown product id");
            return None;
        };

        let product = product.clone();
        self.entries.push(product.clone());
        self.persist();
        tracing::debug!(%id, name = %product.name, count = self.entries.len(), "added to cart");
        Some(product)
    }

    /// Empty the cart and persist the empty state.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.persist();
        tracing::debug!("cart cleared");
    }

    /// Sum of all entry prices.
    ///
    /// `Display` on the returned [`Price`] gives the two-decimal total
    /// (`"0.00"` for an empty cart).
    #[must_use]
    pub fn total(&self) -> Price {
        self.entries.iter().map(|entry| entry.price).sum()
    }

    /// Number of entries (duplicates counted individually).
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Whether the cart has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries in insertion order.
    #[must_use]
    pub fn entries(&self) -> &[Product] {
        &self.entries
    }

    /// Write the current sequence to storage.
    ///
    /// A failed write is logged and otherwise ignored; the next successful
    /// mutation rewrites the whole sequence.
    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.entries) {
            Ok(json) => json,
            Err(error) => {
                tracing::error!(%error, "failed to serialize cart");
                return;
            }
        };

        if let Err(error) = self.storage.set(CART_STORAGE_KEY, &json) {
            tracing::error!(%error, "failed to persist cart");
        }
    }
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::{KeyValueStorage, MemoryStorage};

    fn empty_cart() -> (CartStore, MemoryStorage) {
        let storage = MemoryStorage::new();
        let cart = CartStore::load(Box::new(storage.clone()));
        (cart, storage)
    }

    #[test]
    fn test_load_from_empty_storage() {
        let (cart, _storage) = empty_cart();
        assert_eq!(cart.count(), 0);
        assert_eq!(cart.total().to_string(), "0.00");
    }

    #[test]
    fn test_load_from_malformed_storage() {
        let mut storage = MemoryStorage::new();
        storage.set(CART_STORAGE_KEY, "{{definitely not json").unwrap();

        let cart = CartStore::load(Box::new(storage));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_add_known_product() {
        let catalog = Catalog::house_menu();
        let (mut cart, _storage) = empty_cart();

        let added = cart.add(ProductId::new(2), &catalog).unwrap();
        assert_eq!(added.name, "Latte");
        assert_eq!(cart.count(), 1);
        assert_eq!(cart.total().to_string(), "4.50");
    }

    #[test]
    fn test_add_unknown_product_is_a_noop() {
        let catalog = Catalog::house_menu();
        let (mut cart, storage) = empty_cart();

        assert!(cart.add(ProductId::new(42), &catalog).is_none());
        assert_eq!(cart.count(), 0);
        // The no-op also never persisted anything
        assert_eq!(storage.get(CART_STORAGE_KEY), None);
    }

    #[test]
    fn test_duplicates_are_kept_as_repetition() {
        let catalog = Catalog::house_menu();
        let (mut cart, _storage) = empty_cart();

        cart.add(ProductId::new(1), &catalog);
        cart.add(ProductId::new(1), &catalog);
        assert_eq!(cart.count(), 2);
        assert_eq!(cart.total().to_string(), "6.00");
    }

    #[test]
    fn test_add_persists_before_returning() {
        let catalog = Catalog::house_menu();
        let (mut cart, storage) = empty_cart();

        cart.add(ProductId::new(5), &catalog);

        // A reload from the same storage sees the entry
        let reloaded = CartStore::load(Box::new(storage));
        assert_eq!(reloaded.count(), 1);
        assert_eq!(reloaded.entries().first().unwrap().name, "Croissant");
    }

    #[test]
    fn test_clear_persists_empty_state() {
        let catalog = Catalog::house_menu();
        let (mut cart, storage) = empty_cart();

        cart.add(ProductId::new(3), &catalog);
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(storage.get(CART_STORAGE_KEY).as_deref(), Some("[]"));
    }

    #[test]
    fn test_roundtrip_preserves_order_and_content() {
        let catalog = Catalog::house_menu();
        let (mut cart, storage) = empty_cart();

        for id in [2, 5, 2, 6] {
            cart.add(ProductId::new(id), &catalog);
        }
        let before: Vec<Product> = cart.entries().to_vec();

        let reloaded = CartStore::load(Box::new(storage));
        assert_eq!(reloaded.entries(), before.as_slice());
    }
}
