//! Storefront assembly.
//!
//! Wires catalog + storage into the three page controllers, the way a page
//! load does: restore the cart from persisted storage first, then build the
//! pages over one shared catalog.

use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::pages::{ContactPage, HomePage, MenuPage};
use crate::storage::KeyValueStorage;

/// The whole storefront: one controller per page.
#[derive(Debug)]
pub struct Storefront {
    pub home: HomePage,
    pub menu: MenuPage,
    pub contact: ContactPage,
}

impl Storefront {
    /// Boot the storefront over the house menu.
    #[must_use]
    pub fn boot(storage: Box<dyn KeyValueStorage>) -> Self {
        Self::with_catalog(Catalog::house_menu(), storage)
    }

    /// Boot the storefront over a custom catalog.
    #[must_use]
    pub fn with_catalog(catalog: Catalog, storage: Box<dyn KeyValueStorage>) -> Self {
        let cart = CartStore::load(storage);
        tracing::info!(items = cart.count(), "storefront booted");

        Self {
            home: HomePage::new(catalog.clone()),
            menu: MenuPage::new(catalog, cart),
            contact: ContactPage::new(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_boot_with_empty_storage() {
        let store = Storefront::boot(Box::new(MemoryStorage::new()));
        assert_eq!(store.menu.cart().count(), 0);
        assert!(!store.home.special_visible());
    }

    #[test]
    fn test_boot_restores_persisted_cart() {
        let storage = MemoryStorage::new();

        let mut first_load = Storefront::boot(Box::new(storage.clone()));
        first_load
            .menu
            .add_to_cart(daily_grind_core::ProductId::new(2))
            .unwrap();

        let second_load = Storefront::boot(Box::new(storage));
        assert_eq!(second_load.menu.cart().count(), 1);
        assert_eq!(second_load.menu.cart().total().to_string(), "4.50");
    }
}
