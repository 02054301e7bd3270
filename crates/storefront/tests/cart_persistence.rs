//! Persistence behavior across simulated page loads and process runs.

#![allow(clippy::unwrap_used)]

use daily_grind_core::ProductId;
use daily_grind_storefront::Storefront;
use daily_grind_storefront::cart::{CART_STORAGE_KEY, CartStore};
use daily_grind_storefront::catalog::{Catalog, Product};
use daily_grind_storefront::storage::{FileStorage, KeyValueStorage, MemoryStorage};

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "daily_grind_storefront=debug".into());
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

#[test]
fn cart_round_trips_through_storage_in_order() {
    init_tracing();
    let catalog = Catalog::house_menu();
    let storage = MemoryStorage::new();

    let mut cart = CartStore::load(Box::new(storage.clone()));
    for id in [2, 5, 2, 6, 1] {
        cart.add(ProductId::new(id), &catalog);
    }
    let before: Vec<Product> = cart.entries().to_vec();

    let reloaded = CartStore::load(Box::new(storage));
    assert_eq!(reloaded.entries(), before.as_slice());
    assert_eq!(reloaded.count(), 5);
    assert_eq!(reloaded.total(), cart.total());
}

#[test]
fn cart_survives_a_process_restart_on_disk() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("storage.json");
    let catalog = Catalog::house_menu();

    {
        let mut cart = CartStore::load(Box::new(FileStorage::new(&path)));
        cart.add(ProductId::new(3), &catalog);
        cart.add(ProductId::new(4), &catalog);
    }

    // A brand-new handle on the same file restores both entries
    let cart = CartStore::load(Box::new(FileStorage::new(&path)));
    assert_eq!(cart.count(), 2);
    assert_eq!(cart.total().to_string(), "8.75");
}

#[test]
fn malformed_persisted_cart_degrades_to_empty() {
    init_tracing();
    let mut storage = MemoryStorage::new();
    storage
        .set(CART_STORAGE_KEY, "[{\"id\": \"not a number\"}]")
        .unwrap();

    let cart = CartStore::load(Box::new(storage));
    assert!(cart.is_empty());
    assert_eq!(cart.total().to_string(), "0.00");
}

#[test]
fn checkout_persists_the_empty_state() {
    init_tracing();
    let storage = MemoryStorage::new();

    let mut store = Storefront::boot(Box::new(storage.clone()));
    store.menu.add_to_cart(ProductId::new(2)).unwrap();
    store.menu.add_to_cart(ProductId::new(5)).unwrap();
    store.menu.checkout().unwrap();

    assert_eq!(storage.get(CART_STORAGE_KEY).as_deref(), Some("[]"));

    // The next page load starts from the persisted empty cart
    let next_load = Storefront::boot(Box::new(storage));
    assert_eq!(next_load.menu.cart().count(), 0);
}

#[test]
fn latest_mutation_wins_on_reload() {
    init_tracing();
    let storage = MemoryStorage::new();
    let catalog = Catalog::house_menu();

    let mut cart = CartStore::load(Box::new(storage.clone()));
    cart.add(ProductId::new(1), &catalog);
    cart.add(ProductId::new(2), &catalog);
    cart.clear();
    cart.add(ProductId::new(6), &catalog);

    let reloaded = CartStore::load(Box::new(storage));
    assert_eq!(reloaded.count(), 1);
    assert_eq!(reloaded.entries().first().unwrap().name, "Scone");
}
