//! End-to-end menu page interactions through a booted storefront.

#![allow(clippy::unwrap_used)]

use daily_grind_core::ProductId;
use daily_grind_storefront::Storefront;
use daily_grind_storefront::storage::MemoryStorage;
use daily_grind_storefront::views::Notice;

fn booted() -> Storefront {
    Storefront::boot(Box::new(MemoryStorage::new()))
}

#[test]
fn initial_menu_lists_all_six_items() {
    let store = booted();
    let html = store.menu.render_menu().unwrap();
    for name in ["Espresso", "Latte", "Matcha Tea", "Cold Brew", "Croissant", "Scone"] {
        assert!(html.contains(name), "menu should list {name}");
    }
}

#[test]
fn keystrokes_and_selector_changes_refilter_from_scratch() {
    let mut store = booted();

    // Type "latte" one keystroke at a time; every keyup re-filters
    for prefix in ["l", "la", "lat", "latt", "latte"] {
        store.menu.search_changed(prefix).unwrap();
    }
    let html = store.menu.render_menu().unwrap();
    assert!(html.contains("Latte"));
    assert!(!html.contains("Espresso"));

    // Switching to pastries with the stale term matches nothing
    let html = store.menu.category_changed("pastry").unwrap();
    assert!(!html.contains("Latte"));
    assert!(!html.contains("Croissant"));

    // Clearing the term shows the full pastry section
    let html = store.menu.search_changed("").unwrap();
    assert!(html.contains("Croissant"));
    assert!(html.contains("Scone"));
    assert!(!html.contains("Espresso"));
}

#[test]
fn add_to_cart_updates_every_summary_location() {
    let mut store = booted();

    let update = store.menu.add_to_cart(ProductId::new(2)).unwrap();
    assert_eq!(update.notice, Some(Notice::AddedToCart("Latte".to_owned())));

    // Badge and both totals come from the same fragment and agree
    assert!(update.summary.contains("id=\"cartCount\">1<"));
    assert_eq!(update.summary.matches("4.50").count(), 2);
}

#[test]
fn order_placement_journey() {
    let mut store = booted();

    store.menu.add_to_cart(ProductId::new(1)).unwrap();
    store.menu.add_to_cart(ProductId::new(5)).unwrap();

    let items = store.menu.open_cart().unwrap();
    assert!(store.menu.cart_open());
    assert!(items.contains("Espresso"));
    assert!(items.contains("Croissant"));

    let update = store.menu.checkout().unwrap();
    let Some(Notice::OrderPlaced { total }) = update.notice else {
        panic!("expected an order confirmation");
    };
    assert_eq!(total.to_string(), "5.50");
    assert_eq!(
        Notice::OrderPlaced { total }.to_string(),
        "Order placed! Total: $5.50. Thank you!"
    );

    assert!(!store.menu.cart_open());
    assert!(update.items.contains("Your cart is empty."));
}

#[test]
fn checkout_with_nothing_in_the_cart_is_refused() {
    let mut store = booted();
    let update = store.menu.checkout().unwrap();
    assert_eq!(update.notice, Some(Notice::CartEmpty));
    assert_eq!(
        update.notice.unwrap().to_string(),
        "Your cart is empty. Please add items before checking out."
    );
}

#[test]
fn summary_and_cart_panel_always_agree() {
    let mut store = booted();

    for id in [1, 2, 3] {
        store.menu.add_to_cart(ProductId::new(id)).unwrap();
    }

    let summary = store.menu.render_summary().unwrap();
    let expected_total = store.menu.cart().total().to_string();
    assert!(summary.contains("id=\"cartCount\">3<"));
    assert_eq!(summary.matches(&expected_total).count(), 2);

    let items = store.menu.render_cart_items().unwrap();
    assert_eq!(items.matches("cart-item").count(), 3);
}
