//! The product catalog.
//!
//! The catalog is fixed for the lifetime of the storefront: it is built once
//! at startup and never mutated. It is held behind an [`Arc`] so every page
//! shares one copy.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use daily_grind_core::{Category, Price, ProductId};

/// Position of the daily special in the catalog order.
const DAILY_SPECIAL_INDEX: usize = 3;

/// A purchasable item.
///
/// Cart entries are serialized copies of this struct, so the persisted cart
/// format is exactly the product shape: id, name, price, category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub category: Category,
}

/// The immutable, ordered product list.
#[derive(Debug, Clone)]
pub struct Catalog {
    products: Arc<Vec<Product>>,
}

impl Catalog {
    /// Create a catalog from an ordered product list.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            products: Arc::new(products),
        }
    }

    /// The house menu the cafe ships with.
    #[must_use]
    pub fn house_menu() -> Self {
        Self::new(vec![
            item(1, "Espresso", 300, Category::Coffee),
            item(2, "Latte", 450, Category::Coffee),
            item(3, "Matcha Tea", 475, Category::Tea),
            item(4, "Cold Brew", 400, Category::Coffee),
            item(5, "Croissant", 250, Category::Pastry),
            item(6, "Scone", 325, Category::Pastry),
        ])
    }

    /// All products in catalog order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Look up a product by id.
    #[must_use]
    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    /// The featured item shown in the home-page special banner.
    ///
    /// Falls back to the first product for catalogs shorter than the
    /// featured position; `None` only for an empty catalog.
    #[must_use]
    pub fn daily_special(&self) -> Option<&Product> {
        self.products
            .get(DAILY_SPECIAL_INDEX)
            .or_else(|| self.products.first())
    }

    /// Number of products in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

fn item(id: u32, name: &str, cents: i64, category: Category) -> Product {
    Product {
        id: ProductId::new(id),
        name: name.to_owned(),
        price: Price::from_cents(cents),
        category,
    }
}
