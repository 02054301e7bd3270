//! Menu page controller.
//!
//! Owns the live search/filter state, the cart modal, and the cart itself.
//! The menu list is always recomputed from the full catalog, so filters
//! never compound on a previous result.

use askama::Template;

use daily_grind_core::ProductId;

use crate::cart::CartStore;
use crate::catalog::Catalog;
use crate::search::{CategoryFilter, filter_products};
use crate::views::{CartItemsTemplate, CartSummaryTemplate, MenuListTemplate, Notice};

/// Re-rendered cart fragments after a cart mutation, plus any notice.
#[derive(Debug)]
pub struct CartUpdate {
    /// The count/total summary fragment (badge, header total, modal total).
    pub summary: String,
    /// The cart panel fragment.
    pub items: String,
    /// User-facing notice, when the interaction warrants one.
    pub notice: Option<Notice>,
}

/// The menu page: filterable catalog list plus the cart modal.
#[derive(Debug)]
pub struct MenuPage {
    catalog: Catalog,
    cart: CartStore,
    search_term: String,
    category: CategoryFilter,
    cart_open: bool,
}

impl MenuPage {
    /// Create the page over a shared catalog and a loaded cart.
    #[must_use]
    pub fn new(catalog: Catalog, cart: CartStore) -> Self {
        Self {
            catalog,
            cart,
            search_term: String::new(),
            category: CategoryFilter::All,
            cart_open: false,
        }
    }

    /// The menu list for the current search term and category.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment fails to render.
    pub fn render_menu(&self) -> askama::Result<String> {
        let filtered = filter_products(&self.catalog, &self.search_term, &self.category);
        MenuListTemplate::from_products(&filtered).render()
    }

    /// The count/total summary fragment.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment fails to render.
    pub fn render_summary(&self) -> askama::Result<String> {
        CartSummaryTemplate::from_cart(&self.cart).render()
    }

    /// The cart panel fragment.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment fails to render.
    pub fn render_cart_items(&self) -> askama::Result<String> {
        CartItemsTemplate::from_cart(&self.cart).render()
    }

    /// Keystroke in the search field: update the term, re-render the menu.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment fails to render.
    pub fn search_changed(&mut self, term: &str) -> askama::Result<String> {
        self.search_term = term.to_owned();
        self.render_menu()
    }

    /// Category selector change: update the filter, re-render the menu.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment fails to render.
    pub fn category_changed(&mut self, selection: &str) -> askama::Result<String> {
        self.category = CategoryFilter::from(selection);
        self.render_menu()
    }

    /// Add-to-cart control activated for the product with `id`.
    ///
    /// Persists before rendering. A known id yields an
    /// [`Notice::AddedToCart`] naming the product; an unknown id refreshes
    /// the fragments without a notice.
    ///
    /// # Errors
    ///
    /// Returns an error if a fragment fails to render.
    pub fn add_to_cart(&mut self, id: ProductId) -> askama::Result<CartUpdate> {
        let added = self.cart.add(id, &self.catalog);

        Ok(CartUpdate {
            summary: self.render_summary()?,
            items: self.render_cart_items()?,
            notice: added.map(|product| Notice::AddedToCart(product.name)),
        })
    }

    /// Open the cart modal and return a fresh cart panel fragment.
    ///
    /// # Errors
    ///
    /// Returns an error if the fragment fails to render.
    pub fn open_cart(&mut self) -> askama::Result<String> {
        self.cart_open = true;
        self.render_cart_items()
    }

    /// Close the cart modal (close control or backdrop click).
    pub fn close_cart(&mut self) {
        self.cart_open = false;
    }

    /// Checkout control activated.
    ///
    /// A non-empty cart places the order: the cart is cleared and
    /// persisted, the modal closes, and the notice carries the order
    /// total. An empty cart changes nothing and returns
    /// [`Notice::CartEmpty`].
    ///
    /// # Errors
    ///
    /// Returns an error if a fragment fails to render.
    pub fn checkout(&mut self) -> askama::Result<CartUpdate> {
        if self.cart.is_empty() {
            return Ok(CartUpdate {
                summary: self.render_summary()?,
                items: self.render_cart_items()?,
                notice: Some(Notice::CartEmpty),
            });
        }

        let total = self.cart.total();
        self.cart.clear();
        self.cart_open = false;

        Ok(CartUpdate {
            summary: self.render_summary()?,
            items: self.render_cart_items()?,
            notice: Some(Notice::OrderPlaced { total }),
        })
    }

    /// The cart, for read access.
    #[must_use]
    pub const fn cart(&self) -> &CartStore {
        &self.cart
    }

    /// Whether the cart modal is open.
    #[must_use]
    pub const fn cart_open(&self) -> bool {
        self.cart_open
    }

    /// The current search term.
    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The current category filter.
    #[must_use]
    pub const fn category(&self) -> &CategoryFilter {
        &self.category
    }
}
