//! View fragments rendered from storefront state.
//!
//! Rendering is a pure projection: a view struct is built from domain state
//! and an Askama template turns it into an HTML fragment that fully
//! replaces the target container's children. Interpolated strings go
//! through Askama's default HTML escaping.

use core::fmt;

use askama::Template;

use daily_grind_core::{Price, ProductId};

use crate::cart::CartStore;
use crate::catalog::Product;
use crate::contact::{ContactForm, ValidationReport};
use crate::filters;

/// A user-facing notice, the alert-box analog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// A product was added to the cart.
    AddedToCart(String),
    /// Checkout succeeded and the cart was emptied.
    OrderPlaced {
        /// Order total at the moment of checkout.
        total: Price,
    },
    /// Checkout was attempted on an empty cart.
    CartEmpty,
    /// The contact form passed validation.
    MessageSent,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AddedToCart(name) => write!(f, "{name} added to cart!"),
            Self::OrderPlaced { total } => {
                write!(f, "Order placed! Total: ${total}. Thank you!")
            }
            Self::CartEmpty => {
                f.write_str("Your cart is empty. Please add items before checking out.")
            }
            Self::MessageSent => f.write_str("Thanks for your message! We'll be in touch soon."),
        }
    }
}

/// One product row in the menu list.
#[derive(Debug, Clone)]
pub struct MenuItemView {
    pub id: ProductId,
    pub name: String,
    pub category: String,
    pub price: Price,
}

impl From<&Product> for MenuItemView {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            category: product.category.to_string(),
            price: product.price,
        }
    }
}

/// The menu list fragment: one entry per (possibly filtered) product, each
/// with an add-to-cart control tagged with the product id.
#[derive(Template)]
#[template(path = "partials/menu_list.html")]
pub struct MenuListTemplate {
    pub items: Vec<MenuItemView>,
}

impl MenuListTemplate {
    /// Build the fragment for a filtered product list.
    #[must_use]
    pub fn from_products(products: &[&Product]) -> Self {
        Self {
            items: products.iter().copied().map(MenuItemView::from).collect(),
        }
    }
}

/// One entry line in the cart panel.
#[derive(Debug, Clone)]
pub struct CartLineView {
    pub name: String,
    pub price: Price,
}

/// The cart panel fragment: entry lines, or the empty-cart placeholder.
#[derive(Template)]
#[template(path = "partials/cart_items.html")]
pub struct CartItemsTemplate {
    pub lines: Vec<CartLineView>,
}

impl CartItemsTemplate {
    /// Build the fragment from the cart's current entries.
    #[must_use]
    pub fn from_cart(cart: &CartStore) -> Self {
        Self {
            lines: cart
                .entries()
                .iter()
                .map(|entry| CartLineView {
                    name: entry.name.clone(),
                    price: entry.price,
                })
                .collect(),
        }
    }
}

/// The cart summary fragment: header badge, header total, and modal total,
/// all rendered from one `(count, total)` pair so they always agree.
#[derive(Template)]
#[template(path = "partials/cart_summary.html")]
pub struct CartSummaryTemplate {
    pub count: usize,
    pub total: Price,
}

impl CartSummaryTemplate {
    /// Build the fragment from the cart's current state.
    #[must_use]
    pub fn from_cart(cart: &CartStore) -> Self {
        Self {
            count: cart.count(),
            total: cart.total(),
        }
    }
}

/// The featured item named by the special banner.
#[derive(Debug, Clone)]
pub struct SpecialView {
    pub name: String,
    pub price: Price,
}

impl From<&Product> for SpecialView {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            price: product.price,
        }
    }
}

/// The home-page special banner; hidden when `special` is `None`.
#[derive(Template)]
#[template(path = "partials/special_banner.html")]
pub struct SpecialBannerTemplate {
    pub special: Option<SpecialView>,
}

/// The team panel and its toggle button; the button label reflects the
/// current visibility.
#[derive(Template)]
#[template(path = "partials/team_panel.html")]
pub struct TeamPanelTemplate {
    pub visible: bool,
}

/// The contact form fragment: current field values plus one error slot per
/// field. Slots for passing fields render empty and hidden.
#[derive(Template)]
#[template(path = "partials/contact_form.html")]
pub struct ContactFormTemplate {
    pub form: ContactForm,
    pub errors: ValidationReport,
}
