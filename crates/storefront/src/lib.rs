//! Daily Grind Storefront - page logic for the cafe site.
//!
//! # Architecture
//!
//! - [`catalog`] - the fixed six-item house menu
//! - [`storage`] - key-value persistence boundary (memory- and file-backed)
//! - [`cart`] - the persisted shopping cart
//! - [`search`] - catalog filtering by name and category
//! - [`contact`] - contact-form validation
//! - [`views`] - Askama templates projecting state into HTML fragments
//! - [`pages`] - one controller per page; each user interaction is one
//!   synchronous method call that returns the re-rendered fragment(s)
//!
//! Everything runs on the caller's thread: one interaction is handled to
//! completion before the next, and the cart is persisted before any
//! dependent fragment is rendered.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod contact;
pub mod filters;
pub mod pages;
pub mod search;
pub mod state;
pub mod storage;
pub mod views;

pub use state::Storefront;
