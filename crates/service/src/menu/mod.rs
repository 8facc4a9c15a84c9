//! Menus: a fixed-price combination of products, created atomically with its items.
//!
//! [`service::MenuService`] validates a request against the product and menu
//! group lookups, then writes the menu and its items through one
//! [`repository::MenuUnitOfWork`]. Nothing is written unless every check passes.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::MenuService;
