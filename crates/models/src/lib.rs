//! SeaORM entities and thin data-access helpers for kitchenpos tables.
//!
//! Helpers take any `ConnectionTrait` so they run the same on a pooled
//! connection or inside an open `DatabaseTransaction`.

pub mod errors;
pub mod db;
pub mod product;
pub mod menu_group;
pub mod menu;
pub mod menu_item;

#[cfg(test)]
mod tests;
