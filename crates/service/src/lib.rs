//! Service layer for kitchenpos: products, menu groups and menus.
//! - Business rules live here; storage sits behind narrow repository traits.
//! - Each domain module has SeaORM adapters (`repo::seaorm`) and in-memory
//!   fakes (`repository::mock`) implementing the same traits.
//! - Errors are [`errors::ServiceError`]; rule violations carry a typed [`errors::Violation`].

pub mod errors;
pub mod storage;
pub mod product;
pub mod menu_group;
pub mod menu;
#[cfg(test)]
pub mod test_support;
