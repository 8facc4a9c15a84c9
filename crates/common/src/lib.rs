//! Pieces shared by every kitchenpos crate: wire-level health type and logging setup.

pub mod types;
pub mod utils;
