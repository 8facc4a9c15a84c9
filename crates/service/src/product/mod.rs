//! Products: sellable units with an exact decimal price.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::ProductService;
