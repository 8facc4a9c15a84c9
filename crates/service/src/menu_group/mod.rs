//! Menu groups: named categories a menu belongs to.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::MenuGroupService;
