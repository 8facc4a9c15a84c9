//! Migrator registering kitchenpos tables in dependency order.
//! Indexes are applied last.
pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_product;
mod m20240101_000002_create_menu_group;
mod m20240101_000003_create_menu;
mod m20240101_000004_create_menu_item;
mod m20240101_000005_add_indexes;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_product::Migration),
            Box::new(m20240101_000002_create_menu_group::Migration),
            Box::new(m20240101_000003_create_menu::Migration),
            Box::new(m20240101_000004_create_menu_item::Migration),
            // Indexes should always be applied last
            Box::new(m20240101_000005_add_indexes::Migration),
        ]
    }
}
