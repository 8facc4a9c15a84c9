//! Create `menu_item` table: product/quantity lines belonging to one menu.
//!
//! `seq` is the surrogate key; ascending `seq` is insertion order within a menu.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItem::Table)
                    .if_not_exists()
                    .col(big_integer(MenuItem::Seq).primary_key().auto_increment())
                    .col(big_integer(MenuItem::MenuId).not_null())
                    .col(big_integer(MenuItem::ProductId).not_null())
                    .col(big_integer(MenuItem::Quantity).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_item_menu")
                            .from(MenuItem::Table, MenuItem::MenuId)
                            .to(Menu::Table, Menu::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_item_product")
                            .from(MenuItem::Table, MenuItem::ProductId)
                            .to(Product::Table, Product::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(MenuItem::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum MenuItem { Table, Seq, MenuId, ProductId, Quantity }

#[derive(DeriveIden)]
enum Menu { Table, Id }

#[derive(DeriveIden)]
enum Product { Table, Id }
