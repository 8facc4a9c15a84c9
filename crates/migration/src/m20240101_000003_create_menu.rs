//! Create `menu` table with FK to `menu_group`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Menu::Table)
                    .if_not_exists()
                    .col(big_integer(Menu::Id).primary_key().auto_increment())
                    .col(string_len(Menu::Name, 255).not_null())
                    .col(decimal_len(Menu::Price, 19, 2).not_null())
                    .col(big_integer(Menu::MenuGroupId).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_menu_group")
                            .from(Menu::Table, Menu::MenuGroupId)
                            .to(MenuGroup::Table, MenuGroup::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Menu::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Menu { Table, Id, Name, Price, MenuGroupId }

#[derive(DeriveIden)]
enum MenuGroup { Table, Id }
