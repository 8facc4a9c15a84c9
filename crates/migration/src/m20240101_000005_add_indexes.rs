use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Menu listing loads items per menu
        manager
            .create_index(
                Index::create()
                    .name("idx_menu_item_menu")
                    .table(MenuItem::Table)
                    .col(MenuItem::MenuId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_menu_menu_group")
                    .table(Menu::Table)
                    .col(Menu::MenuGroupId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("idx_menu_menu_group").table(Menu::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_menu_item_menu").table(MenuItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum MenuItem { Table, MenuId }

#[derive(DeriveIden)]
enum Menu { Table, MenuGroupId }
