use std::collections::HashMap;

use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DatabaseTransaction, TransactionTrait};

use crate::errors::ServiceError;
use crate::menu::domain::{Menu, MenuItem, NewMenu, NewMenuItem};
use crate::menu::repository::{MenuPersistence, MenuUnitOfWork};

pub struct SeaOrmMenuRepository {
    pub db: DatabaseConnection,
}

/// One database transaction; dropping it uncommitted rolls back.
struct SeaOrmMenuUnitOfWork {
    txn: DatabaseTransaction,
}

#[async_trait]
impl MenuUnitOfWork for SeaOrmMenuUnitOfWork {
    async fn save(&mut self, menu: NewMenu) -> Result<Menu, ServiceError> {
        let created = models::menu::create(&self.txn, &menu.name, menu.price, menu.menu_group_id).await?;
        Ok(created.into())
    }

    async fn save_item(&mut self, item: NewMenuItem) -> Result<MenuItem, ServiceError> {
        let created = models::menu_item::create(&self.txn, item.menu_id, item.product_id, item.quantity).await?;
        Ok(created.into())
    }

    async fn commit(self: Box<Self>) -> Result<(), ServiceError> {
        self.txn.commit().await?;
        Ok(())
    }
}

#[async_trait]
impl MenuPersistence for SeaOrmMenuRepository {
    async fn begin(&self) -> Result<Box<dyn MenuUnitOfWork>, ServiceError> {
        let txn = self.db.begin().await?;
        Ok(Box::new(SeaOrmMenuUnitOfWork { txn }))
    }

    async fn find_all(&self) -> Result<Vec<Menu>, ServiceError> {
        // Read headers and items from the same snapshot
        let txn = self.db.begin().await?;
        let headers = models::menu::find_all(&txn).await?;
        let rows = models::menu_item::find_all(&txn).await?;
        txn.commit().await?;

        let mut items: HashMap<i64, Vec<MenuItem>> = HashMap::new();
        for row in rows {
            items.entry(row.menu_id).or_default().push(row.into());
        }
        Ok(headers
            .into_iter()
            .map(|h| {
                let mut menu = Menu::from(h);
                menu.items = items.remove(&menu.id).unwrap_or_default();
                menu
            })
            .collect())
    }
}
