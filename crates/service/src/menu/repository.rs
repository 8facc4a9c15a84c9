use async_trait::async_trait;

use super::domain::{Menu, MenuItem, NewMenu, NewMenuItem};
use crate::errors::ServiceError;

/// Writes belonging to one menu creation.
///
/// Nothing becomes visible to [`MenuPersistence::find_all`] until
/// [`commit`](MenuUnitOfWork::commit) succeeds. Dropping the unit of work
/// without committing discards every write made through it.
#[async_trait]
pub trait MenuUnitOfWork: Send {
    /// Insert the menu header and return it with its assigned id and no items.
    async fn save(&mut self, menu: NewMenu) -> Result<Menu, ServiceError>;
    /// Insert one item of a menu saved through this unit of work.
    async fn save_item(&mut self, item: NewMenuItem) -> Result<MenuItem, ServiceError>;
    async fn commit(self: Box<Self>) -> Result<(), ServiceError>;
}

/// Menu storage: atomic writes plus a full listing.
#[async_trait]
pub trait MenuPersistence: Send + Sync {
    async fn begin(&self) -> Result<Box<dyn MenuUnitOfWork>, ServiceError>;
    /// Every menu with its items, menus and items in insertion order.
    async fn find_all(&self) -> Result<Vec<Menu>, ServiceError>;
}

/// In-memory persistence for tests and doc examples
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use crate::storage::memory::MemoryTable;

    #[derive(Default)]
    struct Tables {
        menus: MemoryTable<Menu>,
        // Only used for its sequence; item rows live inside their menu.
        items: MemoryTable<MenuItem>,
    }

    #[derive(Default)]
    pub struct MockMenuRepository {
        tables: Arc<Tables>,
        begins: AtomicUsize,
        fail_item_at: Option<usize>,
    }

    impl MockMenuRepository {
        /// A repository whose `n`-th `save_item` (1-based) within a unit of work fails.
        pub fn failing_item_save(n: usize) -> Self {
            Self { fail_item_at: Some(n), ..Default::default() }
        }

        /// Number of units of work opened so far.
        pub fn begin_count(&self) -> usize {
            self.begins.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl MenuPersistence for MockMenuRepository {
        async fn begin(&self) -> Result<Box<dyn MenuUnitOfWork>, ServiceError> {
            self.begins.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(MockUnitOfWork {
                tables: Arc::clone(&self.tables),
                pending: Vec::new(),
                item_saves: 0,
                fail_item_at: self.fail_item_at,
            }))
        }

        async fn find_all(&self) -> Result<Vec<Menu>, ServiceError> {
            Ok(self.tables.menus.all().await)
        }
    }

    struct MockUnitOfWork {
        tables: Arc<Tables>,
        pending: Vec<Menu>,
        item_saves: usize,
        fail_item_at: Option<usize>,
    }

    #[async_trait]
    impl MenuUnitOfWork for MockUnitOfWork {
        async fn save(&mut self, menu: NewMenu) -> Result<Menu, ServiceError> {
            let saved = Menu {
                id: self.tables.menus.next_id(),
                name: menu.name,
                price: menu.price,
                menu_group_id: menu.menu_group_id,
                items: Vec::new(),
            };
            self.pending.push(saved.clone());
            Ok(saved)
        }

        async fn save_item(&mut self, item: NewMenuItem) -> Result<MenuItem, ServiceError> {
            self.item_saves += 1;
            if self.fail_item_at == Some(self.item_saves) {
                return Err(ServiceError::Persistence("injected item write failure".into()));
            }
            let menu = self
                .pending
                .iter_mut()
                .find(|m| m.id == item.menu_id)
                .ok_or_else(|| ServiceError::Persistence(format!("menu {} not saved in this unit of work", item.menu_id)))?;
            let saved = MenuItem {
                seq: self.tables.items.next_id(),
                menu_id: item.menu_id,
                product_id: item.product_id,
                quantity: item.quantity,
            };
            menu.items.push(saved.clone());
            Ok(saved)
        }

        async fn commit(self: Box<Self>) -> Result<(), ServiceError> {
            let this = *self;
            this.tables.menus.extend(this.pending).await;
            Ok(())
        }
    }
}
