use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::menu::repo::seaorm::SeaOrmMenuRepository;
use service::menu::repository::{mock::MockMenuRepository, MenuPersistence};
use service::menu::MenuService;
use service::menu_group::repo::seaorm::SeaOrmMenuGroupRepository;
use service::menu_group::repository::{mock::MockMenuGroupRepository, MenuGroupRepository};
use service::menu_group::MenuGroupService;
use service::product::repo::seaorm::SeaOrmProductRepository;
use service::product::repository::{mock::MockProductRepository, ProductRepository};
use service::product::ProductService;

pub type DynMenuService = MenuService<dyn ProductRepository, dyn MenuGroupRepository, dyn MenuPersistence>;

/// Services shared by every handler. Storage is chosen once at startup.
#[derive(Clone)]
pub struct ServerState {
    pub products: Arc<ProductService<dyn ProductRepository>>,
    pub menu_groups: Arc<MenuGroupService<dyn MenuGroupRepository>>,
    pub menus: Arc<DynMenuService>,
}

impl ServerState {
    pub fn new(
        products: Arc<dyn ProductRepository>,
        menu_groups: Arc<dyn MenuGroupRepository>,
        menus: Arc<dyn MenuPersistence>,
    ) -> Self {
        Self {
            products: Arc::new(ProductService::new(Arc::clone(&products))),
            menu_groups: Arc::new(MenuGroupService::new(Arc::clone(&menu_groups))),
            menus: Arc::new(MenuService::new(products, menu_groups, menus)),
        }
    }

    /// PostgreSQL-backed repositories sharing one pool.
    pub fn seaorm(db: DatabaseConnection) -> Self {
        Self::new(
            Arc::new(SeaOrmProductRepository { db: db.clone() }),
            Arc::new(SeaOrmMenuGroupRepository { db: db.clone() }),
            Arc::new(SeaOrmMenuRepository { db }),
        )
    }

    /// Process-local storage; state is lost on exit.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(MockProductRepository::default()),
            Arc::new(MockMenuGroupRepository::default()),
            Arc::new(MockMenuRepository::default()),
        )
    }
}
