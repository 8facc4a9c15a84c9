use async_trait::async_trait;

use super::domain::MenuGroup;
use crate::errors::ServiceError;

/// Existence check needed by menu creation.
#[async_trait]
pub trait MenuGroupLookup: Send + Sync {
    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError>;
}

#[async_trait]
pub trait MenuGroupRepository: MenuGroupLookup {
    async fn save(&self, name: &str) -> Result<MenuGroup, ServiceError>;
    async fn find_all(&self) -> Result<Vec<MenuGroup>, ServiceError>;
}

/// In-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use crate::storage::memory::MemoryTable;

    #[derive(Default)]
    pub struct MockMenuGroupRepository {
        rows: MemoryTable<MenuGroup>,
    }

    #[async_trait]
    impl MenuGroupLookup for MockMenuGroupRepository {
        async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
            Ok(self.rows.find(|g| g.id == id).await.is_some())
        }
    }

    #[async_trait]
    impl MenuGroupRepository for MockMenuGroupRepository {
        async fn save(&self, name: &str) -> Result<MenuGroup, ServiceError> {
            let g = MenuGroup { id: self.rows.next_id(), name: name.to_string() };
            self.rows.push(g.clone()).await;
            Ok(g)
        }

        async fn find_all(&self) -> Result<Vec<MenuGroup>, ServiceError> {
            Ok(self.rows.all().await)
        }
    }
}
