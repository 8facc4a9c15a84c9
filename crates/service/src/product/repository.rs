use async_trait::async_trait;

use super::domain::{NewProduct, Product};
use crate::errors::ServiceError;

/// Read-only capability needed by menu creation.
#[async_trait]
pub trait ProductLookup: Send + Sync {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ServiceError>;
}

/// Full product persistence.
#[async_trait]
pub trait ProductRepository: ProductLookup {
    async fn save(&self, product: NewProduct) -> Result<Product, ServiceError>;
    async fn find_all(&self) -> Result<Vec<Product>, ServiceError>;
}

/// In-memory repository for tests and doc examples
pub mod mock {
    use super::*;
    use crate::storage::memory::MemoryTable;

    #[derive(Default)]
    pub struct MockProductRepository {
        rows: MemoryTable<Product>,
    }

    #[async_trait]
    impl ProductLookup for MockProductRepository {
        async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ServiceError> {
            Ok(self.rows.find(|p| p.id == id).await)
        }
    }

    #[async_trait]
    impl ProductRepository for MockProductRepository {
        async fn save(&self, product: NewProduct) -> Result<Product, ServiceError> {
            let p = Product { id: self.rows.next_id(), name: product.name, price: product.price };
            self.rows.push(p.clone()).await;
            Ok(p)
        }

        async fn find_all(&self) -> Result<Vec<Product>, ServiceError> {
            Ok(self.rows.all().await)
        }
    }
}
