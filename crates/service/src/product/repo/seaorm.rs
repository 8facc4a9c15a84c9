use sea_orm::{DatabaseConnection, EntityTrait};

use crate::errors::ServiceError;
use crate::product::domain::{NewProduct, Product};
use crate::product::repository::{ProductLookup, ProductRepository};

pub struct SeaOrmProductRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl ProductLookup for SeaOrmProductRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, ServiceError> {
        let res = models::product::Entity::find_by_id(id).one(&self.db).await?;
        Ok(res.map(Product::from))
    }
}

#[async_trait::async_trait]
impl ProductRepository for SeaOrmProductRepository {
    async fn save(&self, product: NewProduct) -> Result<Product, ServiceError> {
        let created = models::product::create(&self.db, &product.name, product.price).await?;
        Ok(created.into())
    }

    async fn find_all(&self) -> Result<Vec<Product>, ServiceError> {
        let rows = models::product::find_all(&self.db).await?;
        Ok(rows.into_iter().map(Product::from).collect())
    }
}
