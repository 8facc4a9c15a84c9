use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;
use crate::menu_group::domain::MenuGroup;
use crate::menu_group::repository::{MenuGroupLookup, MenuGroupRepository};

pub struct SeaOrmMenuGroupRepository {
    pub db: DatabaseConnection,
}

#[async_trait::async_trait]
impl MenuGroupLookup for SeaOrmMenuGroupRepository {
    async fn exists_by_id(&self, id: i64) -> Result<bool, ServiceError> {
        Ok(models::menu_group::exists(&self.db, id).await?)
    }
}

#[async_trait::async_trait]
impl MenuGroupRepository for SeaOrmMenuGroupRepository {
    async fn save(&self, name: &str) -> Result<MenuGroup, ServiceError> {
        Ok(models::menu_group::create(&self.db, name).await?.into())
    }

    async fn find_all(&self) -> Result<Vec<MenuGroup>, ServiceError> {
        let rows = models::menu_group::find_all(&self.db).await?;
        Ok(rows.into_iter().map(MenuGroup::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use sea_orm::EntityTrait;

    #[tokio::test]
    async fn menu_group_repository_round_trip() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let repo = SeaOrmMenuGroupRepository { db };

        let g = repo.save("new menus").await?;
        assert!(repo.exists_by_id(g.id).await?);
        assert!(repo.find_all().await?.contains(&g));

        models::menu_group::Entity::delete_by_id(g.id).exec(&repo.db).await?;
        assert!(!repo.exists_by_id(g.id).await?);
        Ok(())
    }
}
