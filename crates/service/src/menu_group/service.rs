use std::sync::Arc;

use tracing::{info, instrument};

use super::domain::{CreateMenuGroupInput, MenuGroup};
use super::repository::MenuGroupRepository;
use crate::errors::{ServiceError, Violation};

pub struct MenuGroupService<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: MenuGroupRepository + ?Sized> MenuGroupService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self, input), fields(name = %input.name))]
    pub async fn create(&self, input: CreateMenuGroupInput) -> Result<MenuGroup, ServiceError> {
        let name = input.name.trim();
        if name.is_empty() {
            return Err(Violation::BlankName.into());
        }
        let group = self.repo.save(name).await?;
        info!(menu_group_id = group.id, "menu_group_created");
        Ok(group)
    }

    pub async fn list(&self) -> Result<Vec<MenuGroup>, ServiceError> {
        self.repo.find_all().await
    }
}
