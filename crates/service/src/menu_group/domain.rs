use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateMenuGroupInput {
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuGroup {
    pub id: i64,
    pub name: String,
}

impl From<models::menu_group::Model> for MenuGroup {
    fn from(m: models::menu_group::Model) -> Self {
        Self { id: m.id, name: m.name }
    }
}
