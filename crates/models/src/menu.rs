use sea_orm::{entity::prelude::*, NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, menu_group, menu_item};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menu")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    #[sea_orm(column_type = "Decimal(Some((19, 2)))")]
    pub price: Decimal,
    pub menu_group_id: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { MenuGroup, MenuItem }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::MenuGroup => Entity::belongs_to(menu_group::Entity)
                .from(Column::MenuGroupId)
                .to(menu_group::Column::Id)
                .into(),
            Relation::MenuItem => Entity::has_many(menu_item::Entity).into(),
        }
    }
}

impl Related<menu_item::Entity> for Entity {
    fn to() -> RelationDef { Relation::MenuItem.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, name: &str, price: Decimal, menu_group_id: i64) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        price: Set(price),
        menu_group_id: Set(menu_group_id),
    };
    am.insert(db).await.map_err(Into::into)
}

/// All menus in insertion order.
pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find().order_by_asc(Column::Id).all(db).await.map_err(Into::into)
}
