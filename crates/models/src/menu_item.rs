use sea_orm::{entity::prelude::*, NotSet, QueryOrder, Set};
use serde::{Deserialize, Serialize};

use crate::{errors, menu, product};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "menu_item")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub seq: i64,
    pub menu_id: i64,
    pub product_id: i64,
    pub quantity: i64,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { Menu, Product }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::Menu => Entity::belongs_to(menu::Entity).from(Column::MenuId).to(menu::Column::Id).into(),
            Relation::Product => Entity::belongs_to(product::Entity).from(Column::ProductId).to(product::Column::Id).into(),
        }
    }
}

impl Related<menu::Entity> for Entity {
    fn to() -> RelationDef { Relation::Menu.def() }
}

impl ActiveModelBehavior for ActiveModel {}

pub async fn create<C: ConnectionTrait>(db: &C, menu_id: i64, product_id: i64, quantity: i64) -> Result<Model, errors::ModelError> {
    if quantity <= 0 {
        return Err(errors::ModelError::Validation("quantity must be positive".into()));
    }
    let am = ActiveModel {
        seq: NotSet,
        menu_id: Set(menu_id),
        product_id: Set(product_id),
        quantity: Set(quantity),
    };
    am.insert(db).await.map_err(Into::into)
}

/// Every item row, ordered by `seq` so per-menu grouping keeps insertion order.
pub async fn find_all<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, errors::ModelError> {
    Entity::find().order_by_asc(Column::Seq).all(db).await.map_err(Into::into)
}
