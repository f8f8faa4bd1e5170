use contracts::domain::a002_standard::{Standard, StandardsSet, StandardsSetId};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use crate::shared::data::db::get_connection;

/// Standards sets table
pub mod set_entity {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "a002_standards_set")]
    pub struct Model {
        #[sea_orm(primary_key, auto_increment = false)]
        pub id: i64,
        pub name: String,
        pub subject_name: String,
        pub grade: Option<String>,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

/// Catalog entries, ordered inside a set by `position`
pub mod standard_entity {
    use sea_orm::entity::prelude::*;
    use serde::{Deserialize, Serialize};

    #[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
    #[sea_orm(table_name = "a002_standard")]
    pub struct Model {
        #[sea_orm(primary_key)]
        pub id: i64,
        pub set_id: i64,
        pub position: i32,
        pub code: String,
        pub description: String,
    }

    #[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
    pub enum Relation {}

    impl ActiveModelBehavior for ActiveModel {}
}

impl From<set_entity::Model> for StandardsSet {
    fn from(m: set_entity::Model) -> Self {
        StandardsSet {
            id: m.id,
            name: m.name,
            subject_name: m.subject_name,
            grade: m.grade,
        }
    }
}

impl From<standard_entity::Model> for Standard {
    fn from(m: standard_entity::Model) -> Self {
        Standard {
            code: m.code,
            description: m.description,
        }
    }
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

pub async fn list_sets() -> anyhow::Result<Vec<StandardsSet>> {
    let items = set_entity::Entity::find()
        .order_by_asc(set_entity::Column::Id)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_set(id: StandardsSetId) -> anyhow::Result<Option<StandardsSet>> {
    let result = set_entity::Entity::find_by_id(id).one(conn()).await?;
    Ok(result.map(Into::into))
}

/// Catalog of a set in stored order
pub async fn list_by_set_id(set_id: StandardsSetId) -> anyhow::Result<Vec<Standard>> {
    let items = standard_entity::Entity::find()
        .filter(standard_entity::Column::SetId.eq(set_id))
        .order_by_asc(standard_entity::Column::Position)
        .order_by_asc(standard_entity::Column::Id)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

/// Store a set and replace its whole catalog in one transaction
pub async fn replace_set(set: &StandardsSet, catalog: &[Standard]) -> anyhow::Result<()> {
    let txn = conn().begin().await?;

    set_entity::Entity::delete_by_id(set.id).exec(&txn).await?;
    set_entity::ActiveModel {
        id: Set(set.id),
        name: Set(set.name.clone()),
        subject_name: Set(set.subject_name.clone()),
        grade: Set(set.grade.clone()),
    }
    .insert(&txn)
    .await?;

    standard_entity::Entity::delete_many()
        .filter(standard_entity::Column::SetId.eq(set.id))
        .exec(&txn)
        .await?;
    for (position, standard) in catalog.iter().enumerate() {
        standard_entity::ActiveModel {
            id: sea_orm::ActiveValue::NotSet,
            set_id: Set(set.id),
            position: Set(i32::try_from(position)?),
            code: Set(standard.code.clone()),
            description: Set(standard.description.clone()),
        }
        .insert(&txn)
        .await?;
    }

    txn.commit().await?;
    Ok(())
}
