use chrono::Utc;
use contracts::domain::a001_unit::{Unit, UnitId, UnitPlanning};
use contracts::domain::common::EntityMetadata;
use serde::{Deserialize, Serialize};

use sea_orm::entity::prelude::*;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

use crate::shared::data::db::get_connection;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "a001_unit")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub number: i32,
    pub title: String,
    pub subject_name: String,
    pub set_id: Option<i64>,
    pub planning_json: String,
    pub is_deleted: bool,
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
    pub version: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Unit {
    fn from(m: Model) -> Self {
        let metadata = EntityMetadata {
            created_at: m.created_at.unwrap_or_else(Utc::now),
            updated_at: m.updated_at.unwrap_or_else(Utc::now),
            is_deleted: m.is_deleted,
            version: m.version,
        };
        let planning = serde_json::from_str::<UnitPlanning>(&m.planning_json).unwrap_or_else(|e| {
            tracing::warn!("Unit {} has unreadable planning data: {}", m.id, e);
            UnitPlanning::default()
        });

        Unit {
            id: UnitId::new(m.id),
            number: m.number,
            title: m.title,
            subject_name: m.subject_name,
            set_id: m.set_id,
            planning,
            metadata,
        }
    }
}

fn planning_json(unit: &Unit) -> anyhow::Result<String> {
    Ok(serde_json::to_string(&unit.planning)?)
}

fn conn() -> &'static DatabaseConnection {
    get_connection()
}

/// Non-deleted units ordered by subject, then unit number
pub async fn list_all() -> anyhow::Result<Vec<Unit>> {
    let items = Entity::find()
        .filter(Column::IsDeleted.eq(false))
        .order_by_asc(Column::SubjectName)
        .order_by_asc(Column::Number)
        .all(conn())
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(items)
}

pub async fn get_by_id(id: UnitId) -> anyhow::Result<Option<Unit>> {
    let result = Entity::find_by_id(id.value())
        .filter(Column::IsDeleted.eq(false))
        .one(conn())
        .await?;
    Ok(result.map(Into::into))
}

pub async fn count_all() -> anyhow::Result<u64> {
    Ok(Entity::find().count(conn()).await?)
}

pub async fn insert(aggregate: &Unit) -> anyhow::Result<UnitId> {
    let active = ActiveModel {
        id: sea_orm::ActiveValue::NotSet,
        number: Set(aggregate.number),
        title: Set(aggregate.title.clone()),
        subject_name: Set(aggregate.subject_name.clone()),
        set_id: Set(aggregate.set_id),
        planning_json: Set(planning_json(aggregate)?),
        is_deleted: Set(aggregate.metadata.is_deleted),
        created_at: Set(Some(aggregate.metadata.created_at)),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
        version: Set(aggregate.metadata.version),
    };
    let inserted = active.insert(conn()).await?;
    Ok(UnitId::new(inserted.id))
}

pub async fn update(aggregate: &Unit) -> anyhow::Result<()> {
    let active = ActiveModel {
        id: Set(aggregate.id.value()),
        number: Set(aggregate.number),
        title: Set(aggregate.title.clone()),
        subject_name: Set(aggregate.subject_name.clone()),
        set_id: Set(aggregate.set_id),
        planning_json: Set(planning_json(aggregate)?),
        is_deleted: Set(aggregate.metadata.is_deleted),
        updated_at: Set(Some(aggregate.metadata.updated_at)),
        version: Set(aggregate.metadata.version),
        created_at: sea_orm::ActiveValue::NotSet,
    };
    active.update(conn()).await?;
    Ok(())
}

pub async fn soft_delete(id: UnitId) -> anyhow::Result<bool> {
    use sea_orm::sea_query::Expr;
    let result = Entity::update_many()
        .col_expr(Column::IsDeleted, Expr::value(true))
        .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
        .col_expr(Column::Version, Expr::col(Column::Version).add(1))
        .filter(Column::Id.eq(id.value()))
        .filter(Column::IsDeleted.eq(false))
        .exec(conn())
        .await?;
    Ok(result.rows_affected > 0)
}
