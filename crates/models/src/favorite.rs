use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{entity::prelude::*, ConnectionTrait, QueryFilter, QueryOrder, QuerySelect, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::user;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "favorite")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub user_id: Uuid,
    pub location_id: Uuid,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation { User }

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef {
        match self {
            Relation::User => Entity::belongs_to(user::Entity)
                .from(Column::UserId)
                .to(user::Column::Id)
                .into(),
        }
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Returns `false` when the pair was already present.
pub async fn insert_if_absent<C: ConnectionTrait>(db: &C, user_id: Uuid, location_id: Uuid) -> Result<bool, ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        user_id: Set(user_id),
        location_id: Set(location_id),
        created_at: Set(Utc::now().into()),
    };
    let inserted = Entity::insert(am)
        .on_conflict(
            OnConflict::columns([Column::UserId, Column::LocationId])
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    Ok(inserted > 0)
}

pub async fn remove<C: ConnectionTrait>(db: &C, user_id: Uuid, location_id: Uuid) -> Result<u64, ModelError> {
    let res = Entity::delete_many()
        .filter(Column::UserId.eq(user_id))
        .filter(Column::LocationId.eq(location_id))
        .exec(db)
        .await?;
    Ok(res.rows_affected)
}

/// Location ids in the order they were favorited.
pub async fn location_ids<C: ConnectionTrait>(db: &C, user_id: Uuid) -> Result<Vec<Uuid>, ModelError> {
    Ok(Entity::find()
        .select_only()
        .column(Column::LocationId)
        .filter(Column::UserId.eq(user_id))
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .into_tuple::<Uuid>()
        .all(db)
        .await?)
}
