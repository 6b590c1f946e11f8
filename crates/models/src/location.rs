use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{entity::prelude::*, ConnectionTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "location")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub title: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    pub src: String,
    pub url: Option<String>,
    pub type_icon: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub types: Json,
    pub latitude: f64,
    pub longitude: f64,
    pub likes: i64,
    pub dislikes: i64,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Category tags; malformed JSON yields no tags.
    pub fn type_list(&self) -> Vec<String> {
        serde_json::from_value(self.types.clone()).unwrap_or_default()
    }
}

/// Fields of a location supplied by seeding.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct NewLocation {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub src: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(rename = "typeicon")]
    pub type_icon: String,
    #[serde(default)]
    pub types: Vec<String>,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub dislikes: u64,
}

pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), ModelError> {
    if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
        return Err(ModelError::Validation("latitude must be within -90..=90".into()));
    }
    if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
        return Err(ModelError::Validation("longitude must be within -180..=180".into()));
    }
    Ok(())
}

pub fn validate(input: &NewLocation) -> Result<(), ModelError> {
    if input.title.trim().is_empty() {
        return Err(ModelError::Validation("title required".into()));
    }
    validate_coordinates(input.latitude, input.longitude)
}

fn counter(v: u64) -> i64 {
    i64::try_from(v).unwrap_or(i64::MAX)
}

pub async fn create<C: ConnectionTrait>(db: &C, input: &NewLocation) -> Result<Model, ModelError> {
    validate(input)?;
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        title: Set(input.title.clone()),
        description: Set(input.description.clone()),
        src: Set(input.src.clone()),
        url: Set(input.url.clone()),
        type_icon: Set(input.type_icon.clone()),
        types: Set(serde_json::json!(input.types)),
        latitude: Set(input.latitude),
        longitude: Set(input.longitude),
        likes: Set(counter(input.likes)),
        dislikes: Set(counter(input.dislikes)),
        created_at: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}

pub async fn list<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, ModelError> {
    Ok(Entity::find()
        .order_by_asc(Column::Title)
        .order_by_asc(Column::Id)
        .all(db)
        .await?)
}

pub async fn find_many<C: ConnectionTrait>(db: &C, ids: &[Uuid]) -> Result<Vec<Model>, ModelError> {
    if ids.is_empty() {
        return Ok(Vec::new());
    }
    Ok(Entity::find().filter(Column::Id.is_in(ids.iter().copied())).all(db).await?)
}

pub async fn count<C: ConnectionTrait>(db: &C) -> Result<u64, ModelError> {
    Ok(Entity::find().count(db).await?)
}

/// Add one to `counter` in a single `UPDATE ... RETURNING` statement so
/// concurrent votes are never lost. `None` when no row has this id.
pub async fn increment_counter<C: ConnectionTrait>(db: &C, id: Uuid, counter: Column) -> Result<Option<Model>, ModelError> {
    if !matches!(counter, Column::Likes | Column::Dislikes) {
        return Err(ModelError::Validation("only vote counters can be incremented".into()));
    }
    let mut updated = Entity::update_many()
        .col_expr(counter, Expr::col(counter).add(1))
        .filter(Column::Id.eq(id))
        .exec_with_returning(db)
        .await?;
    Ok(updated.pop())
}
