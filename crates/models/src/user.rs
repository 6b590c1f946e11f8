use chrono::Utc;
use sea_orm::{entity::prelude::*, ConnectionTrait, DatabaseConnection, PaginatorTrait, QueryFilter, Set, TransactionTrait};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::ModelError;
use crate::user_credentials;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub email: String,
    pub name: String,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub fn validate_email(email: &str) -> Result<(), ModelError> {
    if email.trim().is_empty() || !email.contains('@') {
        return Err(ModelError::Validation("invalid email".into()));
    }
    if email.len() > 255 {
        return Err(ModelError::Validation("email too long".into()));
    }
    Ok(())
}

pub fn validate_name(name: &str) -> Result<(), ModelError> {
    if name.trim().is_empty() {
        return Err(ModelError::Validation("name required".into()));
    }
    if name.len() > 128 {
        return Err(ModelError::Validation("name too long".into()));
    }
    Ok(())
}

pub async fn create<C: ConnectionTrait>(db: &C, email: &str, name: &str) -> Result<Model, ModelError> {
    validate_email(email)?;
    validate_name(name)?;
    let now = Utc::now().into();
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        email: Set(email.to_string()),
        name: Set(name.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    };
    Ok(am.insert(db).await?)
}

/// Insert the user and its credentials atomically. A taken email surfaces
/// as `ModelError::Conflict` via the unique index.
pub async fn create_with_password(
    db: &DatabaseConnection,
    email: &str,
    name: &str,
    password_hash: String,
    algorithm: &str,
) -> Result<Model, ModelError> {
    let txn = db.begin().await?;
    let created = create(&txn, email, name).await?;
    user_credentials::insert(&txn, created.id, password_hash, algorithm).await?;
    txn.commit().await?;
    Ok(created)
}

/// Exact, case-sensitive lookup.
pub async fn find_by_email<C: ConnectionTrait>(db: &C, email: &str) -> Result<Option<Model>, ModelError> {
    Ok(Entity::find().filter(Column::Email.eq(email)).one(db).await?)
}

pub async fn exists<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<bool, ModelError> {
    Ok(Entity::find_by_id(id).count(db).await? > 0)
}

pub async fn hard_delete<C: ConnectionTrait>(db: &C, id: Uuid) -> Result<(), ModelError> {
    Entity::delete_by_id(id).exec(db).await?;
    Ok(())
}
