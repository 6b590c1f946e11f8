use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::auth::domain::{AuthUser, Credentials, NewUser};
use crate::auth::errors::AuthError;
use crate::auth::repository::AuthRepository;

pub struct SeaOrmAuthRepository {
    pub db: DatabaseConnection,
}

fn to_auth_user(u: models::user::Model) -> AuthUser {
    AuthUser { id: u.id, email: u.email, name: u.name }
}

#[async_trait::async_trait]
impl AuthRepository for SeaOrmAuthRepository {
    async fn find_user_by_email(&self, email: &str) -> Result<Option<AuthUser>, AuthError> {
        let res = models::user::find_by_email(&self.db, email).await?;
        Ok(res.map(to_auth_user))
    }

    async fn create_user(&self, user: NewUser) -> Result<AuthUser, AuthError> {
        let created = models::user::create_with_password(
            &self.db,
            &user.email,
            &user.name,
            user.password_hash,
            &user.password_algorithm,
        )
        .await?;
        Ok(to_auth_user(created))
    }

    async fn get_credentials(&self, user_id: Uuid) -> Result<Option<Credentials>, AuthError> {
        let res = models::user_credentials::find_by_user(&self.db, user_id).await?;
        Ok(res.map(|c| Credentials { user_id: c.user_id, password_hash: c.password_hash, password_algorithm: c.password_algorithm }))
    }
}
