#![cfg(test)]
use migration::MigratorTrait;
use models::location::NewLocation;
use sea_orm::DatabaseConnection;

/// Connected and migrated database, or `None` when `SKIP_DB_TESTS` is set
/// or nothing is listening.
pub async fn get_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match models::db::connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    migration::Migrator::up(&db, None).await.ok()?;
    Some(db)
}

pub fn sample_location(title: &str) -> NewLocation {
    NewLocation {
        title: title.to_string(),
        description: "test location".into(),
        src: "img/test.jpg".into(),
        url: None,
        type_icon: "Natureza".into(),
        types: vec!["Natureza".into(), "WC".into()],
        latitude: 38.7,
        longitude: -9.1,
        likes: 3,
        dislikes: 1,
    }
}
