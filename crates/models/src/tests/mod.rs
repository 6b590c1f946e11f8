

use crate::db::connect;
use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

/// Connect and migrate, or `None` when `SKIP_DB_TESTS` is set or no
/// database is reachable.
pub(crate) async fn setup_test_db() -> Option<DatabaseConnection> {
    if std::env::var("SKIP_DB_TESTS").is_ok() {
        return None;
    }
    let db = match connect().await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("skip: cannot connect to db: {}", e);
            return None;
        }
    };
    if let Err(e) = migration::Migrator::up(&db, None).await {
        eprintln!("skip: migrate up failed: {}", e);
        return None;
    }
    Some(db)
}

pub(crate) fn sample_location(title: &str) -> crate::location::NewLocation {
    crate::location::NewLocation {
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
