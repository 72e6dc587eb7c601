pub mod portfolio;
pub mod users;

use sea_orm::{Database, DatabaseConnection};

/// Create the SeaORM connection pool shared by all request handlers.
pub async fn create_pool(database_url: &str) -> DatabaseConnection {
    Database::connect(database_url)
        .await
        .expect("Failed to connect to database")
}
