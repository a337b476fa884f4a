use mongodb::bson::doc;

use premierzone_interface::errors::{AppError, Result};

pub type DatabaseConnection = mongodb::Database;

pub struct DatabaseManager;

impl DatabaseManager {
    // The client is returned with the database, sessions are started from it.
    pub async fn new_pool(
        database_uri: &str,
        database_name: &str,
    ) -> Result<(mongodb::Client, DatabaseConnection)> {
        let client = mongodb::Client::with_uri_str(database_uri)
            .await
            .map_err(|e| AppError::StorageError { msg: e.to_string() })?;
        let db = client.database(database_name);

        // Fail at startup rather than on the first request if the server cannot be reached.
        db.run_command(doc! {"ping": 1}, None)
            .await
            .map_err(|e| AppError::StorageError { msg: e.to_string() })?;

        tracing::info!("connected to the '{}' database", database_name);

        Ok((client, db))
    }
}
