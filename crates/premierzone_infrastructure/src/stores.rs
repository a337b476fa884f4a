use std::sync::Arc;

use premierzone_interface::errors::Result;
use premierzone_interface::players::store::PlayerStoreHandle;

pub mod memory_player_store;
pub mod mongo_player_store;

use memory_player_store::MemoryPlayerStore;
use mongo_player_store::MongoPlayerStore;

use crate::database_connection::DatabaseManager;
use crate::settings::{Database, StoreBackend};

// Build the player store selected in the settings.
pub async fn connect(database: &Database) -> Result<PlayerStoreHandle> {
    match database.backend {
        StoreBackend::Mongo => {
            let (client, db) =
                DatabaseManager::new_pool(database.uri.as_str(), database.name.as_str()).await?;

            Ok(Arc::new(MongoPlayerStore::new(client, db)))
        }
        StoreBackend::Memory => {
            tracing::warn!("using the in-memory player store, records are lost on shutdown");

            Ok(Arc::new(MemoryPlayerStore::new()))
        }
    }
}
