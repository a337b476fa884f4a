use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;
use crate::players::model::PlayerRecord;

// Durable storage of the player records. Lookups that find nothing return None,
// failures of the backend are returned as errors.
#[async_trait]
pub trait PlayerStore {
    async fn fetch_all(&self) -> Result<Vec<PlayerRecord>>;
    async fn fetch_by_id(&self, id: &str) -> Result<Option<PlayerRecord>>;
    // First record with exactly this name (case-sensitive).
    async fn fetch_by_name(&self, name: &str) -> Result<Option<PlayerRecord>>;
    // Insert when the id is None (an id is assigned), overwrite the record with the same id otherwise.
    async fn save(&self, player: PlayerRecord) -> Result<PlayerRecord>;
    // Atomically remove every record with exactly this name, return how many were removed.
    async fn delete_by_name(&self, name: &str) -> Result<u64>;
}

pub type PlayerStoreHandle = Arc<dyn PlayerStore + Send + Sync>;
