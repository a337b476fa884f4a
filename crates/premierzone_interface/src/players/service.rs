use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;
use crate::players::model::{PlayerRecord, PlayerSearchQuery};

#[async_trait]
pub trait PlayersService {
    // Query calls
    async fn list_all(&self) -> Result<Vec<PlayerRecord>>;
    async fn list_by_team(&self, team_name: &str) -> Result<Vec<PlayerRecord>>;
    async fn list_by_name_contains(&self, search_text: &str) -> Result<Vec<PlayerRecord>>;
    async fn list_by_position_contains(&self, search_text: &str) -> Result<Vec<PlayerRecord>>;
    async fn list_by_nation_contains(&self, search_text: &str) -> Result<Vec<PlayerRecord>>;
    async fn list_by_team_and_position(
        &self,
        team: &str,
        position: &str,
    ) -> Result<Vec<PlayerRecord>>;
    async fn search(&self, query: PlayerSearchQuery) -> Result<Vec<PlayerRecord>>;
    // Mutation calls
    async fn create_player(&self, player: PlayerRecord) -> Result<PlayerRecord>;
    async fn update_player(&self, id: &str, updated: PlayerRecord)
        -> Result<Option<PlayerRecord>>;
    async fn delete_player(&self, player_name: &str) -> Result<()>;
}

pub type PlayersServiceHandle = Arc<dyn PlayersService + Send + Sync>;
