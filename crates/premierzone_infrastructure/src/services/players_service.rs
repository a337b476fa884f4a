use async_trait::async_trait;

use premierzone_interface::errors::Result;
use premierzone_interface::players::{
    model::{PlayerFilter, PlayerRecord, PlayerSearchQuery},
    service::PlayersService,
    store::PlayerStoreHandle,
};

// Every query fetches the whole player table and filters it in memory.
#[derive(Clone)]
pub struct DirectoryPlayersService {
    store: PlayerStoreHandle,
}

impl DirectoryPlayersService {
    pub fn new(store: PlayerStoreHandle) -> Self {
        Self { store }
    }

    async fn list_matching(&self, filter: PlayerFilter) -> Result<Vec<PlayerRecord>> {
        let players = self.store.fetch_all().await?;
        let matching = filter.apply(players);

        tracing::debug!("{} players matching {:?}", matching.len(), filter);

        Ok(matching)
    }
}

#[async_trait]
impl PlayersService for DirectoryPlayersService {
    async fn list_all(&self) -> Result<Vec<PlayerRecord>> {
        self.store.fetch_all().await
    }

    async fn list_by_team(&self, team_name: &str) -> Result<Vec<PlayerRecord>> {
        self.list_matching(PlayerFilter::Team(team_name.to_string()))
            .await
    }

    async fn list_by_name_contains(&self, search_text: &str) -> Result<Vec<PlayerRecord>> {
        self.list_matching(PlayerFilter::NameContains(search_text.to_string()))
            .await
    }

    async fn list_by_position_contains(&self, search_text: &str) -> Result<Vec<PlayerRecord>> {
        self.list_matching(PlayerFilter::PositionContains(search_text.to_string()))
            .await
    }

    async fn list_by_nation_contains(&self, search_text: &str) -> Result<Vec<PlayerRecord>> {
        self.list_matching(PlayerFilter::NationContains(search_text.to_string()))
            .await
    }

    async fn list_by_team_and_position(
        &self,
        team: &str,
        position: &str,
    ) -> Result<Vec<PlayerRecord>> {
        self.list_matching(PlayerFilter::TeamAndPosition {
            team: team.to_string(),
            position: position.to_string(),
        })
        .await
    }

    async fn search(&self, query: PlayerSearchQuery) -> Result<Vec<PlayerRecord>> {
        self.list_matching(query.into()).await
    }

    async fn create_player(&self, mut player: PlayerRecord) -> Result<PlayerRecord> {
        player.validate()?;

        // The store always assigns the id of a new player.
        player.id = None;

        let created = self.store.save(player).await?;

        tracing::info!(
            "player '{}' created with id {:?}",
            created.player_name,
            created.id
        );

        Ok(created)
    }

    async fn update_player(
        &self,
        id: &str,
        updated: PlayerRecord,
    ) -> Result<Option<PlayerRecord>> {
        let Some(mut player) = self.store.fetch_by_id(id).await? else {
            tracing::debug!("no player to update with id {}", id);
            return Ok(None);
        };

        updated.validate()?;
        player.overwrite_from(updated);

        let saved = self.store.save(player).await?;

        tracing::info!("player {} updated", id);

        Ok(Some(saved))
    }

    async fn delete_player(&self, player_name: &str) -> Result<()> {
        let deleted_count = self.store.delete_by_name(player_name).await?;

        tracing::info!("{} player(s) named '{}' deleted", deleted_count, player_name);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use premierzone_interface::errors::AppError;
    use premierzone_interface::players::store::PlayerStore;

    use super::*;
    use crate::stores::memory_player_store::MemoryPlayerStore;

    fn player(name: &str, nation: &str, position: &str, team: &str) -> PlayerRecord {
        PlayerRecord {
            player_name: name.to_string(),
            nation: Some(nation.to_string()),
            position: Some(position.to_string()),
            team_name: Some(team.to_string()),
            ..Default::default()
        }
    }

    fn setup() -> (DirectoryPlayersService, Arc<MemoryPlayerStore>) {
        let store = Arc::new(MemoryPlayerStore::with_players(vec![
            player("Mo Salah", "eg EGY", "Forward", "Liverpool"),
            player("Virgil van Dijk", "nl NED", "Defender", "Liverpool"),
            player("Bukayo Saka", "eng ENG", "Forward", "Arsenal"),
            player("Declan Rice", "eng ENG", "Midfielder", "Arsenal"),
        ]));

        (DirectoryPlayersService::new(store.clone()), store)
    }

    fn names(players: &[PlayerRecord]) -> Vec<&str> {
        players.iter().map(|p| p.player_name.as_str()).collect()
    }

    // Every call fails like a database that cannot be reached.
    struct UnavailableStore;

    #[async_trait]
    impl PlayerStore for UnavailableStore {
        async fn fetch_all(&self) -> Result<Vec<PlayerRecord>> {
            Err(unavailable())
        }
        async fn fetch_by_id(&self, _id: &str) -> Result<Option<PlayerRecord>> {
            Err(unavailable())
        }
        async fn fetch_by_name(&self, _name: &str) -> Result<Option<PlayerRecord>> {
            Err(unavailable())
        }
        async fn save(&self, _player: PlayerRecord) -> Result<PlayerRecord> {
            Err(unavailable())
        }
        async fn delete_by_name(&self, _name: &str) -> Result<u64> {
            Err(unavailable())
        }
    }

    fn unavailable() -> AppError {
        AppError::StorageError {
            msg: "server selection timeout".to_string(),
        }
    }

    #[tokio::test]
    async fn list_by_team_is_case_sensitive() {
        let (service, _) = setup();

        let liverpool = service.list_by_team("Liverpool").await.unwrap();
        assert_eq!(names(&liverpool), vec!["Mo Salah", "Virgil van Dijk"]);

        assert!(service.list_by_team("liverpool").await.unwrap().is_empty());
        assert!(service.list_by_team("Liver").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn contains_queries_ignore_case() {
        let (service, _) = setup();

        let forwards = service.list_by_position_contains("FORW").await.unwrap();
        assert_eq!(names(&forwards), vec!["Mo Salah", "Bukayo Saka"]);

        let english = service.list_by_nation_contains("Eng").await.unwrap();
        assert_eq!(names(&english), vec!["Bukayo Saka", "Declan Rice"]);

        let by_name = service.list_by_name_contains("VAN").await.unwrap();
        assert_eq!(names(&by_name), vec!["Virgil van Dijk"]);

        assert_eq!(service.list_by_name_contains("").await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn list_by_team_and_position_intersects() {
        let (service, _) = setup();

        let players = service
            .list_by_team_and_position("Arsenal", "Forward")
            .await
            .unwrap();
        assert_eq!(names(&players), vec!["Bukayo Saka"]);

        assert!(service
            .list_by_team_and_position("Arsenal", "forward")
            .await
            .unwrap()
            .is_empty());
    }

    #[tokio::test]
    async fn search_uses_the_first_given_criterion() {
        let (service, _) = setup();

        let query = PlayerSearchQuery {
            name: Some("rice".to_string()),
            nation: Some("NED".to_string()),
            ..Default::default()
        };
        let players = service.search(query).await.unwrap();
        assert_eq!(names(&players), vec!["Declan Rice"]);

        let all = service.search(PlayerSearchQuery::default()).await.unwrap();
        assert_eq!(all, service.list_all().await.unwrap());
    }

    #[tokio::test]
    async fn created_player_can_be_fetched_back() {
        let (service, store) = setup();
        let new_player = PlayerRecord {
            age: Some(21),
            goals: Some(4.0),
            ..player("Myles Lewis-Skelly", "eng ENG", "Defender", "Arsenal")
        };

        let created = service.create_player(new_player.clone()).await.unwrap();
        let id = created.id.clone().unwrap();

        let fetched = store.fetch_by_id(&id).await.unwrap().unwrap();
        assert_eq!(PlayerRecord { id: None, ..fetched }, new_player);
        assert_eq!(service.list_all().await.unwrap().len(), 5);
    }

    #[tokio::test]
    async fn create_ignores_a_caller_supplied_id() {
        let (service, store) = setup();
        let new_player = PlayerRecord {
            id: Some("1".to_string()),
            ..player("Cole Palmer", "eng ENG", "Midfielder", "Chelsea")
        };

        let created = service.create_player(new_player).await.unwrap();

        assert_ne!(created.id.as_deref(), Some("1"));
        let salah = store.fetch_by_id("1").await.unwrap().unwrap();
        assert_eq!(salah.player_name, "Mo Salah");
    }

    #[tokio::test]
    async fn create_rejects_invalid_players() {
        let (service, _) = setup();
        let invalid = PlayerRecord {
            goals: Some(-3.0),
            ..player("Cole Palmer", "eng ENG", "Midfielder", "Chelsea")
        };

        let result = service.create_player(invalid).await;

        assert!(matches!(result, Err(AppError::ValidationError { .. })));
        assert_eq!(service.list_all().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn update_overwrites_every_mutable_field() {
        let (service, store) = setup();
        let updated = PlayerRecord {
            id: Some("999".to_string()),
            age: Some(33),
            goals: Some(29.0),
            ..player("Mohamed Salah", "eg EGY", "FW", "Liverpool")
        };

        let saved = service
            .update_player("1", updated.clone())
            .await
            .unwrap()
            .unwrap();

        assert_eq!(saved.id.as_deref(), Some("1"));
        assert_eq!(
            PlayerRecord {
                id: Some("999".to_string()),
                ..saved.clone()
            },
            updated
        );
        assert_eq!(store.fetch_by_id("1").await.unwrap(), Some(saved));
        assert!(store.fetch_by_id("999").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_of_a_missing_player_returns_none() {
        let (service, _) = setup();

        let result = service
            .update_player("42", player("Nobody", "eng ENG", "GK", "Arsenal"))
            .await
            .unwrap();

        assert!(result.is_none());
        assert_eq!(service.list_all().await.unwrap().len(), 4);
    }

    #[tokio::test]
    async fn delete_is_idempotent() {
        let (service, _) = setup();

        service.delete_player("Mo Salah").await.unwrap();
        let remaining = service.list_all().await.unwrap();
        assert_eq!(remaining.len(), 3);
        assert!(!names(&remaining).contains(&"Mo Salah"));

        service.delete_player("Mo Salah").await.unwrap();
        assert_eq!(service.list_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn delete_removes_every_player_with_the_name() {
        let (service, store) = setup();
        store
            .save(player("Mo Salah", "eg EGY", "Forward", "Chelsea"))
            .await
            .unwrap();

        service.delete_player("Mo Salah").await.unwrap();

        assert!(store.fetch_by_name("Mo Salah").await.unwrap().is_none());
        assert!(service.list_by_team("Chelsea").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn storage_errors_are_propagated() {
        let service = DirectoryPlayersService::new(Arc::new(UnavailableStore));

        assert!(matches!(
            service.list_by_team("Liverpool").await,
            Err(AppError::StorageError { .. })
        ));
        assert!(matches!(
            service
                .update_player("1", player("Mo Salah", "eg EGY", "FW", "Liverpool"))
                .await,
            Err(AppError::StorageError { .. })
        ));
        assert!(matches!(
            service.delete_player("Mo Salah").await,
            Err(AppError::StorageError { .. })
        ));
    }
}
