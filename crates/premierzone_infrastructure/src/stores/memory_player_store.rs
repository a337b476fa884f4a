use async_trait::async_trait;
use tokio::sync::RwLock;

use premierzone_interface::errors::Result;
use premierzone_interface::players::{model::PlayerRecord, store::PlayerStore};

// Player store kept in process memory, used for local runs and tests.
// Records keep their insertion order and get sequential ids ("1", "2", ...).
#[derive(Default)]
pub struct MemoryPlayerStore {
    state: RwLock<MemoryState>,
}

#[derive(Default)]
struct MemoryState {
    players: Vec<PlayerRecord>,
    last_id: u64,
}

impl MemoryPlayerStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_players(players: Vec<PlayerRecord>) -> Self {
        let mut state = MemoryState::default();

        for player in players {
            state.save(player);
        }

        Self {
            state: RwLock::new(state),
        }
    }
}

impl MemoryState {
    fn save(&mut self, mut player: PlayerRecord) -> PlayerRecord {
        let Some(id) = player.id.clone() else {
            self.last_id += 1;
            player.id = Some(self.last_id.to_string());
            self.players.push(player.clone());

            return player;
        };

        if let Some(existing) = self
            .players
            .iter_mut()
            .find(|existing| existing.id.as_deref() == Some(id.as_str()))
        {
            *existing = player.clone();
            return player;
        }

        // Keep generated ids ahead of any numeric id inserted explicitly.
        if let Ok(numeric_id) = id.parse::<u64>() {
            self.last_id = self.last_id.max(numeric_id);
        }

        self.players.push(player.clone());
        player
    }
}

#[async_trait]
impl PlayerStore for MemoryPlayerStore {
    async fn fetch_all(&self) -> Result<Vec<PlayerRecord>> {
        Ok(self.state.read().await.players.clone())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<PlayerRecord>> {
        let state = self.state.read().await;

        Ok(state
            .players
            .iter()
            .find(|player| player.id.as_deref() == Some(id))
            .cloned())
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Option<PlayerRecord>> {
        let state = self.state.read().await;

        Ok(state
            .players
            .iter()
            .find(|player| player.player_name == name)
            .cloned())
    }

    async fn save(&self, player: PlayerRecord) -> Result<PlayerRecord> {
        Ok(self.state.write().await.save(player))
    }

    async fn delete_by_name(&self, name: &str) -> Result<u64> {
        // The write lock is held for the whole removal, readers never see a partial delete.
        let mut state = self.state.write().await;
        let before = state.players.len();

        state.players.retain(|player| player.player_name != name);

        Ok((before - state.players.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, team: &str) -> PlayerRecord {
        PlayerRecord {
            player_name: name.to_string(),
            team_name: Some(team.to_string()),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let store = MemoryPlayerStore::new();

        let first = store.save(player("Declan Rice", "Arsenal")).await.unwrap();
        let second = store.save(player("Cole Palmer", "Chelsea")).await.unwrap();

        assert_eq!(first.id.as_deref(), Some("1"));
        assert_eq!(second.id.as_deref(), Some("2"));
        assert_eq!(store.fetch_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn save_with_an_existing_id_overwrites() {
        let store = MemoryPlayerStore::new();
        let mut saved = store.save(player("Declan Rice", "Arsenal")).await.unwrap();

        saved.team_name = Some("Manchester City".to_string());
        store.save(saved.clone()).await.unwrap();

        let players = store.fetch_all().await.unwrap();
        assert_eq!(players, vec![saved]);
    }

    #[tokio::test]
    async fn explicit_ids_do_not_collide_with_generated_ones() {
        let store = MemoryPlayerStore::new();
        let explicit = PlayerRecord {
            id: Some("7".to_string()),
            ..player("Bukayo Saka", "Arsenal")
        };

        store.save(explicit).await.unwrap();
        let generated = store.save(player("Kai Havertz", "Arsenal")).await.unwrap();

        assert_eq!(generated.id.as_deref(), Some("8"));
    }

    #[tokio::test]
    async fn lookups_return_none_when_missing() {
        let store = MemoryPlayerStore::with_players(vec![player("Declan Rice", "Arsenal")]);

        assert!(store.fetch_by_id("1").await.unwrap().is_some());
        assert!(store.fetch_by_id("42").await.unwrap().is_none());
        assert!(store.fetch_by_name("declan rice").await.unwrap().is_none());
        assert_eq!(
            store
                .fetch_by_name("Declan Rice")
                .await
                .unwrap()
                .map(|p| p.player_name),
            Some("Declan Rice".to_string())
        );
    }

    #[tokio::test]
    async fn delete_by_name_removes_every_match() {
        let store = MemoryPlayerStore::with_players(vec![
            player("Danny Ward", "Leicester City"),
            player("Danny Ward", "Cardiff City"),
            player("Jamie Vardy", "Leicester City"),
        ]);

        assert_eq!(store.delete_by_name("Danny Ward").await.unwrap(), 2);
        assert_eq!(store.delete_by_name("Danny Ward").await.unwrap(), 0);

        let remaining = store.fetch_all().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].player_name, "Jamie Vardy");
    }
}
