use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId};
use mongodb::options::ReplaceOptions;
use mongodb::{Client, Collection};
use serde::{Deserialize, Serialize};

use premierzone_interface::errors::{AppError, Result};
use premierzone_interface::players::{model::PlayerRecord, store::PlayerStore};

use crate::database_connection::DatabaseConnection;

const PLAYERS_COLLECTION: &str = "player_statistic";

// The player record as stored in the database, field names follow the stats table columns.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PlayerDocument {
    pub _id: ObjectId,
    pub player_name: String,
    pub nation: Option<String>,
    pub position: Option<String>,
    pub age: Option<u32>,
    pub matches_played: Option<u32>,
    pub starts: Option<u32>,
    pub minutes_played: Option<f64>,
    pub goals: Option<f64>,
    pub assists: Option<f64>,
    pub penalty_goals: Option<f64>,
    pub yellow_cards: Option<f64>,
    pub red_cards: Option<f64>,
    pub expected_goals: Option<f64>,
    pub expected_assists: Option<f64>,
    pub team_name: Option<String>,
}

impl PlayerDocument {
    fn new(_id: ObjectId, player: PlayerRecord) -> Self {
        PlayerDocument {
            _id,
            player_name: player.player_name,
            nation: player.nation,
            position: player.position,
            age: player.age,
            matches_played: player.matches_played,
            starts: player.starts,
            minutes_played: player.minutes_played,
            goals: player.goals,
            assists: player.assists,
            penalty_goals: player.penalty_goals,
            yellow_cards: player.yellow_cards,
            red_cards: player.red_cards,
            expected_goals: player.expected_goals,
            expected_assists: player.expected_assists,
            team_name: player.team_name,
        }
    }
}

impl From<PlayerDocument> for PlayerRecord {
    fn from(document: PlayerDocument) -> Self {
        PlayerRecord {
            id: Some(document._id.to_hex()),
            player_name: document.player_name,
            nation: document.nation,
            position: document.position,
            age: document.age,
            matches_played: document.matches_played,
            starts: document.starts,
            minutes_played: document.minutes_played,
            goals: document.goals,
            assists: document.assists,
            penalty_goals: document.penalty_goals,
            yellow_cards: document.yellow_cards,
            red_cards: document.red_cards,
            expected_goals: document.expected_goals,
            expected_assists: document.expected_assists,
            team_name: document.team_name,
        }
    }
}

#[derive(Clone)]
pub struct MongoPlayerStore {
    client: Client,
    db: DatabaseConnection,
}

impl MongoPlayerStore {
    pub fn new(client: Client, db: DatabaseConnection) -> Self {
        Self { client, db }
    }

    fn collection(&self) -> Collection<PlayerDocument> {
        self.db.collection::<PlayerDocument>(PLAYERS_COLLECTION)
    }
}

#[async_trait]
impl PlayerStore for MongoPlayerStore {
    // Documents only enter the collection through validated service writes, so every one of
    // them carries a player name. A document missing it fails the whole read.
    async fn fetch_all(&self) -> Result<Vec<PlayerRecord>> {
        let cursor = self
            .collection()
            .find(None, None)
            .await
            .map_err(|e| AppError::StorageError { msg: e.to_string() })?;

        let documents: Vec<PlayerDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| AppError::StorageError { msg: e.to_string() })?;

        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn fetch_by_id(&self, id: &str) -> Result<Option<PlayerRecord>> {
        // A string that is not an object id cannot match any document.
        let object_id = match ObjectId::parse_str(id) {
            Ok(object_id) => object_id,
            Err(e) => {
                tracing::debug!("'{}' is not a valid player id: {}", id, e);
                return Ok(None);
            }
        };

        let document = self
            .collection()
            .find_one(doc! {"_id": object_id}, None)
            .await
            .map_err(|e| AppError::StorageError { msg: e.to_string() })?;

        Ok(document.map(Into::into))
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Option<PlayerRecord>> {
        let document = self
            .collection()
            .find_one(doc! {"player_name": name}, None)
            .await
            .map_err(|e| AppError::StorageError { msg: e.to_string() })?;

        Ok(document.map(Into::into))
    }

    async fn save(&self, player: PlayerRecord) -> Result<PlayerRecord> {
        let object_id = match &player.id {
            Some(id) => ObjectId::parse_str(id)
                .map_err(|e| AppError::ObjectIdError { msg: e.to_string() })?,
            None => ObjectId::new(),
        };

        let document = PlayerDocument::new(object_id, player);

        // Upsert, so a record with an unknown id is inserted under that id.
        let replace_options = ReplaceOptions::builder().upsert(true).build();

        self.collection()
            .replace_one(doc! {"_id": object_id}, &document, replace_options)
            .await
            .map_err(|e| AppError::StorageError { msg: e.to_string() })?;

        Ok(document.into())
    }

    async fn delete_by_name(&self, name: &str) -> Result<u64> {
        let mut session = self
            .client
            .start_session(None)
            .await
            .map_err(|e| AppError::StorageError { msg: e.to_string() })?;

        session
            .start_transaction(None)
            .await
            .map_err(|e| AppError::StorageError { msg: e.to_string() })?;

        let deleted = self
            .collection()
            .delete_many_with_session(doc! {"player_name": name}, None, &mut session)
            .await;

        match deleted {
            Ok(delete_result) => {
                session
                    .commit_transaction()
                    .await
                    .map_err(|e| AppError::StorageError { msg: e.to_string() })?;

                Ok(delete_result.deleted_count)
            }
            Err(e) => {
                if let Err(abort_error) = session.abort_transaction().await {
                    tracing::warn!("could not abort the player deletion: {}", abort_error);
                }
                Err(AppError::StorageError { msg: e.to_string() })
            }
        }
    }
}
