use axum::extract::rejection::JsonRejection;
use axum::extract::{Json, Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, put};
use axum::Router;

use premierzone_infrastructure::services::ServiceRegistry;

use premierzone_interface::errors::Result;
use premierzone_interface::players::model::{PlayerRecord, PlayerSearchQuery};
use premierzone_interface::players::service::PlayersServiceHandle;

pub struct PlayersRouter;

impl PlayersRouter {
    pub fn new(service_registry: ServiceRegistry) -> Router {
        Router::new()
            .route(
                "/player",
                get(Self::search_players).post(Self::create_player),
            )
            // The key is the player id on update and the player name on delete.
            .route(
                "/player/:key",
                put(Self::update_player).delete(Self::delete_player),
            )
            .with_state(service_registry)
    }

    // Search with the optional name, team, position and nation query parameters.
    // Without any parameter every player is returned.
    async fn search_players(
        State(players_service): State<PlayersServiceHandle>,
        Query(params): Query<PlayerSearchQuery>,
    ) -> Result<Json<Vec<PlayerRecord>>> {
        players_service.search(params).await.map(Json)
    }

    async fn create_player(
        State(players_service): State<PlayersServiceHandle>,
        payload: std::result::Result<Json<PlayerRecord>, JsonRejection>,
    ) -> Result<(StatusCode, Json<PlayerRecord>)> {
        let Json(player) = payload?;
        let created = players_service.create_player(player).await?;

        Ok((StatusCode::CREATED, Json(created)))
    }

    async fn update_player(
        State(players_service): State<PlayersServiceHandle>,
        Path(id): Path<String>,
        payload: std::result::Result<Json<PlayerRecord>, JsonRejection>,
    ) -> Result<Response> {
        let Json(player) = payload?;
        let updated = players_service.update_player(&id, player).await?;

        Ok(match updated {
            Some(player) => Json(player).into_response(),
            None => (
                StatusCode::NOT_FOUND,
                format!("no player found with id '{}'", id),
            )
                .into_response(),
        })
    }

    async fn delete_player(
        State(players_service): State<PlayersServiceHandle>,
        Path(player_name): Path<String>,
    ) -> Result<String> {
        players_service.delete_player(&player_name).await?;

        Ok(format!("Player '{}' deleted successfully", player_name))
    }
}
