use std::sync::Arc;

use axum::extract::FromRef;

use premierzone_interface::players::service::PlayersServiceHandle;
use premierzone_interface::players::store::PlayerStoreHandle;

pub mod players_service;

use players_service::DirectoryPlayersService;

#[derive(FromRef, Clone)]
pub struct ServiceRegistry {
    pub players_service: PlayersServiceHandle,
}

impl ServiceRegistry {
    pub fn new(player_store: PlayerStoreHandle) -> Self {
        let players_service = Arc::new(DirectoryPlayersService::new(player_store));

        Self { players_service }
    }
}
