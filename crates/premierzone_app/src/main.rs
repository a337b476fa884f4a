use premierzone_infrastructure::{services::ServiceRegistry, settings::Settings, stores};

use premierzone_routing::{logger, router::ApplicationController};

#[tokio::main]
async fn main() {
    let settings = Settings::new().expect("Could not parse settings");

    logger::setup(&settings.logger.level);

    tracing::info!(
        "starting with the {:?} player store",
        settings.database.backend
    );

    let player_store = stores::connect(&settings.database)
        .await
        .expect("Could not initialize the player store");

    let services = ServiceRegistry::new(player_store);

    ApplicationController::run(settings, services).await;
}
