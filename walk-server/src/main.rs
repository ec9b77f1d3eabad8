use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use walk_server::storage::{FileStore, PlanStore};
use walk_server::topology::Topology;
use walk_server::web::{AppState, create_router};

/// Default location of the saved-plan file.
const DEFAULT_PLANS_PATH: &str = "plans.json";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let plans_path =
        std::env::var("WALK_PLANS_PATH").unwrap_or_else(|_| DEFAULT_PLANS_PATH.to_string());
    let plans = PlanStore::new(FileStore::new(&plans_path));

    let topology = Topology::oedo_line();
    info!(
        stations = topology.station_options().len(),
        plans_path, "loaded Oedo line topology"
    );

    let state = AppState::new(topology, plans);
    let app = create_router(state);

    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));
    info!("walking planner listening on http://{addr}");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app)
        .await
        .expect("server terminated abnormally");
}
