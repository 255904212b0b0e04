//! Server execution logic.

use std::{future::Future, sync::Arc, time::Duration};

use axum::{
    Router,
    routing::{get, post},
};
use codepair_shared::time::Clock;
use tokio::{net::TcpListener, task::JoinHandle};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::{MIN_SWEEP_INTERVAL, ServerConfig},
    infrastructure::{message_pusher::WebSocketMessagePusher, repository::InMemoryRoomRepository},
    usecase::ReclaimVacantRoomsUseCase,
};

use super::{
    handler::{create_room, get_room_snapshot, health_check, websocket_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// Periodic reclamation of vacant rooms
struct Sweeper {
    usecase: Arc<ReclaimVacantRoomsUseCase>,
    interval: Duration,
}

/// Collaborative room relay server
///
/// # Example
///
/// ```ignore
/// let server = Server::from_config(&config, Arc::new(SystemClock));
/// server.run(&config.bind_addr()).await?;
/// ```
pub struct Server {
    state: Arc<AppState>,
    sweeper: Option<Sweeper>,
}

impl Server {
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            sweeper: None,
        }
    }

    /// Build a server backed by the in-memory repository and WebSocket pusher.
    ///
    /// Dependencies are created in order: Repository → MessagePusher →
    /// UseCases (AppState) → Server.
    pub fn from_config(config: &ServerConfig, clock: Arc<dyn Clock>) -> Self {
        let repository = Arc::new(InMemoryRoomRepository::new());
        let message_pusher = Arc::new(WebSocketMessagePusher::new());
        let state = Arc::new(AppState::new(
            repository.clone(),
            message_pusher,
            clock.clone(),
            &config.public_url,
        ));

        let server = Self::new(state);
        match config.room_ttl {
            Some(ttl) => server.with_sweeper(
                Arc::new(ReclaimVacantRoomsUseCase::new(repository, clock, ttl)),
                config.sweep_period(),
            ),
            None => server,
        }
    }

    /// Reclaim vacant rooms every `interval` while the server runs.
    ///
    /// Intervals shorter than `MIN_SWEEP_INTERVAL` are raised to it.
    pub fn with_sweeper(
        mut self,
        usecase: Arc<ReclaimVacantRoomsUseCase>,
        interval: Duration,
    ) -> Self {
        self.sweeper = Some(Sweeper {
            usecase,
            interval: interval.max(MIN_SWEEP_INTERVAL),
        });
        self
    }

    /// Axum router with every route and middleware attached
    pub fn router(&self) -> Router {
        Router::new()
            // WebSocket エンドポイント
            .route("/ws", get(websocket_handler))
            // HTTP エンドポイント
            .route("/api/health", get(health_check))
            .route("/api/create-room", post(create_room))
            .route("/api/room/{room_id}", get(get_room_snapshot))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .with_state(self.state.clone())
    }

    /// Serve on an already bound listener until `shutdown` resolves.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> std::io::Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let app = self.router();
        let sweeper_task = self.sweeper.map(spawn_sweeper);

        tracing::info!("Room relay listening on {}", listener.local_addr()?);
        let result = axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await;

        if let Some(task) = sweeper_task {
            task.abort();
        }
        result
    }

    /// Bind to `bind_addr` and serve until Ctrl+C or SIGTERM
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, bind_addr: &str) -> Result<(), Box<dyn std::error::Error>> {
        let listener = TcpListener::bind(bind_addr).await?;
        tracing::info!("Connect to: ws://{}/ws", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        self.serve(listener, shutdown_signal()).await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

fn spawn_sweeper(sweeper: Sweeper) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(sweeper.interval);
        // 最初の tick は即座に完了するので読み捨てる
        ticker.tick().await;
        loop {
            ticker.tick().await;
            let removed = sweeper.usecase.execute().await;
            if !removed.is_empty() {
                tracing::debug!("Sweep reclaimed {} room(s)", removed.len());
            }
        }
    })
}
