pub mod auth;
pub mod errors;
pub mod models;
pub mod routes;

use std::sync::Arc;

use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::session::SessionManager;
use crate::store::Store;
use crate::workflow::executor::{SimulatedStepExecutor, StepExecutor, WorkflowTiming};
use crate::workflow::oracle::RandomOracle;
use crate::workflow::WorkflowRunner;

#[derive(Clone)]
pub struct AppState {
    pub store: Store,
    pub sessions: Arc<SessionManager>,
    pub workflows: Arc<WorkflowRunner>,
}

impl AppState {
    /// Production wiring: simulated steps with real delays and the random
    /// update oracle. Tests build their own state with instant timing and a
    /// fixed oracle.
    pub fn new(timing: WorkflowTiming) -> Self {
        let store = Store::new();
        let executor: Arc<dyn StepExecutor> = Arc::new(SimulatedStepExecutor::new(
            timing.clone(),
            Arc::new(RandomOracle::default()),
        ));
        Self::with_executor(store, executor, timing)
    }

    pub fn with_executor(
        store: Store,
        executor: Arc<dyn StepExecutor>,
        timing: WorkflowTiming,
    ) -> Self {
        let workflows = Arc::new(WorkflowRunner::new(
            store.clone(),
            executor,
            timing.kickoff,
        ));
        Self {
            store,
            sessions: Arc::new(SessionManager::new()),
            workflows,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/api/auth/logout", post(routes::auth::logout))
        .route("/api/auth/me", get(routes::auth::me))
        .route(
            "/api/sites",
            get(routes::sites::list_sites).post(routes::sites::create_site),
        )
        .route(
            "/api/sites/:id",
            get(routes::sites::get_site)
                .put(routes::sites::update_site)
                .delete(routes::sites::delete_site),
        )
        .route(
            "/api/maintenance/run/:site_id",
            post(routes::maintenance::run_maintenance),
        )
        .route(
            "/api/maintenance/backup/:site_id",
            post(routes::maintenance::run_backup),
        )
        .route("/api/logs", get(routes::logs::list_logs))
        .route("/api/reports", get(routes::reports::list_reports))
        .route(
            "/api/reports/generate",
            post(routes::reports::generate_report),
        )
        .route("/api/dashboard/stats", get(routes::dashboard::get_stats))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            auth::require_session,
        ));

    Router::new()
        .route("/api/health", get(routes::health::health_check))
        .route("/api/auth/login", post(routes::auth::login))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
