/// Application state and router builder
///
/// This module defines the shared application state and provides
/// a function to build the Axum router with all routes and middleware.
///
/// # Example
///
/// ```no_run
/// use ticklist_api::{app::AppState, config::Config};
/// use sqlx::PgPool;
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// let pool = PgPool::connect(&config.database.url).await?;
/// let state = AppState::new(pool, config);
/// let app = ticklist_api::app::build_router(state);
/// # Ok(())
/// # }
/// ```

use crate::{
    config::Config,
    services::{account::AccountService, todo::TodoService},
};
use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, patch, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. The
/// services and the pool are all reference-counted internally, so clones
/// are cheap.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool (used directly by the health check)
    pub db: PgPool,

    /// Account resource service
    pub accounts: AccountService,

    /// Todo resource service
    pub todos: TodoService,

    /// Application configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates new application state, wiring the services to the pool
    pub fn new(db: PgPool, config: Config) -> Self {
        Self {
            accounts: AccountService::new(db.clone()),
            todos: TodoService::new(db.clone()),
            db,
            config: Arc::new(config),
        }
    }
}

/// Builds the complete Axum router with all routes and middleware
///
/// # Architecture
///
/// ```text
/// /
/// ├── /health                              # Health check
/// └── /api/
///     ├── /accounts/
///     │   ├── POST   /register
///     │   ├── POST   /login
///     │   ├── PATCH  /update/:account_id
///     │   └── DELETE /delete/:username
///     └── /todos/
///         ├── GET    /get/:account_id
///         ├── POST   /create/:account_id
///         ├── PATCH  /update/:todo_id
///         └── DELETE /delete/:todo_id
/// ```
///
/// # Middleware Stack
///
/// 1. Request logging (tower-http TraceLayer)
/// 2. CORS (tower-http CorsLayer, driven by config)
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let health_routes = Router::new().route("/health", get(routes::health::health_check));

    let account_routes = Router::new()
        .route("/register", post(routes::accounts::register))
        .route("/login", post(routes::accounts::login))
        .route("/update/:account_id", patch(routes::accounts::update))
        .route("/delete/:username", delete(routes::accounts::delete));

    let todo_routes = Router::new()
        .route("/get/:account_id", get(routes::todos::list))
        .route("/create/:account_id", post(routes::todos::create))
        .route("/update/:todo_id", patch(routes::todos::update))
        .route("/delete/:todo_id", delete(routes::todos::delete));

    // Configure CORS based on environment
    let cors = if state.config.api.cors_origins.contains(&"*".to_string()) {
        CorsLayer::permissive()
    } else {
        let origins: Vec<HeaderValue> = state
            .config
            .api
            .cors_origins
            .iter()
            .filter_map(|origin| origin.parse().ok())
            .collect();

        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([
                Method::GET,
                Method::POST,
                Method::PATCH,
                Method::DELETE,
                Method::OPTIONS,
            ])
            .allow_headers([header::CONTENT_TYPE])
            .max_age(std::time::Duration::from_secs(3600))
    };

    Router::new()
        .merge(health_routes)
        .nest(
            "/api",
            Router::new()
                .nest("/accounts", account_routes)
                .nest("/todos", todo_routes),
        )
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(cors)
        .with_state(state)
}
