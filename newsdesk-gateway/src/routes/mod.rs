//! API route definitions

mod health;
mod news;

use axum::Router;

use crate::AppState;

/// Create all gateway routes
pub fn gateway_routes() -> Router<AppState> {
    Router::new().merge(news::routes()).merge(health::routes())
}
