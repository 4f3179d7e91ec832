pub mod health;
pub mod player;

use axum::Router;

use crate::state::AppState;

/// Build the `/rest` route tree.
///
/// ```text
/// /players            list, create
/// /players/count      filtered count
/// /players/{id}       get, update, delete
/// ```
pub fn rest_routes() -> Router<AppState> {
    Router::new().nest("/players", player::router())
}
