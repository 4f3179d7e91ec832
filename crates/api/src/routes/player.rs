//! Route definitions for the players resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::player;
use crate::state::AppState;

/// Routes mounted at `/players`.
///
/// ```text
/// GET    /          -> list
/// POST   /          -> create
/// GET    /count     -> count
/// GET    /{id}      -> get_by_id
/// POST   /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(player::list).post(player::create))
        .route("/count", get(player::count))
        .route(
            "/{id}",
            get(player::get_by_id)
                .post(player::update)
                .delete(player::delete),
        )
}
