//! Handlers for the `/rest/players` resource.
//!
//! Body deserialization failures are mapped to 400 (not axum's default 422)
//! so malformed input and out-of-range fields report the same client-input
//! outcome. An id <= 0 is rejected before any repository call.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;

use armory_core::error::CoreError;
use armory_core::types::DbId;
use armory_db::models::player::{CreatePlayer, Player, UpdatePlayer};
use armory_db::repositories::PlayerRepo;

use crate::error::{AppError, AppResult};
use crate::query::{self, ListControls, PlayerFilter};
use crate::state::AppState;

/// GET /rest/players
///
/// Filtered, sorted, paginated listing over the full table snapshot.
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<PlayerFilter>,
    Query(controls): Query<ListControls>,
) -> AppResult<Json<Vec<Player>>> {
    let players = PlayerRepo::find_all(&state.pool).await?;
    Ok(Json(query::select_page(players, &filter, &controls)))
}

/// GET /rest/players/count
///
/// Size of the filtered set; ordering and pagination parameters are ignored.
pub async fn count(
    State(state): State<AppState>,
    Query(filter): Query<PlayerFilter>,
) -> AppResult<Json<usize>> {
    let players = PlayerRepo::find_all(&state.pool).await?;
    Ok(Json(query::count_matching(&players, &filter)))
}

/// POST /rest/players
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreatePlayer>, JsonRejection>,
) -> AppResult<Json<Player>> {
    let Json(input) = payload.map_err(|err| AppError::BadRequest(err.body_text()))?;
    let new_player = input.into_validated()?;
    let created = PlayerRepo::create(&state.pool, &new_player).await?;
    Ok(Json(created))
}

/// GET /rest/players/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Player>> {
    ensure_valid_id(id)?;
    let player = PlayerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(player))
}

/// POST /rest/players/{id}
///
/// Partial update: the whole patch is validated before any field is applied
/// to the stored record, so a rejected patch leaves the row untouched.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    payload: Result<Json<UpdatePlayer>, JsonRejection>,
) -> AppResult<Json<Player>> {
    ensure_valid_id(id)?;
    let Json(patch) = payload.map_err(|err| AppError::BadRequest(err.body_text()))?;

    let mut player = PlayerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    patch.validate()?;
    player.apply(&patch);

    let updated = PlayerRepo::update(&state.pool, &player)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(updated))
}

/// DELETE /rest/players/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    ensure_valid_id(id)?;
    let deleted = PlayerRepo::delete_by_id(&state.pool, id).await?;
    if deleted {
        Ok(StatusCode::OK)
    } else {
        Err(not_found(id))
    }
}

// ---------------------------------------------------------------------------
// Shared helpers
// ---------------------------------------------------------------------------

fn ensure_valid_id(id: DbId) -> Result<(), AppError> {
    if id <= 0 {
        return Err(AppError::BadRequest(format!(
            "id must be positive, got {id}"
        )));
    }
    Ok(())
}

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Player",
        id,
    })
}
