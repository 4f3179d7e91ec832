//! Repository for the `players` table.
//!
//! A plain keyed store: filtering, ordering, and pagination of list results
//! happen in the API layer over the snapshot returned by [`PlayerRepo::find_all`].

use sqlx::PgPool;

use armory_core::types::DbId;

use crate::models::player::{NewPlayer, Player};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, title, race, profession, birthday, experience, level, until_next_level, banned";

/// Provides CRUD operations for players.
pub struct PlayerRepo;

impl PlayerRepo {
    /// Insert a validated player, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewPlayer) -> Result<Player, sqlx::Error> {
        let query = format!(
            "INSERT INTO players
                (name, title, race, profession, birthday, experience,
                 level, until_next_level, banned)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(&input.name)
            .bind(&input.title)
            .bind(input.race)
            .bind(input.profession)
            .bind(input.birthday)
            .bind(input.experience)
            .bind(input.level)
            .bind(input.until_next_level)
            .bind(input.banned)
            .fetch_one(pool)
            .await
    }

    /// Fetch the full record set, ordered by id for a stable snapshot.
    pub async fn find_all(pool: &PgPool) -> Result<Vec<Player>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players ORDER BY id");
        sqlx::query_as::<_, Player>(&query).fetch_all(pool).await
    }

    /// Find a player by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Player>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM players WHERE id = $1");
        sqlx::query_as::<_, Player>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Check whether a player with the given id exists.
    pub async fn exists_by_id(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM players WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// Persist a patched record in full.
    ///
    /// Returns `None` if no row with the record's id exists.
    pub async fn update(pool: &PgPool, player: &Player) -> Result<Option<Player>, sqlx::Error> {
        let query = format!(
            "UPDATE players SET
                name = $2,
                title = $3,
                race = $4,
                profession = $5,
                birthday = $6,
                experience = $7,
                level = $8,
                until_next_level = $9,
                banned = $10
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Player>(&query)
            .bind(player.id)
            .bind(&player.name)
            .bind(&player.title)
            .bind(player.race)
            .bind(player.profession)
            .bind(player.birthday)
            .bind(player.experience)
            .bind(player.level)
            .bind(player.until_next_level)
            .bind(player.banned)
            .fetch_optional(pool)
            .await
    }

    /// Delete a player by id. Returns `true` if a row was removed.
    pub async fn delete_by_id(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM players WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
