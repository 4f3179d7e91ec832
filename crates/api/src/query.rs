//! In-memory query engine for player listings.
//!
//! The repository returns the full table snapshot; filtering, ordering, and
//! pagination all happen here as a pure pass over that snapshot. Results are
//! always sorted (by id when no order is given) so page windows are
//! reproducible across identical queries.

use serde::Deserialize;

use armory_db::models::player::{Player, Profession, Race};

/// Default page index when `pageNumber` is absent.
pub const DEFAULT_PAGE_NUMBER: i64 = 0;

/// Default page size when `pageSize` is absent.
pub const DEFAULT_PAGE_SIZE: i64 = 3;

/// Sort keys for player listings. Wire values are uppercase (`order=LEVEL`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PlayerOrder {
    Id,
    Name,
    Experience,
    Birthday,
    Level,
}

/// Optional filter criteria for list and count queries.
///
/// An absent field imposes no constraint; supplied fields are combined with
/// logical AND. `name`/`title` match by case-sensitive substring containment,
/// `after`/`before` bound the birthday inclusively on both ends.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerFilter {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    /// Inclusive lower birthday bound, epoch milliseconds.
    pub after: Option<i64>,
    /// Inclusive upper birthday bound, epoch milliseconds.
    pub before: Option<i64>,
    pub banned: Option<bool>,
    pub min_experience: Option<i32>,
    pub max_experience: Option<i32>,
    pub min_level: Option<i32>,
    pub max_level: Option<i32>,
}

impl PlayerFilter {
    /// Whether a player satisfies every supplied criterion.
    pub fn matches(&self, player: &Player) -> bool {
        if let Some(name) = &self.name {
            if !player.name.contains(name.as_str()) {
                return false;
            }
        }
        if let Some(title) = &self.title {
            if !player.title.contains(title.as_str()) {
                return false;
            }
        }
        if let Some(race) = self.race {
            if player.race != race {
                return false;
            }
        }
        if let Some(profession) = self.profession {
            if player.profession != profession {
                return false;
            }
        }
        let birthday = player.birthday.timestamp_millis();
        if let Some(before) = self.before {
            if birthday > before {
                return false;
            }
        }
        if let Some(after) = self.after {
            if birthday < after {
                return false;
            }
        }
        if let Some(banned) = self.banned {
            if player.banned != banned {
                return false;
            }
        }
        if let Some(min) = self.min_experience {
            if player.experience < min {
                return false;
            }
        }
        if let Some(max) = self.max_experience {
            if player.experience > max {
                return false;
            }
        }
        if let Some(min) = self.min_level {
            if player.level < min {
                return false;
            }
        }
        if let Some(max) = self.max_level {
            if player.level > max {
                return false;
            }
        }
        true
    }
}

/// Ordering and pagination parameters for list queries.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListControls {
    pub order: Option<PlayerOrder>,
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
}

/// Filter, sort, and page a snapshot of the player table.
pub fn select_page(
    mut players: Vec<Player>,
    filter: &PlayerFilter,
    controls: &ListControls,
) -> Vec<Player> {
    players.retain(|p| filter.matches(p));
    sort_players(&mut players, controls.order);
    let (start, end) = page_window(players.len(), controls.page_number, controls.page_size);
    players.into_iter().skip(start).take(end - start).collect()
}

/// Size of the filtered set, without sorting or pagination.
pub fn count_matching(players: &[Player], filter: &PlayerFilter) -> usize {
    players.iter().filter(|p| filter.matches(p)).count()
}

/// Sort ascending by the requested key, defaulting to id.
fn sort_players(players: &mut [Player], order: Option<PlayerOrder>) {
    match order.unwrap_or(PlayerOrder::Id) {
        PlayerOrder::Id => players.sort_by_key(|p| p.id),
        PlayerOrder::Name => players.sort_by(|a, b| a.name.cmp(&b.name)),
        PlayerOrder::Experience => players.sort_by_key(|p| p.experience),
        PlayerOrder::Birthday => players.sort_by_key(|p| p.birthday),
        PlayerOrder::Level => players.sort_by_key(|p| p.level),
    }
}

/// Compute the `[start, end)` slice bounds for a page, clipped to `len`.
///
/// Negative page numbers or sizes are clamped to zero rather than erroring.
fn page_window(len: usize, page_number: Option<i64>, page_size: Option<i64>) -> (usize, usize) {
    let number = page_number.unwrap_or(DEFAULT_PAGE_NUMBER).max(0) as usize;
    let size = page_size.unwrap_or(DEFAULT_PAGE_SIZE).max(0) as usize;
    let start = number.saturating_mul(size).min(len);
    let end = start.saturating_add(size).min(len);
    (start, end)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
