//! Player entity model and DTOs.
//!
//! `CreatePlayer` and `UpdatePlayer` are the only paths that produce
//! persistable player state, and both route every field through the rules in
//! `armory_core::validation`. A patch is validated in full before any field
//! is applied, so a rejected update never leaves a half-modified record.

use chrono::serde::{ts_milliseconds, ts_milliseconds_option};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use armory_core::error::CoreError;
use armory_core::progression::Progression;
use armory_core::types::{DbId, Timestamp};
use armory_core::validation;

/// Playable character races. Wire format is the uppercase variant name;
/// stored as the lowercase `race` Postgres enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "race", rename_all = "lowercase")]
pub enum Race {
    Human,
    Dwarf,
    Elf,
    Giant,
    Orc,
    Troll,
    Hobbit,
}

/// Playable character professions. Same wire/storage conventions as [`Race`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "UPPERCASE")]
#[sqlx(type_name = "profession", rename_all = "lowercase")]
pub enum Profession {
    Warrior,
    Rogue,
    Sorcerer,
    Cleric,
    Paladin,
    Nazgul,
    Warlock,
    Druid,
}

/// A row from the `players` table.
///
/// `birthday` serializes as epoch milliseconds; all other keys are camelCase.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: DbId,
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    #[serde(with = "ts_milliseconds")]
    pub birthday: Timestamp,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
    pub banned: bool,
}

impl Player {
    /// Apply a patch that has already passed [`UpdatePlayer::validate`].
    ///
    /// Absent fields are left untouched. Supplying `experience` recomputes
    /// `level` and `until_next_level`; `id` never changes.
    pub fn apply(&mut self, patch: &UpdatePlayer) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(race) = patch.race {
            self.race = race;
        }
        if let Some(profession) = patch.profession {
            self.profession = profession;
        }
        if let Some(birthday) = patch.birthday {
            self.birthday = birthday;
        }
        if let Some(banned) = patch.banned {
            self.banned = banned;
        }
        if let Some(experience) = patch.experience {
            let progression = Progression::from_experience(experience);
            self.experience = experience;
            self.level = progression.level;
            self.until_next_level = progression.until_next_level;
        }
    }
}

/// DTO for creating a player.
///
/// Every field is optional at the serde level so a missing required field
/// surfaces as a domain validation error (HTTP 400) rather than a
/// deserialization rejection. Caller-supplied `id`/`level`/`untilNextLevel`
/// are unknown keys and silently ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlayer {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    #[serde(default, with = "ts_milliseconds_option")]
    pub birthday: Option<Timestamp>,
    pub experience: Option<i32>,
    pub banned: Option<bool>,
}

impl CreatePlayer {
    /// Validate all fields and normalize into an insertable record.
    ///
    /// `banned` defaults to false; progression is derived from experience.
    pub fn into_validated(self) -> Result<NewPlayer, CoreError> {
        let name = self
            .name
            .ok_or_else(|| CoreError::Validation("name is required".into()))?;
        validation::validate_name(&name)?;

        let title = self
            .title
            .ok_or_else(|| CoreError::Validation("title is required".into()))?;
        validation::validate_title(&title)?;

        let race = self
            .race
            .ok_or_else(|| CoreError::Validation("race is required".into()))?;
        let profession = self
            .profession
            .ok_or_else(|| CoreError::Validation("profession is required".into()))?;

        let birthday = self
            .birthday
            .ok_or_else(|| CoreError::Validation("birthday is required".into()))?;
        validation::validate_birthday(birthday)?;

        let experience = self
            .experience
            .ok_or_else(|| CoreError::Validation("experience is required".into()))?;
        validation::validate_experience(experience)?;

        let progression = Progression::from_experience(experience);

        Ok(NewPlayer {
            name,
            title,
            race,
            profession,
            birthday,
            experience,
            level: progression.level,
            until_next_level: progression.until_next_level,
            banned: self.banned.unwrap_or(false),
        })
    }
}

/// A fully validated, normalized player ready for insertion.
#[derive(Debug, Clone)]
pub struct NewPlayer {
    pub name: String,
    pub title: String,
    pub race: Race,
    pub profession: Profession,
    pub birthday: Timestamp,
    pub experience: i32,
    pub level: i32,
    pub until_next_level: i32,
    pub banned: bool,
}

/// DTO for partially updating a player. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdatePlayer {
    pub name: Option<String>,
    pub title: Option<String>,
    pub race: Option<Race>,
    pub profession: Option<Profession>,
    #[serde(default, with = "ts_milliseconds_option")]
    pub birthday: Option<Timestamp>,
    pub experience: Option<i32>,
    pub banned: Option<bool>,
}

impl UpdatePlayer {
    /// Validate every supplied field without applying anything.
    ///
    /// Run before [`Player::apply`] so a patch with one bad field leaves the
    /// target record completely unchanged.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(name) = &self.name {
            validation::validate_name(name)?;
        }
        if let Some(title) = &self.title {
            validation::validate_title(title)?;
        }
        if let Some(birthday) = self.birthday {
            validation::validate_birthday(birthday)?;
        }
        if let Some(experience) = self.experience {
            validation::validate_experience(experience)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    use super::*;

    fn valid_create() -> CreatePlayer {
        CreatePlayer {
            name: Some("Abc".into()),
            title: Some("Knight".into()),
            race: Some(Race::Elf),
            profession: Some(Profession::Warrior),
            birthday: Some(Utc.with_ymd_and_hms(2005, 1, 1, 0, 0, 0).unwrap()),
            experience: Some(0),
            banned: None,
        }
    }

    fn existing_player() -> Player {
        Player {
            id: 5,
            name: "Abc".into(),
            title: "Knight".into(),
            race: Race::Elf,
            profession: Profession::Warrior,
            birthday: Utc.with_ymd_and_hms(2005, 1, 1, 0, 0, 0).unwrap(),
            experience: 0,
            level: 0,
            until_next_level: 100,
            banned: false,
        }
    }

    // -- create --------------------------------------------------------------

    #[test]
    fn create_derives_progression_and_defaults_banned() {
        let new = valid_create().into_validated().unwrap();
        assert_eq!(new.level, 0);
        assert_eq!(new.until_next_level, 100);
        assert!(!new.banned);
    }

    #[test]
    fn create_rejects_missing_required_field() {
        let mut input = valid_create();
        input.name = None;
        assert_matches!(input.into_validated(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn create_rejects_invalid_field() {
        let mut input = valid_create();
        input.experience = Some(10_000_001);
        assert_matches!(input.into_validated(), Err(CoreError::Validation(_)));
    }

    // -- update --------------------------------------------------------------

    #[test]
    fn patch_with_experience_recomputes_progression() {
        let mut player = existing_player();
        let patch = UpdatePlayer {
            experience: Some(5000),
            ..UpdatePlayer::default()
        };
        patch.validate().unwrap();
        player.apply(&patch);

        assert_eq!(player.experience, 5000);
        assert_eq!(player.level, Progression::from_experience(5000).level);
        // Untouched fields survive.
        assert_eq!(player.name, "Abc");
        assert_eq!(player.race, Race::Elf);
    }

    #[test]
    fn invalid_patch_fails_validation_before_any_field_is_applied() {
        let player = existing_player();
        // Valid name plus invalid title: whole patch must be rejected.
        let patch = UpdatePlayer {
            name: Some("NewName".into()),
            title: Some(String::new()),
            ..UpdatePlayer::default()
        };
        assert!(patch.validate().is_err());

        // The caller never reaches `apply`, so the record is untouched.
        assert_eq!(player.name, "Abc");
        assert_eq!(player.title, "Knight");
    }

    #[test]
    fn empty_patch_is_valid_and_changes_nothing() {
        let mut player = existing_player();
        let patch = UpdatePlayer::default();
        patch.validate().unwrap();
        player.apply(&patch);
        assert_eq!(player.experience, 0);
        assert_eq!(player.name, "Abc");
    }

    // -- serde shape ---------------------------------------------------------

    #[test]
    fn player_serializes_with_camel_case_and_millis_birthday() {
        let json = serde_json::to_value(existing_player()).unwrap();
        assert_eq!(json["race"], "ELF");
        assert_eq!(json["profession"], "WARRIOR");
        assert_eq!(json["untilNextLevel"], 100);
        assert_eq!(
            json["birthday"],
            Utc.with_ymd_and_hms(2005, 1, 1, 0, 0, 0)
                .unwrap()
                .timestamp_millis()
        );
    }

    #[test]
    fn create_ignores_unknown_fields() {
        let input: CreatePlayer = serde_json::from_value(serde_json::json!({
            "name": "Abc",
            "title": "Knight",
            "race": "ELF",
            "profession": "WARRIOR",
            "birthday": 1104537600000i64,
            "experience": 0,
            "level": 99,
            "untilNextLevel": 1
        }))
        .unwrap();
        let new = input.into_validated().unwrap();
        assert_eq!(new.level, 0);
    }
}
