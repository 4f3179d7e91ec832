//! Player field validation rules.
//!
//! One function per field, shared by the create and partial-update paths so
//! both enforce identical constraints. Each returns
//! [`CoreError::Validation`](crate::error::CoreError::Validation), which the
//! API layer maps to a 400 response.

use chrono::Datelike;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Maximum player name length, in characters.
pub const NAME_MAX_CHARS: usize = 12;

/// Maximum player title length, in characters.
pub const TITLE_MAX_CHARS: usize = 30;

/// Upper experience bound (inclusive).
pub const EXPERIENCE_MAX: i32 = 10_000_000;

/// Earliest allowed birthday year (inclusive, UTC).
pub const BIRTHDAY_YEAR_MIN: i32 = 2000;

/// Latest allowed birthday year (inclusive, UTC).
pub const BIRTHDAY_YEAR_MAX: i32 = 3000;

/// A name must be non-empty and at most [`NAME_MAX_CHARS`] characters.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.is_empty() {
        return Err(CoreError::Validation("name must not be empty".into()));
    }
    if name.chars().count() > NAME_MAX_CHARS {
        return Err(CoreError::Validation(format!(
            "name must be at most {NAME_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

/// A title must be non-empty and at most [`TITLE_MAX_CHARS`] characters.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    if title.is_empty() {
        return Err(CoreError::Validation("title must not be empty".into()));
    }
    if title.chars().count() > TITLE_MAX_CHARS {
        return Err(CoreError::Validation(format!(
            "title must be at most {TITLE_MAX_CHARS} characters"
        )));
    }
    Ok(())
}

/// A birthday must be strictly after the epoch and its UTC calendar year
/// must lie in `[BIRTHDAY_YEAR_MIN, BIRTHDAY_YEAR_MAX]`.
pub fn validate_birthday(birthday: Timestamp) -> Result<(), CoreError> {
    if birthday.timestamp_millis() <= 0 {
        return Err(CoreError::Validation(
            "birthday must be after the epoch".into(),
        ));
    }
    let year = birthday.year();
    if !(BIRTHDAY_YEAR_MIN..=BIRTHDAY_YEAR_MAX).contains(&year) {
        return Err(CoreError::Validation(format!(
            "birthday year must be between {BIRTHDAY_YEAR_MIN} and {BIRTHDAY_YEAR_MAX}"
        )));
    }
    Ok(())
}

/// Experience must lie in `[0, EXPERIENCE_MAX]`.
pub fn validate_experience(experience: i32) -> Result<(), CoreError> {
    if !(0..=EXPERIENCE_MAX).contains(&experience) {
        return Err(CoreError::Validation(format!(
            "experience must be between 0 and {EXPERIENCE_MAX}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::*;

    // -- name ----------------------------------------------------------------

    #[test]
    fn name_rejects_empty() {
        assert!(validate_name("").is_err());
    }

    #[test]
    fn name_accepts_max_length() {
        assert!(validate_name("abcdefghijkl").is_ok());
    }

    #[test]
    fn name_rejects_too_long() {
        assert!(validate_name("abcdefghijklm").is_err());
    }

    // -- title ---------------------------------------------------------------

    #[test]
    fn title_rejects_empty() {
        assert!(validate_title("").is_err());
    }

    #[test]
    fn title_accepts_max_length() {
        assert!(validate_title(&"x".repeat(30)).is_ok());
    }

    #[test]
    fn title_rejects_too_long() {
        assert!(validate_title(&"x".repeat(31)).is_err());
    }

    // -- birthday ------------------------------------------------------------

    #[test]
    fn birthday_rejects_epoch_and_earlier() {
        let epoch = Utc.timestamp_millis_opt(0).unwrap();
        assert!(validate_birthday(epoch).is_err());
        let before_epoch = Utc.timestamp_millis_opt(-1).unwrap();
        assert!(validate_birthday(before_epoch).is_err());
    }

    #[test]
    fn birthday_rejects_year_before_2000() {
        let y1999 = Utc.with_ymd_and_hms(1999, 12, 31, 23, 59, 59).unwrap();
        assert!(validate_birthday(y1999).is_err());
    }

    #[test]
    fn birthday_accepts_year_bounds() {
        let y2000 = Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap();
        assert!(validate_birthday(y2000).is_ok());
        let y3000 = Utc.with_ymd_and_hms(3000, 12, 31, 0, 0, 0).unwrap();
        assert!(validate_birthday(y3000).is_ok());
    }

    #[test]
    fn birthday_rejects_year_after_3000() {
        let y3001 = Utc.with_ymd_and_hms(3001, 1, 1, 0, 0, 0).unwrap();
        assert!(validate_birthday(y3001).is_err());
    }

    // -- experience ----------------------------------------------------------

    #[test]
    fn experience_accepts_bounds() {
        assert!(validate_experience(0).is_ok());
        assert!(validate_experience(EXPERIENCE_MAX).is_ok());
    }

    #[test]
    fn experience_rejects_out_of_range() {
        assert!(validate_experience(-1).is_err());
        assert!(validate_experience(EXPERIENCE_MAX + 1).is_err());
    }
}
