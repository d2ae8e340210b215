//! Input checks for naming requests.

use chrono::{Datelike, NaiveDate};
use regex::Regex;
use std::sync::LazyLock;

use crate::calendar::BirthMoment;
use crate::error::{NamingError, Result};

/// Earliest supported birth year.
pub const MIN_BIRTH_YEAR: i32 = 1900;

static RE_HAN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[\u{4e00}-\u{9fa5}]+$").unwrap());

/// A surname is one or two Han characters (王, 欧阳).
pub fn validate_surname(surname: &str) -> Result<()> {
    let fail = |message: &str| -> Result<()> {
        Err(NamingError::InvalidSurname {
            message: message.to_string(),
        })
    };

    if surname.is_empty() {
        return fail("surname is required");
    }
    if surname.chars().count() > 2 {
        return fail("surname must be 1-2 Han characters");
    }
    if !RE_HAN.is_match(surname) {
        return fail("surname may only contain Han characters");
    }
    Ok(())
}

/// Check that a birth moment is a real, non-future date from 1900 onward
/// with an hour of 0-23. `today` is the caller's current date.
pub fn validate_birth(moment: &BirthMoment, today: NaiveDate) -> Result<()> {
    if moment.year < MIN_BIRTH_YEAR || moment.year > today.year() {
        return Err(NamingError::birth(format!(
            "year must be between {MIN_BIRTH_YEAR} and {}",
            today.year()
        )));
    }
    if !(1..=12).contains(&moment.month) {
        return Err(NamingError::birth("month must be between 1 and 12"));
    }
    let date = moment.date()?;
    if date > today {
        return Err(NamingError::birth("birth date cannot be in the future"));
    }
    if moment.hour > 23 {
        return Err(NamingError::birth("hour must be between 0 and 23"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    #[test]
    fn test_surname_ok() {
        assert!(validate_surname("王").is_ok());
        assert!(validate_surname("欧阳").is_ok());
    }

    #[test]
    fn test_surname_rejected() {
        for bad in ["", "司马相", "Li", "王1", "王 "] {
            assert!(
                matches!(validate_surname(bad), Err(NamingError::InvalidSurname { .. })),
                "{bad:?}"
            );
        }
    }

    #[test]
    fn test_birth_ok() {
        assert!(validate_birth(&BirthMoment::new(1990, 5, 17, 8), today()).is_ok());
        assert!(validate_birth(&BirthMoment::new(2025, 6, 1, 23), today()).is_ok());
    }

    #[test]
    fn test_birth_rejected() {
        let cases = [
            BirthMoment::new(1899, 12, 31, 0),
            BirthMoment::new(2026, 1, 1, 0),
            BirthMoment::new(2025, 6, 2, 0),
            BirthMoment::new(2001, 2, 29, 0),
            BirthMoment::new(2001, 0, 1, 0),
            BirthMoment::new(2001, 1, 1, 24),
        ];
        for m in cases {
            assert!(validate_birth(&m, today()).is_err(), "{m:?}");
        }
    }
}
