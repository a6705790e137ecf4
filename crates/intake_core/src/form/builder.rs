//! Submission-time record building.

use crate::model::patient::{Patient, PatientInput};
use chrono::{Duration, NaiveDate};
use log::error;
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// chrono pattern for rendering a birth date the way it is typed (`31/12/1990`).
pub const BIRTH_DATE_FORMAT: &str = "%d/%m/%Y";

// Leading `day/month/year` digit groups; anything after the year is ignored.
static DAY_MONTH_YEAR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]+)/([0-9]+)/([0-9]+)").expect("valid day/month/year regex")
});

/// Birth date text that could not be turned into a calendar date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthDateParseError {
    /// Nothing was typed.
    Empty,
    /// Text does not start with `day/month/year` digit groups.
    Malformed,
    /// Digit groups resolve to a date chrono cannot represent.
    OutOfRange,
}

impl Display for BirthDateParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "birth date is empty"),
            Self::Malformed => write!(f, "birth date is not a day/month/year date"),
            Self::OutOfRange => write!(f, "birth date is out of range"),
        }
    }
}

impl Error for BirthDateParseError {}

/// Parses typed birth date text as `day/month/year`.
///
/// Parsing is lenient, so every text the format rule in `validation::rules`
/// accepts yields a date:
/// - day and month overflow roll forward (`31/02/2024` is 2024-03-02,
///   `31/04/1990` is 1990-05-01, month `13` is January of the next year);
/// - day `0` or month `0` roll backward (`00/03/2024` is 2024-02-29);
/// - digit groups may have any width (`1/5/1990` is 1990-05-01);
/// - text after the year is ignored (`15/05/1990x` is 1990-05-15).
///
/// # Errors
/// - `Empty` for empty text.
/// - `Malformed` when the text does not start with three `/`-separated
///   digit groups (`not-a-date`, `1990-05-15`).
/// - `OutOfRange` when the resolved date is outside chrono's range.
pub fn parse_birth_date(text: &str) -> Result<NaiveDate, BirthDateParseError> {
    if text.is_empty() {
        return Err(BirthDateParseError::Empty);
    }
    let caps = DAY_MONTH_YEAR_RE
        .captures(text)
        .ok_or(BirthDateParseError::Malformed)?;
    let group = |index: usize| -> Result<i64, BirthDateParseError> {
        caps[index]
            .parse::<i64>()
            .map_err(|_| BirthDateParseError::OutOfRange)
    };
    resolve_lenient(group(1)?, group(2)?, group(3)?).ok_or(BirthDateParseError::OutOfRange)
}

/// Resolves possibly overflowing day/month values against January 1st.
fn resolve_lenient(day: i64, month: i64, year: i64) -> Option<NaiveDate> {
    let months = year.checked_mul(12)?.checked_add(month.checked_sub(1)?)?;
    let year = i32::try_from(months.div_euclid(12)).ok()?;
    let month = u32::try_from(months.rem_euclid(12) + 1).ok()?;
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    let days = Duration::try_days(day.checked_sub(1)?)?;
    first_of_month.checked_add_signed(days)
}

/// Builds a new, unsaved patient record from raw form input.
///
/// Text fields are copied as typed. When the birth date does not parse, the
/// failure is logged at error level and `birth_date` stays `None`.
pub fn build_from_input(input: &PatientInput) -> Patient {
    let birth_date = match parse_birth_date(&input.birth_date) {
        Ok(date) => Some(date),
        Err(err) => {
            // Never log the typed value itself.
            error!(
                "event=birth_date_parse module=form status=error input_len={} error={}",
                input.birth_date.chars().count(),
                err
            );
            None
        }
    };

    Patient {
        id: None,
        name: input.name.clone(),
        cpf: input.cpf.clone(),
        email: input.email.clone(),
        phone: input.phone.clone(),
        birth_date,
    }
}
