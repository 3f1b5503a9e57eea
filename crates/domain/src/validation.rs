// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use time::Date;
use time::macros::format_description;

time::serde::format_description!(pub iso_date, Date, "[year]-[month]-[day]");

/// Parses a `YYYY-MM-DD` date as entered in a date input.
///
/// # Errors
///
/// Returns `DomainError::DateParseError` if the string is not a valid date.
pub fn parse_date(date_string: &str) -> Result<Date, DomainError> {
    Date::parse(date_string.trim(), format_description!("[year]-[month]-[day]")).map_err(|e| {
        DomainError::DateParseError {
            date_string: date_string.to_string(),
            error: e.to_string(),
        }
    })
}

/// Formats a date for a date input (`YYYY-MM-DD`).
#[must_use]
pub fn format_date(date: Date) -> String {
    format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    )
}

/// Validates that an end date does not precede its start date.
///
/// # Errors
///
/// Returns `DomainError::InvalidDateRange` if `end_date < start_date`.
pub fn validate_date_range(start_date: Date, end_date: Date) -> Result<(), DomainError> {
    if end_date < start_date {
        return Err(DomainError::InvalidDateRange {
            start_date,
            end_date,
        });
    }
    Ok(())
}

/// Validates a telephone number in international (E.164) format.
///
/// # Errors
///
/// Returns `DomainError::InvalidTelephone` unless the value is `+`
/// followed by 2 to 15 digits, the first of which is not zero.
pub fn validate_telephone(telephone: &str) -> Result<(), DomainError> {
    let invalid = || DomainError::InvalidTelephone(telephone.to_string());

    let digits: &str = telephone.strip_prefix('+').ok_or_else(invalid)?;
    if !(2..=15).contains(&digits.len()) || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    if digits.starts_with('0') {
        return Err(invalid());
    }
    Ok(())
}

/// Validates the basic shape of an email address.
///
/// # Errors
///
/// Returns `DomainError::InvalidEmail` unless the value contains exactly one
/// `@` with a non-empty local part and a dotted domain.
pub fn validate_email(email: &str) -> Result<(), DomainError> {
    let invalid = || DomainError::InvalidEmail(email.to_string());

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    if local.is_empty() || domain.contains('@') {
        return Err(invalid());
    }
    // Rule: domain must have a non-empty label on each side of a dot
    match domain.rsplit_once('.') {
        Some((host, tld)) if !host.is_empty() && !tld.is_empty() => Ok(()),
        _ => Err(invalid()),
    }
}

/// Maps blank text to `None`, trimming surrounding whitespace.
#[must_use]
pub fn empty_to_none(value: &str) -> Option<String> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
