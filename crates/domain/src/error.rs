// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while parsing or checking profile values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A boolean-as-string value was neither `"true"` nor `"false"`.
    InvalidBooleanString(String),
    /// A yes/no value was neither `"yes"` nor `"no"`.
    InvalidYesNo(String),
    /// A string did not name a known enum variant.
    UnknownEnumValue {
        /// The GraphQL enum name.
        enum_name: &'static str,
        /// The rejected value.
        value: String,
    },
    /// A classification level could not be read as a number.
    InvalidClassificationLevel(String),
    /// Telephone number is not in international format.
    InvalidTelephone(String),
    /// Email address is malformed.
    InvalidEmail(String),
    /// Failed to parse date from string.
    DateParseError {
        /// The invalid date string.
        date_string: String,
        /// The parsing error message.
        error: String,
    },
    /// An end date precedes its start date.
    InvalidDateRange {
        /// The start date.
        start_date: time::Date,
        /// The end date.
        end_date: time::Date,
    },
    /// A form kind identifier is not known.
    UnknownFormKind(String),
    /// A value the payload cannot be built without was not given.
    MissingValue(&'static str),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidBooleanString(value) => {
                write!(
                    f,
                    "Invalid boolean string '{value}': expected 'true' or 'false'"
                )
            }
            Self::InvalidYesNo(value) => {
                write!(f, "Invalid yes/no value '{value}': expected 'yes' or 'no'")
            }
            Self::UnknownEnumValue { enum_name, value } => {
                write!(f, "Unknown {enum_name} value '{value}'")
            }
            Self::InvalidClassificationLevel(value) => {
                write!(f, "Invalid classification level '{value}'")
            }
            Self::InvalidTelephone(value) => {
                write!(
                    f,
                    "Invalid telephone number '{value}': expected '+' followed by 2 to 15 digits"
                )
            }
            Self::InvalidEmail(value) => write!(f, "Invalid email address '{value}'"),
            Self::DateParseError { date_string, error } => {
                write!(f, "Failed to parse date '{date_string}': {error}")
            }
            Self::InvalidDateRange {
                start_date,
                end_date,
            } => {
                write!(
                    f,
                    "End date {end_date} must not be before start date {start_date}"
                )
            }
            Self::UnknownFormKind(kind) => write!(f, "Unknown form kind '{kind}'"),
            Self::MissingValue(field) => write!(f, "Missing value for '{field}'"),
        }
    }
}

impl std::error::Error for DomainError {}
