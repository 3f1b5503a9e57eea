// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Boolean values edited as strings.
//!
//! Radio groups edit booleans as `"true"`/`"false"` (or `"yes"`/`"no"`)
//! strings. The backend expects real booleans. Any other string is rejected
//! rather than coerced, since the input domain is fully controlled by the
//! form's own options.

use crate::error::DomainError;
use crate::input::Nullable;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The string used for a `true` radio option.
pub const TRUE_STRING: &str = "true";
/// The string used for a `false` radio option.
pub const FALSE_STRING: &str = "false";

/// Parses a boolean-as-string value.
///
/// Absence and nullness pass through unchanged.
///
/// # Errors
///
/// Returns `DomainError::InvalidBooleanString` for any string other than
/// `"true"` or `"false"`.
pub fn parse_bool_string(value: Nullable<&str>) -> Result<Nullable<bool>, DomainError> {
    match value {
        Nullable::Absent => Ok(Nullable::Absent),
        Nullable::Null => Ok(Nullable::Null),
        Nullable::Value(TRUE_STRING) => Ok(Nullable::Value(true)),
        Nullable::Value(FALSE_STRING) => Ok(Nullable::Value(false)),
        Nullable::Value(other) => Err(DomainError::InvalidBooleanString(other.to_string())),
    }
}

/// Parses an optional form field holding a boolean-as-string.
///
/// An unset field maps to `Null`.
///
/// # Errors
///
/// Returns `DomainError::InvalidBooleanString` for any string other than
/// `"true"` or `"false"`.
pub fn parse_bool_field(value: Option<&str>) -> Result<Nullable<bool>, DomainError> {
    parse_bool_string(value.into())
}

/// Renders an optional boolean as a radio-option string.
#[must_use]
pub fn bool_to_string(value: Option<bool>) -> Option<String> {
    value.map(|b| String::from(if b { TRUE_STRING } else { FALSE_STRING }))
}

/// Returns true if the field currently holds the `"true"` option.
///
/// Used by visibility predicates, which must not fail.
#[must_use]
pub fn is_true_string(value: Option<&str>) -> bool {
    value == Some(TRUE_STRING)
}

/// A yes/no radio choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum YesNo {
    /// "yes"
    Yes,
    /// "no"
    No,
}

impl YesNo {
    /// Converts a stored boolean into a yes/no choice.
    #[must_use]
    pub const fn from_bool(value: bool) -> Self {
        if value { Self::Yes } else { Self::No }
    }

    /// Returns true for `Yes`.
    #[must_use]
    pub const fn is_yes(self) -> bool {
        matches!(self, Self::Yes)
    }

    /// Returns the string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl FromStr for YesNo {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            _ => Err(DomainError::InvalidYesNo(s.to_string())),
        }
    }
}

impl std::fmt::Display for YesNo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
