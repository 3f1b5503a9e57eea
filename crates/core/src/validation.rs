// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Per-field validation results, surfaced inline next to each field.

use crate::field::FieldId;
use serde::Serialize;
use talent_profile_domain::DomainError;

/// Why a field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// A visible required field is empty.
    Required,
    /// A field holds a value that is not acceptable.
    Invalid {
        /// Why the value was rejected.
        message: String,
    },
}

/// A validation failure for one field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// The offending field.
    pub field: FieldId,
    /// The failure.
    #[serde(flatten)]
    pub kind: FieldErrorKind,
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            FieldErrorKind::Required => write!(f, "{} is required", self.field),
            FieldErrorKind::Invalid { message } => write!(f, "{}: {message}", self.field),
        }
    }
}

/// Every validation failure found in one pass, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: Vec<FieldError>,
}

impl ValidationErrors {
    /// Creates an empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self { errors: Vec::new() }
    }

    /// Records that a required field is empty.
    pub fn required(&mut self, field: FieldId) {
        self.errors.push(FieldError {
            field,
            kind: FieldErrorKind::Required,
        });
    }

    /// Records that a field holds an unacceptable value.
    pub fn invalid(&mut self, field: FieldId, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            kind: FieldErrorKind::Invalid {
                message: message.into(),
            },
        });
    }

    /// Records a domain check failure against `field`, if there is one.
    pub fn check(&mut self, field: FieldId, result: Result<(), DomainError>) {
        if let Err(err) = result {
            self.invalid(field, err.to_string());
        }
    }

    /// Returns true if no failures were recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the number of failures.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns the failures recorded against `field`.
    pub fn for_field(&self, field: FieldId) -> impl Iterator<Item = &FieldError> {
        self.errors.iter().filter(move |error| error.field == field)
    }

    /// Returns true if `field` has at least one failure.
    #[must_use]
    pub fn has_error(&self, field: FieldId) -> bool {
        self.for_field(field).next().is_some()
    }

    /// Iterates every failure.
    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.errors.iter()
    }

    /// Converts into `Ok(())` when empty, or `Err(self)` otherwise.
    ///
    /// # Errors
    ///
    /// Returns the collected errors if any were recorded.
    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let messages: Vec<String> = self.errors.iter().map(ToString::to_string).collect();
        f.write_str(&messages.join("; "))
    }
}
