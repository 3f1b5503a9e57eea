// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::validation::ValidationErrors;
use talent_profile_domain::DomainError;

/// Errors that can occur while turning form values into a payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// One or more visible fields failed validation.
    Validation(ValidationErrors),
    /// A value could not be parsed into its payload type.
    Domain(DomainError),
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(errors) => write!(f, "Validation failed: {errors}"),
            Self::Domain(err) => write!(f, "Invalid form value: {err}"),
        }
    }
}

impl std::error::Error for FormError {}

impl From<DomainError> for FormError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationErrors> for FormError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors)
    }
}
