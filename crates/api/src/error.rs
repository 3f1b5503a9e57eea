// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the submission boundary.

use talent_profile_domain::DomainError;
use talent_profile_forms::{FormError, ValidationErrors};
use thiserror::Error;

/// A failure reported by the mutation client before any response was read.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransportError {
    /// The request never reached the backend.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success HTTP status.
    #[error("Unexpected HTTP status {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("Malformed response: {0}")]
    Decode(String),
}

/// Submission errors.
///
/// `Validation`, `Parse`, `MissingSubject`, `Encode` and `InFlight` are
/// raised before the mutation is sent and never produce a toast. The
/// remaining variants are mutation failures and always produce exactly one
/// error toast.
#[derive(Debug, Error)]
pub enum SubmitError {
    /// One or more visible fields are invalid.
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),

    /// A form value could not be parsed into its payload type.
    #[error("Invalid form value: {0}")]
    Parse(DomainError),

    /// The mutation needs an id but the form was not loaded from a record.
    #[error("Mutation {operation} requires an id")]
    MissingSubject { operation: &'static str },

    /// The payload could not be encoded as GraphQL variables.
    #[error("Failed to encode variables: {0}")]
    Encode(#[from] serde_json::Error),

    /// Another submission is still waiting for its response.
    #[error("A submission is already in progress")]
    InFlight,

    /// The mutation client failed.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The backend returned GraphQL errors.
    #[error("GraphQL errors: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    /// The backend reported success without returning the saved record.
    #[error("Mutation {root_field} returned no data")]
    EmptyResponse { root_field: &'static str },
}

impl SubmitError {
    /// Whether the error came back from the mutation itself.
    ///
    /// Only these are shown to the user as a toast.
    #[must_use]
    pub const fn is_mutation_failure(&self) -> bool {
        matches!(
            self,
            Self::Transport(_) | Self::GraphQl(_) | Self::EmptyResponse { .. }
        )
    }
}

impl From<FormError> for SubmitError {
    fn from(err: FormError) -> Self {
        match err {
            FormError::Validation(errors) => Self::Validation(errors),
            FormError::Domain(err) => Self::Parse(err),
        }
    }
}
