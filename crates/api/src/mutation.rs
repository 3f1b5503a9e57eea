// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! GraphQL mutation request and response shapes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use talent_profile_forms::MutationSpec;

use crate::error::SubmitError;

/// One mutation ready to send.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationRequest {
    /// The GraphQL operation name.
    pub operation_name: &'static str,
    /// The variables: `id` when the mutation takes one, and the payload
    /// under the mutation's input argument.
    pub variables: Map<String, Value>,
}

impl MutationRequest {
    /// Builds the request for `mutation` addressed to `subject_id`.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::MissingSubject` if the mutation takes an id and
    /// none is given, or `SubmitError::Encode` if the payload cannot be
    /// serialized.
    pub fn new<P: Serialize>(
        mutation: &MutationSpec,
        subject_id: Option<&str>,
        payload: &P,
    ) -> Result<Self, SubmitError> {
        let mut variables: Map<String, Value> = Map::new();

        if mutation.takes_subject_id {
            let id: &str = subject_id.ok_or(SubmitError::MissingSubject {
                operation: mutation.operation_name,
            })?;
            variables.insert(String::from("id"), Value::String(id.to_string()));
        }
        variables.insert(
            mutation.input_argument.to_string(),
            serde_json::to_value(payload)?,
        );

        Ok(Self {
            operation_name: mutation.operation_name,
            variables,
        })
    }

    /// Returns the payload variable, if present.
    #[must_use]
    pub fn input(&self, mutation: &MutationSpec) -> Option<&Value> {
        self.variables.get(mutation.input_argument)
    }
}

/// One entry of a GraphQL `errors` array.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

/// A GraphQL response body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MutationResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<GraphQlError>,
}

impl MutationResponse {
    /// A successful response returning `id` under `root_field`.
    #[must_use]
    pub fn saved(root_field: &str, id: &str) -> Self {
        let mut saved: Map<String, Value> = Map::new();
        saved.insert(String::from("id"), Value::String(id.to_string()));
        let mut data: Map<String, Value> = Map::new();
        data.insert(root_field.to_string(), Value::Object(saved));
        Self {
            data: Some(Value::Object(data)),
            errors: Vec::new(),
        }
    }

    /// Reads the outcome of `mutation` from this response.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::GraphQl` if the response carries errors, or
    /// `SubmitError::EmptyResponse` if the root field holds no id.
    pub fn saved_id(&self, mutation: &MutationSpec) -> Result<String, SubmitError> {
        if !self.errors.is_empty() {
            return Err(SubmitError::GraphQl(
                self.errors.iter().map(|e| e.message.clone()).collect(),
            ));
        }

        self.data
            .as_ref()
            .and_then(|data| data.get(mutation.root_field))
            .and_then(|saved| saved.get("id"))
            .and_then(Value::as_str)
            .map(ToString::to_string)
            .ok_or(SubmitError::EmptyResponse {
                root_field: mutation.root_field,
            })
    }
}
