// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Runs the form engine for one request.
//!
//! Every form kind goes through the same two generic functions; the only
//! per-kind code is the dispatch table at the bottom.

use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use talent_profile_forms::forms::{
    AboutMe, CommunityInterest, EmploymentEquity, Experience, GovernmentInfo, LanguageInfo,
    RoleSalary, WorkLocation, WorkPreferences,
};
use talent_profile_forms::{
    FieldState, Form, FormError, FormKind, FormModel, MutationSpec, SectionId, ValidationErrors,
    Visibility,
};
use tracing::debug;

use crate::HttpError;

/// Body of `POST /forms/{kind}/load`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoadRequest {
    /// The fetched record, in the backend's shape.
    pub record: Value,
    /// Lookup data; omitted means empty.
    #[serde(default)]
    pub context: Value,
}

/// Form values mapped from a record.
#[derive(Debug, Clone, Serialize)]
pub struct LoadResponse {
    pub kind: FormKind,
    pub values: Value,
    pub subject_id: Option<String>,
    pub visible_sections: Visibility,
}

/// Body of `POST /forms/{kind}/evaluate`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EvaluateRequest {
    /// The current values.
    pub values: Value,
    /// The values before the latest edit. When given, the edit is replayed
    /// on top of them so that every section it hides is reset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous: Option<Value>,
    /// Lookup data; omitted means empty.
    #[serde(default)]
    pub context: Value,
    /// The id the mutation is addressed to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
}

/// The derived state of a form.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluateResponse {
    pub kind: FormKind,
    pub mutation: MutationSpec,
    /// The id the mutation would be addressed to.
    pub subject_id: Option<String>,
    /// Values after any cascading resets.
    pub values: Value,
    pub reset_sections: Vec<SectionId>,
    pub visible_sections: Visibility,
    pub fields: Vec<FieldState>,
    pub errors: ValidationErrors,
    /// The mutation input; `null` while any visible field is invalid.
    pub payload: Option<Value>,
}

fn decode<T: DeserializeOwned>(value: Value, what: &str) -> Result<T, HttpError> {
    serde_json::from_value(value).map_err(|err| HttpError {
        status: StatusCode::UNPROCESSABLE_ENTITY,
        message: format!("Malformed {what}: {err}"),
    })
}

fn decode_context<C: DeserializeOwned + Default>(value: Value) -> Result<C, HttpError> {
    if value.is_null() {
        Ok(C::default())
    } else {
        decode(value, "context")
    }
}

fn encode<T: Serialize>(value: &T) -> Result<Value, HttpError> {
    serde_json::to_value(value).map_err(|err| HttpError {
        status: StatusCode::INTERNAL_SERVER_ERROR,
        message: format!("Failed to encode response: {err}"),
    })
}

fn load_form<M: FormModel>(request: LoadRequest) -> Result<LoadResponse, HttpError> {
    let record: M::Record = decode(request.record, "record")?;
    let context: M::Context = decode_context(request.context)?;
    let form: Form<M> = Form::load(&record, context);

    Ok(LoadResponse {
        kind: M::KIND,
        values: encode(form.values())?,
        subject_id: form.subject_id().map(ToString::to_string),
        visible_sections: form.visibility(),
    })
}

fn evaluate_form<M: FormModel>(request: EvaluateRequest) -> Result<EvaluateResponse, HttpError> {
    let values: M = decode(request.values, "values")?;
    let context: M::Context = decode_context(request.context)?;

    let (form, reset_sections): (Form<M>, Vec<SectionId>) = match request.previous {
        Some(previous) => {
            let previous: M = decode(previous, "previous values")?;
            let mut form: Form<M> = Form::with_values(previous, context, request.subject_id);
            let reset: Vec<SectionId> = form.update(|current| *current = values);
            (form, reset)
        }
        None => (
            Form::with_values(values, context, request.subject_id),
            Vec::new(),
        ),
    };

    let (errors, payload): (ValidationErrors, Option<Value>) = match form.submission() {
        Ok(payload) => (ValidationErrors::new(), Some(encode(&payload)?)),
        Err(FormError::Validation(errors)) => (errors, None),
        Err(FormError::Domain(err)) => {
            return Err(HttpError {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                message: err.to_string(),
            });
        }
    };
    debug!(
        kind = %M::KIND,
        errors = errors.len(),
        reset = reset_sections.len(),
        "Evaluated form"
    );

    Ok(EvaluateResponse {
        kind: M::KIND,
        mutation: form.mutation(),
        subject_id: form.subject_id().map(ToString::to_string),
        values: encode(form.values())?,
        reset_sections,
        visible_sections: form.visibility(),
        fields: form.field_states(),
        errors,
        payload,
    })
}

/// Loads a form of `kind` from a record.
///
/// # Errors
///
/// Returns 422 if the record or context does not match the form.
pub fn load(kind: FormKind, request: LoadRequest) -> Result<LoadResponse, HttpError> {
    match kind {
        FormKind::AboutMe => load_form::<AboutMe>(request),
        FormKind::GovernmentInfo => load_form::<GovernmentInfo>(request),
        FormKind::LanguageInfo => load_form::<LanguageInfo>(request),
        FormKind::WorkPreferences => load_form::<WorkPreferences>(request),
        FormKind::WorkLocation => load_form::<WorkLocation>(request),
        FormKind::EmploymentEquity => load_form::<EmploymentEquity>(request),
        FormKind::RoleSalary => load_form::<RoleSalary>(request),
        FormKind::CommunityInterest => load_form::<CommunityInterest>(request),
        FormKind::Experience => load_form::<Experience>(request),
    }
}

/// Evaluates the current values of a form of `kind`.
///
/// # Errors
///
/// Returns 422 if the values or context do not match the form, or if a
/// value cannot be parsed into its payload type.
pub fn evaluate(kind: FormKind, request: EvaluateRequest) -> Result<EvaluateResponse, HttpError> {
    match kind {
        FormKind::AboutMe => evaluate_form::<AboutMe>(request),
        FormKind::GovernmentInfo => evaluate_form::<GovernmentInfo>(request),
        FormKind::LanguageInfo => evaluate_form::<LanguageInfo>(request),
        FormKind::WorkPreferences => evaluate_form::<WorkPreferences>(request),
        FormKind::WorkLocation => evaluate_form::<WorkLocation>(request),
        FormKind::EmploymentEquity => evaluate_form::<EmploymentEquity>(request),
        FormKind::RoleSalary => evaluate_form::<RoleSalary>(request),
        FormKind::CommunityInterest => evaluate_form::<CommunityInterest>(request),
        FormKind::Experience => evaluate_form::<Experience>(request),
    }
}
