// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::field::{FieldId, FieldSpec, FieldValue};
use crate::kind::FormKind;
use crate::section::{SectionRules, Visibility};
use crate::validation::ValidationErrors;
use serde::Serialize;
use serde::de::DeserializeOwned;
use talent_profile_domain::DomainError;

/// The GraphQL mutation a form submits through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MutationSpec {
    /// The operation name, e.g. `"UpdateUserAsUser"`.
    pub operation_name: &'static str,
    /// The root field of the response, e.g. `"updateUserAsUser"`.
    pub root_field: &'static str,
    /// The variable carrying the payload, e.g. `"user"`.
    pub input_argument: &'static str,
    /// Whether the mutation takes an `id` variable.
    pub takes_subject_id: bool,
}

/// The mutation shared by every form that edits the applicant's own profile.
pub const UPDATE_USER_AS_USER: MutationSpec = MutationSpec {
    operation_name: "UpdateUserAsUser",
    root_field: "updateUserAsUser",
    input_argument: "user",
    takes_subject_id: true,
};

/// A typed form value set and its translation to and from the backend.
///
/// Implementors are plain structs holding the form's current values. The
/// dependent-section rules, the field registry and the payload translation
/// are all declared here, so every form runs through the same engine.
pub trait FormModel: Clone + std::fmt::Debug + Serialize + DeserializeOwned + 'static {
    /// The server shape the form loads from.
    type Record: DeserializeOwned;
    /// Lookup data the form needs, such as option lists.
    type Context: Clone + std::fmt::Debug + Default + DeserializeOwned + 'static;
    /// The mutation input the form produces.
    type Payload: Serialize;

    /// Which form this is.
    const KIND: FormKind;

    /// Returns the mutation the current values submit through.
    fn mutation(&self) -> MutationSpec;

    /// Returns the field registry in display order.
    fn fields() -> &'static [FieldSpec];

    /// Returns the dependent-section rules.
    fn rules() -> &'static SectionRules<Self, Self::Context>;

    /// Returns the current value of `field`.
    fn value(&self, field: FieldId) -> FieldValue;

    /// Maps a fetched record to form values, tolerating missing fields.
    fn from_record(record: &Self::Record, context: &Self::Context) -> Self;

    /// Returns the id the mutation is addressed to, if any.
    fn subject_id(record: &Self::Record) -> Option<String>;

    /// Returns the id the values themselves address, if any.
    ///
    /// Used when a form was built without an explicit subject id.
    fn implied_subject_id(&self) -> Option<&str> {
        None
    }

    /// Translates the values into the mutation input.
    ///
    /// Called only after hidden sections have been cleared and validation has
    /// passed.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if a value cannot be parsed into its payload
    /// type.
    fn to_submission(&self, context: &Self::Context) -> Result<Self::Payload, DomainError>;

    /// Adds form-specific checks beyond requiredness.
    ///
    /// Only fields that are visible under `visibility` may be checked.
    fn check(
        &self,
        _context: &Self::Context,
        _visibility: &Visibility,
        _errors: &mut ValidationErrors,
    ) {
    }
}

/// Writes a submitted payload back onto a record, as the backend would.
///
/// Used to check that a load, submit, reload cycle keeps every edited field.
pub trait Reconcile: FormModel {
    /// Applies `payload` to `record`.
    fn reconcile(record: &mut Self::Record, payload: &Self::Payload, context: &Self::Context);
}
