// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Preferred work regions and location exemptions.

use crate::field::{FieldId, FieldKind, FieldSpec, FieldValue};
use crate::kind::FormKind;
use crate::model::{FormModel, MutationSpec, Reconcile, UPDATE_USER_AS_USER};
use crate::section::SectionRules;
use serde::{Deserialize, Serialize};
use talent_profile_domain::{DomainError, UserRecord, WorkRegion};

/// Field names.
pub mod fields {
    use crate::field::FieldId;

    pub const LOCATION_PREFERENCES: FieldId = "locationPreferences";
    pub const LOCATION_EXEMPTIONS: FieldId = "locationExemptions";
}

static FIELDS: [FieldSpec; 2] = [
    FieldSpec::required(fields::LOCATION_PREFERENCES, FieldKind::Checklist),
    FieldSpec::optional(fields::LOCATION_EXEMPTIONS, FieldKind::Text),
];

static RULES: SectionRules<WorkLocation, ()> = SectionRules::new(&[]);

/// Work location form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkLocation {
    pub location_preferences: Vec<WorkRegion>,
    /// Comma-separated cities the applicant will not work in.
    pub location_exemptions: String,
}

/// The `UpdateUserAsUserInput` subset this form edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkLocationPayload {
    pub location_preferences: Vec<WorkRegion>,
    pub location_exemptions: Option<String>,
}

/// Normalizes a comma-separated exemption list.
///
/// Entries are trimmed and blanks dropped; an empty list becomes `None`.
#[must_use]
pub fn normalize_exemptions(exemptions: &str) -> Option<String> {
    let entries: Vec<&str> = exemptions
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect();
    if entries.is_empty() {
        None
    } else {
        Some(entries.join(", "))
    }
}

impl FormModel for WorkLocation {
    type Record = UserRecord;
    type Context = ();
    type Payload = WorkLocationPayload;

    const KIND: FormKind = FormKind::WorkLocation;

    fn mutation(&self) -> MutationSpec {
        UPDATE_USER_AS_USER
    }

    fn fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn rules() -> &'static SectionRules<Self, ()> {
        &RULES
    }

    fn value(&self, field: FieldId) -> FieldValue {
        match field {
            fields::LOCATION_PREFERENCES => FieldValue::list(&self.location_preferences),
            fields::LOCATION_EXEMPTIONS => FieldValue::text(&self.location_exemptions),
            _ => FieldValue::Unset,
        }
    }

    fn from_record(record: &UserRecord, (): &()) -> Self {
        Self {
            location_preferences: record.location_preferences.clone().unwrap_or_default(),
            location_exemptions: record.location_exemptions.clone().unwrap_or_default(),
        }
    }

    fn subject_id(record: &UserRecord) -> Option<String> {
        Some(record.id.clone())
    }

    fn to_submission(&self, (): &()) -> Result<WorkLocationPayload, DomainError> {
        Ok(WorkLocationPayload {
            location_preferences: self.location_preferences.clone(),
            location_exemptions: normalize_exemptions(&self.location_exemptions),
        })
    }
}

impl Reconcile for WorkLocation {
    fn reconcile(record: &mut UserRecord, payload: &WorkLocationPayload, (): &()) {
        record.location_preferences = Some(payload.location_preferences.clone());
        record.location_exemptions.clone_from(&payload.location_exemptions);
    }
}
