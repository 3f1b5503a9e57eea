// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Position duration and accepted operational requirements.

use crate::field::{FieldId, FieldKind, FieldSpec, FieldValue};
use crate::kind::FormKind;
use crate::model::{FormModel, MutationSpec, Reconcile, UPDATE_USER_AS_USER};
use crate::section::SectionRules;
use serde::{Deserialize, Serialize};
use talent_profile_domain::{
    DomainError, OperationalRequirement, PositionDuration, UserRecord, bool_to_string,
    parse_bool_field,
};

/// Field names.
pub mod fields {
    use crate::field::FieldId;

    pub const WOULD_ACCEPT_TEMPORARY: FieldId = "wouldAcceptTemporary";
    pub const ACCEPTED_OPERATIONAL_REQUIREMENTS: FieldId = "acceptedOperationalRequirements";
}

static FIELDS: [FieldSpec; 2] = [
    FieldSpec::required(fields::WOULD_ACCEPT_TEMPORARY, FieldKind::BoolString),
    FieldSpec::optional(fields::ACCEPTED_OPERATIONAL_REQUIREMENTS, FieldKind::Checklist),
];

static RULES: SectionRules<WorkPreferences, ()> = SectionRules::new(&[]);

/// Work preferences form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WorkPreferences {
    /// `"true"` or `"false"`.
    pub would_accept_temporary: Option<String>,
    pub accepted_operational_requirements: Vec<OperationalRequirement>,
}

/// The `UpdateUserAsUserInput` subset this form edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkPreferencesPayload {
    pub position_duration: Vec<PositionDuration>,
    pub accepted_operational_requirements: Vec<OperationalRequirement>,
}

impl FormModel for WorkPreferences {
    type Record = UserRecord;
    type Context = ();
    type Payload = WorkPreferencesPayload;

    const KIND: FormKind = FormKind::WorkPreferences;

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
            fields::WOULD_ACCEPT_TEMPORARY => {
                FieldValue::selection(self.would_accept_temporary.as_deref())
            }
            fields::ACCEPTED_OPERATIONAL_REQUIREMENTS => {
                FieldValue::list(&self.accepted_operational_requirements)
            }
            _ => FieldValue::Unset,
        }
    }

    fn from_record(record: &UserRecord, (): &()) -> Self {
        Self {
            would_accept_temporary: bool_to_string(
                record
                    .position_duration
                    .as_ref()
                    .map(|durations| durations.contains(&PositionDuration::Temporary)),
            ),
            accepted_operational_requirements: record
                .accepted_operational_requirements
                .clone()
                .unwrap_or_default(),
        }
    }

    fn subject_id(record: &UserRecord) -> Option<String> {
        Some(record.id.clone())
    }

    fn to_submission(&self, (): &()) -> Result<WorkPreferencesPayload, DomainError> {
        let accepts_temporary: bool = parse_bool_field(self.would_accept_temporary.as_deref())?
            .into_option()
            .unwrap_or(false);
        // Permanent positions are always accepted
        let position_duration: Vec<PositionDuration> = if accepts_temporary {
            vec![PositionDuration::Permanent, PositionDuration::Temporary]
        } else {
            vec![PositionDuration::Permanent]
        };
        Ok(WorkPreferencesPayload {
            position_duration,
            accepted_operational_requirements: self.accepted_operational_requirements.clone(),
        })
    }
}

impl Reconcile for WorkPreferences {
    fn reconcile(record: &mut UserRecord, payload: &WorkPreferencesPayload, (): &()) {
        record.position_duration = Some(payload.position_duration.clone());
        record.accepted_operational_requirements =
            Some(payload.accepted_operational_requirements.clone());
    }
}
