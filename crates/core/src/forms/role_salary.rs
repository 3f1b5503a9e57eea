// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Expected roles and salary ranges, as generic job titles.

use crate::field::{FieldId, FieldKind, FieldSpec, FieldValue};
use crate::kind::FormKind;
use crate::model::{FormModel, MutationSpec, Reconcile, UPDATE_USER_AS_USER};
use crate::section::SectionRules;
use serde::{Deserialize, Serialize};
use talent_profile_domain::{
    DomainError, GenericJobTitle, GenericJobTitleKey, SyncInput, UserRecord,
};

/// Field names.
pub mod fields {
    use crate::field::FieldId;

    pub const EXPECTED_GENERIC_JOB_TITLES: FieldId = "expectedGenericJobTitles";
}

static FIELDS: [FieldSpec; 1] = [FieldSpec::required(
    fields::EXPECTED_GENERIC_JOB_TITLES,
    FieldKind::Checklist,
)];

static RULES: SectionRules<RoleSalary, RoleSalaryContext> = SectionRules::new(&[]);

/// Lookup data for the role and salary form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoleSalaryContext {
    /// Every generic job title with its id.
    pub generic_job_titles: Vec<GenericJobTitle>,
}

/// Role and salary form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RoleSalary {
    pub expected_generic_job_titles: Vec<GenericJobTitleKey>,
}

/// The `UpdateUserAsUserInput` subset this form edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleSalaryPayload {
    pub expected_generic_job_titles: SyncInput,
}

impl FormModel for RoleSalary {
    type Record = UserRecord;
    type Context = RoleSalaryContext;
    type Payload = RoleSalaryPayload;

    const KIND: FormKind = FormKind::RoleSalary;

    fn mutation(&self) -> MutationSpec {
        UPDATE_USER_AS_USER
    }

    fn fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn rules() -> &'static SectionRules<Self, RoleSalaryContext> {
        &RULES
    }

    fn value(&self, field: FieldId) -> FieldValue {
        match field {
            fields::EXPECTED_GENERIC_JOB_TITLES => {
                FieldValue::list(&self.expected_generic_job_titles)
            }
            _ => FieldValue::Unset,
        }
    }

    fn from_record(record: &UserRecord, _context: &RoleSalaryContext) -> Self {
        Self {
            expected_generic_job_titles: record
                .expected_generic_job_titles
                .iter()
                .flatten()
                .map(|title| title.key)
                .collect(),
        }
    }

    fn subject_id(record: &UserRecord) -> Option<String> {
        Some(record.id.clone())
    }

    fn to_submission(&self, context: &RoleSalaryContext) -> Result<RoleSalaryPayload, DomainError> {
        // Keys without a known title are dropped
        let ids = self.expected_generic_job_titles.iter().filter_map(|key| {
            context
                .generic_job_titles
                .iter()
                .find(|title| title.key == *key)
                .map(|title| title.id.as_str())
        });
        Ok(RoleSalaryPayload {
            expected_generic_job_titles: SyncInput::from_ids(ids),
        })
    }
}

impl Reconcile for RoleSalary {
    fn reconcile(
        record: &mut UserRecord,
        payload: &RoleSalaryPayload,
        context: &RoleSalaryContext,
    ) {
        record.expected_generic_job_titles = Some(
            payload
                .expected_generic_job_titles
                .sync
                .iter()
                .filter_map(|id| context.generic_job_titles.iter().find(|title| title.id == *id))
                .cloned()
                .collect(),
        );
    }
}
