// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Employment equity self-declaration.

use crate::field::{FieldId, FieldKind, FieldSpec, FieldValue};
use crate::kind::FormKind;
use crate::model::{FormModel, MutationSpec, Reconcile, UPDATE_USER_AS_USER};
use crate::section::{DependentSection, SectionRules};
use serde::{Deserialize, Serialize};
use talent_profile_domain::{DomainError, IndigenousCommunity, UserRecord, empty_to_none};

/// Field names.
pub mod fields {
    use crate::field::FieldId;

    pub const IS_WOMAN: FieldId = "isWoman";
    pub const HAS_DISABILITY: FieldId = "hasDisability";
    pub const IS_VISIBLE_MINORITY: FieldId = "isVisibleMinority";
    pub const INDIGENOUS_COMMUNITIES: FieldId = "indigenousCommunities";
    pub const INDIGENOUS_DECLARATION_SIGNATURE: FieldId = "indigenousDeclarationSignature";
}

/// Section names.
pub mod sections {
    use crate::section::SectionId;

    pub const INDIGENOUS_DECLARATION: SectionId = "indigenousDeclaration";
}

static FIELDS: [FieldSpec; 5] = [
    FieldSpec::optional(fields::IS_WOMAN, FieldKind::Checkbox),
    FieldSpec::optional(fields::HAS_DISABILITY, FieldKind::Checkbox),
    FieldSpec::optional(fields::IS_VISIBLE_MINORITY, FieldKind::Checkbox),
    FieldSpec::optional(fields::INDIGENOUS_COMMUNITIES, FieldKind::Checklist),
    FieldSpec::required(fields::INDIGENOUS_DECLARATION_SIGNATURE, FieldKind::Text),
];

static RULES: SectionRules<EmploymentEquity, ()> = SectionRules::new(&[DependentSection::new(
    sections::INDIGENOUS_DECLARATION,
    &[fields::INDIGENOUS_DECLARATION_SIGNATURE],
    declares_indigenous_community,
    reset_declaration,
)]);

fn declares_indigenous_community(values: &EmploymentEquity, (): &()) -> bool {
    !values.indigenous_communities.is_empty()
}

fn reset_declaration(values: &mut EmploymentEquity) {
    values.indigenous_declaration_signature = String::new();
}

/// Employment equity form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmploymentEquity {
    pub is_woman: bool,
    pub has_disability: bool,
    pub is_visible_minority: bool,
    pub indigenous_communities: Vec<IndigenousCommunity>,
    pub indigenous_declaration_signature: String,
}

/// The `UpdateUserAsUserInput` subset this form edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmploymentEquityPayload {
    pub is_woman: bool,
    pub has_disability: bool,
    pub is_visible_minority: bool,
    pub indigenous_communities: Vec<IndigenousCommunity>,
    pub indigenous_declaration_signature: Option<String>,
}

impl FormModel for EmploymentEquity {
    type Record = UserRecord;
    type Context = ();
    type Payload = EmploymentEquityPayload;

    const KIND: FormKind = FormKind::EmploymentEquity;

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
            fields::IS_WOMAN => FieldValue::Flag(self.is_woman),
            fields::HAS_DISABILITY => FieldValue::Flag(self.has_disability),
            fields::IS_VISIBLE_MINORITY => FieldValue::Flag(self.is_visible_minority),
            fields::INDIGENOUS_COMMUNITIES => FieldValue::list(&self.indigenous_communities),
            fields::INDIGENOUS_DECLARATION_SIGNATURE => {
                FieldValue::text(&self.indigenous_declaration_signature)
            }
            _ => FieldValue::Unset,
        }
    }

    fn from_record(record: &UserRecord, (): &()) -> Self {
        Self {
            is_woman: record.is_woman.unwrap_or(false),
            has_disability: record.has_disability.unwrap_or(false),
            is_visible_minority: record.is_visible_minority.unwrap_or(false),
            indigenous_communities: record.indigenous_communities.clone().unwrap_or_default(),
            indigenous_declaration_signature: record
                .indigenous_declaration_signature
                .clone()
                .unwrap_or_default(),
        }
    }

    fn subject_id(record: &UserRecord) -> Option<String> {
        Some(record.id.clone())
    }

    fn to_submission(&self, (): &()) -> Result<EmploymentEquityPayload, DomainError> {
        let indigenous_declaration_signature: Option<String> =
            if self.indigenous_communities.is_empty() {
                None
            } else {
                empty_to_none(&self.indigenous_declaration_signature)
            };
        Ok(EmploymentEquityPayload {
            is_woman: self.is_woman,
            has_disability: self.has_disability,
            is_visible_minority: self.is_visible_minority,
            indigenous_communities: self.indigenous_communities.clone(),
            indigenous_declaration_signature,
        })
    }
}

impl Reconcile for EmploymentEquity {
    fn reconcile(record: &mut UserRecord, payload: &EmploymentEquityPayload, (): &()) {
        record.is_woman = Some(payload.is_woman);
        record.has_disability = Some(payload.has_disability);
        record.is_visible_minority = Some(payload.is_visible_minority);
        record.indigenous_communities = Some(payload.indigenous_communities.clone());
        record
            .indigenous_declaration_signature
            .clone_from(&payload.indigenous_declaration_signature);
    }
}
