// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Government employment status, classification and priority entitlement.
//!
//! The payload takes one of three mutually exclusive shapes: not an
//! employee, a student (no substantive classification), or a casual, term or
//! indeterminate employee whose classification is looked up by group and
//! level.

use crate::field::{FieldId, FieldKind, FieldSpec, FieldValue};
use crate::kind::FormKind;
use crate::model::{FormModel, MutationSpec, Reconcile, UPDATE_USER_AS_USER};
use crate::section::{DependentSection, SectionRules};
use serde::{Deserialize, Serialize};
use talent_profile_domain::{
    Classification, ConnectInput, Department, DomainError, GovEmployeeType, UserRecord, YesNo,
    empty_to_none,
};

/// Field names.
pub mod fields {
    use crate::field::FieldId;

    pub const GOV_EMPLOYEE_YES_NO: FieldId = "govEmployeeYesNo";
    pub const DEPARTMENT: FieldId = "department";
    pub const GOV_EMPLOYEE_TYPE: FieldId = "govEmployeeType";
    pub const CURRENT_CLASSIFICATION_GROUP: FieldId = "currentClassificationGroup";
    pub const CURRENT_CLASSIFICATION_LEVEL: FieldId = "currentClassificationLevel";
    pub const PRIORITY_ENTITLEMENT_YES_NO: FieldId = "priorityEntitlementYesNo";
    pub const PRIORITY_ENTITLEMENT_NUMBER: FieldId = "priorityEntitlementNumber";
}

/// Section names.
pub mod sections {
    use crate::section::SectionId;

    pub const GOV_EMPLOYEE: SectionId = "govEmployee";
    pub const CLASSIFICATION: SectionId = "classification";
    pub const CLASSIFICATION_LEVEL: SectionId = "classificationLevel";
    pub const PRIORITY_NUMBER: SectionId = "priorityNumber";
}

static FIELDS: [FieldSpec; 7] = [
    FieldSpec::required(fields::GOV_EMPLOYEE_YES_NO, FieldKind::YesNo),
    FieldSpec::required(fields::DEPARTMENT, FieldKind::Select),
    FieldSpec::required(fields::GOV_EMPLOYEE_TYPE, FieldKind::Select),
    FieldSpec::required(fields::CURRENT_CLASSIFICATION_GROUP, FieldKind::Select),
    FieldSpec::required(fields::CURRENT_CLASSIFICATION_LEVEL, FieldKind::Select),
    FieldSpec::required(fields::PRIORITY_ENTITLEMENT_YES_NO, FieldKind::YesNo),
    FieldSpec::optional(fields::PRIORITY_ENTITLEMENT_NUMBER, FieldKind::Text),
];

static RULES: SectionRules<GovernmentInfo, GovernmentContext> = SectionRules::new(&[
    DependentSection::new(
        sections::GOV_EMPLOYEE,
        &[fields::DEPARTMENT, fields::GOV_EMPLOYEE_TYPE],
        is_gov_employee,
        reset_gov_employee,
    ),
    DependentSection::new(
        sections::CLASSIFICATION,
        &[fields::CURRENT_CLASSIFICATION_GROUP],
        has_classification,
        reset_classification,
    )
    .within(sections::GOV_EMPLOYEE),
    DependentSection::new(
        sections::CLASSIFICATION_LEVEL,
        &[fields::CURRENT_CLASSIFICATION_LEVEL],
        has_classification_group,
        reset_classification_level,
    )
    .within(sections::CLASSIFICATION)
    .keyed_by(classification_group),
    DependentSection::new(
        sections::PRIORITY_NUMBER,
        &[fields::PRIORITY_ENTITLEMENT_NUMBER],
        has_priority_entitlement,
        reset_priority_number,
    ),
]);

fn is_gov_employee(values: &GovernmentInfo, _: &GovernmentContext) -> bool {
    values.gov_employee_yes_no == Some(YesNo::Yes)
}

fn has_classification(values: &GovernmentInfo, _: &GovernmentContext) -> bool {
    values
        .gov_employee_type
        .is_some_and(GovEmployeeType::has_classification)
}

fn has_classification_group(values: &GovernmentInfo, _: &GovernmentContext) -> bool {
    values.current_classification_group.is_some()
}

fn has_priority_entitlement(values: &GovernmentInfo, _: &GovernmentContext) -> bool {
    values.priority_entitlement_yes_no == Some(YesNo::Yes)
}

fn classification_group(values: &GovernmentInfo) -> Option<&str> {
    values.current_classification_group.as_deref()
}

fn reset_gov_employee(values: &mut GovernmentInfo) {
    values.department = None;
    values.gov_employee_type = None;
}

fn reset_classification(values: &mut GovernmentInfo) {
    values.current_classification_group = None;
}

fn reset_classification_level(values: &mut GovernmentInfo) {
    values.current_classification_level = None;
}

fn reset_priority_number(values: &mut GovernmentInfo) {
    values.priority_entitlement_number = None;
}

/// Lookup data for the government information form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GovernmentContext {
    /// Selectable departments.
    pub departments: Vec<Department>,
    /// Every known classification.
    pub classifications: Vec<Classification>,
}

impl GovernmentContext {
    /// Finds the classification id for a group and level.
    #[must_use]
    pub fn classification_id(&self, group: &str, level: u8) -> Option<&str> {
        self.classifications
            .iter()
            .find(|classification| classification.group == group && classification.level == level)
            .map(|classification| classification.id.as_str())
    }

    fn department(&self, id: &str) -> Option<&Department> {
        self.departments.iter().find(|department| department.id == id)
    }

    fn classification(&self, id: &str) -> Option<&Classification> {
        self.classifications
            .iter()
            .find(|classification| classification.id == id)
    }
}

/// Government information form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GovernmentInfo {
    pub gov_employee_yes_no: Option<YesNo>,
    /// Department id.
    pub department: Option<String>,
    pub gov_employee_type: Option<GovEmployeeType>,
    pub current_classification_group: Option<String>,
    /// Level within the group, as selected (e.g. `"1"`).
    pub current_classification_level: Option<String>,
    pub priority_entitlement_yes_no: Option<YesNo>,
    pub priority_entitlement_number: Option<String>,
}

/// The `UpdateUserAsUserInput` subset this form edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernmentInfoPayload {
    pub is_gov_employee: bool,
    pub gov_employee_type: Option<GovEmployeeType>,
    pub department: Option<ConnectInput>,
    pub current_classification: ConnectInput,
    pub has_priority_entitlement: bool,
    pub priority_number: Option<String>,
}

impl GovernmentInfo {
    fn level(&self) -> Result<Option<u8>, DomainError> {
        self.current_classification_level
            .as_deref()
            .map(|level| {
                level
                    .trim()
                    .parse::<u8>()
                    .map_err(|_| DomainError::InvalidClassificationLevel(level.to_string()))
            })
            .transpose()
    }

    fn classification_connect(
        &self,
        context: &GovernmentContext,
    ) -> Result<ConnectInput, DomainError> {
        let level: Option<u8> = self.level()?;
        let id: Option<&str> = match (self.current_classification_group.as_deref(), level) {
            (Some(group), Some(level)) => context.classification_id(group, level),
            _ => None,
        };
        Ok(id.map_or_else(ConnectInput::none, ConnectInput::id))
    }
}

impl FormModel for GovernmentInfo {
    type Record = UserRecord;
    type Context = GovernmentContext;
    type Payload = GovernmentInfoPayload;

    const KIND: FormKind = FormKind::GovernmentInfo;

    fn mutation(&self) -> MutationSpec {
        UPDATE_USER_AS_USER
    }

    fn fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn rules() -> &'static SectionRules<Self, GovernmentContext> {
        &RULES
    }

    fn value(&self, field: FieldId) -> FieldValue {
        match field {
            fields::GOV_EMPLOYEE_YES_NO => FieldValue::selection(self.gov_employee_yes_no),
            fields::DEPARTMENT => FieldValue::selection(self.department.as_deref()),
            fields::GOV_EMPLOYEE_TYPE => FieldValue::selection(self.gov_employee_type),
            fields::CURRENT_CLASSIFICATION_GROUP => {
                FieldValue::selection(self.current_classification_group.as_deref())
            }
            fields::CURRENT_CLASSIFICATION_LEVEL => {
                FieldValue::selection(self.current_classification_level.as_deref())
            }
            fields::PRIORITY_ENTITLEMENT_YES_NO => {
                FieldValue::selection(self.priority_entitlement_yes_no)
            }
            fields::PRIORITY_ENTITLEMENT_NUMBER => {
                FieldValue::selection(self.priority_entitlement_number.as_deref())
            }
            _ => FieldValue::Unset,
        }
    }

    fn from_record(record: &UserRecord, _context: &GovernmentContext) -> Self {
        Self {
            gov_employee_yes_no: record.is_gov_employee.map(YesNo::from_bool),
            department: record.department.as_ref().map(|d| d.id.clone()),
            gov_employee_type: record.gov_employee_type,
            current_classification_group: record
                .current_classification
                .as_ref()
                .map(|c| c.group.clone()),
            current_classification_level: record
                .current_classification
                .as_ref()
                .map(|c| c.level.to_string()),
            priority_entitlement_yes_no: record.has_priority_entitlement.map(YesNo::from_bool),
            priority_entitlement_number: record
                .priority_number
                .as_deref()
                .and_then(empty_to_none),
        }
    }

    fn subject_id(record: &UserRecord) -> Option<String> {
        Some(record.id.clone())
    }

    fn to_submission(
        &self,
        context: &GovernmentContext,
    ) -> Result<GovernmentInfoPayload, DomainError> {
        let has_priority_entitlement: bool = self.priority_entitlement_yes_no == Some(YesNo::Yes);
        let priority_number: Option<String> = if has_priority_entitlement {
            self.priority_entitlement_number
                .as_deref()
                .and_then(empty_to_none)
        } else {
            None
        };

        if self.gov_employee_yes_no != Some(YesNo::Yes) {
            return Ok(GovernmentInfoPayload {
                is_gov_employee: false,
                gov_employee_type: None,
                department: None,
                current_classification: ConnectInput::none(),
                has_priority_entitlement,
                priority_number,
            });
        }

        let department: Option<ConnectInput> = self.department.as_deref().map(ConnectInput::id);
        let current_classification: ConnectInput = match self.gov_employee_type {
            Some(kind) if kind.has_classification() => self.classification_connect(context)?,
            _ => ConnectInput::none(),
        };

        Ok(GovernmentInfoPayload {
            is_gov_employee: true,
            gov_employee_type: self.gov_employee_type,
            department,
            current_classification,
            has_priority_entitlement,
            priority_number,
        })
    }
}

impl Reconcile for GovernmentInfo {
    fn reconcile(
        record: &mut UserRecord,
        payload: &GovernmentInfoPayload,
        context: &GovernmentContext,
    ) {
        record.is_gov_employee = Some(payload.is_gov_employee);
        record.gov_employee_type = payload.gov_employee_type;
        record.department = payload
            .department
            .as_ref()
            .and_then(|input| input.connect.as_deref())
            .map(|id| {
                context.department(id).cloned().unwrap_or_else(|| Department {
                    id: id.to_string(),
                    name: None,
                })
            });
        record.current_classification = payload
            .current_classification
            .connect
            .as_deref()
            .and_then(|id| context.classification(id))
            .cloned();
        record.has_priority_entitlement = Some(payload.has_priority_entitlement);
        record.priority_number.clone_from(&payload.priority_number);
    }
}
