// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Interest in a functional community, created or updated.
//!
//! Every section hangs off the selected community. Work streams and
//! development programs follow what the community offers, and the finance
//! community adds the chief-officer questions.

use crate::field::{FieldId, FieldKind, FieldSpec, FieldValue};
use crate::kind::FormKind;
use crate::model::{FormModel, MutationSpec, Reconcile};
use crate::section::{DependentSection, SectionRules, Visibility};
use crate::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use talent_profile_domain::{
    Community, CommunityInterestRecord, ConnectInput, CreateManyInput,
    DevelopmentProgramInterestRecord, DomainError, FinanceChiefDuty, FinanceChiefRole, Nullable,
    SyncInput, UpsertManyInput, WorkStream, bool_to_string, empty_to_none, is_true_string,
    parse_bool_field,
};

/// Field names.
pub mod fields {
    use crate::field::FieldId;

    pub const COMMUNITY_ID: FieldId = "communityId";
    pub const JOB_INTEREST: FieldId = "jobInterest";
    pub const TRAINING_INTEREST: FieldId = "trainingInterest";
    pub const WORK_STREAMS: FieldId = "workStreams";
    pub const INTEREST_IN_DEVELOPMENT_PROGRAMS: FieldId = "interestInDevelopmentPrograms";
    pub const ADDITIONAL_INFORMATION: FieldId = "additionalInformation";
    pub const FINANCE_IS_CHIEF: FieldId = "financeIsChief";
    pub const FINANCE_ADDITIONAL_DUTIES: FieldId = "financeAdditionalDuties";
    pub const FINANCE_OTHER_ROLES: FieldId = "financeOtherRoles";
    pub const FINANCE_OTHER_ROLES_OTHER: FieldId = "financeOtherRolesOther";
    pub const USER_ID: FieldId = "userId";
}

/// Section names.
pub mod sections {
    use crate::section::SectionId;

    pub const INTEREST: SectionId = "interest";
    pub const WORK_STREAMS: SectionId = "workStreams";
    pub const DEVELOPMENT_PROGRAMS: SectionId = "developmentPrograms";
    pub const FINANCE: SectionId = "finance";
    pub const FINANCE_CHIEF: SectionId = "financeChief";
    pub const FINANCE_OTHER_ROLES_OTHER: SectionId = "financeOtherRolesOther";
}

static FIELDS: [FieldSpec; 10] = [
    FieldSpec::required(fields::COMMUNITY_ID, FieldKind::Select),
    FieldSpec::required(fields::JOB_INTEREST, FieldKind::BoolString),
    FieldSpec::required(fields::TRAINING_INTEREST, FieldKind::BoolString),
    FieldSpec::optional(fields::WORK_STREAMS, FieldKind::Checklist),
    FieldSpec::optional(fields::INTEREST_IN_DEVELOPMENT_PROGRAMS, FieldKind::Checklist),
    FieldSpec::optional(fields::ADDITIONAL_INFORMATION, FieldKind::Text),
    FieldSpec::required(fields::FINANCE_IS_CHIEF, FieldKind::BoolString),
    FieldSpec::optional(fields::FINANCE_ADDITIONAL_DUTIES, FieldKind::Checklist),
    FieldSpec::optional(fields::FINANCE_OTHER_ROLES, FieldKind::Checklist),
    FieldSpec::required(fields::FINANCE_OTHER_ROLES_OTHER, FieldKind::Text),
];

static RULES: SectionRules<CommunityInterest, CommunityInterestContext> = SectionRules::new(&[
    DependentSection::new(
        sections::INTEREST,
        &[fields::JOB_INTEREST, fields::TRAINING_INTEREST],
        has_community,
        reset_interest,
    ),
    DependentSection::new(
        sections::WORK_STREAMS,
        &[fields::WORK_STREAMS],
        wants_work_streams,
        reset_work_streams,
    )
    .within(sections::INTEREST)
    .keyed_by(community_id),
    DependentSection::new(
        sections::DEVELOPMENT_PROGRAMS,
        &[fields::INTEREST_IN_DEVELOPMENT_PROGRAMS],
        offers_development_programs,
        reset_development_programs,
    )
    .within(sections::INTEREST)
    .keyed_by(community_id),
    DependentSection::new(
        sections::FINANCE,
        &[fields::FINANCE_IS_CHIEF],
        is_finance_community,
        reset_finance,
    )
    .within(sections::INTEREST)
    .keyed_by(community_id),
    DependentSection::new(
        sections::FINANCE_CHIEF,
        &[fields::FINANCE_ADDITIONAL_DUTIES, fields::FINANCE_OTHER_ROLES],
        is_finance_chief,
        reset_finance_chief,
    )
    .within(sections::FINANCE),
    DependentSection::new(
        sections::FINANCE_OTHER_ROLES_OTHER,
        &[fields::FINANCE_OTHER_ROLES_OTHER],
        has_other_role,
        reset_finance_other_roles_other,
    )
    .within(sections::FINANCE_CHIEF),
]);

fn community_id(values: &CommunityInterest) -> Option<&str> {
    values.community_id.as_deref()
}

fn has_community(values: &CommunityInterest, _: &CommunityInterestContext) -> bool {
    values.community_id.is_some()
}

fn wants_work_streams(values: &CommunityInterest, context: &CommunityInterestContext) -> bool {
    let interested: bool = is_true_string(values.job_interest.as_deref())
        || is_true_string(values.training_interest.as_deref());
    interested
        && values
            .selected_community(context)
            .is_some_and(|community| !community.work_streams.is_empty())
}

fn offers_development_programs(
    values: &CommunityInterest,
    context: &CommunityInterestContext,
) -> bool {
    values
        .selected_community(context)
        .is_some_and(|community| !community.development_programs.is_empty())
}

fn is_finance_community(values: &CommunityInterest, context: &CommunityInterestContext) -> bool {
    values
        .selected_community(context)
        .is_some_and(Community::is_finance)
}

fn is_finance_chief(values: &CommunityInterest, _: &CommunityInterestContext) -> bool {
    is_true_string(values.finance_is_chief.as_deref())
}

fn has_other_role(values: &CommunityInterest, _: &CommunityInterestContext) -> bool {
    values.finance_other_roles.contains(&FinanceChiefRole::Other)
}

fn reset_interest(values: &mut CommunityInterest) {
    values.job_interest = None;
    values.training_interest = None;
}

fn reset_work_streams(values: &mut CommunityInterest) {
    values.work_streams.clear();
}

fn reset_development_programs(values: &mut CommunityInterest) {
    values.interest_in_development_programs.clear();
}

fn reset_finance(values: &mut CommunityInterest) {
    values.finance_is_chief = None;
}

fn reset_finance_chief(values: &mut CommunityInterest) {
    values.finance_additional_duties.clear();
    values.finance_other_roles.clear();
}

fn reset_finance_other_roles_other(values: &mut CommunityInterest) {
    values.finance_other_roles_other.clear();
}

/// Lookup data for the community interest form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommunityInterestContext {
    /// Communities the applicant may choose from.
    pub communities: Vec<Community>,
}

impl CommunityInterestContext {
    /// Finds a community by id.
    #[must_use]
    pub fn community(&self, id: &str) -> Option<&Community> {
        self.communities.iter().find(|community| community.id == id)
    }
}

/// Whether the form creates a new interest or edits an existing one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestMode {
    #[default]
    Create,
    Update,
}

/// Community interest form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommunityInterest {
    pub mode: InterestMode,
    /// The applicant the interest belongs to; needed to create one.
    pub user_id: Option<String>,
    pub community_id: Option<String>,
    /// The community of the loaded record. Stands in for the lookup entry
    /// when the community is no longer listed.
    pub loaded_community: Option<Community>,
    /// `"true"` or `"false"`.
    pub job_interest: Option<String>,
    /// `"true"` or `"false"`.
    pub training_interest: Option<String>,
    /// Work stream ids.
    pub work_streams: Vec<String>,
    pub interest_in_development_programs: Vec<DevelopmentProgramInterestRecord>,
    pub additional_information: String,
    /// `"true"` or `"false"`.
    pub finance_is_chief: Option<String>,
    pub finance_additional_duties: Vec<FinanceChiefDuty>,
    pub finance_other_roles: Vec<FinanceChiefRole>,
    pub finance_other_roles_other: String,
}

impl CommunityInterest {
    /// Starts a new interest for `user_id`.
    #[must_use]
    pub fn create_for(user_id: &str) -> Self {
        Self {
            mode: InterestMode::Create,
            user_id: Some(user_id.to_string()),
            ..Self::default()
        }
    }

    /// Resolves the selected community, from the lookup list first and then
    /// from the loaded record.
    #[must_use]
    pub fn selected_community<'a>(
        &'a self,
        context: &'a CommunityInterestContext,
    ) -> Option<&'a Community> {
        let id: &str = self.community_id.as_deref()?;
        context.community(id).or_else(|| {
            self.loaded_community
                .as_ref()
                .filter(|community| community.id == id)
        })
    }

    fn program_interests(
        &self,
        context: &CommunityInterestContext,
    ) -> Vec<DevelopmentProgramInterestRecord> {
        let Some(community) = self.selected_community(context) else {
            return Vec::new();
        };
        self.interest_in_development_programs
            .iter()
            .filter(|interest| interest.participation_status.is_some())
            .filter(|interest| {
                community
                    .development_programs
                    .iter()
                    .any(|program| program.id == interest.development_program_id)
            })
            .cloned()
            .collect()
    }
}

/// Fields shared by the create and update inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityInterestFields {
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub job_interest: Nullable<bool>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub training_interest: Nullable<bool>,
    pub work_streams: SyncInput,
    pub additional_information: Option<String>,
    #[serde(skip_serializing_if = "Nullable::is_absent")]
    pub finance_is_chief: Nullable<bool>,
    pub finance_additional_duties: Vec<FinanceChiefDuty>,
    pub finance_other_roles: Vec<FinanceChiefRole>,
    pub finance_other_roles_other: Option<String>,
}

/// `CreateCommunityInterestInput`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommunityInterestInput {
    pub user: ConnectInput,
    pub community: ConnectInput,
    #[serde(flatten)]
    pub fields: CommunityInterestFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_in_development_programs:
        Option<CreateManyInput<DevelopmentProgramInterestRecord>>,
}

/// `UpdateCommunityInterestInput`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCommunityInterestInput {
    #[serde(flatten)]
    pub fields: CommunityInterestFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_in_development_programs:
        Option<UpsertManyInput<DevelopmentProgramInterestRecord>>,
}

/// The community interest mutation input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CommunityInterestPayload {
    Create(CreateCommunityInterestInput),
    Update(UpdateCommunityInterestInput),
}

impl CommunityInterestPayload {
    /// Returns the fields shared by both inputs.
    #[must_use]
    pub const fn fields(&self) -> &CommunityInterestFields {
        match self {
            Self::Create(input) => &input.fields,
            Self::Update(input) => &input.fields,
        }
    }

    /// Returns the development program interests sent, if the key is present.
    #[must_use]
    pub fn program_interests(&self) -> Option<&[DevelopmentProgramInterestRecord]> {
        match self {
            Self::Create(input) => input
                .interest_in_development_programs
                .as_ref()
                .map(|input| input.create.as_slice()),
            Self::Update(input) => input
                .interest_in_development_programs
                .as_ref()
                .map(|input| input.upsert.as_slice()),
        }
    }
}

const CREATE_COMMUNITY_INTEREST: MutationSpec = MutationSpec {
    operation_name: "CreateCommunityInterest",
    root_field: "createCommunityInterest",
    input_argument: "communityInterest",
    takes_subject_id: false,
};

const UPDATE_COMMUNITY_INTEREST: MutationSpec = MutationSpec {
    operation_name: "UpdateCommunityInterest",
    root_field: "updateCommunityInterest",
    input_argument: "communityInterest",
    takes_subject_id: true,
};

impl FormModel for CommunityInterest {
    type Record = CommunityInterestRecord;
    type Context = CommunityInterestContext;
    type Payload = CommunityInterestPayload;

    const KIND: FormKind = FormKind::CommunityInterest;

    fn mutation(&self) -> MutationSpec {
        match self.mode {
            InterestMode::Create => CREATE_COMMUNITY_INTEREST,
            InterestMode::Update => UPDATE_COMMUNITY_INTEREST,
        }
    }

    fn fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn rules() -> &'static SectionRules<Self, CommunityInterestContext> {
        &RULES
    }

    fn value(&self, field: FieldId) -> FieldValue {
        match field {
            fields::COMMUNITY_ID => FieldValue::selection(self.community_id.as_deref()),
            fields::JOB_INTEREST => FieldValue::selection(self.job_interest.as_deref()),
            fields::TRAINING_INTEREST => FieldValue::selection(self.training_interest.as_deref()),
            fields::WORK_STREAMS => FieldValue::list(&self.work_streams),
            fields::INTEREST_IN_DEVELOPMENT_PROGRAMS => FieldValue::list(
                self.interest_in_development_programs
                    .iter()
                    .map(|interest| &interest.development_program_id),
            ),
            fields::ADDITIONAL_INFORMATION => FieldValue::text(&self.additional_information),
            fields::FINANCE_IS_CHIEF => FieldValue::selection(self.finance_is_chief.as_deref()),
            fields::FINANCE_ADDITIONAL_DUTIES => FieldValue::list(&self.finance_additional_duties),
            fields::FINANCE_OTHER_ROLES => FieldValue::list(&self.finance_other_roles),
            fields::FINANCE_OTHER_ROLES_OTHER => FieldValue::text(&self.finance_other_roles_other),
            _ => FieldValue::Unset,
        }
    }

    fn from_record(record: &CommunityInterestRecord, _context: &CommunityInterestContext) -> Self {
        Self {
            mode: if record.id.is_empty() {
                InterestMode::Create
            } else {
                InterestMode::Update
            },
            user_id: record.user_id.clone(),
            community_id: record.community.as_ref().map(|c| c.id.clone()),
            loaded_community: record.community.clone(),
            job_interest: bool_to_string(record.job_interest),
            training_interest: bool_to_string(record.training_interest),
            work_streams: record.work_streams.iter().map(|s| s.id.clone()).collect(),
            interest_in_development_programs: record.interest_in_development_programs.clone(),
            additional_information: record.additional_information.clone().unwrap_or_default(),
            finance_is_chief: bool_to_string(record.finance_is_chief),
            finance_additional_duties: record.finance_additional_duties.clone().unwrap_or_default(),
            finance_other_roles: record.finance_other_roles.clone().unwrap_or_default(),
            finance_other_roles_other: record.finance_other_roles_other.clone().unwrap_or_default(),
        }
    }

    fn subject_id(record: &CommunityInterestRecord) -> Option<String> {
        empty_to_none(&record.id)
    }

    fn to_submission(
        &self,
        context: &CommunityInterestContext,
    ) -> Result<CommunityInterestPayload, DomainError> {
        let finance_is_chief: Nullable<bool> = parse_bool_field(self.finance_is_chief.as_deref())?;
        let is_chief: bool = finance_is_chief.value().copied().unwrap_or(false);

        let fields = CommunityInterestFields {
            job_interest: parse_bool_field(self.job_interest.as_deref())?,
            training_interest: parse_bool_field(self.training_interest.as_deref())?,
            work_streams: SyncInput::from_ids(self.work_streams.iter().cloned()),
            additional_information: empty_to_none(&self.additional_information),
            finance_is_chief,
            finance_additional_duties: if is_chief {
                self.finance_additional_duties.clone()
            } else {
                Vec::new()
            },
            finance_other_roles: if is_chief {
                self.finance_other_roles.clone()
            } else {
                Vec::new()
            },
            finance_other_roles_other: if is_chief
                && self.finance_other_roles.contains(&FinanceChiefRole::Other)
            {
                empty_to_none(&self.finance_other_roles_other)
            } else {
                None
            },
        };

        // Program interests are sent only while the community offers programs
        let programs: Option<Vec<DevelopmentProgramInterestRecord>> =
            offers_development_programs(self, context).then(|| self.program_interests(context));

        Ok(match self.mode {
            InterestMode::Create => CommunityInterestPayload::Create(CreateCommunityInterestInput {
                user: ConnectInput {
                    connect: self.user_id.clone(),
                },
                community: ConnectInput {
                    connect: self.community_id.clone(),
                },
                fields,
                interest_in_development_programs: programs
                    .map(|create| CreateManyInput { create }),
            }),
            InterestMode::Update => CommunityInterestPayload::Update(UpdateCommunityInterestInput {
                fields,
                interest_in_development_programs: programs
                    .map(|upsert| UpsertManyInput { upsert }),
            }),
        })
    }

    fn check(
        &self,
        _context: &CommunityInterestContext,
        _visibility: &Visibility,
        errors: &mut ValidationErrors,
    ) {
        if self.mode == InterestMode::Create && self.user_id.is_none() {
            errors.invalid(fields::USER_ID, "A new community interest needs a user");
        }
    }
}

impl Reconcile for CommunityInterest {
    fn reconcile(
        record: &mut CommunityInterestRecord,
        payload: &CommunityInterestPayload,
        context: &CommunityInterestContext,
    ) {
        if let CommunityInterestPayload::Create(input) = payload {
            record.user_id.clone_from(&input.user.connect);
            let listed: Option<Community> = input
                .community
                .connect
                .as_deref()
                .and_then(|id| context.community(id))
                .cloned();
            if listed.is_some() {
                record.community = listed;
            }
        }

        let fields: &CommunityInterestFields = payload.fields();
        record.job_interest = fields.job_interest.value().copied();
        record.training_interest = fields.training_interest.value().copied();
        let streams: &[WorkStream] = record
            .community
            .as_ref()
            .map(|community| community.work_streams.as_slice())
            .unwrap_or_default();
        record.work_streams = fields
            .work_streams
            .sync
            .iter()
            .filter_map(|id| streams.iter().find(|stream| stream.id == *id))
            .cloned()
            .collect();
        record
            .additional_information
            .clone_from(&fields.additional_information);
        record.finance_is_chief = fields.finance_is_chief.value().copied();
        record.finance_additional_duties = Some(fields.finance_additional_duties.clone());
        record.finance_other_roles = Some(fields.finance_other_roles.clone());
        record
            .finance_other_roles_other
            .clone_from(&fields.finance_other_roles_other);

        if let Some(interests) = payload.program_interests() {
            for interest in interests {
                match record
                    .interest_in_development_programs
                    .iter_mut()
                    .find(|existing| {
                        existing.development_program_id == interest.development_program_id
                    }) {
                    Some(existing) => existing.participation_status = interest.participation_status,
                    None => record.interest_in_development_programs.push(interest.clone()),
                }
            }
        }
    }
}
