// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! A career timeline experience.
//!
//! The experience type drives which fields are shown: award, community,
//! education, personal and work entries each have their own section, and
//! every type but award is dated. Each type submits through its own create
//! and update mutations.

use crate::field::{FieldId, FieldKind, FieldSpec, FieldValue};
use crate::kind::FormKind;
use crate::model::{FormModel, MutationSpec, Reconcile};
use crate::section::{DependentSection, SectionRules, Visibility};
use crate::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use talent_profile_domain::{
    AwardedScope, AwardedTo, DomainError, EducationStatus, EducationType, ExperienceRecord,
    ExperienceSkill, ExperienceType, SyncInput, empty_to_none, format_date, iso_date,
    parse_date, validate_date_range,
};
use time::Date;

/// Field names.
pub mod fields {
    use crate::field::FieldId;

    pub const EXPERIENCE_TYPE: FieldId = "experienceType";
    pub const AWARD_TITLE: FieldId = "awardTitle";
    pub const ISSUED_BY: FieldId = "issuedBy";
    pub const AWARDED_DATE: FieldId = "awardedDate";
    pub const AWARDED_TO: FieldId = "awardedTo";
    pub const AWARDED_SCOPE: FieldId = "awardedScope";
    pub const ROLE: FieldId = "role";
    pub const ORGANIZATION: FieldId = "organization";
    pub const PROJECT: FieldId = "project";
    pub const TEAM: FieldId = "team";
    pub const EDUCATION_TYPE: FieldId = "educationType";
    pub const EDUCATION_STATUS: FieldId = "educationStatus";
    pub const AREA_OF_STUDY: FieldId = "areaOfStudy";
    pub const INSTITUTION: FieldId = "institution";
    pub const THESIS_TITLE: FieldId = "thesisTitle";
    pub const EXPERIENCE_TITLE: FieldId = "experienceTitle";
    pub const EXPERIENCE_DESCRIPTION: FieldId = "experienceDescription";
    pub const START_DATE: FieldId = "startDate";
    pub const CURRENT_ROLE: FieldId = "currentRole";
    pub const END_DATE: FieldId = "endDate";
    pub const DETAILS: FieldId = "details";
    pub const SKILLS: FieldId = "skills";
}

/// Section names.
pub mod sections {
    use crate::section::SectionId;

    pub const AWARD: SectionId = "award";
    /// Role and organization, shared by community and work entries.
    pub const ROLE: SectionId = "role";
    pub const PROJECT: SectionId = "project";
    pub const TEAM: SectionId = "team";
    pub const EDUCATION: SectionId = "education";
    pub const PERSONAL: SectionId = "personal";
    pub const DATES: SectionId = "dates";
    pub const END_DATE: SectionId = "endDate";
}

static FIELDS: [FieldSpec; 22] = [
    FieldSpec::required(fields::EXPERIENCE_TYPE, FieldKind::Select),
    FieldSpec::required(fields::AWARD_TITLE, FieldKind::Text),
    FieldSpec::required(fields::ISSUED_BY, FieldKind::Text),
    FieldSpec::required(fields::AWARDED_DATE, FieldKind::Date),
    FieldSpec::required(fields::AWARDED_TO, FieldKind::Select),
    FieldSpec::required(fields::AWARDED_SCOPE, FieldKind::Select),
    FieldSpec::required(fields::ROLE, FieldKind::Text),
    FieldSpec::required(fields::ORGANIZATION, FieldKind::Text),
    FieldSpec::required(fields::PROJECT, FieldKind::Text),
    FieldSpec::required(fields::TEAM, FieldKind::Text),
    FieldSpec::required(fields::EDUCATION_TYPE, FieldKind::Select),
    FieldSpec::required(fields::EDUCATION_STATUS, FieldKind::Select),
    FieldSpec::required(fields::AREA_OF_STUDY, FieldKind::Text),
    FieldSpec::required(fields::INSTITUTION, FieldKind::Text),
    FieldSpec::optional(fields::THESIS_TITLE, FieldKind::Text),
    FieldSpec::required(fields::EXPERIENCE_TITLE, FieldKind::Text),
    FieldSpec::required(fields::EXPERIENCE_DESCRIPTION, FieldKind::Text),
    FieldSpec::required(fields::START_DATE, FieldKind::Date),
    FieldSpec::optional(fields::CURRENT_ROLE, FieldKind::Checkbox),
    FieldSpec::required(fields::END_DATE, FieldKind::Date),
    FieldSpec::optional(fields::DETAILS, FieldKind::Text),
    FieldSpec::optional(fields::SKILLS, FieldKind::Checklist),
];

static RULES: SectionRules<Experience, ()> = SectionRules::new(&[
    DependentSection::new(
        sections::AWARD,
        &[
            fields::AWARD_TITLE,
            fields::ISSUED_BY,
            fields::AWARDED_DATE,
            fields::AWARDED_TO,
            fields::AWARDED_SCOPE,
        ],
        is_award,
        reset_award,
    ),
    DependentSection::new(
        sections::ROLE,
        &[fields::ROLE, fields::ORGANIZATION],
        has_role,
        reset_role,
    ),
    DependentSection::new(sections::PROJECT, &[fields::PROJECT], is_community, reset_project),
    DependentSection::new(sections::TEAM, &[fields::TEAM], is_work, reset_team),
    DependentSection::new(
        sections::EDUCATION,
        &[
            fields::EDUCATION_TYPE,
            fields::EDUCATION_STATUS,
            fields::AREA_OF_STUDY,
            fields::INSTITUTION,
            fields::THESIS_TITLE,
        ],
        is_education,
        reset_education,
    ),
    DependentSection::new(
        sections::PERSONAL,
        &[fields::EXPERIENCE_TITLE, fields::EXPERIENCE_DESCRIPTION],
        is_personal,
        reset_personal,
    ),
    DependentSection::new(
        sections::DATES,
        &[fields::START_DATE, fields::CURRENT_ROLE],
        is_dated,
        reset_dates,
    ),
    DependentSection::new(sections::END_DATE, &[fields::END_DATE], has_ended, reset_end_date)
        .within(sections::DATES),
]);

fn is_award(values: &Experience, (): &()) -> bool {
    values.experience_type == Some(ExperienceType::Award)
}

fn has_role(values: &Experience, (): &()) -> bool {
    matches!(
        values.experience_type,
        Some(ExperienceType::Community | ExperienceType::Work)
    )
}

fn is_community(values: &Experience, (): &()) -> bool {
    values.experience_type == Some(ExperienceType::Community)
}

fn is_work(values: &Experience, (): &()) -> bool {
    values.experience_type == Some(ExperienceType::Work)
}

fn is_education(values: &Experience, (): &()) -> bool {
    values.experience_type == Some(ExperienceType::Education)
}

fn is_personal(values: &Experience, (): &()) -> bool {
    values.experience_type == Some(ExperienceType::Personal)
}

fn is_dated(values: &Experience, (): &()) -> bool {
    values
        .experience_type
        .is_some_and(|experience_type| experience_type != ExperienceType::Award)
}

fn has_ended(values: &Experience, (): &()) -> bool {
    !values.current_role
}

fn reset_award(values: &mut Experience) {
    values.award_title.clear();
    values.issued_by.clear();
    values.awarded_date.clear();
    values.awarded_to = None;
    values.awarded_scope = None;
}

fn reset_role(values: &mut Experience) {
    values.role.clear();
    values.organization.clear();
}

fn reset_project(values: &mut Experience) {
    values.project.clear();
}

fn reset_team(values: &mut Experience) {
    values.team.clear();
}

fn reset_education(values: &mut Experience) {
    values.education_type = None;
    values.education_status = None;
    values.area_of_study.clear();
    values.institution.clear();
    values.thesis_title.clear();
}

fn reset_personal(values: &mut Experience) {
    values.experience_title.clear();
    values.experience_description.clear();
}

fn reset_dates(values: &mut Experience) {
    values.start_date.clear();
    values.current_role = false;
}

fn reset_end_date(values: &mut Experience) {
    values.end_date.clear();
}

/// Experience form values. Dates are edited as `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    /// The owning applicant.
    pub user_id: String,
    /// The entry being edited; `None` when creating one.
    pub experience_id: Option<String>,
    pub experience_type: Option<ExperienceType>,
    pub award_title: String,
    pub issued_by: String,
    pub awarded_date: String,
    pub awarded_to: Option<AwardedTo>,
    pub awarded_scope: Option<AwardedScope>,
    /// Work role, or the community title.
    pub role: String,
    pub organization: String,
    pub project: String,
    /// Team, group or division of a work entry.
    pub team: String,
    pub education_type: Option<EducationType>,
    pub education_status: Option<EducationStatus>,
    pub area_of_study: String,
    pub institution: String,
    pub thesis_title: String,
    pub experience_title: String,
    pub experience_description: String,
    pub start_date: String,
    pub current_role: bool,
    pub end_date: String,
    pub details: String,
    pub skills: Vec<ExperienceSkill>,
}

impl Experience {
    /// Starts a new entry for `user_id`.
    #[must_use]
    pub fn create_for(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            ..Self::default()
        }
    }

    /// Parses the start and end dates, checking their order.
    ///
    /// The end date is `None` while the experience is ongoing.
    fn date_range(&self) -> Result<(Option<Date>, Option<Date>), DomainError> {
        let start_date: Option<Date> = optional_date(&self.start_date)?;
        let end_date: Option<Date> = if self.current_role {
            None
        } else {
            optional_date(&self.end_date)?
        };
        if let (Some(start), Some(end)) = (start_date, end_date) {
            validate_date_range(start, end)?;
        }
        Ok((start_date, end_date))
    }
}

fn text(value: Option<&str>) -> String {
    value.unwrap_or_default().to_string()
}

fn optional_date(value: &str) -> Result<Option<Date>, DomainError> {
    empty_to_none(value).as_deref().map(parse_date).transpose()
}

/// `AwardExperienceInput`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AwardExperienceInput {
    pub title: Option<String>,
    pub issued_by: Option<String>,
    #[serde(with = "iso_date::option")]
    pub awarded_date: Option<Date>,
    pub awarded_to: Option<AwardedTo>,
    pub awarded_scope: Option<AwardedScope>,
    pub details: Option<String>,
    pub skills: SyncInput<ExperienceSkill>,
}

/// `CommunityExperienceInput`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityExperienceInput {
    pub title: Option<String>,
    pub organization: Option<String>,
    pub project: Option<String>,
    #[serde(with = "iso_date::option")]
    pub start_date: Option<Date>,
    #[serde(with = "iso_date::option")]
    pub end_date: Option<Date>,
    pub details: Option<String>,
    pub skills: SyncInput<ExperienceSkill>,
}

/// `EducationExperienceInput`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationExperienceInput {
    #[serde(rename = "type")]
    pub education_type: Option<EducationType>,
    pub status: Option<EducationStatus>,
    pub area_of_study: Option<String>,
    pub institution: Option<String>,
    pub thesis_title: Option<String>,
    #[serde(with = "iso_date::option")]
    pub start_date: Option<Date>,
    #[serde(with = "iso_date::option")]
    pub end_date: Option<Date>,
    pub details: Option<String>,
    pub skills: SyncInput<ExperienceSkill>,
}

/// `PersonalExperienceInput`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonalExperienceInput {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(with = "iso_date::option")]
    pub start_date: Option<Date>,
    #[serde(with = "iso_date::option")]
    pub end_date: Option<Date>,
    pub details: Option<String>,
    pub skills: SyncInput<ExperienceSkill>,
}

/// `WorkExperienceInput`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkExperienceInput {
    pub role: Option<String>,
    pub organization: Option<String>,
    pub division: Option<String>,
    #[serde(with = "iso_date::option")]
    pub start_date: Option<Date>,
    #[serde(with = "iso_date::option")]
    pub end_date: Option<Date>,
    pub details: Option<String>,
    pub skills: SyncInput<ExperienceSkill>,
}

/// The mutation input for one experience, shaped by its type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ExperiencePayload {
    Award(AwardExperienceInput),
    Community(CommunityExperienceInput),
    Education(EducationExperienceInput),
    Personal(PersonalExperienceInput),
    Work(WorkExperienceInput),
}

impl ExperiencePayload {
    /// Returns the experience type this input belongs to.
    #[must_use]
    pub const fn experience_type(&self) -> ExperienceType {
        match self {
            Self::Award(_) => ExperienceType::Award,
            Self::Community(_) => ExperienceType::Community,
            Self::Education(_) => ExperienceType::Education,
            Self::Personal(_) => ExperienceType::Personal,
            Self::Work(_) => ExperienceType::Work,
        }
    }

    /// Returns the additional information shared by every type.
    #[must_use]
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::Award(input) => input.details.as_deref(),
            Self::Community(input) => input.details.as_deref(),
            Self::Education(input) => input.details.as_deref(),
            Self::Personal(input) => input.details.as_deref(),
            Self::Work(input) => input.details.as_deref(),
        }
    }

    /// Returns the skills the entry is synced to.
    #[must_use]
    pub fn skills(&self) -> &[ExperienceSkill] {
        match self {
            Self::Award(input) => &input.skills.sync,
            Self::Community(input) => &input.skills.sync,
            Self::Education(input) => &input.skills.sync,
            Self::Personal(input) => &input.skills.sync,
            Self::Work(input) => &input.skills.sync,
        }
    }
}

const fn experience_mutation(
    operation_name: &'static str,
    root_field: &'static str,
    input_argument: &'static str,
) -> MutationSpec {
    MutationSpec {
        operation_name,
        root_field,
        input_argument,
        takes_subject_id: true,
    }
}

const CREATE_AWARD_EXPERIENCE: MutationSpec = experience_mutation(
    "CreateAwardExperience",
    "createAwardExperience",
    "awardExperience",
);
const UPDATE_AWARD_EXPERIENCE: MutationSpec = experience_mutation(
    "UpdateAwardExperience",
    "updateAwardExperience",
    "awardExperience",
);
const CREATE_COMMUNITY_EXPERIENCE: MutationSpec = experience_mutation(
    "CreateCommunityExperience",
    "createCommunityExperience",
    "communityExperience",
);
const UPDATE_COMMUNITY_EXPERIENCE: MutationSpec = experience_mutation(
    "UpdateCommunityExperience",
    "updateCommunityExperience",
    "communityExperience",
);
const CREATE_EDUCATION_EXPERIENCE: MutationSpec = experience_mutation(
    "CreateEducationExperience",
    "createEducationExperience",
    "educationExperience",
);
const UPDATE_EDUCATION_EXPERIENCE: MutationSpec = experience_mutation(
    "UpdateEducationExperience",
    "updateEducationExperience",
    "educationExperience",
);
const CREATE_PERSONAL_EXPERIENCE: MutationSpec = experience_mutation(
    "CreatePersonalExperience",
    "createPersonalExperience",
    "personalExperience",
);
const UPDATE_PERSONAL_EXPERIENCE: MutationSpec = experience_mutation(
    "UpdatePersonalExperience",
    "updatePersonalExperience",
    "personalExperience",
);
const CREATE_WORK_EXPERIENCE: MutationSpec = experience_mutation(
    "CreateWorkExperience",
    "createWorkExperience",
    "workExperience",
);
const UPDATE_WORK_EXPERIENCE: MutationSpec = experience_mutation(
    "UpdateWorkExperience",
    "updateWorkExperience",
    "workExperience",
);

impl FormModel for Experience {
    type Record = ExperienceRecord;
    type Context = ();
    type Payload = ExperiencePayload;

    const KIND: FormKind = FormKind::Experience;

    /// An entry whose type is not chosen yet reports the work mutations;
    /// validation rejects it before anything is sent.
    fn mutation(&self) -> MutationSpec {
        let experience_type: ExperienceType = self.experience_type.unwrap_or(ExperienceType::Work);
        let update: bool = self.experience_id.is_some();
        match (experience_type, update) {
            (ExperienceType::Award, false) => CREATE_AWARD_EXPERIENCE,
            (ExperienceType::Award, true) => UPDATE_AWARD_EXPERIENCE,
            (ExperienceType::Community, false) => CREATE_COMMUNITY_EXPERIENCE,
            (ExperienceType::Community, true) => UPDATE_COMMUNITY_EXPERIENCE,
            (ExperienceType::Education, false) => CREATE_EDUCATION_EXPERIENCE,
            (ExperienceType::Education, true) => UPDATE_EDUCATION_EXPERIENCE,
            (ExperienceType::Personal, false) => CREATE_PERSONAL_EXPERIENCE,
            (ExperienceType::Personal, true) => UPDATE_PERSONAL_EXPERIENCE,
            (ExperienceType::Work, false) => CREATE_WORK_EXPERIENCE,
            (ExperienceType::Work, true) => UPDATE_WORK_EXPERIENCE,
        }
    }

    fn fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn rules() -> &'static SectionRules<Self, ()> {
        &RULES
    }

    fn value(&self, field: FieldId) -> FieldValue {
        match field {
            fields::EXPERIENCE_TYPE => FieldValue::selection(self.experience_type),
            fields::AWARD_TITLE => FieldValue::text(&self.award_title),
            fields::ISSUED_BY => FieldValue::text(&self.issued_by),
            fields::AWARDED_DATE => FieldValue::text(&self.awarded_date),
            fields::AWARDED_TO => FieldValue::selection(self.awarded_to),
            fields::AWARDED_SCOPE => FieldValue::selection(self.awarded_scope),
            fields::ROLE => FieldValue::text(&self.role),
            fields::ORGANIZATION => FieldValue::text(&self.organization),
            fields::PROJECT => FieldValue::text(&self.project),
            fields::TEAM => FieldValue::text(&self.team),
            fields::EDUCATION_TYPE => FieldValue::selection(self.education_type),
            fields::EDUCATION_STATUS => FieldValue::selection(self.education_status),
            fields::AREA_OF_STUDY => FieldValue::text(&self.area_of_study),
            fields::INSTITUTION => FieldValue::text(&self.institution),
            fields::THESIS_TITLE => FieldValue::text(&self.thesis_title),
            fields::EXPERIENCE_TITLE => FieldValue::text(&self.experience_title),
            fields::EXPERIENCE_DESCRIPTION => FieldValue::text(&self.experience_description),
            fields::START_DATE => FieldValue::text(&self.start_date),
            fields::CURRENT_ROLE => FieldValue::Flag(self.current_role),
            fields::END_DATE => FieldValue::text(&self.end_date),
            fields::DETAILS => FieldValue::text(&self.details),
            fields::SKILLS => FieldValue::list(self.skills.iter().map(|skill| &skill.id)),
            _ => FieldValue::Unset,
        }
    }

    fn from_record(record: &ExperienceRecord, (): &()) -> Self {
        let mut values: Self = Self {
            user_id: record.user_id.clone(),
            experience_id: record.id.clone(),
            experience_type: record.experience_type,
            details: text(record.details.as_deref()),
            skills: record.skills.clone(),
            ..Self::default()
        };

        match record.experience_type {
            Some(ExperienceType::Award) => {
                values.award_title = text(record.title.as_deref());
                values.issued_by = text(record.issued_by.as_deref());
                values.awarded_date = record.awarded_date.map(format_date).unwrap_or_default();
                values.awarded_to = record.awarded_to;
                values.awarded_scope = record.awarded_scope;
                return values;
            }
            Some(ExperienceType::Community) => {
                values.role = text(record.title.as_deref());
                values.organization = text(record.organization.as_deref());
                values.project = text(record.project.as_deref());
            }
            Some(ExperienceType::Education) => {
                values.education_type = record.education_type;
                values.education_status = record.status;
                values.area_of_study = text(record.area_of_study.as_deref());
                values.institution = text(record.institution.as_deref());
                values.thesis_title = text(record.thesis_title.as_deref());
            }
            Some(ExperienceType::Personal) => {
                values.experience_title = text(record.title.as_deref());
                values.experience_description = text(record.description.as_deref());
            }
            Some(ExperienceType::Work) => {
                values.role = text(record.role.as_deref());
                values.organization = text(record.organization.as_deref());
                values.team = text(record.division.as_deref());
            }
            None => return values,
        }

        values.start_date = record.start_date.map(format_date).unwrap_or_default();
        values.current_role = record.start_date.is_some() && record.end_date.is_none();
        values.end_date = record.end_date.map(format_date).unwrap_or_default();
        values
    }

    /// Creating is addressed to the applicant, updating to the entry.
    fn subject_id(record: &ExperienceRecord) -> Option<String> {
        record
            .id
            .clone()
            .or_else(|| empty_to_none(&record.user_id))
    }

    fn implied_subject_id(&self) -> Option<&str> {
        self.experience_id
            .as_deref()
            .or_else(|| Some(self.user_id.as_str()).filter(|id| !id.trim().is_empty()))
    }

    fn to_submission(&self, (): &()) -> Result<ExperiencePayload, DomainError> {
        let experience_type: ExperienceType = self
            .experience_type
            .ok_or(DomainError::MissingValue(fields::EXPERIENCE_TYPE))?;
        let details: Option<String> = empty_to_none(&self.details);
        let skills: SyncInput<ExperienceSkill> = SyncInput::entries(self.skills.clone());

        let payload: ExperiencePayload = match experience_type {
            ExperienceType::Award => ExperiencePayload::Award(AwardExperienceInput {
                title: empty_to_none(&self.award_title),
                issued_by: empty_to_none(&self.issued_by),
                awarded_date: optional_date(&self.awarded_date)?,
                awarded_to: self.awarded_to,
                awarded_scope: self.awarded_scope,
                details,
                skills,
            }),
            ExperienceType::Community => {
                let (start_date, end_date) = self.date_range()?;
                ExperiencePayload::Community(CommunityExperienceInput {
                    title: empty_to_none(&self.role),
                    organization: empty_to_none(&self.organization),
                    project: empty_to_none(&self.project),
                    start_date,
                    end_date,
                    details,
                    skills,
                })
            }
            ExperienceType::Education => {
                let (start_date, end_date) = self.date_range()?;
                ExperiencePayload::Education(EducationExperienceInput {
                    education_type: self.education_type,
                    status: self.education_status,
                    area_of_study: empty_to_none(&self.area_of_study),
                    institution: empty_to_none(&self.institution),
                    thesis_title: empty_to_none(&self.thesis_title),
                    start_date,
                    end_date,
                    details,
                    skills,
                })
            }
            ExperienceType::Personal => {
                let (start_date, end_date) = self.date_range()?;
                ExperiencePayload::Personal(PersonalExperienceInput {
                    title: empty_to_none(&self.experience_title),
                    description: empty_to_none(&self.experience_description),
                    start_date,
                    end_date,
                    details,
                    skills,
                })
            }
            ExperienceType::Work => {
                let (start_date, end_date) = self.date_range()?;
                ExperiencePayload::Work(WorkExperienceInput {
                    role: empty_to_none(&self.role),
                    organization: empty_to_none(&self.organization),
                    division: empty_to_none(&self.team),
                    start_date,
                    end_date,
                    details,
                    skills,
                })
            }
        };
        Ok(payload)
    }

    fn check(&self, (): &(), visibility: &Visibility, errors: &mut ValidationErrors) {
        if visibility.is_visible(sections::AWARD) {
            let awarded: Result<(), DomainError> = optional_date(&self.awarded_date).map(|_| ());
            errors.check(fields::AWARDED_DATE, awarded);
        }
        if !visibility.is_visible(sections::DATES) {
            return;
        }

        let start: Option<Date> = match optional_date(&self.start_date) {
            Ok(start) => start,
            Err(err) => {
                errors.invalid(fields::START_DATE, err.to_string());
                None
            }
        };
        if !visibility.is_visible(sections::END_DATE) {
            return;
        }
        match optional_date(&self.end_date) {
            Ok(Some(end)) => {
                if let Some(start) = start {
                    errors.check(fields::END_DATE, validate_date_range(start, end));
                }
            }
            Ok(None) => {}
            Err(err) => errors.invalid(fields::END_DATE, err.to_string()),
        }
    }
}

impl Reconcile for Experience {
    fn reconcile(record: &mut ExperienceRecord, payload: &ExperiencePayload, (): &()) {
        record.experience_type = Some(payload.experience_type());
        record.details = payload.details().map(str::to_string);
        record.skills = payload.skills().to_vec();

        match payload {
            ExperiencePayload::Award(input) => {
                record.title.clone_from(&input.title);
                record.issued_by.clone_from(&input.issued_by);
                record.awarded_date = input.awarded_date;
                record.awarded_to = input.awarded_to;
                record.awarded_scope = input.awarded_scope;
            }
            ExperiencePayload::Community(input) => {
                record.title.clone_from(&input.title);
                record.organization.clone_from(&input.organization);
                record.project.clone_from(&input.project);
                record.start_date = input.start_date;
                record.end_date = input.end_date;
            }
            ExperiencePayload::Education(input) => {
                record.education_type = input.education_type;
                record.status = input.status;
                record.area_of_study.clone_from(&input.area_of_study);
                record.institution.clone_from(&input.institution);
                record.thesis_title.clone_from(&input.thesis_title);
                record.start_date = input.start_date;
                record.end_date = input.end_date;
            }
            ExperiencePayload::Personal(input) => {
                record.title.clone_from(&input.title);
                record.description.clone_from(&input.description);
                record.start_date = input.start_date;
                record.end_date = input.end_date;
            }
            ExperiencePayload::Work(input) => {
                record.role.clone_from(&input.role);
                record.organization.clone_from(&input.organization);
                record.division.clone_from(&input.division);
                record.start_date = input.start_date;
                record.end_date = input.end_date;
            }
        }
    }
}
