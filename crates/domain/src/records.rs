// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Records and lookup data as fetched from the backend.
//!
//! Every field is optional: upstream data may be partial, and loading a form
//! must never fail on a missing value.

use crate::types::{
    ArmedForcesStatus, AwardedScope, AwardedTo, BilingualEvaluation, CitizenshipStatus,
    DevelopmentProgramParticipationStatus, EducationStatus, EducationType,
    EstimatedLanguageAbility, EvaluatedLanguageAbility, ExperienceType, FinanceChiefDuty,
    FinanceChiefRole, GenericJobTitleKey, GovEmployeeType, IndigenousCommunity, Language,
    OperationalRequirement, PositionDuration, ProvinceOrTerritory, WorkRegion,
};
use crate::validation::iso_date;
use serde::{Deserialize, Serialize};

/// Display value used when a localized name is missing.
pub const NOT_AVAILABLE: &str = "N/A";

/// Returns the localized name, or the "N/A" fallback.
#[must_use]
pub fn localized_or_not_available(name: Option<&str>) -> &str {
    match name {
        Some(name) if !name.trim().is_empty() => name,
        _ => NOT_AVAILABLE,
    }
}

/// A job classification (group and level), e.g. IT-01.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// The classification id.
    pub id: String,
    /// The group code, e.g. "IT".
    pub group: String,
    /// The level within the group.
    pub level: u8,
}

impl Classification {
    /// Creates a classification.
    #[must_use]
    pub fn new(id: &str, group: &str, level: u8) -> Self {
        Self {
            id: id.to_string(),
            group: group.to_string(),
            level,
        }
    }

    /// Returns the conventional display name, e.g. "IT-01".
    #[must_use]
    pub fn display_name(&self) -> String {
        format!("{}-{:02}", self.group, self.level)
    }
}

/// A government department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// The department id.
    pub id: String,
    /// The localized department name.
    #[serde(default)]
    pub name: Option<String>,
}

/// A work stream within a community.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkStream {
    /// The work stream id.
    pub id: String,
    /// The localized work stream name.
    #[serde(default)]
    pub name: Option<String>,
}

/// A development program offered by a community.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevelopmentProgram {
    /// The program id.
    pub id: String,
    /// The localized program name.
    #[serde(default)]
    pub name: Option<String>,
}

/// A functional community.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Community {
    /// The community id.
    pub id: String,
    /// The stable community key, e.g. "finance".
    #[serde(default)]
    pub key: Option<String>,
    /// The localized community name.
    #[serde(default)]
    pub name: Option<String>,
    /// Work streams within the community.
    #[serde(default)]
    pub work_streams: Vec<WorkStream>,
    /// Development programs offered by the community.
    #[serde(default)]
    pub development_programs: Vec<DevelopmentProgram>,
}

/// Key of the community that carries the finance-specific fields.
pub const FINANCE_COMMUNITY_KEY: &str = "finance";

impl Community {
    /// Returns true if this is the finance community.
    #[must_use]
    pub fn is_finance(&self) -> bool {
        self.key.as_deref() == Some(FINANCE_COMMUNITY_KEY)
    }
}

/// A generic job title and its lookup key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenericJobTitle {
    /// The title id.
    pub id: String,
    /// The lookup key.
    pub key: GenericJobTitleKey,
}

/// An applicant's profile as returned by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserRecord {
    pub id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub telephone: Option<String>,
    pub preferred_lang: Option<Language>,
    pub preferred_language_for_interview: Option<Language>,
    pub preferred_language_for_exam: Option<Language>,
    pub current_province: Option<ProvinceOrTerritory>,
    pub current_city: Option<String>,
    pub citizenship: Option<CitizenshipStatus>,
    pub armed_forces_status: Option<ArmedForcesStatus>,

    pub is_gov_employee: Option<bool>,
    pub gov_employee_type: Option<GovEmployeeType>,
    pub department: Option<Department>,
    pub current_classification: Option<Classification>,
    pub has_priority_entitlement: Option<bool>,
    pub priority_number: Option<String>,

    pub looking_for_english: Option<bool>,
    pub looking_for_french: Option<bool>,
    pub looking_for_bilingual: Option<bool>,
    pub bilingual_evaluation: Option<BilingualEvaluation>,
    pub comprehension_level: Option<EvaluatedLanguageAbility>,
    pub written_level: Option<EvaluatedLanguageAbility>,
    pub verbal_level: Option<EvaluatedLanguageAbility>,
    pub estimated_language_ability: Option<EstimatedLanguageAbility>,

    pub position_duration: Option<Vec<PositionDuration>>,
    pub accepted_operational_requirements: Option<Vec<OperationalRequirement>>,
    pub location_preferences: Option<Vec<WorkRegion>>,
    pub location_exemptions: Option<String>,

    pub is_woman: Option<bool>,
    pub has_disability: Option<bool>,
    pub is_visible_minority: Option<bool>,
    pub indigenous_communities: Option<Vec<IndigenousCommunity>>,
    pub indigenous_declaration_signature: Option<String>,

    pub expected_generic_job_titles: Option<Vec<GenericJobTitle>>,
}

/// A recorded interest in a development program.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DevelopmentProgramInterestRecord {
    /// The program the interest refers to.
    pub development_program_id: String,
    /// The recorded participation.
    #[serde(default)]
    pub participation_status: Option<DevelopmentProgramParticipationStatus>,
}

/// An applicant's interest in a functional community.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CommunityInterestRecord {
    pub id: String,
    pub user_id: Option<String>,
    pub community: Option<Community>,
    pub job_interest: Option<bool>,
    pub training_interest: Option<bool>,
    pub work_streams: Vec<WorkStream>,
    pub interest_in_development_programs: Vec<DevelopmentProgramInterestRecord>,
    pub additional_information: Option<String>,
    pub finance_is_chief: Option<bool>,
    pub finance_additional_duties: Option<Vec<FinanceChiefDuty>>,
    pub finance_other_roles: Option<Vec<FinanceChiefRole>>,
    pub finance_other_roles_other: Option<String>,
}

/// A skill claimed on an experience, with how it was applied.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceSkill {
    /// The skill id.
    pub id: String,
    pub details: Option<String>,
}

/// One career timeline experience of any type.
///
/// The backend returns a distinct type per experience; the fields a type does
/// not use are absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceRecord {
    /// The experience id; `None` for a new entry.
    pub id: Option<String>,
    /// The owning applicant.
    pub user_id: String,
    pub experience_type: Option<ExperienceType>,
    /// Award, community and personal title.
    pub title: Option<String>,
    pub issued_by: Option<String>,
    #[serde(with = "iso_date::option")]
    pub awarded_date: Option<time::Date>,
    pub awarded_to: Option<AwardedTo>,
    pub awarded_scope: Option<AwardedScope>,
    pub role: Option<String>,
    pub organization: Option<String>,
    pub division: Option<String>,
    pub project: Option<String>,
    #[serde(rename = "type")]
    pub education_type: Option<EducationType>,
    pub status: Option<EducationStatus>,
    pub area_of_study: Option<String>,
    pub institution: Option<String>,
    pub thesis_title: Option<String>,
    pub description: Option<String>,
    #[serde(with = "iso_date::option")]
    pub start_date: Option<time::Date>,
    #[serde(with = "iso_date::option")]
    pub end_date: Option<time::Date>,
    pub details: Option<String>,
    pub skills: Vec<ExperienceSkill>,
}
