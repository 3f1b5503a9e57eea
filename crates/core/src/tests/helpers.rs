// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::forms::{CommunityInterestContext, GovernmentContext, RoleSalaryContext};
use talent_profile_domain::{
    ArmedForcesStatus, CitizenshipStatus, Classification, Community, Department,
    DevelopmentProgram, GenericJobTitle, GenericJobTitleKey, Language, ProvinceOrTerritory,
    UserRecord, WorkStream,
};

pub fn create_test_government_context() -> GovernmentContext {
    GovernmentContext {
        departments: vec![
            Department {
                id: String::from("dept-1"),
                name: Some(String::from("Treasury Board Secretariat")),
            },
            Department {
                id: String::from("dept-2"),
                name: None,
            },
        ],
        classifications: vec![
            Classification::new("class-it-1", "IT", 1),
            Classification::new("class-it-2", "IT", 2),
            Classification::new("class-it-3", "IT", 3),
            Classification::new("class-fi-1", "FI", 1),
        ],
    }
}

pub fn create_test_finance_community() -> Community {
    Community {
        id: String::from("finance-id"),
        key: Some(String::from("finance")),
        name: Some(String::from("Finance")),
        work_streams: vec![WorkStream {
            id: String::from("stream-budget"),
            name: Some(String::from("Budgeting")),
        }],
        development_programs: vec![DevelopmentProgram {
            id: String::from("program-cfo"),
            name: Some(String::from("CFO Development")),
        }],
    }
}

/// A community with work streams but no development programs.
pub fn create_test_digital_community() -> Community {
    Community {
        id: String::from("C1"),
        key: Some(String::from("digital")),
        name: Some(String::from("Digital")),
        work_streams: vec![
            WorkStream {
                id: String::from("stream-data"),
                name: Some(String::from("Data")),
            },
            WorkStream {
                id: String::from("stream-apps"),
                name: None,
            },
        ],
        development_programs: Vec::new(),
    }
}

pub fn create_test_community_context() -> CommunityInterestContext {
    CommunityInterestContext {
        communities: vec![
            create_test_digital_community(),
            create_test_finance_community(),
            Community {
                id: String::from("atip-id"),
                key: Some(String::from("atip")),
                name: None,
                work_streams: Vec::new(),
                development_programs: Vec::new(),
            },
        ],
    }
}

pub fn create_test_role_salary_context() -> RoleSalaryContext {
    RoleSalaryContext {
        generic_job_titles: vec![
            GenericJobTitle {
                id: String::from("title-it01"),
                key: GenericJobTitleKey::TechnicianIt01,
            },
            GenericJobTitle {
                id: String::from("title-it02"),
                key: GenericJobTitleKey::AnalystIt02,
            },
            GenericJobTitle {
                id: String::from("title-it04"),
                key: GenericJobTitleKey::ManagerIt04,
            },
        ],
    }
}

/// A complete, consistent applicant profile.
pub fn create_test_user() -> UserRecord {
    UserRecord {
        id: String::from("user-1"),
        first_name: Some(String::from("Ada")),
        last_name: Some(String::from("Lovelace")),
        email: Some(String::from("ada@example.org")),
        telephone: Some(String::from("+16135550100")),
        preferred_lang: Some(Language::En),
        preferred_language_for_interview: Some(Language::Fr),
        preferred_language_for_exam: Some(Language::En),
        current_province: Some(ProvinceOrTerritory::Ontario),
        current_city: Some(String::from("Ottawa")),
        citizenship: Some(CitizenshipStatus::Citizen),
        armed_forces_status: Some(ArmedForcesStatus::NonCaf),
        is_gov_employee: Some(true),
        gov_employee_type: Some(talent_profile_domain::GovEmployeeType::Indeterminate),
        department: Some(Department {
            id: String::from("dept-1"),
            name: Some(String::from("Treasury Board Secretariat")),
        }),
        current_classification: Some(Classification::new("class-it-2", "IT", 2)),
        has_priority_entitlement: Some(true),
        priority_number: Some(String::from("PR-123")),
        looking_for_english: Some(true),
        looking_for_french: Some(false),
        looking_for_bilingual: Some(true),
        bilingual_evaluation: Some(talent_profile_domain::BilingualEvaluation::CompletedFrench),
        comprehension_level: Some(talent_profile_domain::EvaluatedLanguageAbility::B),
        written_level: Some(talent_profile_domain::EvaluatedLanguageAbility::C),
        verbal_level: Some(talent_profile_domain::EvaluatedLanguageAbility::B),
        estimated_language_ability: None,
        position_duration: Some(vec![
            talent_profile_domain::PositionDuration::Permanent,
            talent_profile_domain::PositionDuration::Temporary,
        ]),
        accepted_operational_requirements: Some(vec![
            talent_profile_domain::OperationalRequirement::OnCall,
        ]),
        location_preferences: Some(vec![
            talent_profile_domain::WorkRegion::NationalCapital,
            talent_profile_domain::WorkRegion::Telework,
        ]),
        location_exemptions: Some(String::from("Toronto, Montreal")),
        is_woman: Some(true),
        has_disability: Some(false),
        is_visible_minority: Some(false),
        indigenous_communities: Some(vec![talent_profile_domain::IndigenousCommunity::Metis]),
        indigenous_declaration_signature: Some(String::from("Ada Lovelace")),
        expected_generic_job_titles: Some(vec![GenericJobTitle {
            id: String::from("title-it02"),
            key: GenericJobTitleKey::AnalystIt02,
        }]),
    }
}
