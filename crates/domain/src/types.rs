// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! GraphQL enums used by the profile forms.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Declares a GraphQL enum with its wire strings.
///
/// Generates `as_str`, `ALL`, `FromStr` and `Display`. Serde uses the same
/// wire strings.
macro_rules! graphql_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [Self] = &[$(Self::$variant),+];

            /// Returns the GraphQL wire string.
            #[must_use]
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire),+
                }
            }
        }

        impl FromStr for $name {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err(DomainError::UnknownEnumValue {
                        enum_name: stringify!($name),
                        value: s.to_string(),
                    }),
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

graphql_enum! {
    /// Employment status of a government employee.
    pub enum GovEmployeeType {
        /// Student position.
        Student => "STUDENT",
        /// Casual position.
        Casual => "CASUAL",
        /// Term position.
        Term => "TERM",
        /// Indeterminate position.
        Indeterminate => "INDETERMINATE",
    }
}

impl GovEmployeeType {
    /// Returns true if this status carries a substantive classification.
    #[must_use]
    pub const fn has_classification(self) -> bool {
        matches!(self, Self::Casual | Self::Term | Self::Indeterminate)
    }
}

graphql_enum! {
    /// Status of a second-language evaluation.
    pub enum BilingualEvaluation {
        /// Completed an English evaluation.
        CompletedEnglish => "COMPLETED_ENGLISH",
        /// Completed a French evaluation.
        CompletedFrench => "COMPLETED_FRENCH",
        /// No evaluation completed.
        NotCompleted => "NOT_COMPLETED",
    }
}

impl BilingualEvaluation {
    /// Returns true if evaluation results exist.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::CompletedEnglish | Self::CompletedFrench)
    }
}

graphql_enum! {
    /// Official second-language evaluation result.
    pub enum EvaluatedLanguageAbility {
        /// Exempt.
        X => "X",
        /// Level A.
        A => "A",
        /// Level B.
        B => "B",
        /// Level C.
        C => "C",
        /// Exemption granted.
        E => "E",
        /// Not assessed.
        P => "P",
    }
}

graphql_enum! {
    /// Self-estimated second-language ability.
    pub enum EstimatedLanguageAbility {
        /// Beginner.
        Beginner => "BEGINNER",
        /// Intermediate.
        Intermediate => "INTERMEDIATE",
        /// Advanced.
        Advanced => "ADVANCED",
    }
}

graphql_enum! {
    /// Accepted position duration.
    pub enum PositionDuration {
        /// Permanent positions.
        Permanent => "PERMANENT",
        /// Temporary positions.
        Temporary => "TEMPORARY",
    }
}

graphql_enum! {
    /// Operational requirements an applicant accepts.
    pub enum OperationalRequirement {
        /// Shift work.
        ShiftWork => "SHIFT_WORK",
        /// On call.
        OnCall => "ON_CALL",
        /// Travel.
        Travel => "TRAVEL",
        /// Transport equipment.
        TransportEquipment => "TRANSPORT_EQUIPMENT",
        /// Driver's licence.
        DriversLicense => "DRIVERS_LICENSE",
        /// Overtime on short notice.
        OvertimeShortNotice => "OVERTIME_SHORT_NOTICE",
        /// Scheduled overtime.
        OvertimeScheduled => "OVERTIME_SCHEDULED",
        /// Work weekends.
        WorkWeekends => "WORK_WEEKENDS",
    }
}

graphql_enum! {
    /// Region an applicant is willing to work in.
    pub enum WorkRegion {
        /// Remote work.
        Telework => "TELEWORK",
        /// National Capital Region.
        NationalCapital => "NATIONAL_CAPITAL",
        /// Atlantic provinces.
        Atlantic => "ATLANTIC",
        /// Quebec.
        Quebec => "QUEBEC",
        /// Ontario.
        Ontario => "ONTARIO",
        /// Prairie provinces.
        Prairie => "PRAIRIE",
        /// British Columbia.
        BritishColumbia => "BRITISH_COLUMBIA",
        /// The territories.
        North => "NORTH",
    }
}

graphql_enum! {
    /// Additional duties held by a finance chief.
    pub enum FinanceChiefDuty {
        /// Deputy chief financial officer duties.
        DeputyChiefFinancialOfficer => "DEPUTY_CHIEF_FINANCIAL_OFFICER",
        /// Chief audit executive duties.
        ChiefAuditExecutive => "CHIEF_AUDIT_EXECUTIVE",
        /// Departmental security officer duties.
        DepartmentalSecurityOfficer => "DEPARTMENTAL_SECURITY_OFFICER",
        /// Procurement authority duties.
        ProcurementAuthority => "PROCUREMENT_AUTHORITY",
    }
}

graphql_enum! {
    /// Other roles held by a finance chief.
    pub enum FinanceChiefRole {
        /// Chief financial officer.
        ChiefFinancialOfficer => "CHIEF_FINANCIAL_OFFICER",
        /// Chief results and delivery officer.
        ChiefResultsDeliveryOfficer => "CHIEF_RESULTS_DELIVERY_OFFICER",
        /// Chief investment officer.
        ChiefInvestmentOfficer => "CHIEF_INVESTMENT_OFFICER",
        /// A role described in free text.
        Other => "OTHER",
    }
}

graphql_enum! {
    /// Participation in a community development program.
    pub enum DevelopmentProgramParticipationStatus {
        /// Not interested.
        NotInterested => "NOT_INTERESTED",
        /// Interested.
        Interested => "INTERESTED",
        /// Currently enrolled.
        Enrolled => "ENROLLED",
        /// Completed.
        Completed => "COMPLETED",
    }
}

graphql_enum! {
    /// Official language.
    pub enum Language {
        /// English.
        En => "EN",
        /// French.
        Fr => "FR",
    }
}

graphql_enum! {
    /// Province or territory of residence.
    pub enum ProvinceOrTerritory {
        /// British Columbia.
        BritishColumbia => "BRITISH_COLUMBIA",
        /// Alberta.
        Alberta => "ALBERTA",
        /// Saskatchewan.
        Saskatchewan => "SASKATCHEWAN",
        /// Manitoba.
        Manitoba => "MANITOBA",
        /// Ontario.
        Ontario => "ONTARIO",
        /// Quebec.
        Quebec => "QUEBEC",
        /// New Brunswick.
        NewBrunswick => "NEW_BRUNSWICK",
        /// Nova Scotia.
        NovaScotia => "NOVA_SCOTIA",
        /// Prince Edward Island.
        PrinceEdwardIsland => "PRINCE_EDWARD_ISLAND",
        /// Newfoundland and Labrador.
        NewfoundlandAndLabrador => "NEWFOUNDLAND_AND_LABRADOR",
        /// Yukon.
        Yukon => "YUKON",
        /// Northwest Territories.
        NorthwestTerritories => "NORTHWEST_TERRITORIES",
        /// Nunavut.
        Nunavut => "NUNAVUT",
    }
}

graphql_enum! {
    /// Citizenship status.
    pub enum CitizenshipStatus {
        /// Canadian citizen.
        Citizen => "CITIZEN",
        /// Permanent resident.
        PermanentResident => "PERMANENT_RESIDENT",
        /// Other status.
        Other => "OTHER",
    }
}

graphql_enum! {
    /// Canadian Armed Forces status.
    pub enum ArmedForcesStatus {
        /// Veteran.
        Veteran => "VETERAN",
        /// Current member.
        Member => "MEMBER",
        /// Not a member.
        NonCaf => "NON_CAF",
    }
}

graphql_enum! {
    /// Self-declared Indigenous community.
    pub enum IndigenousCommunity {
        /// Status First Nations.
        StatusFirstNations => "STATUS_FIRST_NATIONS",
        /// Non-status First Nations.
        NonStatusFirstNations => "NON_STATUS_FIRST_NATIONS",
        /// Inuk (Inuit).
        Inuit => "INUIT",
        /// Métis.
        Metis => "METIS",
        /// Another Indigenous community.
        Other => "OTHER",
    }
}

graphql_enum! {
    /// Position languages an applicant wants to be considered for.
    pub enum ConsideredPositionLanguage {
        /// English-only positions.
        LookingForEnglish => "lookingForEnglish",
        /// French-only positions.
        LookingForFrench => "lookingForFrench",
        /// Bilingual positions.
        LookingForBilingual => "lookingForBilingual",
    }
}

graphql_enum! {
    /// Generic job title levels used for referral preferences.
    pub enum GenericJobTitleKey {
        /// IT-01 technician.
        TechnicianIt01 => "TECHNICIAN_IT01",
        /// IT-02 analyst.
        AnalystIt02 => "ANALYST_IT02",
        /// IT-03 team leader.
        TeamLeaderIt03 => "TEAM_LEADER_IT03",
        /// IT-03 technical advisor.
        TechnicalAdvisorIt03 => "TECHNICAL_ADVISOR_IT03",
        /// IT-04 senior advisor.
        SeniorAdvisorIt04 => "SENIOR_ADVISOR_IT04",
        /// IT-04 manager.
        ManagerIt04 => "MANAGER_IT04",
    }
}

graphql_enum! {
    /// The kind of a career timeline experience.
    pub enum ExperienceType {
        /// An award or recognition.
        Award => "award",
        /// Community or volunteer involvement.
        Community => "community",
        /// Education or a certification.
        Education => "education",
        /// Personal learning or projects.
        Personal => "personal",
        /// Paid work.
        Work => "work",
    }
}

graphql_enum! {
    /// Who an award was given to.
    pub enum AwardedTo {
        /// The applicant.
        Me => "ME",
        /// The applicant's organization.
        MyOrganization => "MY_ORGANIZATION",
        /// The applicant's project.
        MyProject => "MY_PROJECT",
        /// The applicant's team.
        MyTeam => "MY_TEAM",
    }
}

graphql_enum! {
    /// How widely an award was granted.
    pub enum AwardedScope {
        /// Community level.
        Community => "COMMUNITY",
        /// International level.
        International => "INTERNATIONAL",
        /// Local level.
        Local => "LOCAL",
        /// National level.
        National => "NATIONAL",
        /// Whole organization.
        Organizational => "ORGANIZATIONAL",
        /// Provincial level.
        Provincial => "PROVINCIAL",
        /// Part of an organization.
        SubOrganizational => "SUB_ORGANIZATIONAL",
    }
}

graphql_enum! {
    /// The credential an education experience leads to.
    pub enum EducationType {
        /// Bachelor's degree.
        BachelorsDegree => "BACHELORS_DEGREE",
        /// Certification.
        Certification => "CERTIFICATION",
        /// Diploma.
        Diploma => "DIPLOMA",
        /// Master's degree.
        MastersDegree => "MASTERS_DEGREE",
        /// Online course.
        OnlineCourse => "ONLINE_COURSE",
        /// Anything else.
        Other => "OTHER",
        /// Doctorate.
        Phd => "PHD",
        /// Post-doctoral fellowship.
        PostDoctoralFellowship => "POST_DOCTORAL_FELLOWSHIP",
    }
}

graphql_enum! {
    /// How an education experience ended.
    pub enum EducationStatus {
        /// Audited without credit.
        Audited => "AUDITED",
        /// Left before completion.
        DidNotComplete => "DID_NOT_COMPLETE",
        /// Still studying.
        InProgress => "IN_PROGRESS",
        /// Completed with a credential.
        SuccessCredential => "SUCCESS_CREDENTIAL",
        /// Completed without a credential.
        SuccessNoCredential => "SUCCESS_NO_CREDENTIAL",
    }
}
