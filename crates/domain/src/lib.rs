// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod boolean;
mod error;
mod input;
mod records;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use boolean::{
    FALSE_STRING, TRUE_STRING, YesNo, bool_to_string, is_true_string, parse_bool_field,
    parse_bool_string,
};
pub use error::DomainError;
pub use input::{ConnectInput, CreateManyInput, Nullable, SyncInput, UpsertManyInput};
pub use records::{
    Classification, Community, CommunityInterestRecord, Department, DevelopmentProgram,
    DevelopmentProgramInterestRecord, ExperienceRecord, ExperienceSkill, FINANCE_COMMUNITY_KEY,
    GenericJobTitle, NOT_AVAILABLE, UserRecord, WorkStream, localized_or_not_available,
};
pub use types::{
    ArmedForcesStatus, AwardedScope, AwardedTo, BilingualEvaluation, CitizenshipStatus,
    ConsideredPositionLanguage, DevelopmentProgramParticipationStatus, EducationStatus,
    EducationType, EstimatedLanguageAbility, EvaluatedLanguageAbility, ExperienceType,
    FinanceChiefDuty, FinanceChiefRole, GenericJobTitleKey, GovEmployeeType, IndigenousCommunity,
    Language, OperationalRequirement, PositionDuration, ProvinceOrTerritory, WorkRegion,
};
pub use validation::{
    empty_to_none, format_date, iso_date, parse_date, validate_date_range, validate_email,
    validate_telephone,
};
