// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! One typed value set per profile form.

pub mod about_me;
pub mod community_interest;
pub mod employment_equity;
pub mod experience;
pub mod government_info;
pub mod language_info;
pub mod role_salary;
pub mod work_location;
pub mod work_preferences;

pub use about_me::{AboutMe, AboutMePayload};
pub use community_interest::{
    CommunityInterest, CommunityInterestContext, CommunityInterestFields,
    CommunityInterestPayload, CreateCommunityInterestInput, InterestMode,
    UpdateCommunityInterestInput,
};
pub use employment_equity::{EmploymentEquity, EmploymentEquityPayload};
pub use experience::{
    AwardExperienceInput, CommunityExperienceInput, EducationExperienceInput, Experience,
    ExperiencePayload, PersonalExperienceInput, WorkExperienceInput,
};
pub use government_info::{GovernmentContext, GovernmentInfo, GovernmentInfoPayload};
pub use language_info::{LanguageInfo, LanguageInfoPayload};
pub use role_salary::{RoleSalary, RoleSalaryContext, RoleSalaryPayload};
pub use work_location::{WorkLocation, WorkLocationPayload, normalize_exemptions};
pub use work_preferences::{WorkPreferences, WorkPreferencesPayload};
