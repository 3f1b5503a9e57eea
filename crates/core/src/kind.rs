// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use talent_profile_domain::DomainError;

/// Identifies one of the profile forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FormKind {
    AboutMe,
    GovernmentInfo,
    LanguageInfo,
    WorkPreferences,
    WorkLocation,
    EmploymentEquity,
    RoleSalary,
    CommunityInterest,
    Experience,
}

impl FormKind {
    /// Every form, in profile order.
    pub const ALL: &'static [Self] = &[
        Self::AboutMe,
        Self::GovernmentInfo,
        Self::LanguageInfo,
        Self::WorkPreferences,
        Self::WorkLocation,
        Self::EmploymentEquity,
        Self::RoleSalary,
        Self::CommunityInterest,
        Self::Experience,
    ];

    /// Returns the URL-safe identifier.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AboutMe => "about-me",
            Self::GovernmentInfo => "government-info",
            Self::LanguageInfo => "language-info",
            Self::WorkPreferences => "work-preferences",
            Self::WorkLocation => "work-location",
            Self::EmploymentEquity => "employment-equity",
            Self::RoleSalary => "role-salary",
            Self::CommunityInterest => "community-interest",
            Self::Experience => "experience",
        }
    }
}

impl FromStr for FormKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| DomainError::UnknownFormKind(s.to_string()))
    }
}

impl std::fmt::Display for FormKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
