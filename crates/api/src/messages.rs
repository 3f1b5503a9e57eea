// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use talent_profile_forms::MutationSpec;

/// The toast text shown after a mutation settles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToastMessages {
    /// Shown once the mutation returns the saved record.
    pub success: String,
    /// Shown when the mutation fails for any reason.
    pub error: String,
}

impl Default for ToastMessages {
    fn default() -> Self {
        Self::new("User updated successfully!", "Error: updating user failed")
    }
}

impl ToastMessages {
    /// Creates a message pair.
    #[must_use]
    pub fn new(success: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: success.into(),
            error: error.into(),
        }
    }

    /// Returns the messages used for `mutation`.
    ///
    /// Profile mutations share the user messages. Every experience type
    /// shares the experience messages.
    #[must_use]
    pub fn for_mutation(mutation: &MutationSpec) -> Self {
        let name: &str = mutation.operation_name;
        if name.ends_with("Experience") {
            return if name.starts_with("Create") {
                Self::new(
                    "Successfully added experience!",
                    "Error: adding experience failed",
                )
            } else {
                Self::new(
                    "Successfully updated experience!",
                    "Error: updating experience failed",
                )
            };
        }
        match name {
            "CreateCommunityInterest" => Self::new(
                "Community interest added successfully!",
                "Error: adding community interest failed",
            ),
            "UpdateCommunityInterest" => Self::new(
                "Community interest updated successfully!",
                "Error: updating community interest failed",
            ),
            _ => Self::default(),
        }
    }
}
