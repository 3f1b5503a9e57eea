// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Select options derived from lookup data.

use serde::Serialize;
use std::collections::BTreeSet;
use talent_profile_domain::{Classification, Community, localized_or_not_available};

/// One entry in a select or checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// The submitted value.
    pub value: String,
    /// The displayed label.
    pub label: String,
}

impl SelectOption {
    fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

fn sorted(mut options: Vec<SelectOption>) -> Vec<SelectOption> {
    options.sort_by(|a, b| a.label.cmp(&b.label).then_with(|| a.value.cmp(&b.value)));
    options
}

/// Community options, sorted by label.
#[must_use]
pub fn community_options(communities: &[Community]) -> Vec<SelectOption> {
    sorted(
        communities
            .iter()
            .map(|community| {
                SelectOption::new(
                    &community.id,
                    localized_or_not_available(community.name.as_deref()),
                )
            })
            .collect(),
    )
}

/// Work-stream options of the selected community, sorted by label.
///
/// Empty when no community is selected or the id is unknown.
#[must_use]
pub fn work_stream_options(
    communities: &[Community],
    community_id: Option<&str>,
) -> Vec<SelectOption> {
    let Some(community) = community_id.and_then(|id| communities.iter().find(|c| c.id == id))
    else {
        return Vec::new();
    };
    sorted(
        community
            .work_streams
            .iter()
            .map(|stream| {
                SelectOption::new(&stream.id, localized_or_not_available(stream.name.as_deref()))
            })
            .collect(),
    )
}

/// The distinct classification groups, sorted.
#[must_use]
pub fn classification_groups(classifications: &[Classification]) -> Vec<String> {
    classifications
        .iter()
        .map(|classification| classification.group.clone())
        .collect::<BTreeSet<String>>()
        .into_iter()
        .collect()
}

/// The levels available within `group`, ascending.
#[must_use]
pub fn classification_levels(classifications: &[Classification], group: &str) -> Vec<u8> {
    classifications
        .iter()
        .filter(|classification| classification.group == group)
        .map(|classification| classification.level)
        .collect::<BTreeSet<u8>>()
        .into_iter()
        .collect()
}
