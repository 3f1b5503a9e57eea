// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::forms::GovernmentContext;
use crate::{
    FormKind, SelectOption, classification_groups, classification_levels, community_options,
    work_stream_options,
};
use std::str::FromStr;
use talent_profile_domain::{Community, DomainError};

use super::helpers::{create_test_community_context, create_test_government_context};

#[test]
fn test_community_options_sorted_with_fallback_label() {
    let communities: Vec<Community> = create_test_community_context().communities;

    let options: Vec<SelectOption> = community_options(&communities);
    let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();

    assert_eq!(labels, vec!["Digital", "Finance", "N/A"]);
    assert_eq!(options[2].value, "atip-id");
}

#[test]
fn test_work_stream_options_of_selected_community() {
    let communities: Vec<Community> = create_test_community_context().communities;

    let options: Vec<SelectOption> = work_stream_options(&communities, Some("C1"));

    assert_eq!(
        options,
        vec![
            SelectOption {
                value: String::from("stream-data"),
                label: String::from("Data"),
            },
            SelectOption {
                value: String::from("stream-apps"),
                label: String::from("N/A"),
            },
        ]
    );
    assert!(work_stream_options(&communities, None).is_empty());
    assert!(work_stream_options(&communities, Some("missing")).is_empty());
}

#[test]
fn test_classification_groups_and_levels() {
    let context: GovernmentContext = create_test_government_context();

    assert_eq!(
        classification_groups(&context.classifications),
        vec![String::from("FI"), String::from("IT")]
    );
    assert_eq!(classification_levels(&context.classifications, "IT"), vec![1, 2, 3]);
    assert!(classification_levels(&context.classifications, "EC").is_empty());
    assert_eq!(context.classification_id("IT", 2), Some("class-it-2"));
}

#[test]
fn test_form_kind_round_trips_through_str() {
    for kind in FormKind::ALL {
        assert_eq!(FormKind::from_str(kind.as_str()).unwrap(), *kind);
    }
    assert_eq!(
        FormKind::from_str("skills"),
        Err(DomainError::UnknownFormKind(String::from("skills")))
    );
    assert_eq!(FormKind::CommunityInterest.to_string(), "community-interest");
}
