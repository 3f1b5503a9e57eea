// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for dependent-section visibility and reset rules.

use crate::forms::government_info::{fields, sections};
use crate::forms::{GovernmentContext, GovernmentInfo};
use crate::{FormModel, SectionId, SectionRules, Visibility};
use talent_profile_domain::{GovEmployeeType, YesNo};

use super::helpers::create_test_government_context;

fn rules() -> &'static SectionRules<GovernmentInfo, GovernmentContext> {
    GovernmentInfo::rules()
}

fn classified_employee() -> GovernmentInfo {
    GovernmentInfo {
        gov_employee_yes_no: Some(YesNo::Yes),
        department: Some(String::from("dept-1")),
        gov_employee_type: Some(GovEmployeeType::Term),
        current_classification_group: Some(String::from("IT")),
        current_classification_level: Some(String::from("2")),
        priority_entitlement_yes_no: Some(YesNo::No),
        priority_entitlement_number: None,
    }
}

#[test]
fn test_empty_values_show_no_sections() {
    let context: GovernmentContext = create_test_government_context();
    let visibility: Visibility = rules().compute_visibility(&GovernmentInfo::default(), &context);

    assert!(visibility.is_empty());
}

#[test]
fn test_nested_sections_follow_their_parents() {
    let context: GovernmentContext = create_test_government_context();
    let visibility: Visibility = rules().compute_visibility(&classified_employee(), &context);

    assert!(visibility.is_visible(sections::GOV_EMPLOYEE));
    assert!(visibility.is_visible(sections::CLASSIFICATION));
    assert!(visibility.is_visible(sections::CLASSIFICATION_LEVEL));
    assert!(!visibility.is_visible(sections::PRIORITY_NUMBER));
    assert_eq!(visibility.len(), 3);
}

#[test]
fn test_child_hidden_when_parent_hidden_even_if_predicate_holds() {
    let context: GovernmentContext = create_test_government_context();
    let mut values: GovernmentInfo = classified_employee();
    values.gov_employee_yes_no = Some(YesNo::No);

    let visibility: Visibility = rules().compute_visibility(&values, &context);

    // Type and group are still set, but their parent section is hidden
    assert!(!visibility.is_visible(sections::GOV_EMPLOYEE));
    assert!(!visibility.is_visible(sections::CLASSIFICATION));
    assert!(!visibility.is_visible(sections::CLASSIFICATION_LEVEL));
}

#[test]
fn test_compute_visibility_is_pure() {
    let context: GovernmentContext = create_test_government_context();
    let values: GovernmentInfo = classified_employee();

    let first: Visibility = rules().compute_visibility(&values, &context);
    let second: Visibility = rules().compute_visibility(&values, &context);

    assert_eq!(first, second);
    assert_eq!(values, classified_employee());
}

#[test]
fn test_hiding_a_section_cascades_resets_to_descendants() {
    let context: GovernmentContext = create_test_government_context();
    let mut values: GovernmentInfo = classified_employee();

    let reset: Vec<SectionId> = rules().apply_change(&mut values, &context, |v| {
        v.gov_employee_yes_no = Some(YesNo::No);
    });

    assert_eq!(
        reset,
        vec![
            sections::GOV_EMPLOYEE,
            sections::CLASSIFICATION,
            sections::CLASSIFICATION_LEVEL
        ]
    );
    assert_eq!(values.department, None);
    assert_eq!(values.gov_employee_type, None);
    assert_eq!(values.current_classification_group, None);
    assert_eq!(values.current_classification_level, None);
}

#[test]
fn test_switching_to_student_clears_classification_only() {
    let context: GovernmentContext = create_test_government_context();
    let mut values: GovernmentInfo = classified_employee();

    let reset: Vec<SectionId> = rules().apply_change(&mut values, &context, |v| {
        v.gov_employee_type = Some(GovEmployeeType::Student);
    });

    assert_eq!(
        reset,
        vec![sections::CLASSIFICATION, sections::CLASSIFICATION_LEVEL]
    );
    assert_eq!(values.department, Some(String::from("dept-1")));
    assert_eq!(values.gov_employee_type, Some(GovEmployeeType::Student));
    assert_eq!(values.current_classification_group, None);
    assert_eq!(values.current_classification_level, None);
}

#[test]
fn test_changing_key_resets_a_section_that_stays_visible() {
    let context: GovernmentContext = create_test_government_context();
    let mut values: GovernmentInfo = classified_employee();

    let reset: Vec<SectionId> = rules().apply_change(&mut values, &context, |v| {
        v.current_classification_group = Some(String::from("FI"));
    });

    assert_eq!(reset, vec![sections::CLASSIFICATION_LEVEL]);
    assert_eq!(values.current_classification_group, Some(String::from("FI")));
    assert_eq!(values.current_classification_level, None);
}

#[test]
fn test_change_that_keeps_visibility_resets_nothing() {
    let context: GovernmentContext = create_test_government_context();
    let mut values: GovernmentInfo = classified_employee();

    let reset: Vec<SectionId> = rules().apply_change(&mut values, &context, |v| {
        v.current_classification_level = Some(String::from("3"));
        v.department = Some(String::from("dept-2"));
    });

    assert!(reset.is_empty());
    assert_eq!(values.current_classification_level, Some(String::from("3")));
}

#[test]
fn test_showing_a_section_does_not_reset_it() {
    let context: GovernmentContext = create_test_government_context();
    let mut values: GovernmentInfo = GovernmentInfo {
        priority_entitlement_yes_no: Some(YesNo::No),
        priority_entitlement_number: Some(String::from("stale")),
        ..GovernmentInfo::default()
    };

    let reset: Vec<SectionId> = rules().apply_change(&mut values, &context, |v| {
        v.priority_entitlement_yes_no = Some(YesNo::Yes);
    });

    assert!(reset.is_empty());
    assert_eq!(values.priority_entitlement_number, Some(String::from("stale")));
}

#[test]
fn test_clear_hidden_resets_every_hidden_section() {
    let context: GovernmentContext = create_test_government_context();
    let mut values: GovernmentInfo = classified_employee();
    values.gov_employee_yes_no = Some(YesNo::No);
    values.priority_entitlement_number = Some(String::from("PR-1"));

    let reset: Vec<SectionId> = rules().clear_hidden(&mut values, &context);

    assert_eq!(reset.len(), 4);
    assert_eq!(values.department, None);
    assert_eq!(values.gov_employee_type, None);
    assert_eq!(values.current_classification_group, None);
    assert_eq!(values.current_classification_level, None);
    assert_eq!(values.priority_entitlement_number, None);
}

#[test]
fn test_section_of_and_field_visibility() {
    let context: GovernmentContext = create_test_government_context();
    let visibility: Visibility = rules().compute_visibility(&GovernmentInfo::default(), &context);

    assert_eq!(
        rules().section_of(fields::CURRENT_CLASSIFICATION_LEVEL),
        Some(sections::CLASSIFICATION_LEVEL)
    );
    assert_eq!(rules().section_of(fields::GOV_EMPLOYEE_YES_NO), None);
    assert!(rules().is_field_visible(&visibility, fields::GOV_EMPLOYEE_YES_NO));
    assert!(!rules().is_field_visible(&visibility, fields::DEPARTMENT));
}

#[test]
fn test_parents_are_declared_before_children() {
    let declared: Vec<SectionId> = rules().sections().iter().map(|s| s.id()).collect();

    for (index, section) in rules().sections().iter().enumerate() {
        if let Some(parent) = section.parent() {
            let parent_index: usize = declared.iter().position(|id| *id == parent).unwrap();
            assert!(parent_index < index, "{} declared before {parent}", section.id());
        }
    }
}
