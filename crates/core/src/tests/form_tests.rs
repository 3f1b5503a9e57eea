// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for form instances: field states, validation and submission.

use crate::forms::government_info::fields;
use crate::forms::{GovernmentContext, GovernmentInfo, GovernmentInfoPayload, WorkPreferences};
use crate::{FieldErrorKind, FieldState, FieldValue, Form, FormError, FormKind, FormModel};
use talent_profile_domain::{DomainError, GovEmployeeType, UserRecord, YesNo};

use super::helpers::{create_test_government_context, create_test_user};

fn state<'a>(states: &'a [FieldState], name: &str) -> &'a FieldState {
    states.iter().find(|s| s.name == name).unwrap()
}

#[test]
fn test_load_sets_subject_and_values() {
    let record: UserRecord = create_test_user();
    let form: Form<GovernmentInfo> = Form::load(&record, create_test_government_context());

    assert_eq!(form.subject_id(), Some("user-1"));
    assert_eq!(form.values().gov_employee_yes_no, Some(YesNo::Yes));
    assert_eq!(form.values().current_classification_level, Some(String::from("2")));
    assert_eq!(form.mutation().operation_name, "UpdateUserAsUser");
    assert_eq!(GovernmentInfo::KIND, FormKind::GovernmentInfo);
}

#[test]
fn test_load_tolerates_empty_record() {
    let record: UserRecord = UserRecord::default();
    let form: Form<GovernmentInfo> = Form::load(&record, GovernmentContext::default());

    assert_eq!(form.values(), &GovernmentInfo::default());
}

#[test]
fn test_field_states_report_visibility_and_requiredness() {
    let form: Form<GovernmentInfo> = Form::new(create_test_government_context());
    let states: Vec<FieldState> = form.field_states();

    assert_eq!(states.len(), GovernmentInfo::fields().len());

    let yes_no: &FieldState = state(&states, fields::GOV_EMPLOYEE_YES_NO);
    assert!(yes_no.visible);
    assert!(yes_no.required);
    assert_eq!(yes_no.value, FieldValue::Unset);

    let department: &FieldState = state(&states, fields::DEPARTMENT);
    assert!(!department.visible);
    assert!(!department.required);

    let number: &FieldState = state(&states, fields::PRIORITY_ENTITLEMENT_NUMBER);
    assert!(!number.required);
}

#[test]
fn test_visible_required_field_blocks_when_empty() {
    let mut form: Form<GovernmentInfo> = Form::new(create_test_government_context());
    form.update(|v| {
        v.gov_employee_yes_no = Some(YesNo::Yes);
        v.priority_entitlement_yes_no = Some(YesNo::No);
    });

    let errors = form.validate().unwrap_err();

    assert!(errors.has_error(fields::DEPARTMENT));
    assert!(errors.has_error(fields::GOV_EMPLOYEE_TYPE));
    assert!(!errors.has_error(fields::CURRENT_CLASSIFICATION_GROUP));
    assert!(
        errors
            .for_field(fields::DEPARTMENT)
            .all(|e| e.kind == FieldErrorKind::Required)
    );
}

#[test]
fn test_visible_required_field_passes_when_populated() {
    let mut form: Form<GovernmentInfo> = Form::new(create_test_government_context());
    form.update(|v| {
        v.gov_employee_yes_no = Some(YesNo::Yes);
        v.department = Some(String::from("dept-1"));
        v.gov_employee_type = Some(GovEmployeeType::Student);
        v.priority_entitlement_yes_no = Some(YesNo::No);
    });

    assert!(form.validate().is_ok());
}

#[test]
fn test_hidden_required_field_never_blocks() {
    // Values built directly, as if visibility had been stale
    let values: GovernmentInfo = GovernmentInfo {
        gov_employee_yes_no: Some(YesNo::No),
        gov_employee_type: Some(GovEmployeeType::Term),
        current_classification_group: Some(String::from("IT")),
        priority_entitlement_yes_no: Some(YesNo::No),
        ..GovernmentInfo::default()
    };
    let form: Form<GovernmentInfo> =
        Form::with_values(values, create_test_government_context(), None);

    assert!(form.validate().is_ok());
}

#[test]
fn test_submission_reports_validation_errors() {
    let form: Form<GovernmentInfo> = Form::new(create_test_government_context());

    let result: Result<GovernmentInfoPayload, FormError> = form.submission();

    match result {
        Err(FormError::Validation(errors)) => {
            assert!(errors.has_error(fields::GOV_EMPLOYEE_YES_NO));
            assert!(errors.has_error(fields::PRIORITY_ENTITLEMENT_YES_NO));
            assert_eq!(errors.len(), 2);
        }
        other => panic!("expected validation errors, got {other:?}"),
    }
}

#[test]
fn test_submission_clears_stale_hidden_values() {
    let values: GovernmentInfo = GovernmentInfo {
        gov_employee_yes_no: Some(YesNo::Yes),
        department: Some(String::from("dept-1")),
        gov_employee_type: Some(GovEmployeeType::Student),
        // Stale: hidden for students
        current_classification_group: Some(String::from("IT")),
        current_classification_level: Some(String::from("2")),
        priority_entitlement_yes_no: Some(YesNo::No),
        priority_entitlement_number: Some(String::from("stale")),
    };
    let form: Form<GovernmentInfo> =
        Form::with_values(values, create_test_government_context(), Some(String::from("u")));

    let payload: GovernmentInfoPayload = form.submission().unwrap();

    assert_eq!(payload.current_classification.connect, None);
    assert_eq!(payload.priority_number, None);
    // The live form is untouched
    assert_eq!(
        form.values().current_classification_group,
        Some(String::from("IT"))
    );
}

#[test]
fn test_submission_surfaces_parse_errors() {
    let values: WorkPreferences = WorkPreferences {
        would_accept_temporary: Some(String::from("maybe")),
        accepted_operational_requirements: Vec::new(),
    };
    let form: Form<WorkPreferences> = Form::with_values(values, (), None);

    let result = form.submission();

    assert_eq!(
        result.unwrap_err(),
        FormError::Domain(DomainError::InvalidBooleanString(String::from("maybe")))
    );
}

#[test]
fn test_form_value_lookup() {
    let record: UserRecord = create_test_user();
    let form: Form<GovernmentInfo> = Form::load(&record, create_test_government_context());

    assert_eq!(
        form.value(fields::GOV_EMPLOYEE_TYPE),
        Some(FieldValue::text("INDETERMINATE"))
    );
    assert_eq!(form.value("notAField"), None);
}

#[test]
fn test_form_error_display() {
    let mut errors: crate::ValidationErrors = crate::ValidationErrors::new();
    errors.required(fields::DEPARTMENT);
    errors.invalid(fields::PRIORITY_ENTITLEMENT_NUMBER, "too long");

    assert_eq!(
        FormError::Validation(errors).to_string(),
        "Validation failed: department is required; priorityEntitlementNumber: too long"
    );
}
