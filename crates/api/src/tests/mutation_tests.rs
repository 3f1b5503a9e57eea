// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde_json::{Value, json};
use talent_profile_domain::{AwardedScope, AwardedTo, ExperienceType};
use talent_profile_forms::forms::{AboutMe, AboutMePayload, Experience, ExperiencePayload};
use talent_profile_forms::{Form, FormModel, MutationSpec, UPDATE_USER_AS_USER};

use super::helpers::create_test_about_me_form;
use crate::{MutationRequest, MutationResponse, SubmitError, ToastMessages};

#[test]
fn test_update_user_request_carries_id_and_input() {
    let form: Form<AboutMe> = create_test_about_me_form();
    let payload: AboutMePayload = form.submission().unwrap();

    let request: MutationRequest =
        MutationRequest::new(&UPDATE_USER_AS_USER, form.subject_id(), &payload).unwrap();
    let body: Value = serde_json::to_value(&request).unwrap();

    assert_eq!(body["operationName"], json!("UpdateUserAsUser"));
    assert_eq!(body["variables"]["id"], json!("user-1"));
    assert_eq!(body["variables"]["user"]["firstName"], json!("Grace"));
    assert_eq!(
        request.input(&UPDATE_USER_AS_USER),
        Some(&serde_json::to_value(&payload).unwrap())
    );
}

#[test]
fn test_saved_id_reads_the_root_field() {
    let response: MutationResponse = serde_json::from_value(json!({
        "data": { "updateUserAsUser": { "id": "user-1", "firstName": "Grace" } }
    }))
    .unwrap();

    assert_eq!(response.saved_id(&UPDATE_USER_AS_USER).unwrap(), "user-1");
}

#[test]
fn test_errors_win_over_data() {
    let response: MutationResponse = serde_json::from_value(json!({
        "data": { "updateUserAsUser": { "id": "user-1" } },
        "errors": [{ "message": "first" }, { "message": "second" }]
    }))
    .unwrap();

    let err: SubmitError = response.saved_id(&UPDATE_USER_AS_USER).unwrap_err();

    assert_eq!(err.to_string(), "GraphQL errors: first; second");
}

#[test]
fn test_missing_data_is_empty() {
    let response: MutationResponse = serde_json::from_value(json!({ "data": null })).unwrap();

    assert!(matches!(
        response.saved_id(&UPDATE_USER_AS_USER),
        Err(SubmitError::EmptyResponse { .. })
    ));
}

#[test]
fn test_experience_messages() {
    let new_award: Experience = Experience {
        experience_type: Some(ExperienceType::Award),
        ..Experience::create_for("user-1")
    };
    let messages: ToastMessages = ToastMessages::for_mutation(&new_award.mutation());
    assert_eq!(messages.success, "Successfully added experience!");

    let existing_education: Experience = Experience {
        experience_type: Some(ExperienceType::Education),
        experience_id: Some(String::from("exp-2")),
        ..Experience::default()
    };
    let messages: ToastMessages = ToastMessages::for_mutation(&existing_education.mutation());
    assert_eq!(messages.error, "Error: updating experience failed");
    assert_eq!(
        ToastMessages::for_mutation(&UPDATE_USER_AS_USER),
        ToastMessages::default()
    );
}

#[test]
fn test_new_experience_request_is_addressed_to_its_owner() {
    let values: Experience = Experience {
        experience_type: Some(ExperienceType::Award),
        award_title: String::from("Public Service Award of Excellence"),
        issued_by: String::from("Privy Council Office"),
        awarded_date: String::from("2023-05-01"),
        awarded_to: Some(AwardedTo::MyTeam),
        awarded_scope: Some(AwardedScope::National),
        ..Experience::create_for("user-1")
    };
    let form: Form<Experience> = Form::with_values(values, (), None);
    let mutation: MutationSpec = form.mutation();
    let payload: ExperiencePayload = form.submission().unwrap();

    let request: MutationRequest =
        MutationRequest::new(&mutation, form.subject_id(), &payload).unwrap();
    let body: Value = serde_json::to_value(&request).unwrap();

    assert_eq!(body["operationName"], json!("CreateAwardExperience"));
    assert_eq!(body["variables"]["id"], json!("user-1"));
    assert_eq!(
        body["variables"]["awardExperience"]["awardedScope"],
        json!("NATIONAL")
    );
}
