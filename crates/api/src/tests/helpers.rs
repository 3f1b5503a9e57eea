// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test doubles and fixtures.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use talent_profile_domain::{
    ArmedForcesStatus, CitizenshipStatus, Community, Language, ProvinceOrTerritory, UserRecord,
    WorkStream,
};
use talent_profile_forms::Form;
use talent_profile_forms::forms::{AboutMe, CommunityInterestContext};
use tokio::sync::Notify;

use crate::{
    MutationClient, MutationRequest, MutationResponse, Navigator, Notifier, SubmissionHandler,
    TransportError,
};

/// Replays canned responses and records every request it receives.
#[derive(Default)]
pub struct MockClient {
    responses: Mutex<VecDeque<Result<MutationResponse, TransportError>>>,
    requests: Mutex<Vec<MutationRequest>>,
    gate: Option<Arc<Notify>>,
}

impl MockClient {
    pub fn replying(responses: Vec<Result<MutationResponse, TransportError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            requests: Mutex::new(Vec::new()),
            gate: None,
        }
    }

    /// Holds every response until `gate` is notified.
    pub fn gated(
        gate: Arc<Notify>,
        responses: Vec<Result<MutationResponse, TransportError>>,
    ) -> Self {
        Self {
            gate: Some(gate),
            ..Self::replying(responses)
        }
    }

    pub fn requests(&self) -> Vec<MutationRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl MutationClient for MockClient {
    async fn execute(&self, request: &MutationRequest) -> Result<MutationResponse, TransportError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(MutationResponse::default()))
    }
}

#[derive(Default)]
pub struct RecordingNotifier {
    pub successes: Mutex<Vec<String>>,
    pub errors: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub fn successes(&self) -> Vec<String> {
        self.successes.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn success(&self, message: &str) {
        self.successes.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

#[derive(Default)]
pub struct RecordingNavigator {
    pub paths: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        self.paths.lock().unwrap().push(path.to_string());
    }
}

pub type TestHandler = SubmissionHandler<MockClient, RecordingNotifier, RecordingNavigator>;

pub fn create_test_handler(client: MockClient) -> TestHandler {
    SubmissionHandler::new(
        client,
        RecordingNotifier::default(),
        RecordingNavigator::default(),
    )
}

pub fn create_test_user() -> UserRecord {
    UserRecord {
        id: String::from("user-1"),
        first_name: Some(String::from("Grace")),
        last_name: Some(String::from("Hopper")),
        email: Some(String::from("grace@example.org")),
        telephone: Some(String::from("+16135550199")),
        preferred_lang: Some(Language::En),
        preferred_language_for_interview: Some(Language::En),
        preferred_language_for_exam: Some(Language::Fr),
        current_province: Some(ProvinceOrTerritory::Ontario),
        current_city: Some(String::from("Ottawa")),
        citizenship: Some(CitizenshipStatus::Citizen),
        armed_forces_status: Some(ArmedForcesStatus::NonCaf),
        ..UserRecord::default()
    }
}

pub fn create_test_about_me_form() -> Form<AboutMe> {
    Form::load(&create_test_user(), ())
}

pub fn create_test_community_context() -> CommunityInterestContext {
    CommunityInterestContext {
        communities: vec![Community {
            id: String::from("C1"),
            key: Some(String::from("digital")),
            name: Some(String::from("Digital")),
            work_streams: vec![WorkStream {
                id: String::from("stream-data"),
                name: Some(String::from("Data")),
            }],
            development_programs: Vec::new(),
        }],
    }
}
