// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Submits a form through its mutation and reports the outcome.
//!
//! Each submission ends in exactly one of two ways: a success toast followed
//! by navigation to the return path, or a single error toast with no
//! navigation. Errors found before the mutation is sent (invalid fields,
//! unparseable values, a submission already in flight) are returned to the
//! caller without any toast.

use std::sync::atomic::{AtomicBool, Ordering};

use talent_profile_forms::{Form, FormModel, MutationSpec};
use tracing::{debug, info, warn};

use crate::capabilities::{MutationClient, Navigator, Notifier};
use crate::error::SubmitError;
use crate::messages::ToastMessages;
use crate::mutation::MutationRequest;
use crate::return_path::ReturnPath;

/// Whether a mutation is waiting for its response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
}

/// A successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submitted {
    /// The id of the saved record.
    pub id: String,
    /// Where the user was sent.
    pub path: String,
}

/// Returns the handler to `Idle` when dropped, including when the
/// submission future is abandoned mid-flight.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Runs form submissions, one at a time.
pub struct SubmissionHandler<C, N, V> {
    client: C,
    notifier: N,
    navigator: V,
    messages: Option<ToastMessages>,
    in_flight: AtomicBool,
}

impl<C, N, V> SubmissionHandler<C, N, V>
where
    C: MutationClient + Sync,
    N: Notifier + Sync,
    V: Navigator + Sync,
{
    /// Creates an idle handler.
    #[must_use]
    pub const fn new(client: C, notifier: N, navigator: V) -> Self {
        Self {
            client,
            notifier,
            navigator,
            messages: None,
            in_flight: AtomicBool::new(false),
        }
    }

    /// Uses `messages` for every toast instead of the per-mutation defaults.
    #[must_use]
    pub fn with_messages(mut self, messages: ToastMessages) -> Self {
        self.messages = Some(messages);
        self
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> SubmissionState {
        if self.in_flight.load(Ordering::Acquire) {
            SubmissionState::Submitting
        } else {
            SubmissionState::Idle
        }
    }

    #[must_use]
    pub const fn client(&self) -> &C {
        &self.client
    }

    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    #[must_use]
    pub const fn navigator(&self) -> &V {
        &self.navigator
    }

    /// Validates `form`, sends its mutation and reports the outcome.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::Validation` or `SubmitError::Parse` if the form
    /// cannot produce a payload, `SubmitError::InFlight` if another
    /// submission has not settled, or a mutation failure. Only mutation
    /// failures show a toast.
    pub async fn submit<M>(
        &self,
        form: &Form<M>,
        return_path: &ReturnPath,
    ) -> Result<Submitted, SubmitError>
    where
        M: FormModel + Sync,
        M::Context: Sync,
    {
        let mutation: MutationSpec = form.mutation();
        let request: MutationRequest = {
            let payload: M::Payload = form.submission()?;
            MutationRequest::new(&mutation, form.subject_id(), &payload)?
        };

        self.send(&mutation, &request, return_path).await
    }

    /// Sends a prepared mutation and reports the outcome.
    ///
    /// # Errors
    ///
    /// Returns `SubmitError::InFlight` if another submission has not
    /// settled, or the mutation failure after showing the error toast.
    pub async fn send(
        &self,
        mutation: &MutationSpec,
        request: &MutationRequest,
        return_path: &ReturnPath,
    ) -> Result<Submitted, SubmitError> {
        let Some(_guard) = self.begin() else {
            debug!(
                operation = mutation.operation_name,
                "Ignoring submission while another is in flight"
            );
            return Err(SubmitError::InFlight);
        };

        info!(operation = mutation.operation_name, "Submitting mutation");

        let outcome: Result<String, SubmitError> = match self.client.execute(request).await {
            Ok(response) => response.saved_id(mutation),
            Err(err) => Err(SubmitError::from(err)),
        };
        let messages: ToastMessages = self
            .messages
            .clone()
            .unwrap_or_else(|| ToastMessages::for_mutation(mutation));

        match outcome {
            Ok(id) => {
                info!(
                    operation = mutation.operation_name,
                    id = %id,
                    path = return_path.as_str(),
                    "Mutation succeeded"
                );
                self.notifier.success(&messages.success);
                self.navigator.navigate(return_path.as_str());
                Ok(Submitted {
                    id,
                    path: return_path.as_str().to_string(),
                })
            }
            Err(err) => {
                warn!(
                    operation = mutation.operation_name,
                    error = %err,
                    "Mutation failed"
                );
                self.notifier.error(&messages.error);
                Err(err)
            }
        }
    }

    fn begin(&self) -> Option<InFlightGuard<'_>> {
        self.in_flight
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard(&self.in_flight))
    }
}
