// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Capabilities injected into the submission handler.
//!
//! The handler never talks to the network, the toast area or the router
//! directly. Callers supply these so that tests can observe every effect.

use std::future::Future;

use crate::error::TransportError;
use crate::mutation::{MutationRequest, MutationResponse};

/// Sends one GraphQL mutation.
pub trait MutationClient {
    /// Sends `request` and returns the decoded response.
    ///
    /// # Errors
    ///
    /// Returns a `TransportError` if no GraphQL response could be read.
    fn execute(
        &self,
        request: &MutationRequest,
    ) -> impl Future<Output = Result<MutationResponse, TransportError>> + Send;
}

/// Shows toast notifications.
pub trait Notifier {
    /// Shows a success toast.
    fn success(&self, message: &str);

    /// Shows an error toast.
    fn error(&self, message: &str);
}

/// Moves the user to another route.
pub trait Navigator {
    /// Navigates to `path`.
    fn navigate(&self, path: &str);
}
