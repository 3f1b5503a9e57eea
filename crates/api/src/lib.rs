// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod capabilities;
mod error;
mod messages;
mod mutation;
mod return_path;
mod submission;

#[cfg(test)]
mod tests;

pub use capabilities::{MutationClient, Navigator, Notifier};
pub use error::{SubmitError, TransportError};
pub use messages::ToastMessages;
pub use mutation::{GraphQlError, MutationRequest, MutationResponse};
pub use return_path::{APPLICATION_ID_PARAM, FROM_PARAM, ReturnPath};
pub use submission::{SubmissionHandler, SubmissionState, Submitted};
