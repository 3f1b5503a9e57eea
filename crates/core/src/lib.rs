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

mod error;
mod field;
mod form;
pub mod forms;
mod kind;
mod model;
mod options;
mod section;
mod validation;

#[cfg(test)]
mod tests;

pub use error::FormError;
pub use field::{FieldId, FieldKind, FieldSpec, FieldState, FieldValue, Requirement};
pub use form::Form;
pub use kind::FormKind;
pub use model::{FormModel, MutationSpec, Reconcile, UPDATE_USER_AS_USER};
pub use options::{
    SelectOption, classification_groups, classification_levels, community_options,
    work_stream_options,
};
pub use section::{DependentSection, SectionId, SectionRules, Visibility};
pub use validation::{FieldError, FieldErrorKind, ValidationErrors};
