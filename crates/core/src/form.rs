// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::FormError;
use crate::field::{FieldState, FieldValue};
use crate::model::{FormModel, MutationSpec};
use crate::section::{SectionId, Visibility};
use crate::validation::ValidationErrors;

/// One live form: its values, lookup context and the record it edits.
#[derive(Debug, Clone)]
pub struct Form<M: FormModel> {
    values: M,
    context: M::Context,
    subject_id: Option<String>,
}

impl<M: FormModel + Default> Form<M> {
    /// Creates an empty form.
    #[must_use]
    pub fn new(context: M::Context) -> Self {
        Self {
            values: M::default(),
            context,
            subject_id: None,
        }
    }
}

impl<M: FormModel> Form<M> {
    /// Loads a form from a fetched record.
    #[must_use]
    pub fn load(record: &M::Record, context: M::Context) -> Self {
        Self {
            values: M::from_record(record, &context),
            subject_id: M::subject_id(record),
            context,
        }
    }

    /// Creates a form from values already in hand.
    #[must_use]
    pub const fn with_values(values: M, context: M::Context, subject_id: Option<String>) -> Self {
        Self {
            values,
            context,
            subject_id,
        }
    }

    /// Returns the current values.
    #[must_use]
    pub const fn values(&self) -> &M {
        &self.values
    }

    /// Returns the lookup context.
    #[must_use]
    pub const fn context(&self) -> &M::Context {
        &self.context
    }

    /// Returns the id the mutation is addressed to.
    ///
    /// An explicit subject id wins over the one the values imply.
    #[must_use]
    pub fn subject_id(&self) -> Option<&str> {
        self.subject_id
            .as_deref()
            .or_else(|| self.values.implied_subject_id())
    }

    /// Returns the mutation the current values submit through.
    #[must_use]
    pub fn mutation(&self) -> MutationSpec {
        self.values.mutation()
    }

    /// Derives which sections are visible right now.
    #[must_use]
    pub fn visibility(&self) -> Visibility {
        M::rules().compute_visibility(&self.values, &self.context)
    }

    /// Returns every registered field with its current visibility and
    /// requiredness.
    #[must_use]
    pub fn field_states(&self) -> Vec<FieldState> {
        let visibility: Visibility = self.visibility();
        M::fields()
            .iter()
            .map(|spec| {
                let visible: bool = M::rules().is_field_visible(&visibility, spec.id);
                FieldState {
                    name: spec.id,
                    kind: spec.kind,
                    value: self.values.value(spec.id),
                    visible,
                    required: visible && spec.is_required(),
                }
            })
            .collect()
    }

    /// Applies a change to the values, resetting every section it hides.
    ///
    /// Returns the sections that were reset.
    pub fn update<F>(&mut self, change: F) -> Vec<SectionId>
    where
        F: FnOnce(&mut M),
    {
        M::rules().apply_change(&mut self.values, &self.context, change)
    }

    /// Validates the current values.
    ///
    /// Visibility is recomputed first, so a field hidden since the last
    /// check never blocks.
    ///
    /// # Errors
    ///
    /// Returns every failure found if any visible field is invalid.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let visibility: Visibility = self.visibility();
        let mut errors: ValidationErrors = ValidationErrors::new();

        for spec in M::fields() {
            if spec.is_required()
                && M::rules().is_field_visible(&visibility, spec.id)
                && self.values.value(spec.id).is_empty()
            {
                errors.required(spec.id);
            }
        }
        self.values.check(&self.context, &visibility, &mut errors);

        errors.into_result()
    }

    /// Builds the mutation input for the current values.
    ///
    /// Hidden sections are cleared on a copy of the values first, so stale
    /// entries never reach the payload.
    ///
    /// # Errors
    ///
    /// Returns `FormError::Validation` if any visible field is invalid, or
    /// `FormError::Domain` if a value cannot be parsed.
    pub fn submission(&self) -> Result<M::Payload, FormError> {
        let mut cleared: Self = self.clone();
        M::rules().clear_hidden(&mut cleared.values, &cleared.context);
        cleared.validate()?;
        Ok(cleared.values.to_submission(&cleared.context)?)
    }

    /// Returns the current value of one field.
    #[must_use]
    pub fn value(&self, field: &str) -> Option<FieldValue> {
        M::fields()
            .iter()
            .find(|spec| spec.id == field)
            .map(|spec| self.values.value(spec.id))
    }
}
