// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The field registry: named fields, their kinds, and their current values.

use serde::Serialize;

/// The wire name of a form field, e.g. `"govEmployeeYesNo"`.
pub type FieldId = &'static str;

/// How a field is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Free text.
    Text,
    /// A `"true"`/`"false"` radio group.
    BoolString,
    /// A `"yes"`/`"no"` radio group.
    YesNo,
    /// A single enum or lookup selection.
    Select,
    /// A multi-select checklist of enums or ids.
    Checklist,
    /// A `YYYY-MM-DD` date input.
    Date,
    /// A single checkbox.
    Checkbox,
}

/// Whether a field must be filled while it is visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Requirement {
    /// Required while visible.
    Required,
    /// Never required.
    Optional,
}

/// A registered field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// The field name.
    pub id: FieldId,
    /// How the field is edited.
    pub kind: FieldKind,
    /// Whether the field is required while visible.
    pub requirement: Requirement,
}

impl FieldSpec {
    /// Registers a field that is required while visible.
    #[must_use]
    pub const fn required(id: FieldId, kind: FieldKind) -> Self {
        Self {
            id,
            kind,
            requirement: Requirement::Required,
        }
    }

    /// Registers an optional field.
    #[must_use]
    pub const fn optional(id: FieldId, kind: FieldKind) -> Self {
        Self {
            id,
            kind,
            requirement: Requirement::Optional,
        }
    }

    /// Returns true if the field is required while visible.
    #[must_use]
    pub const fn is_required(&self) -> bool {
        matches!(self.requirement, Requirement::Required)
    }
}

/// The current value of a field, as seen by requiredness checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// No value selected.
    Unset,
    /// A text, radio or select value.
    Text(String),
    /// A checkbox value.
    Flag(bool),
    /// A checklist value.
    List(Vec<String>),
}

impl FieldValue {
    /// Wraps a text value.
    #[must_use]
    pub fn text(value: &str) -> Self {
        Self::Text(value.to_string())
    }

    /// Wraps an optional selection, displaying it through `Display`.
    pub fn selection<T: std::fmt::Display>(value: Option<T>) -> Self {
        value.map_or(Self::Unset, |v| Self::Text(v.to_string()))
    }

    /// Wraps a checklist of displayable values.
    pub fn list<I>(values: I) -> Self
    where
        I: IntoIterator,
        I::Item: std::fmt::Display,
    {
        Self::List(values.into_iter().map(|v| v.to_string()).collect())
    }

    /// Returns true if the value does not satisfy a requirement.
    ///
    /// Blank text counts as empty. A checkbox always has a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Unset => true,
            Self::Text(text) => text.trim().is_empty(),
            Self::Flag(_) => false,
            Self::List(items) => items.is_empty(),
        }
    }
}

/// A field's value together with its visibility and requiredness right now.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldState {
    /// The field name.
    pub name: FieldId,
    /// How the field is edited.
    pub kind: FieldKind,
    /// The current value.
    pub value: FieldValue,
    /// Whether the field is currently shown.
    pub visible: bool,
    /// Whether the field currently blocks submission when empty.
    pub required: bool,
}
