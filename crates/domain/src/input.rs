// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! GraphQL input building blocks.
//!
//! GraphQL inputs distinguish an omitted key from an explicit `null`, so
//! payload fields use [`Nullable`] together with
//! `#[serde(default, skip_serializing_if = "Nullable::is_absent")]`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A tri-state input value: omitted, explicitly null, or present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Nullable<T> {
    /// The key is omitted entirely.
    #[default]
    Absent,
    /// The key is sent with a `null` value.
    Null,
    /// The key is sent with a value.
    Value(T),
}

impl<T> Nullable<T> {
    /// Returns true if the key should be omitted.
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// Returns true if the key is an explicit `null`.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the contained value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }

    /// Converts from `&Nullable<T>` to `Nullable<&T>`.
    #[must_use]
    pub const fn as_ref(&self) -> Nullable<&T> {
        match self {
            Self::Absent => Nullable::Absent,
            Self::Null => Nullable::Null,
            Self::Value(value) => Nullable::Value(value),
        }
    }

    /// Maps the contained value, preserving absence and nullness.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Nullable<U> {
        match self {
            Self::Absent => Nullable::Absent,
            Self::Null => Nullable::Null,
            Self::Value(value) => Nullable::Value(f(value)),
        }
    }

    /// Collapses absence and nullness into `None`.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(value) => Some(value),
            Self::Absent | Self::Null => None,
        }
    }
}

impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(value) => serializer.serialize_some(value),
            Self::Absent | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(Option::<T>::deserialize(deserializer)?.into())
    }
}

/// Connects a belongs-to relation by id, or clears it with `connect: null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectInput {
    /// The related record id.
    pub connect: Option<String>,
}

impl ConnectInput {
    /// Connects the relation to `id`.
    #[must_use]
    pub fn id(id: impl Into<String>) -> Self {
        Self {
            connect: Some(id.into()),
        }
    }

    /// Clears the relation.
    #[must_use]
    pub const fn none() -> Self {
        Self { connect: None }
    }
}

/// Replaces an entire related-record set.
///
/// Plain relations sync by id; relations with pivot data sync whole entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SyncInput<T = String> {
    /// The complete set of related entries.
    pub sync: Vec<T>,
}

impl<T> SyncInput<T> {
    /// Creates a sync input from complete entries.
    #[must_use]
    pub const fn entries(sync: Vec<T>) -> Self {
        Self { sync }
    }
}

impl SyncInput {
    /// Creates a sync input from any id iterator.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sync: ids.into_iter().map(Into::into).collect(),
        }
    }
}

/// Creates related records alongside their parent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateManyInput<T> {
    /// The records to create.
    pub create: Vec<T>,
}

/// Creates or updates related records keyed by their natural key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpsertManyInput<T> {
    /// The records to create or update.
    pub upsert: Vec<T>,
}
