// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Dependent sections and the rules that show, hide and reset them.
//!
//! A section groups fields whose visibility depends on driver fields. Its
//! predicate is a pure function of the current values and the form's lookup
//! context. A section nested within a parent is visible only while the
//! parent is. When a section goes from visible to hidden its fields are
//! reset to their cleared defaults, so stale values are never submitted.

use crate::field::FieldId;
use serde::Serialize;
use std::collections::BTreeSet;
use tracing::debug;

/// The name of a dependent section.
pub type SectionId = &'static str;

/// A group of fields shown only while a predicate holds.
#[derive(Debug, Clone, Copy)]
pub struct DependentSection<V, C> {
    id: SectionId,
    parent: Option<SectionId>,
    fields: &'static [FieldId],
    predicate: fn(&V, &C) -> bool,
    reset: fn(&mut V),
    key: Option<fn(&V) -> Option<&str>>,
}

impl<V, C> DependentSection<V, C> {
    /// Declares a top-level section.
    #[must_use]
    pub const fn new(
        id: SectionId,
        fields: &'static [FieldId],
        predicate: fn(&V, &C) -> bool,
        reset: fn(&mut V),
    ) -> Self {
        Self {
            id,
            parent: None,
            fields,
            predicate,
            reset,
            key: None,
        }
    }

    /// Nests the section within `parent`.
    ///
    /// The parent must be declared earlier in the same rule table.
    #[must_use]
    pub const fn within(mut self, parent: SectionId) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Also resets the section when `key` changes while it stays visible.
    ///
    /// Used where the section's options depend on a selection, e.g. work
    /// streams depend on which community is selected.
    #[must_use]
    pub const fn keyed_by(mut self, key: fn(&V) -> Option<&str>) -> Self {
        self.key = Some(key);
        self
    }

    /// Returns the section name.
    #[must_use]
    pub const fn id(&self) -> SectionId {
        self.id
    }

    /// Returns the enclosing section, if any.
    #[must_use]
    pub const fn parent(&self) -> Option<SectionId> {
        self.parent
    }

    /// Returns the fields owned by this section.
    #[must_use]
    pub const fn fields(&self) -> &'static [FieldId] {
        self.fields
    }

    fn key_of(&self, values: &V) -> Option<String> {
        self.key.and_then(|key| key(values).map(str::to_string))
    }
}

/// The set of sections visible for one set of values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Visibility {
    visible: BTreeSet<SectionId>,
}

impl Visibility {
    /// Returns true if the section is visible.
    #[must_use]
    pub fn is_visible(&self, section: SectionId) -> bool {
        self.visible.contains(section)
    }

    /// Iterates the visible sections in name order.
    pub fn iter(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.visible.iter().copied()
    }

    /// Returns the number of visible sections.
    #[must_use]
    pub fn len(&self) -> usize {
        self.visible.len()
    }

    /// Returns true if no section is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }
}

/// An ordered table of dependent sections for one form.
#[derive(Debug, Clone, Copy)]
pub struct SectionRules<V: 'static, C: 'static> {
    sections: &'static [DependentSection<V, C>],
}

impl<V, C> SectionRules<V, C> {
    /// Creates a rule table. Parents must precede their children.
    #[must_use]
    pub const fn new(sections: &'static [DependentSection<V, C>]) -> Self {
        Self { sections }
    }

    /// Returns the declared sections.
    #[must_use]
    pub const fn sections(&self) -> &'static [DependentSection<V, C>] {
        self.sections
    }

    /// Returns the section that owns `field`, if any.
    #[must_use]
    pub fn section_of(&self, field: FieldId) -> Option<SectionId> {
        self.sections
            .iter()
            .find(|section| section.fields.contains(&field))
            .map(DependentSection::id)
    }

    /// Returns true if `field` is shown under `visibility`.
    ///
    /// Fields outside every section are always shown.
    #[must_use]
    pub fn is_field_visible(&self, visibility: &Visibility, field: FieldId) -> bool {
        self.section_of(field)
            .is_none_or(|section| visibility.is_visible(section))
    }

    /// Derives which sections are visible for the given values.
    ///
    /// This is pure and always recomputed; nothing is cached between calls.
    pub fn compute_visibility(&self, values: &V, context: &C) -> Visibility {
        let mut visible: BTreeSet<SectionId> = BTreeSet::new();
        for section in self.sections {
            let parent_visible: bool = section
                .parent
                .is_none_or(|parent| visible.contains(parent));
            if parent_visible && (section.predicate)(values, context) {
                visible.insert(section.id);
            }
        }
        Visibility { visible }
    }

    /// Applies a change to the values and resets every section it hides.
    ///
    /// Sections that go from visible to hidden are reset, as are visible
    /// sections whose key changed. Resets may hide further sections; this
    /// repeats until the visibility is stable. Returns the sections reset,
    /// in reset order.
    pub fn apply_change<F>(&self, values: &mut V, context: &C, change: F) -> Vec<SectionId>
    where
        F: FnOnce(&mut V),
    {
        let before: Visibility = self.compute_visibility(values, context);
        let keys_before: Vec<Option<String>> = self
            .sections
            .iter()
            .map(|section| section.key_of(values))
            .collect();

        change(values);

        let mut reset: Vec<SectionId> = Vec::new();

        // Rule: a section that stays visible is reset when its key changes
        let after: Visibility = self.compute_visibility(values, context);
        for (section, key_before) in self.sections.iter().zip(keys_before) {
            if before.is_visible(section.id)
                && after.is_visible(section.id)
                && section.key.is_some()
                && section.key_of(values) != key_before
            {
                Self::reset_section(section, values, &mut reset);
            }
        }

        // Rule: a section that was visible and is now hidden is reset
        loop {
            let current: Visibility = self.compute_visibility(values, context);
            let newly_hidden: Vec<&DependentSection<V, C>> = self
                .sections
                .iter()
                .filter(|section| {
                    before.is_visible(section.id)
                        && !current.is_visible(section.id)
                        && !reset.contains(&section.id)
                })
                .collect();
            if newly_hidden.is_empty() {
                break;
            }
            for section in newly_hidden {
                Self::reset_section(section, values, &mut reset);
            }
        }

        reset
    }

    /// Resets every section that is hidden for the current values.
    ///
    /// Run before validation and submission so hidden fields always carry
    /// their cleared defaults, whatever the editing history was.
    pub fn clear_hidden(&self, values: &mut V, context: &C) -> Vec<SectionId> {
        let mut reset: Vec<SectionId> = Vec::new();
        loop {
            let current: Visibility = self.compute_visibility(values, context);
            let hidden: Vec<&DependentSection<V, C>> = self
                .sections
                .iter()
                .filter(|section| !current.is_visible(section.id) && !reset.contains(&section.id))
                .collect();
            if hidden.is_empty() {
                break;
            }
            for section in hidden {
                Self::reset_section(section, values, &mut reset);
            }
        }
        reset
    }

    fn reset_section(
        section: &DependentSection<V, C>,
        values: &mut V,
        reset: &mut Vec<SectionId>,
    ) {
        debug!(section = section.id, fields = ?section.fields, "Resetting dependent section");
        (section.reset)(values);
        reset.push(section.id);
    }
}
