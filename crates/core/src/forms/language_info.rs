// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Considered position languages and second-language evaluation.

use crate::field::{FieldId, FieldKind, FieldSpec, FieldValue};
use crate::kind::FormKind;
use crate::model::{FormModel, MutationSpec, Reconcile, UPDATE_USER_AS_USER};
use crate::section::{DependentSection, SectionRules};
use serde::{Deserialize, Serialize};
use talent_profile_domain::{
    BilingualEvaluation, ConsideredPositionLanguage, DomainError, EstimatedLanguageAbility,
    EvaluatedLanguageAbility, UserRecord,
};

/// Field names.
pub mod fields {
    use crate::field::FieldId;

    pub const CONSIDERED_POSITION_LANGUAGES: FieldId = "consideredPositionLanguages";
    pub const BILINGUAL_EVALUATION: FieldId = "bilingualEvaluation";
    pub const COMPREHENSION_LEVEL: FieldId = "comprehensionLevel";
    pub const WRITTEN_LEVEL: FieldId = "writtenLevel";
    pub const VERBAL_LEVEL: FieldId = "verbalLevel";
    pub const ESTIMATED_LANGUAGE_ABILITY: FieldId = "estimatedLanguageAbility";
}

/// Section names.
pub mod sections {
    use crate::section::SectionId;

    pub const BILINGUAL: SectionId = "bilingual";
    pub const EVALUATION_RESULTS: SectionId = "evaluationResults";
    pub const ESTIMATED_ABILITY: SectionId = "estimatedAbility";
}

static FIELDS: [FieldSpec; 6] = [
    FieldSpec::required(fields::CONSIDERED_POSITION_LANGUAGES, FieldKind::Checklist),
    FieldSpec::required(fields::BILINGUAL_EVALUATION, FieldKind::Select),
    FieldSpec::required(fields::COMPREHENSION_LEVEL, FieldKind::Select),
    FieldSpec::required(fields::WRITTEN_LEVEL, FieldKind::Select),
    FieldSpec::required(fields::VERBAL_LEVEL, FieldKind::Select),
    FieldSpec::required(fields::ESTIMATED_LANGUAGE_ABILITY, FieldKind::Select),
];

static RULES: SectionRules<LanguageInfo, ()> = SectionRules::new(&[
    DependentSection::new(
        sections::BILINGUAL,
        &[fields::BILINGUAL_EVALUATION],
        is_looking_for_bilingual,
        reset_bilingual,
    ),
    DependentSection::new(
        sections::EVALUATION_RESULTS,
        &[
            fields::COMPREHENSION_LEVEL,
            fields::WRITTEN_LEVEL,
            fields::VERBAL_LEVEL,
        ],
        has_completed_evaluation,
        reset_evaluation_results,
    )
    .within(sections::BILINGUAL),
    DependentSection::new(
        sections::ESTIMATED_ABILITY,
        &[fields::ESTIMATED_LANGUAGE_ABILITY],
        has_not_completed_evaluation,
        reset_estimated_ability,
    )
    .within(sections::BILINGUAL),
]);

fn is_looking_for_bilingual(values: &LanguageInfo, (): &()) -> bool {
    values.is_considering(ConsideredPositionLanguage::LookingForBilingual)
}

fn has_completed_evaluation(values: &LanguageInfo, (): &()) -> bool {
    values
        .bilingual_evaluation
        .is_some_and(BilingualEvaluation::is_completed)
}

fn has_not_completed_evaluation(values: &LanguageInfo, (): &()) -> bool {
    values.bilingual_evaluation == Some(BilingualEvaluation::NotCompleted)
}

fn reset_bilingual(values: &mut LanguageInfo) {
    values.bilingual_evaluation = None;
}

fn reset_evaluation_results(values: &mut LanguageInfo) {
    values.comprehension_level = None;
    values.written_level = None;
    values.verbal_level = None;
}

fn reset_estimated_ability(values: &mut LanguageInfo) {
    values.estimated_language_ability = None;
}

/// Language information form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LanguageInfo {
    pub considered_position_languages: Vec<ConsideredPositionLanguage>,
    pub bilingual_evaluation: Option<BilingualEvaluation>,
    pub comprehension_level: Option<EvaluatedLanguageAbility>,
    pub written_level: Option<EvaluatedLanguageAbility>,
    pub verbal_level: Option<EvaluatedLanguageAbility>,
    pub estimated_language_ability: Option<EstimatedLanguageAbility>,
}

impl LanguageInfo {
    fn is_considering(&self, language: ConsideredPositionLanguage) -> bool {
        self.considered_position_languages.contains(&language)
    }
}

/// The `UpdateUserAsUserInput` subset this form edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInfoPayload {
    pub looking_for_english: bool,
    pub looking_for_french: bool,
    pub looking_for_bilingual: bool,
    pub bilingual_evaluation: Option<BilingualEvaluation>,
    pub comprehension_level: Option<EvaluatedLanguageAbility>,
    pub written_level: Option<EvaluatedLanguageAbility>,
    pub verbal_level: Option<EvaluatedLanguageAbility>,
    pub estimated_language_ability: Option<EstimatedLanguageAbility>,
}

impl FormModel for LanguageInfo {
    type Record = UserRecord;
    type Context = ();
    type Payload = LanguageInfoPayload;

    const KIND: FormKind = FormKind::LanguageInfo;

    fn mutation(&self) -> MutationSpec {
        UPDATE_USER_AS_USER
    }

    fn fields() -> &'static [FieldSpec] {
        &FIELDS
    }

    fn rules() -> &'static SectionRules<Self, ()> {
        &RULES
    }

    fn value(&self, field: FieldId) -> FieldValue {
        match field {
            fields::CONSIDERED_POSITION_LANGUAGES => {
                FieldValue::list(&self.considered_position_languages)
            }
            fields::BILINGUAL_EVALUATION => FieldValue::selection(self.bilingual_evaluation),
            fields::COMPREHENSION_LEVEL => FieldValue::selection(self.comprehension_level),
            fields::WRITTEN_LEVEL => FieldValue::selection(self.written_level),
            fields::VERBAL_LEVEL => FieldValue::selection(self.verbal_level),
            fields::ESTIMATED_LANGUAGE_ABILITY => {
                FieldValue::selection(self.estimated_language_ability)
            }
            _ => FieldValue::Unset,
        }
    }

    fn from_record(record: &UserRecord, (): &()) -> Self {
        let considered: [(Option<bool>, ConsideredPositionLanguage); 3] = [
            (
                record.looking_for_english,
                ConsideredPositionLanguage::LookingForEnglish,
            ),
            (
                record.looking_for_french,
                ConsideredPositionLanguage::LookingForFrench,
            ),
            (
                record.looking_for_bilingual,
                ConsideredPositionLanguage::LookingForBilingual,
            ),
        ];
        Self {
            considered_position_languages: considered
                .into_iter()
                .filter(|(flag, _)| flag.unwrap_or(false))
                .map(|(_, language)| language)
                .collect(),
            bilingual_evaluation: Some(
                record
                    .bilingual_evaluation
                    .unwrap_or(BilingualEvaluation::CompletedEnglish),
            ),
            comprehension_level: record.comprehension_level,
            written_level: record.written_level,
            verbal_level: record.verbal_level,
            estimated_language_ability: record.estimated_language_ability,
        }
    }

    fn subject_id(record: &UserRecord) -> Option<String> {
        Some(record.id.clone())
    }

    fn to_submission(&self, (): &()) -> Result<LanguageInfoPayload, DomainError> {
        Ok(LanguageInfoPayload {
            looking_for_english: self.is_considering(ConsideredPositionLanguage::LookingForEnglish),
            looking_for_french: self.is_considering(ConsideredPositionLanguage::LookingForFrench),
            looking_for_bilingual: self
                .is_considering(ConsideredPositionLanguage::LookingForBilingual),
            bilingual_evaluation: self.bilingual_evaluation,
            comprehension_level: self.comprehension_level,
            written_level: self.written_level,
            verbal_level: self.verbal_level,
            estimated_language_ability: self.estimated_language_ability,
        })
    }
}

impl Reconcile for LanguageInfo {
    fn reconcile(record: &mut UserRecord, payload: &LanguageInfoPayload, (): &()) {
        record.looking_for_english = Some(payload.looking_for_english);
        record.looking_for_french = Some(payload.looking_for_french);
        record.looking_for_bilingual = Some(payload.looking_for_bilingual);
        record.bilingual_evaluation = payload.bilingual_evaluation;
        record.comprehension_level = payload.comprehension_level;
        record.written_level = payload.written_level;
        record.verbal_level = payload.verbal_level;
        record.estimated_language_ability = payload.estimated_language_ability;
    }
}
