// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Personal and contact details.

use crate::field::{FieldId, FieldKind, FieldSpec, FieldValue};
use crate::kind::FormKind;
use crate::model::{FormModel, MutationSpec, Reconcile, UPDATE_USER_AS_USER};
use crate::section::{SectionRules, Visibility};
use crate::validation::ValidationErrors;
use serde::{Deserialize, Serialize};
use talent_profile_domain::{
    ArmedForcesStatus, CitizenshipStatus, DomainError, Language, ProvinceOrTerritory, UserRecord,
    empty_to_none, validate_email, validate_telephone,
};

/// Field names.
pub mod fields {
    use crate::field::FieldId;

    pub const FIRST_NAME: FieldId = "firstName";
    pub const LAST_NAME: FieldId = "lastName";
    pub const EMAIL: FieldId = "email";
    pub const TELEPHONE: FieldId = "telephone";
    pub const PREFERRED_LANG: FieldId = "preferredLang";
    pub const PREFERRED_LANGUAGE_FOR_INTERVIEW: FieldId = "preferredLanguageForInterview";
    pub const PREFERRED_LANGUAGE_FOR_EXAM: FieldId = "preferredLanguageForExam";
    pub const CURRENT_PROVINCE: FieldId = "currentProvince";
    pub const CURRENT_CITY: FieldId = "currentCity";
    pub const CITIZENSHIP: FieldId = "citizenship";
    pub const ARMED_FORCES_STATUS: FieldId = "armedForcesStatus";
}

static FIELDS: [FieldSpec; 11] = [
    FieldSpec::required(fields::FIRST_NAME, FieldKind::Text),
    FieldSpec::required(fields::LAST_NAME, FieldKind::Text),
    FieldSpec::optional(fields::EMAIL, FieldKind::Text),
    FieldSpec::required(fields::TELEPHONE, FieldKind::Text),
    FieldSpec::required(fields::PREFERRED_LANG, FieldKind::Select),
    FieldSpec::required(fields::PREFERRED_LANGUAGE_FOR_INTERVIEW, FieldKind::Select),
    FieldSpec::required(fields::PREFERRED_LANGUAGE_FOR_EXAM, FieldKind::Select),
    FieldSpec::required(fields::CURRENT_PROVINCE, FieldKind::Select),
    FieldSpec::required(fields::CURRENT_CITY, FieldKind::Text),
    FieldSpec::required(fields::CITIZENSHIP, FieldKind::Select),
    FieldSpec::required(fields::ARMED_FORCES_STATUS, FieldKind::Select),
];

static RULES: SectionRules<AboutMe, ()> = SectionRules::new(&[]);

/// About Me form values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AboutMe {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub telephone: String,
    pub preferred_lang: Option<Language>,
    pub preferred_language_for_interview: Option<Language>,
    pub preferred_language_for_exam: Option<Language>,
    pub current_province: Option<ProvinceOrTerritory>,
    pub current_city: String,
    pub citizenship: Option<CitizenshipStatus>,
    pub armed_forces_status: Option<ArmedForcesStatus>,
}

/// The `UpdateUserAsUserInput` subset this form edits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutMePayload {
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub telephone: String,
    pub preferred_lang: Option<Language>,
    pub preferred_language_for_interview: Option<Language>,
    pub preferred_language_for_exam: Option<Language>,
    pub current_province: Option<ProvinceOrTerritory>,
    pub current_city: String,
    pub citizenship: Option<CitizenshipStatus>,
    pub armed_forces_status: Option<ArmedForcesStatus>,
}

impl FormModel for AboutMe {
    type Record = UserRecord;
    type Context = ();
    type Payload = AboutMePayload;

    const KIND: FormKind = FormKind::AboutMe;

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
            fields::FIRST_NAME => FieldValue::text(&self.first_name),
            fields::LAST_NAME => FieldValue::text(&self.last_name),
            fields::EMAIL => FieldValue::text(&self.email),
            fields::TELEPHONE => FieldValue::text(&self.telephone),
            fields::PREFERRED_LANG => FieldValue::selection(self.preferred_lang),
            fields::PREFERRED_LANGUAGE_FOR_INTERVIEW => {
                FieldValue::selection(self.preferred_language_for_interview)
            }
            fields::PREFERRED_LANGUAGE_FOR_EXAM => {
                FieldValue::selection(self.preferred_language_for_exam)
            }
            fields::CURRENT_PROVINCE => FieldValue::selection(self.current_province),
            fields::CURRENT_CITY => FieldValue::text(&self.current_city),
            fields::CITIZENSHIP => FieldValue::selection(self.citizenship),
            fields::ARMED_FORCES_STATUS => FieldValue::selection(self.armed_forces_status),
            _ => FieldValue::Unset,
        }
    }

    fn from_record(record: &UserRecord, _context: &()) -> Self {
        Self {
            first_name: record.first_name.clone().unwrap_or_default(),
            last_name: record.last_name.clone().unwrap_or_default(),
            email: record.email.clone().unwrap_or_default(),
            telephone: record.telephone.clone().unwrap_or_default(),
            preferred_lang: record.preferred_lang,
            preferred_language_for_interview: record.preferred_language_for_interview,
            preferred_language_for_exam: record.preferred_language_for_exam,
            current_province: record.current_province,
            current_city: record.current_city.clone().unwrap_or_default(),
            citizenship: record.citizenship,
            armed_forces_status: record.armed_forces_status,
        }
    }

    fn subject_id(record: &UserRecord) -> Option<String> {
        Some(record.id.clone())
    }

    fn to_submission(&self, _context: &()) -> Result<AboutMePayload, DomainError> {
        Ok(AboutMePayload {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: empty_to_none(&self.email),
            telephone: self.telephone.trim().to_string(),
            preferred_lang: self.preferred_lang,
            preferred_language_for_interview: self.preferred_language_for_interview,
            preferred_language_for_exam: self.preferred_language_for_exam,
            current_province: self.current_province,
            current_city: self.current_city.trim().to_string(),
            citizenship: self.citizenship,
            armed_forces_status: self.armed_forces_status,
        })
    }

    fn check(&self, _context: &(), _visibility: &Visibility, errors: &mut ValidationErrors) {
        if !self.telephone.trim().is_empty() {
            errors.check(fields::TELEPHONE, validate_telephone(self.telephone.trim()));
        }
        if !self.email.trim().is_empty() {
            errors.check(fields::EMAIL, validate_email(self.email.trim()));
        }
    }
}

impl Reconcile for AboutMe {
    fn reconcile(record: &mut UserRecord, payload: &AboutMePayload, _context: &()) {
        record.first_name = Some(payload.first_name.clone());
        record.last_name = Some(payload.last_name.clone());
        record.email.clone_from(&payload.email);
        record.telephone = Some(payload.telephone.clone());
        record.preferred_lang = payload.preferred_lang;
        record.preferred_language_for_interview = payload.preferred_language_for_interview;
        record.preferred_language_for_exam = payload.preferred_language_for_exam;
        record.current_province = payload.current_province;
        record.current_city = Some(payload.current_city.clone());
        record.citizenship = payload.citizenship;
        record.armed_forces_status = payload.armed_forces_status;
    }
}
