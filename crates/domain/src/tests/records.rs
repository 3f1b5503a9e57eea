// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{
    AwardedTo, Classification, Community, EducationType, ExperienceRecord, ExperienceType,
    NOT_AVAILABLE, UserRecord, localized_or_not_available,
};
use time::macros::date;

#[test]
fn test_localized_name_falls_back_to_not_available() {
    assert_eq!(localized_or_not_available(Some("Finance")), "Finance");
    assert_eq!(localized_or_not_available(Some("  ")), NOT_AVAILABLE);
    assert_eq!(localized_or_not_available(None), NOT_AVAILABLE);
}

#[test]
fn test_classification_display_name() {
    let classification: Classification = Classification::new("c1", "IT", 1);
    assert_eq!(classification.display_name(), "IT-01");
}

#[test]
fn test_user_record_tolerates_missing_fields() {
    let record: UserRecord = serde_json::from_str(r#"{"id":"u1","isGovEmployee":null}"#).unwrap();
    assert_eq!(record.id, "u1");
    assert_eq!(record.is_gov_employee, None);
    assert_eq!(record.department, None);
}

#[test]
fn test_community_finance_key() {
    let community: Community =
        serde_json::from_str(r#"{"id":"c1","key":"finance","workStreams":[{"id":"ws1"}]}"#)
            .unwrap();
    assert!(community.is_finance());
    assert_eq!(community.work_streams.len(), 1);
    assert!(community.development_programs.is_empty());
}

#[test]
fn test_experience_record_dates_use_iso_format() {
    let record: ExperienceRecord = serde_json::from_str(
        r#"{"userId":"u1","experienceType":"work","startDate":"2021-03-15","endDate":null}"#,
    )
    .unwrap();
    assert_eq!(record.experience_type, Some(ExperienceType::Work));
    assert_eq!(record.start_date, Some(date!(2021 - 03 - 15)));
    assert_eq!(record.end_date, None);

    let json: serde_json::Value = serde_json::to_value(&record).unwrap();
    assert_eq!(json["startDate"], "2021-03-15");
}

#[test]
fn test_experience_record_reads_type_specific_fields() {
    let record: ExperienceRecord = serde_json::from_str(
        r#"{
            "experienceType": "education",
            "type": "MASTERS_DEGREE",
            "awardedTo": "MY_TEAM",
            "skills": [{ "id": "skill-1", "details": "Led the analysis" }]
        }"#,
    )
    .unwrap();

    assert_eq!(record.education_type, Some(EducationType::MastersDegree));
    assert_eq!(record.awarded_to, Some(AwardedTo::MyTeam));
    assert_eq!(record.skills.len(), 1);
    assert_eq!(record.skills[0].details.as_deref(), Some("Led the analysis"));
    assert!(record.id.is_none());
}
