// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::ReturnPath;

const DEFAULT: &str = "/profile";

#[test]
fn test_from_param_wins() {
    let path: ReturnPath = ReturnPath::resolve(
        "?from=%2Fapplications%2Fa1%2Freview&applicationId=a2",
        DEFAULT,
    );

    assert_eq!(path.as_str(), "/applications/a1/review");
}

#[test]
fn test_application_id_leads_to_review() {
    let path: ReturnPath = ReturnPath::resolve("applicationId=abc-123", DEFAULT);

    assert_eq!(path.to_string(), "/applications/abc-123/review");
}

#[test]
fn test_default_when_no_params() {
    assert_eq!(ReturnPath::resolve("", DEFAULT).as_str(), DEFAULT);
    assert_eq!(ReturnPath::resolve("?tab=skills", DEFAULT).as_str(), DEFAULT);
    assert_eq!(ReturnPath::resolve("applicationId=", DEFAULT).as_str(), DEFAULT);
}

#[test]
fn test_off_site_from_is_ignored() {
    assert_eq!(
        ReturnPath::resolve("from=https%3A%2F%2Fevil.example", DEFAULT).as_str(),
        DEFAULT
    );
    assert_eq!(
        ReturnPath::resolve("from=%2F%2Fevil.example&applicationId=a9", DEFAULT).as_str(),
        "/applications/a9/review"
    );
}
