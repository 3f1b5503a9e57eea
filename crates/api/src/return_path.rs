// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Where to send the user after a successful save.

use url::form_urlencoded;

/// Query parameter naming an explicit return route.
pub const FROM_PARAM: &str = "from";

/// Query parameter naming the application being reviewed.
pub const APPLICATION_ID_PARAM: &str = "applicationId";

/// A resolved site-relative route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnPath(String);

impl ReturnPath {
    /// Resolves the return route from a URL query string.
    ///
    /// `from` wins when it is a site-relative path. Otherwise an
    /// `applicationId` leads back to that application's review page. With
    /// neither, `default` is used. A leading `?` on `query` is ignored.
    #[must_use]
    pub fn resolve(query: &str, default: &str) -> Self {
        let query: &str = query.strip_prefix('?').unwrap_or(query);
        let mut from: Option<String> = None;
        let mut application_id: Option<String> = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                FROM_PARAM if from.is_none() && is_site_relative(&value) => {
                    from = Some(value.into_owned());
                }
                APPLICATION_ID_PARAM if application_id.is_none() && !value.trim().is_empty() => {
                    application_id = Some(value.into_owned());
                }
                _ => {}
            }
        }

        from.or_else(|| {
            application_id.map(|id| {
                let encoded: String = form_urlencoded::byte_serialize(id.as_bytes()).collect();
                format!("/applications/{encoded}/review")
            })
        })
        .map_or_else(|| Self(default.to_string()), Self)
    }

    /// Returns the route.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ReturnPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

fn is_site_relative(path: &str) -> bool {
    path.starts_with('/') && !path.starts_with("//") && !path.starts_with("/\\")
}
