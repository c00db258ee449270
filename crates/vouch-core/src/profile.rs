//! Profile records exchanged with the profile service.
//!
//! The server owns [`ProfileRecord`]; the client only ever holds a transient
//! copy, replaced wholesale by each server response. [`ProfileUpdate`] is the
//! editable subset sent back on save.

use serde::{Deserialize, Serialize};

/// A user profile as returned by `GET /profile/me`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileRecord {
    /// Server-assigned identifier.
    pub id: i64,
    /// Account email.
    pub email: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Free-form biography.
    #[serde(default)]
    pub bio: Option<String>,
    /// GitHub profile URL.
    #[serde(default)]
    pub github_url: Option<String>,
    /// LinkedIn profile URL.
    #[serde(default)]
    pub linkedin_url: Option<String>,
    /// Instagram profile URL.
    #[serde(default)]
    pub instagram_url: Option<String>,
    /// Server-relative path of the profile image, e.g. `/uploads/7.jpg`.
    #[serde(default)]
    pub profile_image: Option<String>,
}

impl ProfileRecord {
    /// Editable fields of this record, with absent values as empty strings.
    pub fn to_update(&self) -> ProfileUpdate {
        ProfileUpdate {
            name: self.name.clone(),
            bio: self.bio.clone().unwrap_or_default(),
            github_url: self.github_url.clone().unwrap_or_default(),
            linkedin_url: self.linkedin_url.clone().unwrap_or_default(),
            instagram_url: self.instagram_url.clone().unwrap_or_default(),
        }
    }
}

/// Body of `PUT /profile/me`.
///
/// Blank fields are sent as empty strings rather than omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileUpdate {
    /// Display name.
    pub name: String,
    /// Biography.
    pub bio: String,
    /// GitHub profile URL.
    pub github_url: String,
    /// LinkedIn profile URL.
    pub linkedin_url: String,
    /// Instagram profile URL.
    pub instagram_url: String,
}

/// Returns `Some(value)` unless the field is absent or empty.
pub(crate) fn present(field: Option<&str>) -> Option<&str> {
    field.filter(|value| !value.is_empty())
}
