//! Profile completeness score and level.
//!
//! The score is a weighted presence count over six profile attributes. Each
//! attribute contributes its full weight when its value is a non-empty string
//! and nothing otherwise. The weights sum to exactly 100, which is checked at
//! compile time below, so the score is always in `0..=100`.

use std::fmt;

use crate::profile::{ProfileRecord, present};

/// A scored attribute of a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProfileAttribute {
    /// Display name.
    Name,
    /// Biography.
    Bio,
    /// Profile image.
    ProfileImage,
    /// GitHub URL.
    GitHub,
    /// LinkedIn URL.
    LinkedIn,
    /// Instagram URL.
    Instagram,
}

impl ProfileAttribute {
    /// Every scored attribute.
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Bio,
        Self::ProfileImage,
        Self::GitHub,
        Self::LinkedIn,
        Self::Instagram,
    ];

    /// Points contributed when the attribute is present.
    pub const fn weight(self) -> u8 {
        match self {
            Self::Name | Self::Bio => 20,
            Self::ProfileImage => 30,
            Self::GitHub | Self::LinkedIn | Self::Instagram => 10,
        }
    }

    /// Short label for UI hints.
    pub fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Bio => "bio",
            Self::ProfileImage => "profile image",
            Self::GitHub => "GitHub",
            Self::LinkedIn => "LinkedIn",
            Self::Instagram => "Instagram",
        }
    }

    /// Whether `record` has a non-empty value for this attribute.
    pub fn is_present(self, record: &ProfileRecord) -> bool {
        let value = match self {
            Self::Name => Some(record.name.as_str()),
            Self::Bio => record.bio.as_deref(),
            Self::ProfileImage => record.profile_image.as_deref(),
            Self::GitHub => record.github_url.as_deref(),
            Self::LinkedIn => record.linkedin_url.as_deref(),
            Self::Instagram => record.instagram_url.as_deref(),
        };
        present(value).is_some()
    }
}

// Adding an attribute means rebalancing the table, never exceeding 100.
const _: () = {
    let mut total: u32 = 0;
    let mut i = 0;
    while i < ProfileAttribute::ALL.len() {
        total += ProfileAttribute::ALL[i].weight() as u32;
        i += 1;
    }
    assert!(total == Score::MAX.0 as u32, "profile attribute weights must sum to 100");
};

/// Completeness score in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score(u8);

impl Score {
    /// Empty profile, or no profile loaded.
    pub const ZERO: Self = Self(0);
    /// Every attribute present.
    pub const MAX: Self = Self(100);

    /// Raw points.
    pub fn value(self) -> u8 {
        self.0
    }

    /// Level for this score.
    pub fn level(self) -> Level {
        Level::from_score(self.0)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sum the weights of every attribute present on `record`.
pub fn completeness_score(record: &ProfileRecord) -> Score {
    let points = ProfileAttribute::ALL
        .into_iter()
        .filter(|attribute| attribute.is_present(record))
        .map(ProfileAttribute::weight)
        .sum();
    Score(points)
}

/// Attributes absent from `record`, in table order.
pub fn missing_attributes(record: &ProfileRecord) -> Vec<ProfileAttribute> {
    ProfileAttribute::ALL.into_iter().filter(|attribute| !attribute.is_present(record)).collect()
}

/// Gamified level derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    /// Below 40.
    Bronze,
    /// 40 to 69.
    Silver,
    /// 70 to 99.
    Gold,
    /// Exactly 100.
    Platinum,
}

impl Level {
    /// Classify a score. Platinum needs exactly 100; the others are lower
    /// bounds, checked top-down.
    pub fn from_score(score: u8) -> Self {
        if score == Score::MAX.0 {
            Self::Platinum
        } else if score >= 70 {
            Self::Gold
        } else if score >= 40 {
            Self::Silver
        } else {
            Self::Bronze
        }
    }

    /// Display name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bronze => "Bronze",
            Self::Silver => "Silver",
            Self::Gold => "Gold",
            Self::Platinum => "Platinum",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> ProfileRecord {
        ProfileRecord { id: 1, email: "a@b.co".into(), ..ProfileRecord::default() }
    }

    #[test]
    fn name_and_image_score_fifty() {
        let profile = ProfileRecord {
            name: "A".into(),
            bio: Some(String::new()),
            profile_image: Some("x".into()),
            github_url: Some(String::new()),
            linkedin_url: Some(String::new()),
            instagram_url: Some(String::new()),
            ..record()
        };

        assert_eq!(completeness_score(&profile).value(), 50);
        assert_eq!(completeness_score(&profile).level(), Level::Silver);
    }

    #[test]
    fn full_profile_is_platinum() {
        let profile = ProfileRecord {
            name: "Ada".into(),
            bio: Some("hi".into()),
            profile_image: Some("/uploads/1.jpg".into()),
            github_url: Some("https://github.com/ada".into()),
            linkedin_url: Some("https://linkedin.com/in/ada".into()),
            instagram_url: Some("https://instagram.com/ada".into()),
            ..record()
        };

        assert_eq!(completeness_score(&profile), Score::MAX);
        assert_eq!(completeness_score(&profile).level(), Level::Platinum);
        assert!(missing_attributes(&profile).is_empty());
    }

    #[test]
    fn empty_profile_is_zero() {
        assert_eq!(completeness_score(&record()), Score::ZERO);
        assert_eq!(missing_attributes(&record()), ProfileAttribute::ALL.to_vec());
    }

    #[test]
    fn level_boundaries() {
        assert_eq!(Level::from_score(100), Level::Platinum);
        assert_eq!(Level::from_score(99), Level::Gold);
        assert_eq!(Level::from_score(70), Level::Gold);
        assert_eq!(Level::from_score(69), Level::Silver);
        assert_eq!(Level::from_score(40), Level::Silver);
        assert_eq!(Level::from_score(39), Level::Bronze);
        assert_eq!(Level::from_score(0), Level::Bronze);
    }

    #[test]
    fn levels_are_ordered() {
        assert!(Level::Bronze < Level::Silver);
        assert!(Level::Gold < Level::Platinum);
        assert_eq!(Level::Gold.to_string(), "Gold");
    }
}
