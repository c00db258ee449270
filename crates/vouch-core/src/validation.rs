//! Client-side field validation.
//!
//! One function per form field. Each returns a [`Validation`]: `Ok(())` when
//! the input is acceptable, or the [`ValidationError`] whose `Display` text is
//! the message shown next to the field.
//!
//! Validators are total: any string, including the empty string, produces a
//! result without panicking.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Result of validating a single field.
pub type Validation = Result<(), ValidationError>;

/// Minimum password length, counted in characters.
pub const MIN_PASSWORD_LEN: usize = 10;

/// Characters that satisfy the password special-character rule.
pub const PASSWORD_SPECIAL_CHARS: &str = "!@#$%^&*(),.?\":{}|<>_-+=;'";

/// Reason a field was rejected.
///
/// The `Display` output is the exact user-facing message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// Name is empty or whitespace.
    #[error("Name is required")]
    NameRequired,

    /// Email does not have an `x@y.z` shape.
    #[error("Invalid email address")]
    InvalidEmail,

    /// Password is shorter than [`MIN_PASSWORD_LEN`].
    #[error("Minimum 10 characters required")]
    PasswordTooShort,

    /// Password has no ASCII uppercase letter.
    #[error("Add an uppercase letter (A-Z)")]
    PasswordMissingUppercase,

    /// Password has no ASCII lowercase letter.
    #[error("Add a lowercase letter (a-z)")]
    PasswordMissingLowercase,

    /// Password has no ASCII digit.
    #[error("Add a number (0-9)")]
    PasswordMissingDigit,

    /// Password has none of [`PASSWORD_SPECIAL_CHARS`].
    #[error("Add a special character")]
    PasswordMissingSpecial,

    /// Password contains a space.
    #[error("No spaces allowed")]
    PasswordContainsSpace,

    /// GitHub profile URL does not match the expected shape.
    #[error("Please enter a valid GitHub profile URL.")]
    InvalidGithubUrl,

    /// LinkedIn profile URL does not match the expected shape.
    #[error("Please enter a valid LinkedIn profile URL.")]
    InvalidLinkedinUrl,

    /// Instagram profile URL does not match the expected shape.
    #[error("Please enter a valid Instagram profile URL.")]
    InvalidInstagramUrl,
}

#[allow(clippy::expect_used, reason = "literal patterns are checked by tests")]
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

#[allow(clippy::expect_used, reason = "literal patterns are checked by tests")]
static GITHUB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://(www\.)?github\.com/[a-zA-Z0-9_-]+/?$").expect("github pattern compiles")
});

#[allow(clippy::expect_used, reason = "literal patterns are checked by tests")]
static LINKEDIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://(www\.)?linkedin\.com/in/[a-zA-Z0-9_-]+/?$")
        .expect("linkedin pattern compiles")
});

#[allow(clippy::expect_used, reason = "literal patterns are checked by tests")]
static INSTAGRAM: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^https://(www\.)?instagram\.com/[a-zA-Z0-9_.]+/?$")
        .expect("instagram pattern compiles")
});

/// Validate a display name. Whitespace-only names are rejected.
pub fn validate_name(name: &str) -> Validation {
    if name.trim().is_empty() { Err(ValidationError::NameRequired) } else { Ok(()) }
}

/// Validate an email address.
///
/// Accepts any input containing `non-space@non-space.non-space`. This is a
/// shape check, not an RFC 5322 parser.
pub fn validate_email(email: &str) -> Validation {
    if EMAIL.is_match(email) { Ok(()) } else { Err(ValidationError::InvalidEmail) }
}

/// A single password-strength rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordRule {
    /// At least [`MIN_PASSWORD_LEN`] characters.
    MinLength,
    /// At least one ASCII uppercase letter.
    Uppercase,
    /// At least one ASCII lowercase letter.
    Lowercase,
    /// At least one ASCII digit.
    Digit,
    /// At least one of [`PASSWORD_SPECIAL_CHARS`].
    Special,
    /// No space characters.
    NoSpace,
}

impl PasswordRule {
    /// Rules in evaluation order. Only the first violation is reported.
    pub const ORDERED: [Self; 6] = [
        Self::MinLength,
        Self::Uppercase,
        Self::Lowercase,
        Self::Digit,
        Self::Special,
        Self::NoSpace,
    ];

    /// Whether `password` satisfies this rule.
    pub fn holds(self, password: &str) -> bool {
        match self {
            Self::MinLength => password.chars().count() >= MIN_PASSWORD_LEN,
            Self::Uppercase => password.chars().any(|c| c.is_ascii_uppercase()),
            Self::Lowercase => password.chars().any(|c| c.is_ascii_lowercase()),
            Self::Digit => password.chars().any(|c| c.is_ascii_digit()),
            Self::Special => password.chars().any(|c| PASSWORD_SPECIAL_CHARS.contains(c)),
            Self::NoSpace => !password.contains(' '),
        }
    }

    /// Error reported when this rule is the first one violated.
    pub fn error(self) -> ValidationError {
        match self {
            Self::MinLength => ValidationError::PasswordTooShort,
            Self::Uppercase => ValidationError::PasswordMissingUppercase,
            Self::Lowercase => ValidationError::PasswordMissingLowercase,
            Self::Digit => ValidationError::PasswordMissingDigit,
            Self::Special => ValidationError::PasswordMissingSpecial,
            Self::NoSpace => ValidationError::PasswordContainsSpace,
        }
    }
}

/// Validate password strength against [`PasswordRule::ORDERED`].
///
/// Evaluation short-circuits on the first violated rule so the user sees one
/// message at a time.
pub fn validate_password(password: &str) -> Validation {
    match PasswordRule::ORDERED.into_iter().find(|rule| !rule.holds(password)) {
        Some(rule) => Err(rule.error()),
        None => Ok(()),
    }
}

/// Social profile fields on a profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SocialLink {
    /// `https://github.com/<user>`
    GitHub,
    /// `https://linkedin.com/in/<user>`
    LinkedIn,
    /// `https://instagram.com/<user>`
    Instagram,
}

impl SocialLink {
    /// All links, in the order they are validated on save.
    pub const ALL: [Self; 3] = [Self::GitHub, Self::LinkedIn, Self::Instagram];

    /// Human-readable field label.
    pub fn label(self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::LinkedIn => "LinkedIn",
            Self::Instagram => "Instagram",
        }
    }

    fn pattern(self) -> &'static Regex {
        match self {
            Self::GitHub => &GITHUB,
            Self::LinkedIn => &LINKEDIN,
            Self::Instagram => &INSTAGRAM,
        }
    }

    fn error(self) -> ValidationError {
        match self {
            Self::GitHub => ValidationError::InvalidGithubUrl,
            Self::LinkedIn => ValidationError::InvalidLinkedinUrl,
            Self::Instagram => ValidationError::InvalidInstagramUrl,
        }
    }
}

/// Validate a social profile URL. Empty input is valid; the field is optional.
pub fn validate_social_url(link: SocialLink, url: &str) -> Validation {
    if url.is_empty() || link.pattern().is_match(url) { Ok(()) } else { Err(link.error()) }
}

/// Validate a GitHub profile URL.
pub fn validate_github_url(url: &str) -> Validation {
    validate_social_url(SocialLink::GitHub, url)
}

/// Validate a LinkedIn profile URL.
pub fn validate_linkedin_url(url: &str) -> Validation {
    validate_social_url(SocialLink::LinkedIn, url)
}

/// Validate an Instagram profile URL.
pub fn validate_instagram_url(url: &str) -> Validation {
    validate_social_url(SocialLink::Instagram, url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shape() {
        assert_eq!(validate_email("a@b.co"), Ok(()));
        assert_eq!(validate_email("not-an-email"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email(""), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a@b"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn email_match_is_unanchored() {
        assert_eq!(validate_email("  mail me at a@b.co please"), Ok(()));
    }

    #[test]
    fn name_requires_non_whitespace() {
        assert_eq!(validate_name("Ada"), Ok(()));
        assert_eq!(validate_name(""), Err(ValidationError::NameRequired));
        assert_eq!(validate_name(" \t "), Err(ValidationError::NameRequired));
    }

    #[test]
    fn password_examples() {
        assert_eq!(validate_password("short"), Err(ValidationError::PasswordTooShort));
        assert_eq!(
            validate_password("alllowercase1!"),
            Err(ValidationError::PasswordMissingUppercase)
        );
        assert_eq!(
            validate_password("ALLUPPERCASE1!"),
            Err(ValidationError::PasswordMissingLowercase)
        );
        assert_eq!(validate_password("NoDigitsHere!"), Err(ValidationError::PasswordMissingDigit));
        assert_eq!(validate_password("NoSpecial123"), Err(ValidationError::PasswordMissingSpecial));
        assert_eq!(validate_password("Valid Pass1!"), Err(ValidationError::PasswordContainsSpace));
        assert_eq!(validate_password("ValidPass123!"), Ok(()));
    }

    #[test]
    fn password_length_counts_characters() {
        // 9 characters, 11 bytes
        assert_eq!(validate_password("Ünïcod1!A"), Err(ValidationError::PasswordTooShort));
        assert_eq!(validate_password("Ünïcode1!A"), Ok(()));
    }

    #[test]
    fn every_listed_special_char_counts() {
        for c in PASSWORD_SPECIAL_CHARS.chars() {
            let password = format!("Abcdefgh1{c}");
            assert_eq!(validate_password(&password), Ok(()), "special char {c:?}");
        }
    }

    #[test]
    fn brackets_are_not_special() {
        assert_eq!(validate_password("Abcdefgh1["), Err(ValidationError::PasswordMissingSpecial));
        assert_eq!(validate_password("Abcdefgh1/"), Err(ValidationError::PasswordMissingSpecial));
    }

    #[test]
    fn social_urls() {
        for link in SocialLink::ALL {
            assert_eq!(validate_social_url(link, ""), Ok(()));
        }

        assert_eq!(validate_github_url("https://github.com/alice"), Ok(()));
        assert_eq!(validate_github_url("https://www.github.com/alice/"), Ok(()));
        assert_eq!(
            validate_github_url("https://github.com/alice/extra"),
            Err(ValidationError::InvalidGithubUrl)
        );
        assert_eq!(
            validate_github_url("http://github.com/alice"),
            Err(ValidationError::InvalidGithubUrl)
        );

        assert_eq!(validate_linkedin_url("https://linkedin.com/in/alice-b_1"), Ok(()));
        assert_eq!(
            validate_linkedin_url("https://linkedin.com/alice"),
            Err(ValidationError::InvalidLinkedinUrl)
        );

        assert_eq!(validate_instagram_url("https://instagram.com/alice.b_"), Ok(()));
        assert_eq!(
            validate_instagram_url("https://instagram.com/alice-b"),
            Err(ValidationError::InvalidInstagramUrl)
        );
    }

    #[test]
    fn messages_match_field() {
        assert_eq!(
            ValidationError::InvalidLinkedinUrl.to_string(),
            "Please enter a valid LinkedIn profile URL."
        );
        assert_eq!(ValidationError::PasswordTooShort.to_string(), "Minimum 10 characters required");
    }
}
