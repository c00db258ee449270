//! Fuzz target for completeness scoring
//!
//! # Invariants
//!
//! - Score stays within 0..=100
//! - Score equals 100 minus the weights of the missing attributes
//! - Level is derived from the score alone
//! - Scoring is idempotent

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vouch_core::{Level, ProfileRecord, completeness_score, missing_attributes};

#[derive(Debug, Arbitrary)]
struct Fields {
    name: String,
    bio: Option<String>,
    github_url: Option<String>,
    linkedin_url: Option<String>,
    instagram_url: Option<String>,
    profile_image: Option<String>,
}

fuzz_target!(|fields: Fields| {
    let record = ProfileRecord {
        id: 1,
        email: String::new(),
        name: fields.name,
        bio: fields.bio,
        github_url: fields.github_url,
        linkedin_url: fields.linkedin_url,
        instagram_url: fields.instagram_url,
        profile_image: fields.profile_image,
    };

    let score = completeness_score(&record);
    assert!(score.value() <= 100);

    let missing: u8 = missing_attributes(&record).into_iter().map(|a| a.weight()).sum();
    assert_eq!(score.value(), 100 - missing);

    assert_eq!(score.level(), Level::from_score(score.value()));
    assert_eq!(completeness_score(&record), score);
});
