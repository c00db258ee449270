//! Property tests for the completeness score.

use proptest::prelude::*;
use vouch_core::{Level, ProfileAttribute, ProfileRecord, completeness_score, missing_attributes};

fn field() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), Just(Some(String::new())), "[a-z/:.]{1,12}".prop_map(Some)]
}

prop_compose! {
    fn arb_profile()(
        name in prop_oneof![Just(String::new()), "[A-Za-z ]{1,12}"],
        bio in field(),
        github_url in field(),
        linkedin_url in field(),
        instagram_url in field(),
        profile_image in field(),
    ) -> ProfileRecord {
        ProfileRecord {
            id: 1,
            email: "a@b.co".into(),
            name,
            bio,
            github_url,
            linkedin_url,
            instagram_url,
            profile_image,
        }
    }
}

proptest! {
    #[test]
    fn prop_score_is_weighted_presence_sum(profile in arb_profile()) {
        let expected: u32 = ProfileAttribute::ALL
            .into_iter()
            .filter(|a| a.is_present(&profile))
            .map(|a| u32::from(a.weight()))
            .sum();

        let score = completeness_score(&profile);
        prop_assert_eq!(u32::from(score.value()), expected);
        prop_assert!(score.value() <= 100);
    }

    #[test]
    fn prop_score_is_idempotent(profile in arb_profile()) {
        prop_assert_eq!(completeness_score(&profile), completeness_score(&profile));
    }

    #[test]
    fn prop_missing_plus_present_is_total(profile in arb_profile()) {
        let missing: u32 =
            missing_attributes(&profile).into_iter().map(|a| u32::from(a.weight())).sum();
        prop_assert_eq!(missing + u32::from(completeness_score(&profile).value()), 100);
    }

    #[test]
    fn prop_level_is_monotonic(a in 0u8..=100, b in 0u8..=100) {
        if a <= b {
            prop_assert!(Level::from_score(a) <= Level::from_score(b));
        }
    }
}

#[test]
fn only_exact_hundred_is_platinum() {
    for score in 0u8..100 {
        assert_ne!(Level::from_score(score), Level::Platinum, "score {score}");
    }
    assert_eq!(Level::from_score(100), Level::Platinum);
}
