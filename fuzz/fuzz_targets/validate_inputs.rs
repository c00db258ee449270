//! Fuzz target for the form validators
//!
//! # Invariants
//!
//! - NEVER panic on arbitrary UTF-8 input
//! - Password verdict is the first failing rule, or none when every rule holds
//! - Whitespace-only names are rejected
//! - Empty social URLs are accepted

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use vouch_core::{
    SocialLink,
    validation::{
        PasswordRule, validate_email, validate_name, validate_password, validate_social_url,
    },
};

#[derive(Debug, Arbitrary)]
struct Inputs {
    name: String,
    email: String,
    password: String,
    url: String,
}

fuzz_target!(|inputs: Inputs| {
    let _ = validate_email(&inputs.email);

    if inputs.name.trim().is_empty() {
        assert!(validate_name(&inputs.name).is_err());
    }

    let first_failure = PasswordRule::ORDERED.into_iter().find(|rule| !rule.holds(&inputs.password));
    assert_eq!(validate_password(&inputs.password).err(), first_failure.map(PasswordRule::error));

    for link in SocialLink::ALL {
        let verdict = validate_social_url(link, &inputs.url);
        if inputs.url.is_empty() {
            assert!(verdict.is_ok());
        }
    }
});
