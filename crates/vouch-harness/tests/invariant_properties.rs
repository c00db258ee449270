//! Property-based tests driving the full runtime.
//!
//! Random keystrokes, pauses, and injected service faults are run through the
//! production [`Runtime`] against the simulated service. The invariant
//! registry is checked on every render, so any routing or scoring violation
//! surfaces as a runtime error.

use proptest::prelude::*;
use vouch_app::{KeyInput, Runtime};
use vouch_client::ApiError;
use vouch_core::{SessionStore, SocialLink, validation::validate_social_url};
use vouch_harness::{
    Endpoint, InvariantRegistry, Script, SimBackend, SimDriver, SimDriverError, SimRequest,
};

const EMAIL: &str = "ada@example.com";
const PASSWORD: &str = "Str0ng!Pass";

#[derive(Debug, Clone)]
enum Action {
    Key(KeyInput),
    Settle,
}

fn key_strategy() -> impl Strategy<Value = KeyInput> {
    prop_oneof![
        6 => prop::sample::select(vec!['a', 'Q', '7', '#', '@', '.', '/', ':']).prop_map(KeyInput::Char),
        3 => Just(KeyInput::Enter),
        3 => Just(KeyInput::Tab),
        2 => Just(KeyInput::BackTab),
        1 => Just(KeyInput::Backspace),
        1 => Just(KeyInput::Left),
        1 => Just(KeyInput::End),
    ]
}

fn action_strategy() -> impl Strategy<Value = Action> {
    prop_oneof![
        8 => key_strategy().prop_map(Action::Key),
        1 => Just(Action::Settle),
    ]
}

fn fault_strategy() -> impl Strategy<Value = Option<(Endpoint, ApiError)>> {
    let endpoint = prop::sample::select(vec![
        Endpoint::Login,
        Endpoint::Signup,
        Endpoint::FetchProfile,
        Endpoint::UpdateProfile,
        Endpoint::UploadImage,
    ]);
    let error = prop_oneof![
        Just(ApiError::Unauthorized),
        Just(ApiError::Network("reset".into())),
        Just(ApiError::Status { status: 500, message: None }),
    ];
    prop::option::of((endpoint, error))
}

fn run_script(backend: &SimBackend, script: Script) -> Result<SimDriver, SimDriverError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .start_paused(true)
        .build()
        .unwrap();

    let driver =
        SimDriver::new().with_invariants(InvariantRegistry::standard()).with_script(script);
    let recorder = driver.clone();

    runtime.block_on(Runtime::new(driver, backend.clone(), SessionStore::new()).run())?;
    Ok(recorder)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_invariants_hold_under_random_input(
        logged_in in any::<bool>(),
        fault in fault_strategy(),
        actions in prop::collection::vec(action_strategy(), 0..60),
    ) {
        let backend = SimBackend::new();
        backend.register("Ada", EMAIL, PASSWORD).unwrap();
        if let Some((endpoint, error)) = fault {
            backend.fail_next_on(endpoint, error);
        }

        let mut script = if logged_in { Script::new().login(EMAIL, PASSWORD) } else { Script::new() };
        for action in actions {
            script = match action {
                Action::Key(key) => script.key(key),
                Action::Settle => script.settle(),
            };
        }

        let driver = run_script(&backend, script);
        prop_assert!(driver.is_ok(), "run failed: {:?}", driver.err());
    }

    #[test]
    fn prop_invalid_urls_never_reach_server(
        actions in prop::collection::vec(action_strategy(), 0..40),
    ) {
        let backend = SimBackend::new();
        backend.register("Ada", EMAIL, PASSWORD).unwrap();

        let mut script = Script::new().login(EMAIL, PASSWORD);
        for action in actions {
            script = match action {
                Action::Key(key) => script.key(key),
                Action::Settle => script.settle(),
            };
        }
        run_script(&backend, script).unwrap();

        for request in backend.requests() {
            if let SimRequest::UpdateProfile(update) = request {
                for (link, url) in [
                    (SocialLink::GitHub, &update.github_url),
                    (SocialLink::LinkedIn, &update.linkedin_url),
                    (SocialLink::Instagram, &update.instagram_url),
                ] {
                    prop_assert!(validate_social_url(link, url).is_ok(), "{} sent: {:?}", link.label(), url);
                }
            }
        }
    }
}
