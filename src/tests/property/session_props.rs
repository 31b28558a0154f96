//! Property-based tests for `SessionController`
//!
//! Tests invariants:
//! - Active profile is always a known profile
//! - Selecting a known id makes exactly that element active
//! - Selecting an unknown id leaves the session untouched
//! - Before connect the selector always yields Landing

use proptest::prelude::*;

use crate::core::profile::{Profile, Role};
use crate::core::session::SessionController;
use crate::core::view::{select_view, RoleView, ViewDefaults};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

fn arb_role() -> impl Strategy<Value = Role> {
    prop_oneof![Just(Role::Investor), Just(Role::Issuer), Just(Role::Admin)]
}

/// 1..8 profiles with unique ids
fn arb_profiles() -> impl Strategy<Value = Vec<Profile>> {
    prop::collection::btree_set("[a-z0-9]{1,6}", 1..8).prop_flat_map(|ids| {
        let ids: Vec<String> = ids.into_iter().collect();
        let len = ids.len();
        prop::collection::vec(arb_role(), len).prop_map(move |roles| {
            ids.iter()
                .zip(roles)
                .map(|(id, role)| Profile::new(id.clone(), role, format!("Profile {id}")))
                .collect()
        })
    })
}

/// Selections drawn from the known ids or arbitrary strings
fn arb_selections(known: Vec<String>) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            prop::sample::select(known),
            "[A-Z]{1,4}".prop_map(String::from),
        ],
        0..30,
    )
}

fn arb_scenario() -> impl Strategy<Value = (Vec<Profile>, Vec<String>)> {
    arb_profiles().prop_flat_map(|profiles| {
        let known = profiles.iter().map(|p| p.id.to_string()).collect();
        let selections = arb_selections(known);
        (Just(profiles), selections)
    })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: selection resolves to the same element, or changes nothing
    #[test]
    fn prop_selection_is_exact_or_noop((profiles, selections) in arb_scenario()) {
        let mut session = SessionController::new(profiles).unwrap();
        for id in &selections {
            let before = session.active_profile().id.clone();
            let known_index = session.known_profiles().iter().position(|p| p.id.as_str() == id);

            match (session.select_profile(id), known_index) {
                (Ok(selected), Some(_)) => prop_assert_eq!(selected.id.as_str(), id.as_str()),
                (Err(_), None) => {}
                (result, index) => prop_assert!(false, "unexpected {:?} for index {:?}", result, index),
            }

            match known_index {
                Some(index) => prop_assert!(std::ptr::eq(
                    session.active_profile(),
                    &session.known_profiles()[index]
                )),
                None => prop_assert_eq!(&session.active_profile().id, &before),
            }
        }
    }

    /// Property: landing is the only view before connect
    #[test]
    fn prop_landing_until_connected((profiles, selections) in arb_scenario()) {
        let defaults = ViewDefaults::default();
        let mut session = SessionController::new(profiles).unwrap();
        for id in &selections {
            let _ = session.select_profile(id);
            prop_assert_eq!(select_view(&session.snapshot(), &defaults), RoleView::Landing);
        }

        session.connect();
        session.connect();
        prop_assert!(session.is_connected());
        let expected_landing = matches!(select_view(&session.snapshot(), &defaults), RoleView::Landing);
        prop_assert!(!expected_landing);
    }
}
