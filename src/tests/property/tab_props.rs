//! Property-based tests for `TabState`
//!
//! Tests invariants:
//! - Active key always belongs to `K::ALL`
//! - Rejected keys leave the active tab unchanged
//! - Cycling wraps around

use proptest::prelude::*;

use crate::core::tabs::{InvestorTab, IssuerTab, TabKey, TabState};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

#[derive(Debug, Clone)]
enum TabOp {
    Next,
    Prev,
    Index(usize),
    Key(String),
}

/// Keys from both dashboards plus arbitrary junk
fn arb_key() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("overview".to_string()),
        Just("investments".to_string()),
        Just("cards".to_string()),
        Just("listings".to_string()),
        Just("analytics".to_string()),
        Just("settings".to_string()),
        "[a-zA-Z]{0,12}",
    ]
}

fn arb_op() -> impl Strategy<Value = TabOp> {
    prop_oneof![
        Just(TabOp::Next),
        Just(TabOp::Prev),
        (0usize..6).prop_map(TabOp::Index),
        arb_key().prop_map(TabOp::Key),
    ]
}

fn apply<K: TabKey>(tabs: &mut TabState<K>, op: &TabOp) {
    match op {
        TabOp::Next => {
            tabs.next();
        }
        TabOp::Prev => {
            tabs.prev();
        }
        TabOp::Index(i) => {
            tabs.select_index(*i);
        }
        TabOp::Key(key) => {
            let _ = tabs.select_key(key);
        }
    }
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: whatever happens, the active key is a member of the set
    #[test]
    fn prop_active_always_in_set(ops in prop::collection::vec(arb_op(), 0..50)) {
        let mut investor = TabState::<InvestorTab>::default();
        let mut issuer = TabState::<IssuerTab>::default();
        for op in &ops {
            apply(&mut investor, op);
            apply(&mut issuer, op);
            prop_assert!(InvestorTab::ALL.contains(&investor.active()));
            prop_assert!(IssuerTab::ALL.contains(&issuer.active()));
        }
    }

    /// Property: a rejected key never changes the active tab
    #[test]
    fn prop_rejected_key_keeps_state(
        ops in prop::collection::vec(arb_op(), 0..20),
        key in arb_key()
    ) {
        let mut tabs = TabState::<InvestorTab>::default();
        for op in &ops {
            apply(&mut tabs, op);
        }
        let before = tabs.active();
        match tabs.select_key(&key) {
            Ok(selected) => {
                prop_assert_eq!(selected.key(), key.as_str());
                prop_assert_eq!(tabs.active(), selected);
            }
            Err(_) => prop_assert_eq!(tabs.active(), before),
        }
    }

    /// Property: next then prev returns to the start, len steps wrap
    #[test]
    fn prop_cycle_wraps(start in 0usize..3) {
        let mut tabs = TabState::<IssuerTab>::default();
        tabs.select_index(start);
        let origin = tabs.active();

        tabs.next();
        tabs.prev();
        prop_assert_eq!(tabs.active(), origin);

        for _ in 0..IssuerTab::ALL.len() {
            tabs.next();
        }
        prop_assert_eq!(tabs.active(), origin);
    }
}
