//! Property-based tests for display formatting and listing filters
//!
//! Tests invariants:
//! - Currency output groups the integer part in threes
//! - Gauge fill is bounded
//! - Filters only ever remove listings; return sort is descending

use proptest::prelude::*;

use crate::core::format;
use crate::core::listing_filter::{DurationFilter, ListingFilter, RiskFilter, SortOrder};
use crate::core::models::{MarketListing, MarketStatus, RiskLevel};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

fn arb_risk() -> impl Strategy<Value = RiskLevel> {
    prop_oneof![Just(RiskLevel::Low), Just(RiskLevel::Medium), Just(RiskLevel::High)]
}

fn arb_listing() -> impl Strategy<Value = MarketListing> {
    ("[a-z]{1,3}", "[A-Za-z ]{1,20}", 0.0f64..30.0, 1u32..60, arb_risk()).prop_map(
        |(id, title, return_rate, duration_months, risk)| MarketListing {
            id,
            title,
            return_rate,
            duration_months,
            risk,
            status: MarketStatus::Active,
            min_investment: 1_000.0,
        },
    )
}

fn arb_filter() -> impl Strategy<Value = ListingFilter> {
    (
        "[a-z]{0,3}",
        prop_oneof![
            Just(RiskFilter::All),
            arb_risk().prop_map(RiskFilter::Only),
        ],
        prop_oneof![
            Just(DurationFilter::All),
            Just(DurationFilter::Short),
            Just(DurationFilter::Medium),
            Just(DurationFilter::Long),
        ],
        prop_oneof![Just(SortOrder::Listed), Just(SortOrder::ReturnDesc)],
    )
        .prop_map(|(query, risk, duration, sort)| ListingFilter {
            query,
            risk,
            duration,
            sort,
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: whole amounts render as "$" plus comma-separated groups of three
    #[test]
    fn prop_currency_groups_thousands(value in 0u64..10_000_000_000) {
        let text = format::currency(value as f64);
        prop_assert!(text.starts_with('$'));
        let groups: Vec<&str> = text[1..].split(',').collect();
        prop_assert!(!groups[0].is_empty() && groups[0].len() <= 3);
        for group in &groups[1..] {
            prop_assert_eq!(group.len(), 3);
        }
        prop_assert_eq!(text[1..].replace(',', ""), value.to_string());
    }

    /// Property: gauge fill is always a valid percentage
    #[test]
    fn prop_gauge_bounded(apy in proptest::num::f64::ANY) {
        prop_assert!(format::apy_gauge_percent(apy) <= 100);
    }

    /// Property: filtering yields a subset and respects the sort
    #[test]
    fn prop_filter_subset_and_sorted(
        listings in prop::collection::vec(arb_listing(), 0..15),
        filter in arb_filter()
    ) {
        let visible = filter.apply(&listings);
        prop_assert!(visible.len() <= listings.len());
        for listing in &visible {
            prop_assert!(listings.iter().any(|l| std::ptr::eq(l, *listing)));
        }
        if filter.sort == SortOrder::ReturnDesc {
            for pair in visible.windows(2) {
                prop_assert!(pair[0].return_rate >= pair[1].return_rate);
            }
        }
    }
}
