//! Single-active-key tab state shared by both dashboard composers.
//!
//! Each composer declares its closed key set as an enum implementing
//! [`TabKey`]; [`TabState`] does the bookkeeping once.

use std::fmt::Debug;

use super::error::{CoreError, Result};

/// A closed set of tab keys. `ALL` is ordered; its first entry is the default.
pub trait TabKey: Copy + Eq + Debug + 'static {
    const ALL: &'static [Self];

    /// Wire key, e.g. `"overview"`.
    fn key(self) -> &'static str;

    /// Human label shown in the tab strip.
    fn label(self) -> &'static str;

    fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|k| k.key() == key)
    }

    fn allowed_keys() -> Vec<&'static str> {
        Self::ALL.iter().map(|k| k.key()).collect()
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|&k| k == self).unwrap_or(0)
    }
}

/// Exactly one active key out of `K::ALL`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabState<K: TabKey> {
    active: K,
}

impl<K: TabKey> Default for TabState<K> {
    fn default() -> Self {
        Self { active: K::ALL[0] }
    }
}

impl<K: TabKey> TabState<K> {
    pub fn new(initial: K) -> Self {
        Self { active: initial }
    }

    /// Resolve an optional caller-supplied key, falling back to the first tab.
    pub fn from_override(key: Option<&str>) -> Result<Self> {
        match key {
            None => Ok(Self::default()),
            Some(key) => resolve::<K>(key).map(Self::new),
        }
    }

    pub fn active(&self) -> K {
        self.active
    }

    pub fn select(&mut self, key: K) {
        self.active = key;
    }

    /// Select by wire key; unknown keys leave the active tab unchanged.
    pub fn select_key(&mut self, key: &str) -> Result<K> {
        let resolved = resolve::<K>(key)?;
        self.active = resolved;
        Ok(resolved)
    }

    /// Select by zero-based position; out-of-range positions are ignored.
    pub fn select_index(&mut self, index: usize) -> Option<K> {
        let key = K::ALL.get(index).copied()?;
        self.active = key;
        Some(key)
    }

    pub fn next(&mut self) -> K {
        let len = K::ALL.len();
        self.active = K::ALL[(self.active.position() + 1) % len];
        self.active
    }

    pub fn prev(&mut self) -> K {
        let len = K::ALL.len();
        self.active = K::ALL[(self.active.position() + len - 1) % len];
        self.active
    }
}

fn resolve<K: TabKey>(key: &str) -> Result<K> {
    K::from_key(key).ok_or_else(|| CoreError::UnknownTab {
        key: key.to_string(),
        allowed: K::allowed_keys(),
    })
}

// ── Composer key sets ──────────────────────────────────────────────────────

/// Investor dashboard sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InvestorTab {
    Overview,
    Investments,
    Cards,
}

impl TabKey for InvestorTab {
    const ALL: &'static [Self] = &[Self::Overview, Self::Investments, Self::Cards];

    fn key(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Investments => "investments",
            Self::Cards => "cards",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Investments => "Investments",
            Self::Cards => "Cards",
        }
    }
}

/// Issuer dashboard sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssuerTab {
    Listings,
    Analytics,
    Settings,
}

impl TabKey for IssuerTab {
    const ALL: &'static [Self] = &[Self::Listings, Self::Analytics, Self::Settings];

    fn key(self) -> &'static str {
        match self {
            Self::Listings => "listings",
            Self::Analytics => "analytics",
            Self::Settings => "settings",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Self::Listings => "Listings",
            Self::Analytics => "Analytics",
            Self::Settings => "Settings",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_defaults_are_first_listed() {
        assert_eq!(TabState::<InvestorTab>::default().active(), InvestorTab::Overview);
        assert_eq!(TabState::<IssuerTab>::default().active(), IssuerTab::Listings);
    }

    #[rstest]
    #[case("overview", InvestorTab::Overview)]
    #[case("investments", InvestorTab::Investments)]
    #[case("cards", InvestorTab::Cards)]
    fn test_investor_select_key(#[case] key: &str, #[case] expected: InvestorTab) {
        let mut tabs = TabState::<InvestorTab>::default();
        assert_eq!(tabs.select_key(key).unwrap(), expected);
        assert_eq!(tabs.active(), expected);
    }

    #[rstest]
    #[case("listings", IssuerTab::Listings)]
    #[case("analytics", IssuerTab::Analytics)]
    #[case("settings", IssuerTab::Settings)]
    fn test_issuer_select_key(#[case] key: &str, #[case] expected: IssuerTab) {
        let mut tabs = TabState::<IssuerTab>::default();
        assert_eq!(tabs.select_key(key).unwrap(), expected);
        assert_eq!(tabs.active(), expected);
    }

    #[rstest]
    #[case("settings")]
    #[case("Overview")]
    #[case("")]
    fn test_investor_rejects_foreign_keys(#[case] key: &str) {
        let mut tabs = TabState::new(InvestorTab::Cards);
        let err = tabs.select_key(key).unwrap_err();
        assert_eq!(
            err,
            CoreError::UnknownTab {
                key: key.to_string(),
                allowed: vec!["overview", "investments", "cards"],
            }
        );
        assert_eq!(tabs.active(), InvestorTab::Cards);
    }

    #[test]
    fn test_next_prev_wrap() {
        let mut tabs = TabState::<IssuerTab>::default();
        assert_eq!(tabs.prev(), IssuerTab::Settings);
        assert_eq!(tabs.next(), IssuerTab::Listings);
        assert_eq!(tabs.next(), IssuerTab::Analytics);
    }

    #[test]
    fn test_select_index_out_of_range_ignored() {
        let mut tabs = TabState::<InvestorTab>::default();
        assert_eq!(tabs.select_index(2), Some(InvestorTab::Cards));
        assert_eq!(tabs.select_index(3), None);
        assert_eq!(tabs.active(), InvestorTab::Cards);
    }

    #[test]
    fn test_from_override() {
        let tabs = TabState::<IssuerTab>::from_override(Some("analytics")).unwrap();
        assert_eq!(tabs.active(), IssuerTab::Analytics);
        assert_eq!(
            TabState::<IssuerTab>::from_override(None).unwrap().active(),
            IssuerTab::Listings
        );
        assert!(TabState::<IssuerTab>::from_override(Some("cards")).is_err());
    }
}
