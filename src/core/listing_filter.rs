//! Search, filter and sort controls of the investor listings grid.

use super::models::{MarketListing, RiskLevel};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RiskFilter {
    #[default]
    All,
    Only(RiskLevel),
}

impl RiskFilter {
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Risks",
            Self::Only(RiskLevel::Low) => "Low Risk",
            Self::Only(RiskLevel::Medium) => "Medium Risk",
            Self::Only(RiskLevel::High) => "High Risk",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Only(RiskLevel::Low),
            Self::Only(RiskLevel::Low) => Self::Only(RiskLevel::Medium),
            Self::Only(RiskLevel::Medium) => Self::Only(RiskLevel::High),
            Self::Only(RiskLevel::High) => Self::All,
        }
    }

    fn matches(self, risk: RiskLevel) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == risk,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationFilter {
    #[default]
    All,
    /// Up to 12 months.
    Short,
    /// 13 to 24 months.
    Medium,
    /// Over 24 months.
    Long,
}

impl DurationFilter {
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Durations",
            Self::Short => "0-12 Months",
            Self::Medium => "12-24 Months",
            Self::Long => "24+ Months",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Self::All => Self::Short,
            Self::Short => Self::Medium,
            Self::Medium => Self::Long,
            Self::Long => Self::All,
        }
    }

    fn matches(self, months: u32) -> bool {
        match self {
            Self::All => true,
            Self::Short => months <= 12,
            Self::Medium => (13..=24).contains(&months),
            Self::Long => months > 24,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    /// As supplied.
    #[default]
    Listed,
    ReturnDesc,
}

impl SortOrder {
    pub fn label(self) -> &'static str {
        match self {
            Self::Listed => "Listed",
            Self::ReturnDesc => "Return ↓",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            Self::Listed => Self::ReturnDesc,
            Self::ReturnDesc => Self::Listed,
        }
    }
}

/// Current grid controls. Lives only as long as the grid is mounted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingFilter {
    pub query: String,
    pub risk: RiskFilter,
    pub duration: DurationFilter,
    pub sort: SortOrder,
}

impl ListingFilter {
    pub fn is_active(&self) -> bool {
        !self.query.trim().is_empty()
            || self.risk != RiskFilter::All
            || self.duration != DurationFilter::All
    }

    /// Listings passing every control, in display order.
    pub fn apply<'a>(&self, listings: &'a [MarketListing]) -> Vec<&'a MarketListing> {
        let needle = self.query.trim().to_lowercase();
        let mut visible: Vec<&MarketListing> = listings
            .iter()
            .filter(|l| needle.is_empty() || l.title.to_lowercase().contains(&needle))
            .filter(|l| self.risk.matches(l.risk))
            .filter(|l| self.duration.matches(l.duration_months))
            .collect();

        if self.sort == SortOrder::ReturnDesc {
            // Stable, so ties keep their listed order.
            visible.sort_by(|a, b| b.return_rate.total_cmp(&a.return_rate));
        }
        visible
    }
}
