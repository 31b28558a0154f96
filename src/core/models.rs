//! Plain display records passed through the core to the widgets.
//!
//! None of these are mutated by the dashboard; they are supplied once at
//! startup as a [`DashboardData`] bundle.

use serde::{Deserialize, Serialize};

use super::profile::Profile;

// ── Investor ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    pub name: String,
    pub value: f64,
    /// Month-over-month change, in percent.
    pub change_pct: f64,
    pub apy: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSummary {
    pub total_value: f64,
    pub total_change_pct: f64,
    pub holdings: Vec<Holding>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketStatus {
    Active,
    Closed,
    #[serde(rename = "Coming Soon", alias = "ComingSoon")]
    ComingSoon,
}

impl MarketStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Closed => "Closed",
            Self::ComingSoon => "Coming Soon",
        }
    }
}

/// An investment opportunity as an investor browses it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketListing {
    pub id: String,
    pub title: String,
    /// Annual return, in percent.
    pub return_rate: f64,
    pub duration_months: u32,
    pub risk: RiskLevel,
    pub status: MarketStatus,
    pub min_investment: f64,
}

/// Figures shown on the investor welcome card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccountStats {
    pub total_balance: f64,
    pub balance_change_pct: f64,
    pub active_investments: u32,
    pub investment_categories: u32,
    pub virtual_cards: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualCard {
    pub last4: String,
    /// `MM/YY`.
    pub expires: String,
}

// ── Issuer ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ManagedStatus {
    Active,
    Pending,
    Expired,
}

impl ManagedStatus {
    pub fn key(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Expired => "expired",
        }
    }
}

/// A listing as its issuer manages it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagedListing {
    pub id: String,
    pub title: String,
    pub status: ManagedStatus,
    /// Expected return, in percent.
    pub returns: f64,
    pub duration: String,
    pub raised: f64,
    pub target: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuerAnalytics {
    pub total_raised: f64,
    pub raised_change_pct: f64,
    pub active_listings: u32,
    pub pending_approval: u32,
    pub investor_count: u32,
    pub investors_this_month: u32,
}

// ── Bundle ──────────────────────────────────────────────────────────────────

/// Everything the dashboard renders, supplied at the boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardData {
    pub profiles: Vec<Profile>,
    pub account: AccountStats,
    pub portfolio: PortfolioSummary,
    #[serde(default)]
    pub market_listings: Vec<MarketListing>,
    #[serde(default)]
    pub virtual_cards: Vec<VirtualCard>,
    #[serde(default)]
    pub managed_listings: Vec<ManagedListing>,
    pub analytics: IssuerAnalytics,
}
