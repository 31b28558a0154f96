//! Built-in demo dataset used when no seed file is configured.

use super::models::{
    AccountStats, DashboardData, Holding, IssuerAnalytics, ManagedListing, ManagedStatus,
    MarketListing, MarketStatus, PortfolioSummary, RiskLevel, VirtualCard,
};
use super::profile::{Profile, Role};

impl DashboardData {
    /// Two demo profiles (investor first) and the demo figures for each view.
    pub fn sample() -> Self {
        Self {
            profiles: sample_profiles(),
            account: AccountStats {
                total_balance: 150_000.0,
                balance_change_pct: 20.0,
                active_investments: 5,
                investment_categories: 3,
                virtual_cards: 2,
            },
            portfolio: PortfolioSummary {
                total_value: 150_000.0,
                total_change_pct: 2.3,
                holdings: vec![
                    holding("Fixed Income Fund A", 50_000.0, 5.2, 8.5),
                    holding("Sukuk Portfolio B", 75_000.0, -2.1, 6.7),
                    holding("Real Estate Trust C", 25_000.0, 3.8, 7.2),
                ],
            },
            market_listings: vec![
                market("1", "Fixed Income Bond A", 5.5, 12, RiskLevel::Low, MarketStatus::Active, 10_000.0),
                market("2", "Corporate Sukuk B", 7.2, 24, RiskLevel::Medium, MarketStatus::Active, 25_000.0),
                market("3", "Real Estate Fund C", 8.5, 36, RiskLevel::High, MarketStatus::ComingSoon, 50_000.0),
            ],
            virtual_cards: vec![VirtualCard {
                last4: "1234".to_string(),
                expires: "12/25".to_string(),
            }],
            managed_listings: vec![
                managed("1", "Real Estate Investment Opportunity", ManagedStatus::Active, 12.5, "12 months", 500_000.0, 1_000_000.0),
                managed("2", "Commercial Property Fund", ManagedStatus::Pending, 8.75, "24 months", 250_000.0, 750_000.0),
                managed("3", "Infrastructure Development Project", ManagedStatus::Expired, 15.0, "36 months", 2_000_000.0, 2_000_000.0),
            ],
            analytics: IssuerAnalytics {
                total_raised: 2_500_000.0,
                raised_change_pct: 12.5,
                active_listings: 5,
                pending_approval: 2,
                investor_count: 127,
                investors_this_month: 15,
            },
        }
    }
}

pub fn sample_profiles() -> Vec<Profile> {
    vec![
        Profile::new("1", Role::Investor, "Investor Account")
            .with_avatar("https://api.dicebear.com/7.x/avataaars/svg?seed=investor"),
        Profile::new("2", Role::Issuer, "Issuer Account")
            .with_avatar("https://api.dicebear.com/7.x/avataaars/svg?seed=issuer"),
    ]
}

fn holding(name: &str, value: f64, change_pct: f64, apy: f64) -> Holding {
    Holding {
        name: name.to_string(),
        value,
        change_pct,
        apy,
    }
}

fn market(
    id: &str,
    title: &str,
    return_rate: f64,
    duration_months: u32,
    risk: RiskLevel,
    status: MarketStatus,
    min_investment: f64,
) -> MarketListing {
    MarketListing {
        id: id.to_string(),
        title: title.to_string(),
        return_rate,
        duration_months,
        risk,
        status,
        min_investment,
    }
}

fn managed(
    id: &str,
    title: &str,
    status: ManagedStatus,
    returns: f64,
    duration: &str,
    raised: f64,
    target: f64,
) -> ManagedListing {
    ManagedListing {
        id: id.to_string(),
        title: title.to_string(),
        status,
        returns,
        duration: duration.to_string(),
        raised,
        target,
    }
}
