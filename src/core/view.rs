//! Role view selector: which dashboard a session snapshot maps to.

use super::profile::Role;
use super::session::SessionSnapshot;
use super::tabs::{InvestorTab, IssuerTab};

/// Caller-supplied inputs the selector forwards to the composers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewDefaults {
    pub organization: String,
    pub investor_tab: InvestorTab,
    pub issuer_tab: IssuerTab,
}

impl Default for ViewDefaults {
    fn default() -> Self {
        Self {
            organization: "ACME Investments".to_string(),
            investor_tab: InvestorTab::Overview,
            issuer_tab: IssuerTab::Listings,
        }
    }
}

/// The view to mount for the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleView<'a> {
    /// Disconnected: static landing placeholder.
    Landing,
    Investor {
        display_name: &'a str,
        initial_tab: InvestorTab,
    },
    Issuer {
        display_name: &'a str,
        organization: &'a str,
        initial_tab: IssuerTab,
    },
    /// A role with no dashboard yet.
    Unsupported { role: Role },
}

pub fn select_view<'a>(snapshot: &SessionSnapshot<'a>, defaults: &'a ViewDefaults) -> RoleView<'a> {
    if !snapshot.connected {
        return RoleView::Landing;
    }

    let profile = snapshot.active_profile;
    match profile.role {
        Role::Investor => RoleView::Investor {
            display_name: &profile.display_name,
            initial_tab: defaults.investor_tab,
        },
        Role::Issuer => RoleView::Issuer {
            display_name: &profile.display_name,
            organization: &defaults.organization,
            initial_tab: defaults.issuer_tab,
        },
        Role::Admin => RoleView::Unsupported { role: Role::Admin },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::profile::Profile;
    use crate::core::session::SessionController;

    fn session() -> SessionController {
        SessionController::new(vec![
            Profile::new("1", Role::Investor, "Investor Account"),
            Profile::new("2", Role::Issuer, "Issuer Account"),
            Profile::new("3", Role::Admin, "Operations"),
        ])
        .unwrap()
    }

    #[test]
    fn test_landing_before_connect_for_every_profile() {
        let defaults = ViewDefaults::default();
        let mut s = session();
        for id in ["1", "2", "3"] {
            s.select_profile(id).unwrap();
            assert_eq!(select_view(&s.snapshot(), &defaults), RoleView::Landing);
        }
    }

    #[test]
    fn test_investor_view() {
        let defaults = ViewDefaults::default();
        let mut s = session();
        s.connect();
        assert_eq!(
            select_view(&s.snapshot(), &defaults),
            RoleView::Investor {
                display_name: "Investor Account",
                initial_tab: InvestorTab::Overview,
            }
        );
    }

    #[test]
    fn test_issuer_view_carries_organization() {
        let defaults = ViewDefaults {
            organization: "Gulf Capital".to_string(),
            ..ViewDefaults::default()
        };
        let mut s = session();
        s.connect();
        s.select_profile("2").unwrap();
        assert_eq!(
            select_view(&s.snapshot(), &defaults),
            RoleView::Issuer {
                display_name: "Issuer Account",
                organization: "Gulf Capital",
                initial_tab: IssuerTab::Listings,
            }
        );
    }

    #[test]
    fn test_admin_is_unsupported() {
        let defaults = ViewDefaults::default();
        let mut s = session();
        s.connect();
        s.select_profile("3").unwrap();
        assert_eq!(
            select_view(&s.snapshot(), &defaults),
            RoleView::Unsupported { role: Role::Admin }
        );
    }
}
