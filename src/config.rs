use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::tabs::{InvestorTab, IssuerTab, TabState};
use crate::core::view::ViewDefaults;

/// Top-level application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub tui: TuiConfig,
    pub data: DataConfig,
    pub wallet: WalletConfig,
    pub issuer: IssuerConfig,
    pub dashboard: DashboardConfig,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Tick interval in milliseconds for the event loop.
    pub tick_rate_ms: u64,
    /// Enable mouse support in the terminal.
    pub mouse_enabled: bool,
}

/// Data directory configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DataConfig {
    /// Override the default data directory (logs live under it).
    pub data_dir: Option<PathBuf>,
    /// TOML file with profiles and dashboard figures. Built-in sample data when unset.
    pub seed_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Address shown in the header once connected.
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IssuerConfig {
    pub organization: String,
    pub contact_email: String,
}

/// Initial tab overrides, by tab key.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub investor_tab: Option<String>,
    pub issuer_tab: Option<String>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: 50,
            mouse_enabled: false,
        }
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            address: "0x1234...5678".to_string(),
        }
    }
}

impl Default for IssuerConfig {
    fn default() -> Self {
        Self {
            organization: "ACME Investments".to_string(),
            contact_email: "contact@acmeinvestments.com".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `~/.config/agyal/config.toml`.
    /// Returns `Default` if the file is missing or unparseable.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(config_path: &Path) -> Self {
        match std::fs::read_to_string(config_path) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(config) => {
                    log::info!("Loaded config from {}", config_path.display());
                    config
                }
                Err(e) => {
                    log::warn!(
                        "Failed to parse config at {}: {e}, using defaults",
                        config_path.display()
                    );
                    Self::default()
                }
            },
            Err(_) => {
                log::debug!(
                    "No config file at {}, using defaults",
                    config_path.display()
                );
                Self::default()
            }
        }
    }

    /// Resolved data directory (override or XDG default).
    pub fn data_dir(&self) -> PathBuf {
        self.data.data_dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .map(|d| d.join("agyal"))
                .unwrap_or_else(|| PathBuf::from("data"))
        })
    }

    /// Selector inputs. Unknown tab overrides fall back to the composer default.
    pub fn view_defaults(&self) -> ViewDefaults {
        ViewDefaults {
            organization: self.issuer.organization.clone(),
            investor_tab: initial_tab::<InvestorTab>(self.dashboard.investor_tab.as_deref()),
            issuer_tab: initial_tab::<IssuerTab>(self.dashboard.issuer_tab.as_deref()),
        }
    }

    fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("agyal").join("config.toml"))
            .unwrap_or_else(|| PathBuf::from("config.toml"))
    }
}

fn initial_tab<K: crate::core::tabs::TabKey>(key: Option<&str>) -> K {
    match TabState::<K>::from_override(key) {
        Ok(state) => state.active(),
        Err(e) => {
            log::warn!("Ignoring dashboard tab override: {e}");
            K::ALL[0]
        }
    }
}
