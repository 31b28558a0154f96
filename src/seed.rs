//! Resolve the dashboard data handed to the session at startup.

use std::path::Path;

use crate::config::AppConfig;
use crate::core::models::DashboardData;
use crate::error::AppError;

/// Load the configured seed file, or the built-in sample data when none is set.
pub fn load_dashboard_data(config: &AppConfig) -> Result<DashboardData, AppError> {
    match config.data.seed_file.as_deref() {
        Some(path) => load_seed_file(path),
        None => {
            log::info!("No seed file configured, using built-in sample data");
            Ok(DashboardData::sample())
        }
    }
}

pub fn load_seed_file(path: &Path) -> Result<DashboardData, AppError> {
    let contents = std::fs::read_to_string(path).map_err(|source| AppError::SeedRead {
        path: path.to_path_buf(),
        source,
    })?;

    match toml::from_str::<DashboardData>(&contents) {
        Ok(data) => {
            log::info!(
                "Loaded seed data from {} ({} profiles)",
                path.display(),
                data.profiles.len()
            );
            Ok(data)
        }
        Err(e) => Err(AppError::SeedParse {
            path: path.to_path_buf(),
            span: e.span().map(miette::SourceSpan::from),
            message: e.message().to_string(),
            contents,
        }),
    }
}
