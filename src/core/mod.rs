// Navigation core
pub mod error;
pub mod profile;
pub mod session;
pub mod tabs;
pub mod view;

// Display data
pub mod format;
pub mod listing_filter;
pub mod listing_form;
pub mod models;
pub mod sample_data;

pub mod logging;
