pub mod holdings;
pub mod investor;
pub mod issuer;
pub mod landing;
pub mod listing_form;
pub mod listing_management;
pub mod listings_grid;
