pub mod app;
pub mod events;
pub mod header;
pub mod layout;
pub mod theme;
pub mod views;
pub mod widgets;
