pub mod config;
pub mod keys;
pub mod menu;
pub mod menu_index;
pub mod no_changes;
pub mod platform;
