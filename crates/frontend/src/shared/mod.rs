pub mod config;
pub mod icons;
pub mod list_utils;
