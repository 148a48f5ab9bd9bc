pub mod api_utils;
pub mod components;
pub mod config;
pub mod error;
pub mod icons;
pub mod notice;
pub mod state;

#[cfg(test)]
pub mod testing;
