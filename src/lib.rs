//! Bazaar-RS Library
//!
//! Core library modules for the bazaar-rs web application.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod logger;
pub mod models;
pub mod repositories;
pub mod server;
pub mod services;
pub mod state;
pub mod utils;

pub use state::AppState;
