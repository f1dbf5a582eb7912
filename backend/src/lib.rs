//! Ramadhan Prep Backend library
//!
//! Exposes the application modules for integration testing.

pub mod config;
pub mod error;
pub mod persistence;
pub mod routes;
pub mod services;
pub mod state;
