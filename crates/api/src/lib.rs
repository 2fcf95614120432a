//! HTTP surface: routes, shared state, error mapping and configuration.

pub mod config;
pub mod error;
pub mod routes;
pub mod state;
