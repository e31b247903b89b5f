//! # roster-server
//!
//! Axum HTTP server exposing employee CRUD under `/api/employees`.
//!
//! - [`server`]: `RosterServer`, router assembly, graceful serve loop
//! - [`handlers`]: one handler per (verb, path) pair
//! - [`errors`]: `ApiError` and its mapping to the failure envelope
//! - [`health`]: `GET /health`
//! - [`shutdown`]: cancellation-token based shutdown coordination

#![deny(unsafe_code)]

pub mod config;
pub mod errors;
pub mod handlers;
pub mod health;
pub mod server;
pub mod shutdown;

pub use config::ServerConfig;
pub use errors::ApiError;
pub use server::{AppState, RosterServer};
pub use shutdown::ShutdownCoordinator;
