//! # roster-core
//!
//! Shared vocabulary for the roster crates:
//!
//! - **Model**: [`Employee`] records and the [`EmployeeDraft`] request payload
//! - **Validation**: one rule-set ([`validation::check`]) worded for the server
//!   or the client
//! - **Envelopes**: the JSON success/failure shapes every endpoint returns
//! - **Constants**: ports, paths, and display durations

#![deny(unsafe_code)]

pub mod constants;
pub mod employee;
pub mod envelope;
pub mod validation;

pub use employee::{Employee, EmployeeDraft, EmployeeId};
pub use envelope::{ApiFailure, ApiResponse};
pub use validation::Violation;
