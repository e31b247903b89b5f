//! # roster-client
//!
//! Client side of the roster employee API.
//!
//! - [`api`]: `EmployeeApi` seam and its reqwest implementation
//! - [`book`]: `EmployeeBook`, the state coordinator the UI renders from
//! - [`notice`]: transient success/error notices with a fixed display time
//! - [`ui`]: terminal rendering of each piece of state

#![deny(unsafe_code)]

pub mod api;
pub mod book;
pub mod notice;
pub mod ui;

pub use api::{ClientError, EmployeeApi, HttpEmployeeApi};
pub use book::{BookState, ConfirmPrompt, EmployeeBook};
pub use notice::{Notice, NoticeKind, Notifier};
