//! Fixed values shared by the server, the client, and the binary.

use std::time::Duration;

/// Port the API listens on when nothing else is configured.
pub const DEFAULT_PORT: u16 = 5000;

/// Path prefix every employee route is mounted under.
pub const API_PREFIX: &str = "/api/employees";

/// Base URL the client talks to unless told otherwise.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api/employees";

/// How long a transient notice stays visible.
pub const NOTICE_DISPLAY_DURATION: Duration = Duration::from_secs(4);

/// Prompt shown before a delete is sent.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this employee?";
