//! Employee records and the payload used to create or rewrite them.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Store-assigned employee identifier.
///
/// Assigned on insert, never reused after a delete, never changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(i64);

impl EmployeeId {
    /// Wrap a raw row id.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// The raw row id.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for EmployeeId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<i64> for EmployeeId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

/// A stored employee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Primary key.
    pub id: EmployeeId,
    /// Display name.
    pub name: String,
    /// Contact address, unique across all employees.
    pub email: String,
    /// Job title.
    pub position: String,
}

impl Employee {
    /// Combine an id with the fields of a draft.
    pub fn from_draft(id: EmployeeId, draft: EmployeeDraft) -> Self {
        Self {
            id,
            name: draft.name,
            email: draft.email,
            position: draft.position,
        }
    }

    /// The editable fields of this record, e.g. to pre-fill an edit form.
    pub fn to_draft(&self) -> EmployeeDraft {
        EmployeeDraft {
            name: self.name.clone(),
            email: self.email.clone(),
            position: self.position.clone(),
        }
    }
}

/// The client-supplied fields of an employee.
///
/// Used for both create and update; updates always carry every field.
/// Absent JSON fields decode as empty strings so they fail validation
/// instead of failing deserialization.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmployeeDraft {
    /// Display name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Job title.
    pub position: String,
}

impl EmployeeDraft {
    /// Build a draft from borrowed field values.
    pub fn new(name: impl Into<String>, email: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            position: position.into(),
        }
    }
}
