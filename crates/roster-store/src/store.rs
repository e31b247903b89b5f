//! High-level [`EmployeeStore`], the record access layer.
//!
//! Owns the connection pool handed in at startup. Each call borrows one
//! pooled connection for its duration and returns it afterwards.

use std::path::Path;

use roster_core::{Employee, EmployeeDraft, EmployeeId};
use tracing::{debug, info, instrument};

use crate::errors::Result;
use crate::sqlite::connection::{self, ConnectionConfig, ConnectionPool, PooledConnection};
use crate::sqlite::migrations::run_migrations;
use crate::sqlite::repositories::employee::EmployeeRepo;

/// Pool-backed employee store. Cheap to clone.
#[derive(Clone)]
pub struct EmployeeStore {
    pool: ConnectionPool,
}

impl EmployeeStore {
    /// Wrap an existing pool. The schema must already be migrated.
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }

    /// Open (creating if needed) a file database and bring its schema up to date.
    pub fn open(path: &Path, config: &ConnectionConfig) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let pool = connection::new_file(&path.to_string_lossy(), config)?;
        let applied = run_migrations(&*pool.get()?)?;
        info!(path = %path.display(), applied, "employee store opened");
        Ok(Self::new(pool))
    }

    /// Open a private in-memory database with the schema applied.
    pub fn in_memory() -> Result<Self> {
        let pool = connection::new_in_memory(&ConnectionConfig::default())?;
        let _ = run_migrations(&*pool.get()?)?;
        Ok(Self::new(pool))
    }

    fn conn(&self) -> Result<PooledConnection> {
        Ok(self.pool.get()?)
    }

    /// All employees, or those whose name contains `filter`.
    #[instrument(skip(self))]
    pub fn list(&self, filter: Option<&str>) -> Result<Vec<Employee>> {
        let conn = self.conn()?;
        let rows = EmployeeRepo::list(&conn, filter)?;
        debug!(count = rows.len(), "listed employees");
        Ok(rows)
    }

    /// One employee, or `None` when the id is unknown.
    #[instrument(skip(self), fields(employee_id = %id))]
    pub fn get_by_id(&self, id: EmployeeId) -> Result<Option<Employee>> {
        let conn = self.conn()?;
        EmployeeRepo::get_by_id(&conn, id)
    }

    /// Create an employee. Fails with `UniqueViolation` on a taken email.
    #[instrument(skip(self, draft), fields(email = %draft.email))]
    pub fn insert(&self, draft: &EmployeeDraft) -> Result<Employee> {
        let conn = self.conn()?;
        let created = EmployeeRepo::insert(&conn, draft)?;
        info!(employee_id = %created.id, "employee created");
        Ok(created)
    }

    /// Rewrite an employee. Returns rows changed (0 when the id is unknown).
    #[instrument(skip(self, draft), fields(employee_id = %id))]
    pub fn update(&self, id: EmployeeId, draft: &EmployeeDraft) -> Result<usize> {
        let conn = self.conn()?;
        EmployeeRepo::update(&conn, id, draft)
    }

    /// Remove an employee. Returns rows changed (0 when the id is unknown).
    #[instrument(skip(self), fields(employee_id = %id))]
    pub fn delete(&self, id: EmployeeId) -> Result<usize> {
        let conn = self.conn()?;
        EmployeeRepo::delete(&conn, id)
    }
}
