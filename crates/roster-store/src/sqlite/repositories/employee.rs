//! Employee repository: parameterized SQL over the `employees` table.

use rusqlite::{Connection, OptionalExtension, params};
use roster_core::{Employee, EmployeeDraft, EmployeeId};

use crate::errors::Result;

/// Stateless employee repository; every method takes `&Connection`.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// List employees in id order.
    ///
    /// A non-empty `filter` keeps only names containing it as a
    /// case-sensitive substring. The filter is matched literally.
    pub fn list(conn: &Connection, filter: Option<&str>) -> Result<Vec<Employee>> {
        let rows = match filter.filter(|f| !f.is_empty()) {
            Some(term) => {
                let mut stmt = conn.prepare(
                    "SELECT id, name, email, position FROM employees
                     WHERE instr(name, ?1) > 0 ORDER BY id",
                )?;
                stmt.query_map(params![term], Self::map_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()?
            }
            None => {
                let mut stmt =
                    conn.prepare("SELECT id, name, email, position FROM employees ORDER BY id")?;
                stmt.query_map([], Self::map_row)?
                    .collect::<std::result::Result<Vec<_>, _>>()?
            }
        };
        Ok(rows)
    }

    /// Get one employee, or `None` if the id is unknown.
    pub fn get_by_id(conn: &Connection, id: EmployeeId) -> Result<Option<Employee>> {
        let row = conn
            .query_row(
                "SELECT id, name, email, position FROM employees WHERE id = ?1",
                params![id.get()],
                Self::map_row,
            )
            .optional()?;
        Ok(row)
    }

    /// Insert a new employee and return it with its assigned id.
    pub fn insert(conn: &Connection, draft: &EmployeeDraft) -> Result<Employee> {
        let _ = conn.execute(
            "INSERT INTO employees (name, email, position) VALUES (?1, ?2, ?3)",
            params![draft.name, draft.email, draft.position],
        )?;
        let id = EmployeeId::new(conn.last_insert_rowid());
        Ok(Employee::from_draft(id, draft.clone()))
    }

    /// Rewrite every field of an employee. Returns the number of rows changed.
    pub fn update(conn: &Connection, id: EmployeeId, draft: &EmployeeDraft) -> Result<usize> {
        let changed = conn.execute(
            "UPDATE employees SET name = ?1, email = ?2, position = ?3 WHERE id = ?4",
            params![draft.name, draft.email, draft.position, id.get()],
        )?;
        Ok(changed)
    }

    /// Delete an employee. Returns the number of rows removed.
    pub fn delete(conn: &Connection, id: EmployeeId) -> Result<usize> {
        let changed = conn.execute("DELETE FROM employees WHERE id = ?1", params![id.get()])?;
        Ok(changed)
    }

    fn map_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Employee> {
        Ok(Employee {
            id: EmployeeId::new(row.get("id")?),
            name: row.get("name")?,
            email: row.get("email")?,
            position: row.get("position")?,
        })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
