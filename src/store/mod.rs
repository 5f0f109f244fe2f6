//! Storage backends for employee records.
//!
//! Two interchangeable backends live behind the [`EmployeeStore`] trait: a
//! seeded in-memory list and the SQLite repository in [`crate::db`]. Handlers
//! only ever see the trait object.

mod memory;

pub use memory::MemoryStore;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{Employee, EmployeeUpdate};

/// CRUD surface shared by every storage backend.
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// List all employees in store iteration order.
    async fn list(&self) -> Result<Vec<Employee>, AppError>;

    /// Fetch an employee by id.
    async fn get(&self, id: i64) -> Result<Option<Employee>, AppError>;

    /// Case-insensitive lookup by name, used for duplicate detection.
    async fn find_by_name(&self, name: &str) -> Result<Option<Employee>, AppError>;

    /// Insert a new employee, assigning the next identifier and the
    /// creation timestamp. Returns the stored record.
    async fn create(
        &self,
        name: String,
        job: Option<String>,
        country: Option<String>,
    ) -> Result<Employee, AppError>;

    /// Overwrite the mutable fields of an existing employee. The creation
    /// timestamp is left untouched. Errors with NotFound if absent.
    async fn update(&self, id: i64, fields: &EmployeeUpdate) -> Result<(), AppError>;

    /// Remove an employee. Errors with NotFound if absent.
    async fn delete(&self, id: i64) -> Result<(), AppError>;
}
