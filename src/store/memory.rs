//! In-memory employee store.
//!
//! A process-owned, injected record list with no persistence across
//! restarts. The lock only guards memory safety; read-modify-write races
//! across separate requests remain possible.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::EmployeeStore;
use crate::errors::AppError;
use crate::models::{Employee, EmployeeUpdate};

/// List-backed store seeded with fixed sample data.
pub struct MemoryStore {
    employees: RwLock<Vec<Employee>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            employees: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with the three sample employees.
    pub fn with_seed_data() -> Self {
        let now = Utc::now().to_rfc3339();
        let seed = |id: i64, name: &str, job: &str, country: &str| Employee {
            id,
            name: name.to_string(),
            job: Some(job.to_string()),
            country: Some(country.to_string()),
            created_at: Some(now.clone()),
            updated_at: None,
        };

        Self {
            employees: RwLock::new(vec![
                seed(1, "Steve Nash", "Developer", "USA"),
                seed(2, "Itachi Uchiha", "Tiktokerist", "Japan"),
                seed(3, "Juan Tamad", "Engineer", "Philippines"),
            ]),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmployeeStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        Ok(self.employees.read().await.clone())
    }

    async fn get(&self, id: i64) -> Result<Option<Employee>, AppError> {
        let employees = self.employees.read().await;
        Ok(employees.iter().find(|e| e.id == id).cloned())
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Employee>, AppError> {
        let employees = self.employees.read().await;
        Ok(employees
            .iter()
            .find(|e| e.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    async fn create(
        &self,
        name: String,
        job: Option<String>,
        country: Option<String>,
    ) -> Result<Employee, AppError> {
        let mut employees = self.employees.write().await;

        // One greater than the current maximum identifier.
        let id = employees.iter().map(|e| e.id).max().unwrap_or(0) + 1;

        let employee = Employee {
            id,
            name,
            job,
            country,
            created_at: Some(Utc::now().to_rfc3339()),
            updated_at: None,
        };

        employees.push(employee.clone());
        Ok(employee)
    }

    async fn update(&self, id: i64, fields: &EmployeeUpdate) -> Result<(), AppError> {
        let mut employees = self.employees.write().await;

        let employee = employees
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))?;

        employee.name = fields.name.clone();
        employee.job = fields.job.clone();
        employee.country = fields.country.clone();
        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let mut employees = self.employees.write().await;

        let pos = employees
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Employee {} not found", id)))?;

        employees.remove(pos);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seed_data_has_three_employees() {
        let store = MemoryStore::with_seed_data();
        let all = store.list().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].name, "Steve Nash");
        assert!(all.iter().all(|e| e.created_at.is_some()));
    }

    #[tokio::test]
    async fn create_assigns_next_id() {
        let store = MemoryStore::with_seed_data();
        let created = store
            .create("Grace Hopper".to_string(), None, None)
            .await
            .unwrap();
        assert_eq!(created.id, 4);

        let empty = MemoryStore::new();
        let first = empty.create("Ada".to_string(), None, None).await.unwrap();
        assert_eq!(first.id, 1);
    }

    #[tokio::test]
    async fn find_by_name_is_case_insensitive() {
        let store = MemoryStore::with_seed_data();
        let found = store.find_by_name("steve nash").await.unwrap();
        assert_eq!(found.unwrap().id, 1);
        assert!(store.find_by_name("nobody").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn update_preserves_created_at() {
        let store = MemoryStore::with_seed_data();
        let before = store.get(1).await.unwrap().unwrap();

        store
            .update(
                1,
                &EmployeeUpdate {
                    name: "Renamed".to_string(),
                    job: None,
                    country: None,
                },
            )
            .await
            .unwrap();

        let after = store.get(1).await.unwrap().unwrap();
        assert_eq!(after.name, "Renamed");
        assert_eq!(after.created_at, before.created_at);
    }

    #[tokio::test]
    async fn delete_removes_record() {
        let store = MemoryStore::with_seed_data();
        store.delete(2).await.unwrap();
        assert!(store.get(2).await.unwrap().is_none());
        assert!(store.delete(2).await.is_err());
    }
}
