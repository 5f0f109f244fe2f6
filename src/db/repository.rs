//! SQLite repository for employee CRUD operations.

use async_trait::async_trait;
use chrono::Utc;
use sqlx::{Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{Employee, EmployeeUpdate};
use crate::store::EmployeeStore;

/// Relational employee store over a SQLite pool.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmployeeStore for Repository {
    async fn list(&self) -> Result<Vec<Employee>, AppError> {
        let rows = sqlx::query(
            "SELECT id, name, job, country, created_at, updated_at FROM employees ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.iter().map(employee_from_row).collect())
    }

    async fn get(&self, id: i64) -> Result<Option<Employee>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, job, country, created_at, updated_at FROM employees WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(employee_from_row))
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Employee>, AppError> {
        let row = sqlx::query(
            "SELECT id, name, job, country, created_at, updated_at FROM employees \
             WHERE LOWER(name) = LOWER(?)",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(employee_from_row))
    }

    async fn create(
        &self,
        name: String,
        job: Option<String>,
        country: Option<String>,
    ) -> Result<Employee, AppError> {
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            "INSERT INTO employees (name, job, country, created_at) VALUES (?, ?, ?, ?)",
        )
        .bind(&name)
        .bind(&job)
        .bind(&country)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(Employee {
            id: result.last_insert_rowid(),
            name,
            job,
            country,
            created_at: Some(now),
            updated_at: None,
        })
    }

    async fn update(&self, id: i64, fields: &EmployeeUpdate) -> Result<(), AppError> {
        // created_at is not in the column list, so it is preserved.
        let result = sqlx::query("UPDATE employees SET name = ?, job = ?, country = ? WHERE id = ?")
            .bind(&fields.name)
            .bind(&fields.job)
            .bind(&fields.country)
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Employee {} not found", id)));
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Employee {} not found", id)));
        }

        Ok(())
    }
}

fn employee_from_row(row: &sqlx::sqlite::SqliteRow) -> Employee {
    Employee {
        id: row.get("id"),
        name: row.get("name"),
        job: row.get("job"),
        country: row.get("country"),
        created_at: row.get("created_at"),
        updated_at: row.get("updated_at"),
    }
}
