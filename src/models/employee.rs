//! Employee models and request bodies.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Maximum allowed length of an employee name.
pub const MAX_NAME_LEN: usize = 30;

/// A persisted employee record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Set once when the record is created, never touched afterwards.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Schema fidelity only; no operation currently sets this.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl Employee {
    pub fn to_dto(&self) -> EmployeeDto {
        EmployeeDto {
            id: self.id,
            name: self.name.clone(),
            job: self.job.clone(),
            country: self.country.clone(),
        }
    }
}

/// Wire representation of an employee, also the target a patch
/// document is applied to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    #[serde(default)]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Request body for creating a new employee.
///
/// The id field exists only so a client-supplied identifier can be
/// detected and rejected.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEmployeeRequest {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// Request body for a full update of an existing employee.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateEmployeeRequest {
    /// Zero means unset; a nonzero value must match the path id.
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub job: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
}

/// The mutable field set persisted by PUT and PATCH. Timestamps are
/// deliberately absent so `created_at` survives every update.
#[derive(Debug, Clone)]
pub struct EmployeeUpdate {
    pub name: String,
    pub job: Option<String>,
    pub country: Option<String>,
}

/// Validate a name against the create/update rules.
pub fn validate_name(name: Option<&str>) -> Result<String, AppError> {
    let name = name
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .ok_or_else(|| AppError::Validation("Name is required".to_string()))?;

    if name.chars().count() > MAX_NAME_LEN {
        return Err(AppError::Validation(format!(
            "Name must be at most {} characters",
            MAX_NAME_LEN
        )));
    }

    Ok(name.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_name_rejects_missing_and_blank() {
        assert!(validate_name(None).is_err());
        assert!(validate_name(Some("")).is_err());
        assert!(validate_name(Some("   ")).is_err());
    }

    #[test]
    fn validate_name_rejects_overlong() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_name(Some(&long)).is_err());

        let exact = "x".repeat(MAX_NAME_LEN);
        assert_eq!(validate_name(Some(&exact)).unwrap(), exact);
    }

    #[test]
    fn validate_name_trims() {
        assert_eq!(validate_name(Some("  Ada  ")).unwrap(), "Ada");
    }
}
