//! JSON-patch-style documents for partial updates.
//!
//! A patch document is an ordered list of field-level operations applied to
//! the JSON representation of a record before validation and persistence.
//! Supported operations: add, remove, replace, test.

use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;

/// A single patch operation.
#[derive(Debug, Clone, Deserialize)]
pub struct PatchOp {
    pub op: String,
    pub path: String,
    #[serde(default)]
    pub value: Option<Value>,
}

/// Apply a patch document to a JSON object in order.
///
/// Paths are JSON pointers (RFC 6901); the documents patched here are flat,
/// so only top-level member pointers like `/name` are resolved.
pub fn apply(doc: &mut Value, ops: &[PatchOp]) -> Result<(), AppError> {
    for op in ops {
        let key = pointer_key(&op.path)?;
        let obj = doc
            .as_object_mut()
            .ok_or_else(|| AppError::BadRequest("Patch target is not an object".to_string()))?;

        match op.op.as_str() {
            "add" | "replace" => {
                let value = op.value.clone().ok_or_else(|| {
                    AppError::BadRequest(format!("Patch op '{}' requires a value", op.op))
                })?;
                obj.insert(key, value);
            }
            "remove" => {
                obj.remove(&key).ok_or_else(|| {
                    AppError::BadRequest(format!("Patch path {} not present", op.path))
                })?;
            }
            "test" => {
                let expected = op.value.clone().unwrap_or(Value::Null);
                let actual = obj.get(&key).cloned().unwrap_or(Value::Null);
                if actual != expected {
                    return Err(AppError::BadRequest(format!(
                        "Patch test failed at {}",
                        op.path
                    )));
                }
            }
            other => {
                return Err(AppError::BadRequest(format!(
                    "Unsupported patch op '{}'",
                    other
                )));
            }
        }
    }

    Ok(())
}

/// Resolve a single-level JSON pointer to its member key.
fn pointer_key(path: &str) -> Result<String, AppError> {
    let key = path
        .strip_prefix('/')
        .filter(|rest| !rest.is_empty() && !rest.contains('/'))
        .ok_or_else(|| AppError::BadRequest(format!("Invalid patch path '{}'", path)))?;

    // RFC 6901 escapes, ~1 before ~0
    Ok(key.replace("~1", "/").replace("~0", "~"))
}
