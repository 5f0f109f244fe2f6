//! Data models for the employee API.

mod employee;
pub mod patch;

pub use employee::*;
