//! REST API module.

mod employees;

pub use employees::*;
