use crate::model::EmployeeField;
use thiserror::Error;

/// Why a draft could not become an `Employee`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    MissingField(EmployeeField),

    #[error("Salary must be a number, got {0:?}")]
    InvalidSalary(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("An employee with id {0} already exists")]
    DuplicateId(u64),

    #[error("Employee not found: {0}")]
    NotFound(u64),

    #[error("No employee ids left to assign")]
    IdSpaceExhausted,
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("page_size must be at least 1")]
    InvalidPageSize,
}
