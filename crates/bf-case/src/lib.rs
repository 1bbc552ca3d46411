//! bf-case: case file format, validation, and runtime compilation.

pub mod compile;
pub mod schema;
pub mod validate;

pub use compile::{CompiledCase, compile_case};
pub use schema::*;
pub use validate::{case_violations, validate_case};

pub type CaseResult<T> = Result<T, CaseError>;

#[derive(thiserror::Error, Debug)]
pub enum CaseError {
    #[error("Input validation failed with {} violation(s):\n- {}", .violations.len(), .violations.join("\n- "))]
    InputValidationFailed { violations: Vec<String> },

    #[error("Case compilation failed: {0}")]
    Compile(String),

    #[error("Compute error: {0}")]
    Compute(#[from] bf_profile::ProfileError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Case parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_case(path: &std::path::Path) -> CaseResult<Case> {
    let content = std::fs::read_to_string(path)?;
    let case: Case = serde_yaml::from_str(&content)?;
    validate_case(&case)?;
    Ok(case)
}

pub fn save_case(path: &std::path::Path, case: &Case) -> CaseResult<()> {
    validate_case(case)?;
    let content = serde_yaml::to_string(case)?;
    std::fs::write(path, content)?;
    Ok(())
}
