use thiserror::Error;

pub type BfResult<T> = Result<T, BfError>;

#[derive(Error, Debug)]
pub enum BfError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Non-positive value for {what}: {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Length mismatch for {what}: left={left}, right={right}")]
    LengthMismatch {
        what: &'static str,
        left: usize,
        right: usize,
    },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
