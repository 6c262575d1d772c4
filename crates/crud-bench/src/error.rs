use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Arithmetic error: {0}")]
    ArithmeticError(String),
}

pub type Result<T> = std::result::Result<T, StatsError>;
