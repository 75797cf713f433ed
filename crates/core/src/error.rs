use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RippleError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid purchase amount: {0:?}")]
    InvalidAmount(String),
}
