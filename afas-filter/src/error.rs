#[derive(thiserror::Error, Debug)]
pub enum AfasError {
    #[error("Unknown field: {0}")]
    UnknownField(String),
    #[error("Unknown operator code: {0}")]
    UnknownOperator(u8),
    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, AfasError>;
