use thiserror::Error;

#[derive(Error, Debug)]
pub enum XycError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),
}

// Convenient crate-wide result type
pub type Result<T> = std::result::Result<T, XycError>;
