use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("Console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GreeterError>;
