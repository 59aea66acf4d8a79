use thiserror::Error;

use crate::domain::{AccountError, ParseCentsError};

#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Account(#[from] AccountError),

    #[error("Invalid amount: {0}")]
    InvalidAmount(#[from] ParseCentsError),

    #[error("Input closed before the session ended")]
    InputClosed,

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
}
