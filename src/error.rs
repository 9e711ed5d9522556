// src/error.rs
use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ChatError>;

#[derive(Error, Debug)]
pub enum ChatError {
    #[error("HTTP error! status: {0}")]
    Status(StatusCode),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend error: {0}")]
    Backend(String),

    #[error("backend reply has no `response` field")]
    MissingResponse,

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
