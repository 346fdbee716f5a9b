//! Error types shared by the game core, repositories and use cases

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HangmanError {
    #[error("Invalid username `{0}`: use letters and digits only")]
    InvalidUserName(String),

    #[error("Invalid word to guess `{0}`: must be 7-21 lowercase letters")]
    InvalidWord(String),

    #[error("Invalid guess `{0}`: guess a single letter a-z")]
    InvalidGuess(char),

    #[error("User `{0}` already exists")]
    UserExists(String),

    #[error("User `{0}` is the first user and cannot be removed")]
    FirstUser(String),

    #[error("User `{0}` not found")]
    UserNotFound(String),

    #[error("Operation `{operation}` not permitted\nPermission required: {required}")]
    NotPermitted { operation: String, required: String },

    #[error("Repository error at {}: {message}", path.display())]
    Repo {
        path: PathBuf,
        message: String,
        #[source]
        source: Option<io::Error>,
    },

    #[error("No round in progress")]
    NoActiveRound,
}

impl HangmanError {
    pub(crate) fn not_permitted(operation: &str, required: &str) -> Self {
        Self::NotPermitted {
            operation: operation.to_string(),
            required: required.to_string(),
        }
    }

    pub(crate) fn repo(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Repo {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    pub(crate) fn repo_io(
        path: impl Into<PathBuf>,
        message: impl Into<String>,
        source: io::Error,
    ) -> Self {
        Self::Repo {
            path: path.into(),
            message: message.into(),
            source: Some(source),
        }
    }
}

pub type Result<T> = std::result::Result<T, HangmanError>;
