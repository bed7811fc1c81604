//! Fatal error taxonomy. Everything else in the pipeline degrades instead of failing.

use thiserror::Error;

/// Which side of the process boundary a fatal error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Bad session descriptor on stdin
    Input,
    /// Bad flags or environment configuration
    Config,
}

#[derive(Debug, Error)]
pub enum StatuslineError {
    #[error("stdin is a terminal; pipe the session JSON into this command")]
    StdinIsTerminal,

    #[error("no session JSON received on stdin")]
    EmptyInput,

    #[error("failed to read stdin")]
    ReadStdin(#[source] std::io::Error),

    #[error("invalid session JSON")]
    InvalidInput(#[source] serde_json::Error),

    #[error("invalid {which} thresholds: {reason}")]
    InvalidThresholds { which: &'static str, reason: String },
}

impl StatuslineError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidThresholds { .. } => ErrorKind::Config,
            Self::StdinIsTerminal
            | Self::EmptyInput
            | Self::ReadStdin(_)
            | Self::InvalidInput(_) => ErrorKind::Input,
        }
    }

    /// 1 for bad input data, 2 for bad usage/configuration (matching clap's usage errors).
    pub fn exit_code(&self) -> u8 {
        match self.kind() {
            ErrorKind::Input => 1,
            ErrorKind::Config => 2,
        }
    }
}

pub type Result<T> = std::result::Result<T, StatuslineError>;
