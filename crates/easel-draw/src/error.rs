use thiserror::Error;

/// Failure of a single command. The registry and scene are unchanged when
/// one of these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CommandError {
    /// Unknown command or shape keyword, or a wrong token count.
    #[error("syntax error: {0}")]
    Syntax(String),

    /// A token could not be parsed as the expected type.
    #[error("format error: {token:?} is not a valid {expected}")]
    Format { token: String, expected: &'static str },

    /// Reference to an undefined shape, or an edit with no object to apply it to.
    #[error("name error: {0}")]
    Name(String),

    /// A well-formed token naming a font or color that does not exist.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Error taxonomy without payloads.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Syntax,
    Format,
    Name,
    InvalidArgument,
}

impl CommandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CommandError::Syntax(_) => ErrorKind::Syntax,
            CommandError::Format { .. } => ErrorKind::Format,
            CommandError::Name(_) => ErrorKind::Name,
            CommandError::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }

    pub(crate) fn syntax(msg: impl Into<String>) -> Self {
        CommandError::Syntax(msg.into())
    }

    /// Wrong number of parameters for `what`.
    pub(crate) fn arity(what: &str, expected: &str, got: usize) -> Self {
        CommandError::Syntax(format!("{what} expects {expected}, got {got}"))
    }
}
