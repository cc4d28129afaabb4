use std::fmt;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    #[error("{0}")]
    ParseError(#[from] serde_json::Error),

    #[error("missing required config fields: {}", .0.join(", "))]
    ValidationError(Vec<&'static str>),

    #[error("unexpected status code: {status}, response body: {body}")]
    ApiError {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("{0}")]
    RequestBuildError(reqwest::Error),

    #[error("{0}")]
    TransportError(reqwest::Error),
}

impl From<reqwest::Error> for ErrorKind {
    fn from(e: reqwest::Error) -> Self {
        if e.is_builder() {
            ErrorKind::RequestBuildError(e)
        } else {
            ErrorKind::TransportError(e)
        }
    }
}

/// An [`ErrorKind`] together with the steps it propagated through, innermost first.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    context: Vec<&'static str>,
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    pub fn context(&self) -> &[&'static str] {
        &self.context
    }

    pub fn wrap(mut self, step: &'static str) -> Self {
        self.context.push(step);
        self
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in self.context.iter().rev() {
            write!(f, "{}: ", step)?;
        }

        write!(f, "{}", self.kind)
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.kind)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error {
            kind,
            context: Vec::new(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        ErrorKind::from(e).into()
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        ErrorKind::from(e).into()
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        ErrorKind::from(e).into()
    }
}

impl<T> From<Error> for Result<T> {
    fn from(e: Error) -> Self {
        Err(e)
    }
}

/// Attaches a step description to the error of a failed result.
pub trait Context<T> {
    fn context(self, step: &'static str) -> Result<T>;
}

impl<T, E: Into<Error>> Context<T> for std::result::Result<T, E> {
    fn context(self, step: &'static str) -> Result<T> {
        self.map_err(|e| e.into().wrap(step))
    }
}
