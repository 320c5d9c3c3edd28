use std::{borrow::Cow, path::PathBuf};

/// An error to do with memory collection.
#[derive(Debug)]
pub enum CollectionError {
    /// A required tool is missing from its expected location.
    ToolNotFound { path: PathBuf },

    /// A tool was found but running it failed, either because it could not
    /// be spawned or because it exited unsuccessfully.
    Execution {
        tool: PathBuf,
        reason: Cow<'static, str>,
        source: Option<std::io::Error>,
    },

    /// A tool's output did not have the expected shape.
    Parse(Cow<'static, str>),

    /// The collection is not implemented for this platform.
    NotImplemented,
}

impl CollectionError {
    pub(crate) fn tool_not_found<P: Into<PathBuf>>(path: P) -> Self {
        Self::ToolNotFound { path: path.into() }
    }

    pub(crate) fn execution<P: Into<PathBuf>, R: Into<Cow<'static, str>>>(
        tool: P, reason: R,
    ) -> Self {
        Self::Execution {
            tool: tool.into(),
            reason: reason.into(),
            source: None,
        }
    }

    pub(crate) fn spawn<P: Into<PathBuf>>(tool: P, err: std::io::Error) -> Self {
        Self::Execution {
            tool: tool.into(),
            reason: Cow::Owned(err.to_string()),
            source: Some(err),
        }
    }

    pub(crate) fn parse<R: Into<Cow<'static, str>>>(reason: R) -> Self {
        Self::Parse(reason.into())
    }
}

impl std::fmt::Display for CollectionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectionError::ToolNotFound { path } => {
                write!(f, "could not find '{}'", path.display())
            }
            CollectionError::Execution { tool, reason, .. } => {
                write!(f, "failed to run '{}': {reason}", tool.display())
            }
            CollectionError::Parse(reason) => write!(f, "unexpected tool output: {reason}"),
            CollectionError::NotImplemented => {
                write!(f, "not implemented on this platform")
            }
        }
    }
}

impl std::error::Error for CollectionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CollectionError::Execution {
                source: Some(err), ..
            } => Some(err),
            _ => None,
        }
    }
}

/// A [`Result`] with the error type being a [`CollectionError`].
pub type CollectionResult<T> = Result<T, CollectionError>;
