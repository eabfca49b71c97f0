//! Error types for the notebook resource.

use notebook_client::ClientError;
use std::fmt;
use thiserror::Error;

/// Result type alias for resource operations.
pub type Result<T> = std::result::Result<T, ResourceError>;

/// Lifecycle operation, named the way it appears in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Create,
    Read,
    Update,
    Delete,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = match self {
            Self::Create => "creating",
            Self::Read => "getting",
            Self::Update => "updating",
            Self::Delete => "deleting",
        };
        f.write_str(verb)
    }
}

/// Errors raised while translating or reconciling a notebook.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// No variant of a oneOf node is configured.
    #[error("failed to find valid definition in `{one_of}` configuration")]
    MissingDefinition { one_of: String },

    /// More than one variant of a oneOf node is configured.
    #[error("multiple definitions found in `{one_of}` configuration: {}", .found.join(", "))]
    MultipleDefinitions { one_of: String, found: Vec<String> },

    /// A configured value has the wrong type or is not an accepted value.
    #[error("invalid value at `{path}`: expected {expected}")]
    InvalidValue { path: String, expected: String },

    /// A required field is absent.
    #[error("missing required field `{path}`")]
    MissingField { path: String },

    #[error("invalid timestamp `{value}` at `{path}`")]
    InvalidTimestamp { path: String, value: String },

    /// Two formula queries of one request share a name.
    #[error("duplicate query name `{name}` at `{path}`")]
    DuplicateQueryName { path: String, name: String },

    #[error("invalid notebook id `{id}`: expected an integer")]
    InvalidId { id: String },

    #[error("error {operation} notebook: resource has no id")]
    MissingId { operation: Operation },

    /// The configuration root is not usable.
    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    /// The state setter rejected a value.
    #[error("cannot set `{key}` in state: {reason}")]
    State { key: String, reason: String },

    /// The API returned an object this crate does not model.
    #[error("unsupported object in API response at `{path}`")]
    UnparsedObject { path: String },

    #[error("error {operation} notebook: response contained no data")]
    EmptyResponse { operation: Operation },

    #[error("error {operation} notebook: {source}")]
    Api {
        operation: Operation,
        #[source]
        source: ClientError,
    },

    #[error("{operation} notebook cancelled")]
    Cancelled { operation: Operation },
}

impl ResourceError {
    /// Whether the error was raised locally before any request was sent.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingDefinition { .. }
                | Self::MultipleDefinitions { .. }
                | Self::InvalidValue { .. }
                | Self::MissingField { .. }
                | Self::InvalidTimestamp { .. }
                | Self::DuplicateQueryName { .. }
                | Self::InvalidId { .. }
                | Self::MissingId { .. }
                | Self::InvalidConfig { .. }
        )
    }

    /// The client error behind an API failure.
    pub fn client_error(&self) -> Option<&ClientError> {
        match self {
            Self::Api { source, .. } => Some(source),
            _ => None,
        }
    }

    pub(crate) fn api(operation: Operation) -> impl FnOnce(ClientError) -> Self {
        move |source| Self::Api { operation, source }
    }
}
