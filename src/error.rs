use thiserror::Error;

/// Unified error type for version resolution and formatting
#[derive(Error, Debug)]
pub enum VersError {
    #[error("Git operation failed: {0}")]
    Git(#[from] git2::Error),

    #[error("invalid tag pattern: {0}")]
    InvalidTagPattern(#[from] regex::Error),

    #[error("invalid version {input:?}: {reason}")]
    InvalidVersion { input: String, reason: String },

    #[error("version must have exactly 3 parts: {0:?}")]
    VersionParts(String),

    #[error("invalid prerelease type: {0:?}")]
    InvalidPrerelease(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("command `{command}` failed: {reason}")]
    Command { command: String, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to render output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<VersError>,
    },
}

/// Convenience type alias for Results in git-vers
pub type Result<T> = std::result::Result<T, VersError>;

impl VersError {
    /// Create a version parsing error for `input`
    pub fn invalid_version(input: impl Into<String>, reason: impl Into<String>) -> Self {
        VersError::InvalidVersion {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(msg: impl Into<String>) -> Self {
        VersError::NotFound(msg.into())
    }

    /// Create a native command error
    pub fn command(command: impl Into<String>, reason: impl Into<String>) -> Self {
        VersError::Command {
            command: command.into(),
            reason: reason.into(),
        }
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        VersError::Config(msg.into())
    }

    /// Wrap this error with the name of the stage that failed
    pub fn context(self, context: impl Into<String>) -> Self {
        VersError::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// The innermost error, with every context layer removed
    pub fn root(&self) -> &VersError {
        match self {
            VersError::Context { source, .. } => source.root(),
            other => other,
        }
    }

    /// Malformed caller input: tag pattern, version string, prerelease kind
    pub fn is_input_error(&self) -> bool {
        matches!(
            self.root(),
            VersError::InvalidTagPattern(_)
                | VersError::InvalidVersion { .. }
                | VersError::VersionParts(_)
                | VersError::InvalidPrerelease(_)
        )
    }

    pub fn is_not_found(&self) -> bool {
        match self.root() {
            VersError::NotFound(_) => true,
            VersError::Git(e) => e.code() == git2::ErrorCode::NotFound,
            _ => false,
        }
    }
}

/// Attach a stage name to the error side of a `Result`
pub trait ResultExt<T> {
    fn context(self, context: &str) -> Result<T>;
}

impl<T, E: Into<VersError>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: &str) -> Result<T> {
        self.map_err(|e| e.into().context(context))
    }
}
