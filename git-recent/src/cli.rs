use git_recent_core::git::GitError;

pub type CliResult<T> = Result<T, CliError>;

/// An error reported on stderr before exiting with `code`
#[derive(Debug, Clone)]
pub struct CliError {
    message: String,
    code: u8,
}

impl CliError {
    /// Git refused or failed the operation
    pub fn user(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 1,
        }
    }

    /// Config, terminal or other IO problems
    pub fn system(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 2,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn code(&self) -> u8 {
        self.code
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(value: anyhow::Error) -> Self {
        Self::system(format!("{value:#}"))
    }
}

impl From<GitError> for CliError {
    fn from(value: GitError) -> Self {
        Self::user(value.to_string())
    }
}

pub fn print_error(error: &CliError) {
    eprintln!("Error: {}", error.message());
}
