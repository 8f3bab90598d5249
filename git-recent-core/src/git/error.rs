use super::scope::Scope;
use thiserror::Error;

/// Failures from the git collaborators. Both are terminal for a run.
#[derive(Debug, Error)]
pub enum GitError {
    /// Branch enumeration failed, including when git could not be launched
    #[error("failed to list {scope} branches: {message}")]
    Source { scope: Scope, message: String },

    /// The selected branch could not be checked out
    #[error("failed to checkout {branch}: {message}")]
    Checkout { branch: String, message: String },
}

impl GitError {
    pub fn list_failed(scope: Scope, message: impl Into<String>) -> Self {
        Self::Source {
            scope,
            message: message.into(),
        }
    }

    pub fn checkout_failed(branch: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Checkout {
            branch: branch.into(),
            message: message.into(),
        }
    }
}
