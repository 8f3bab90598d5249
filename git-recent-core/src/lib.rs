pub mod action;
pub mod config;
pub mod constants;
pub mod git;
pub mod state;

// Re-export commonly used types at crate root
pub use action::Action;
pub use config::Config;
pub use git::{GitError, GitProvider, Scope};
pub use state::{Mode, Outcome, SelectorState, transition};
