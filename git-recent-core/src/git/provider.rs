use super::{CheckoutPlan, GitError, Scope};

pub trait GitProvider: Send + Sync {
    /// Branch short names, most recently committed first, without symbolic refs.
    fn list_recent_branches(&self, scope: Scope) -> Result<Vec<String>, GitError>;
    fn local_branch_exists(&self, name: &str) -> bool;
    fn run_checkout(&self, plan: &CheckoutPlan) -> Result<(), GitError>;
}
