use super::{CheckoutPlan, GitError, Scope, provider::GitProvider};
use std::sync::Mutex;

#[derive(Default)]
pub struct MockGitProvider {
    pub local_branches: Vec<String>,
    pub remote_branches: Vec<String>,
    pub list_error: Mutex<Option<GitError>>,
    pub checkout_result: Mutex<Option<Result<(), GitError>>>,
    pub checkout_calls: Mutex<Vec<CheckoutPlan>>,
}

impl GitProvider for MockGitProvider {
    fn list_recent_branches(&self, scope: Scope) -> Result<Vec<String>, GitError> {
        if let Some(err) = self.list_error.lock().unwrap().take() {
            return Err(err);
        }
        Ok(match scope {
            Scope::Local => self.local_branches.clone(),
            Scope::Remote => self.remote_branches.clone(),
        })
    }

    fn local_branch_exists(&self, name: &str) -> bool {
        self.local_branches.iter().any(|branch| branch == name)
    }

    fn run_checkout(&self, plan: &CheckoutPlan) -> Result<(), GitError> {
        self.checkout_calls.lock().unwrap().push(plan.clone());
        self.checkout_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or(Ok(()))
    }
}
