use super::{
    CheckoutPlan, FOR_EACH_REF_FORMAT, GitError, Scope, parse_for_each_ref,
    provider::GitProvider,
};
use std::{
    io,
    path::PathBuf,
    process::{Command, Output},
};

/// Shells out to the system `git` binary inside `workdir`.
pub struct CliGitProvider {
    workdir: PathBuf,
}

impl Default for CliGitProvider {
    fn default() -> Self {
        Self::new(".")
    }
}

impl CliGitProvider {
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    fn git(&self, args: &[&str]) -> io::Result<Output> {
        log::debug!("running git {}", args.join(" "));
        Command::new("git")
            .args(args)
            .current_dir(&self.workdir)
            .output()
    }
}

/// Best human-readable explanation for a failed git invocation
fn failure_message(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if stderr.is_empty() {
        format!("git exited with {}", output.status)
    } else {
        stderr.to_string()
    }
}

impl GitProvider for CliGitProvider {
    fn list_recent_branches(&self, scope: Scope) -> Result<Vec<String>, GitError> {
        let output = self
            .git(&[
                "for-each-ref",
                "--sort=-committerdate",
                FOR_EACH_REF_FORMAT,
                scope.ref_prefix(),
            ])
            .map_err(|e| GitError::list_failed(scope, format!("could not run git: {e}")))?;

        if !output.status.success() {
            let message = failure_message(&output);
            log::warn!("git for-each-ref failed: {message}");
            return Err(GitError::list_failed(scope, message));
        }

        let branches = parse_for_each_ref(&String::from_utf8_lossy(&output.stdout));
        log::debug!("found {} {scope} branches", branches.len());
        Ok(branches)
    }

    fn local_branch_exists(&self, name: &str) -> bool {
        let reference = format!("refs/heads/{name}");
        self.git(&["show-ref", "--verify", "--quiet", &reference])
            .is_ok_and(|output| output.status.success())
    }

    fn run_checkout(&self, plan: &CheckoutPlan) -> Result<(), GitError> {
        let branch = plan.local_branch();
        let output = self
            .git(&plan.args())
            .map_err(|e| GitError::checkout_failed(branch, format!("could not run git: {e}")))?;

        if !output.status.success() {
            let message = failure_message(&output);
            log::warn!("git checkout failed: {message}");
            return Err(GitError::checkout_failed(branch, message));
        }

        Ok(())
    }
}
