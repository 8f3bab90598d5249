pub mod cli;
pub mod error;
pub mod mock;
pub mod provider;
pub mod scope;

pub use cli::CliGitProvider;
pub use error::GitError;
pub use provider::GitProvider;
pub use scope::Scope;

/// Separator between the short ref name and the symref target in `for-each-ref` output
pub const FIELD_SEPARATOR: char = '\t';

/// `--format` argument matching [`parse_for_each_ref`]
pub const FOR_EACH_REF_FORMAT: &str = "--format=%(refname:short)%09%(symref)";

/// Parse `git for-each-ref --format=%(refname:short)%09%(symref)` output into branch names.
///
/// Symbolic refs (e.g. `origin/HEAD -> origin/main`) are dropped, as is anything ending in
/// `/HEAD` for output that lacks the symref column.
pub fn parse_for_each_ref(output: &str) -> Vec<String> {
    output
        .lines()
        .filter_map(|line| {
            let (name, symref) = line.split_once(FIELD_SEPARATOR).unwrap_or((line, ""));
            let name = name.trim();
            if name.is_empty() || !symref.trim().is_empty() || name.ends_with("/HEAD") {
                return None;
            }
            Some(name.to_string())
        })
        .collect()
}

/// Split `origin/feature/x` into the local branch name `feature/x`
pub fn local_name_for(remote_branch: &str) -> Option<&str> {
    remote_branch
        .split_once('/')
        .map(|(_, local)| local)
        .filter(|local| !local.is_empty())
}

/// The git command a selection resolves to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckoutPlan {
    /// `git checkout <branch>` on an existing local branch
    Switch(String),
    /// `git checkout --track <remote>/<branch>`, creating the local tracking branch
    Track(String),
}

impl CheckoutPlan {
    pub fn args(&self) -> Vec<&str> {
        match self {
            Self::Switch(branch) => vec!["checkout", branch],
            Self::Track(remote_ref) => vec!["checkout", "--track", remote_ref],
        }
    }

    /// Name of the local branch that will be checked out once the plan runs
    pub fn local_branch(&self) -> &str {
        match self {
            Self::Switch(branch) => branch,
            Self::Track(remote_ref) => local_name_for(remote_ref).unwrap_or(remote_ref),
        }
    }
}

/// Decide how to check out `branch`.
///
/// Remote branches switch to the same-named local branch when one already exists,
/// otherwise a new tracking branch is created from the full remote ref.
pub fn plan_checkout(
    branch: &str,
    scope: Scope,
    local_exists: impl Fn(&str) -> bool,
) -> CheckoutPlan {
    match scope {
        Scope::Local => CheckoutPlan::Switch(branch.to_string()),
        Scope::Remote => match local_name_for(branch) {
            Some(local) if local_exists(local) => CheckoutPlan::Switch(local.to_string()),
            _ => CheckoutPlan::Track(branch.to_string()),
        },
    }
}

/// Check out a selected branch, returning the local branch name that is now checked out.
pub fn checkout(git: &dyn GitProvider, branch: &str, scope: Scope) -> Result<String, GitError> {
    let plan = plan_checkout(branch, scope, |local| git.local_branch_exists(local));
    log::info!("checking out {branch} ({scope}) via {plan:?}");
    git.run_checkout(&plan)?;
    Ok(plan.local_branch().to_string())
}
