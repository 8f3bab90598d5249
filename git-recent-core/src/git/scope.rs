use std::fmt;

/// Which refs the branch list and checkout operate on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    #[default]
    Local,
    Remote,
}

impl Scope {
    pub fn from_remote_flag(remote: bool) -> Self {
        if remote { Self::Remote } else { Self::Local }
    }

    /// The ref namespace handed to `git for-each-ref`
    pub const fn ref_prefix(self) -> &'static str {
        match self {
            Self::Local => "refs/heads/",
            Self::Remote => "refs/remotes/",
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Remote => "remote",
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
