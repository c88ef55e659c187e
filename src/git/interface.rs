//! git::interface
//!
//! Git interface implementation using git2.
//!
//! This module provides the **single doorway** to all Git operations in
//! gitform. Every data source and resource flows through this interface,
//! which produces structured results and normalizes errors into typed
//! failure categories.
//!
//! # Architecture
//!
//! The `Git` struct is the only way to interact with a Git repository.
//! No other module should import `git2` directly. This ensures:
//!
//! - Consistent error handling across all Git operations
//! - Strong type guarantees at the boundary
//! - One place to reason about repository discovery and bare-repo policy
//!
//! # Error Handling
//!
//! Git errors are categorized into typed variants:
//! - [`GitError::NotARepo`]: Not inside a Git repository
//! - [`GitError::BareRepo`]: A worktree-dependent operation on a bare repo
//! - [`GitError::RefNotFound`]: Requested ref does not exist
//! - [`GitError::NothingToCommit`]: The index matches HEAD
//! - [`GitError::MissingIdentity`]: No author identity configured
//!
//! # Example
//!
//! ```ignore
//! use gitform::git::Git;
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! let head = git.head()?;
//! println!("HEAD is at {}", head.oid.short(7));
//! ```

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::git::types::{BranchName, Oid, TypeError};

/// Errors from Git operations.
///
/// These cover the categories of Git failures that gitform surfaces
/// distinctly. Data sources and resources convert them into diagnostics at
/// the provider boundary; nothing above that layer matches on `git2` codes.
#[derive(Debug, Error)]
pub enum GitError {
    /// Not inside a Git repository.
    #[error("not a git repository: {path}")]
    NotARepo {
        /// The path that was searched
        path: PathBuf,
    },

    /// Worktree-dependent operation on a bare repository.
    #[error("bare repository has no working tree")]
    BareRepo,

    /// Requested ref does not exist.
    #[error("ref not found: {refname}")]
    RefNotFound {
        /// The ref that was not found
        refname: String,
    },

    /// Object not found in repository.
    #[error("object not found: {oid}")]
    ObjectNotFound {
        /// The OID that was not found
        oid: String,
    },

    /// A revision spec that git cannot parse.
    #[error("invalid revision spec: {spec}")]
    InvalidSpec {
        /// The offending spec
        spec: String,
    },

    /// The index matches HEAD and `allow_empty` was not set.
    #[error("nothing to commit")]
    NothingToCommit,

    /// No author identity available from overrides or repository config.
    #[error("no author identity configured (set user.name and user.email)")]
    MissingIdentity,

    /// Internal git2 error.
    #[error("git error: {message}")]
    Internal {
        /// The error message
        message: String,
    },
}

impl GitError {
    /// Create a GitError from a git2::Error with richer context.
    fn from_git2(err: git2::Error, context: &str) -> Self {
        match err.code() {
            git2::ErrorCode::NotFound | git2::ErrorCode::UnbornBranch => {
                if context.starts_with("refs/") || context == "HEAD" {
                    GitError::RefNotFound {
                        refname: context.to_string(),
                    }
                } else {
                    GitError::ObjectNotFound {
                        oid: context.to_string(),
                    }
                }
            }
            git2::ErrorCode::InvalidSpec => GitError::InvalidSpec {
                spec: context.to_string(),
            },
            _ => GitError::Internal {
                message: format!("{}: {}", context, err.message()),
            },
        }
    }
}

impl From<TypeError> for GitError {
    fn from(err: TypeError) -> Self {
        GitError::Internal {
            message: err.to_string(),
        }
    }
}

/// Which branches to enumerate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BranchKind {
    /// Branches under `refs/heads/`.
    Local,
    /// Remote-tracking branches under `refs/remotes/`.
    Remote,
    /// Both.
    All,
}

/// Where HEAD points.
#[derive(Debug, Clone)]
pub struct HeadInfo {
    /// The checked-out branch, if HEAD is not detached.
    pub branch: Option<BranchName>,
    /// The commit HEAD resolves to.
    pub oid: Oid,
    /// Whether HEAD points directly at a commit.
    pub detached: bool,
}

/// One enumerated branch.
#[derive(Debug, Clone)]
pub struct BranchEntry {
    /// Branch name; remote branches carry their remote prefix (`origin/main`).
    pub name: BranchName,
    /// The commit the branch points to.
    pub oid: Oid,
    /// Whether this branch is checked out.
    pub is_head: bool,
    /// Upstream tracking branch, if configured.
    pub upstream: Option<String>,
}

/// One enumerated tag.
#[derive(Debug, Clone)]
pub struct TagEntry {
    /// Tag name without the `refs/tags/` prefix.
    pub name: String,
    /// The object the tag points to (the tagged commit for annotated tags).
    pub target: Oid,
    /// Whether this is an annotated tag object.
    pub annotated: bool,
    /// The tag message, for annotated tags.
    pub message: Option<String>,
}

/// One configured remote.
#[derive(Debug, Clone)]
pub struct RemoteEntry {
    /// Remote name (e.g. `origin`).
    pub name: String,
    /// Fetch URL.
    pub url: Option<String>,
    /// Push URL, if configured separately.
    pub push_url: Option<String>,
}

/// Information about a commit.
#[derive(Debug, Clone)]
pub struct CommitInfo {
    /// The commit OID
    pub oid: Oid,
    /// First line of the commit message
    pub summary: String,
    /// Full commit message
    pub message: String,
    /// Author name
    pub author_name: String,
    /// Author email
    pub author_email: String,
    /// Committer name
    pub committer_name: String,
    /// Committer email
    pub committer_email: String,
    /// Author timestamp
    pub author_time: chrono::DateTime<chrono::Utc>,
    /// Parent commit OIDs; empty for root commits.
    pub parents: Vec<Oid>,
}

/// State of in-progress Git operations.
///
/// A repository can be paused mid-operation (usually due to conflicts);
/// the status data source reports this so plans can observe it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitState {
    /// No operation in progress.
    Clean,

    /// Rebase in progress.
    Rebase {
        /// Current step in the rebase (1-indexed), if available.
        current: Option<usize>,
        /// Total steps in the rebase, if available.
        total: Option<usize>,
    },

    /// Merge in progress.
    Merge,

    /// Cherry-pick in progress.
    CherryPick,

    /// Revert in progress.
    Revert,

    /// Bisect in progress.
    Bisect,

    /// Apply mailbox in progress.
    ApplyMailbox,
}

impl GitState {
    /// Check if any operation is in progress.
    ///
    /// # Example
    ///
    /// ```
    /// use gitform::git::GitState;
    ///
    /// assert!(!GitState::Clean.is_in_progress());
    /// assert!(GitState::Merge.is_in_progress());
    /// ```
    pub fn is_in_progress(&self) -> bool {
        !matches!(self, GitState::Clean)
    }

    /// Get a human-readable description of the state.
    pub fn description(&self) -> &'static str {
        match self {
            GitState::Clean => "clean",
            GitState::Rebase { .. } => "rebase",
            GitState::Merge => "merge",
            GitState::CherryPick => "cherry-pick",
            GitState::Revert => "revert",
            GitState::Bisect => "bisect",
            GitState::ApplyMailbox => "apply-mailbox",
        }
    }
}

impl std::fmt::Display for GitState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GitState::Rebase {
                current: Some(c),
                total: Some(t),
            } => write!(f, "rebase ({}/{})", c, t),
            _ => write!(f, "{}", self.description()),
        }
    }
}

/// What changed about one file, on one side (index or worktree).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    New,
    Modified,
    Deleted,
    Renamed,
    TypeChange,
}

impl ChangeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChangeKind::New => "new",
            ChangeKind::Modified => "modified",
            ChangeKind::Deleted => "deleted",
            ChangeKind::Renamed => "renamed",
            ChangeKind::TypeChange => "typechange",
        }
    }
}

/// Status of one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStatus {
    /// Path relative to the repository root.
    pub path: String,
    /// Change staged in the index, if any.
    pub index: Option<ChangeKind>,
    /// Change in the working tree, if any. `New` means untracked.
    pub worktree: Option<ChangeKind>,
    /// Whether the file has unresolved conflicts.
    pub conflicted: bool,
}

/// Summary of working tree status.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorktreeStatus {
    /// Number of staged changes
    pub staged: usize,
    /// Number of unstaged changes to tracked files
    pub unstaged: usize,
    /// Number of untracked files (if requested)
    pub untracked: usize,
    /// Number of files with unresolved conflicts
    pub conflicted: usize,
    /// Per-file detail, in repository order.
    pub files: Vec<FileStatus>,
}

impl WorktreeStatus {
    /// Check if the worktree is clean.
    ///
    /// Untracked files do not count against cleanliness.
    pub fn is_clean(&self) -> bool {
        self.staged == 0 && self.unstaged == 0 && self.conflicted == 0
    }
}

/// Which configuration file to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigScope {
    /// `.git/config`
    Local,
    /// `~/.gitconfig` or XDG equivalent
    Global,
    /// `/etc/gitconfig`
    System,
    /// `.git/config.worktree`
    Worktree,
}

/// Inputs for [`Git::create_commit`].
#[derive(Debug, Clone)]
pub struct CommitOptions {
    /// The full commit message.
    pub message: String,
    /// Author name override; falls back to repository config.
    pub author_name: Option<String>,
    /// Author email override; falls back to repository config.
    pub author_email: Option<String>,
    /// Allow a commit whose tree matches its parent.
    pub allow_empty: bool,
}

/// The Git interface.
///
/// This is the **single point of interaction** with Git. All repository
/// reads and writes flow through this interface. No other module should
/// import `git2` directly (test fixtures excepted).
///
/// # Bare Repositories
///
/// Opening a bare repository succeeds; ref and object reads work as usual.
/// Operations that need a working tree or index ([`Git::status`],
/// [`Git::stage`], [`Git::create_commit`]) return [`GitError::BareRepo`].
///
/// # Example
///
/// ```ignore
/// use gitform::git::{BranchKind, Git};
/// use std::path::Path;
///
/// let git = Git::open(Path::new("."))?;
/// for branch in git.list_branches(BranchKind::Local)? {
///     println!("{} {}", branch.oid.short(7), branch.name);
/// }
/// ```
pub struct Git {
    /// The underlying git2 repository
    repo: git2::Repository,
}

impl std::fmt::Debug for Git {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Git")
            .field("path", &self.repo.path())
            .finish()
    }
}

impl Git {
    // =========================================================================
    // Repository Opening
    // =========================================================================

    /// Open a repository at the given path.
    ///
    /// Uses `git2::Repository::discover` to find the repository root,
    /// so `path` can be any directory within the repository.
    ///
    /// # Errors
    ///
    /// - [`GitError::NotARepo`] if no repository is found
    pub fn open(path: &Path) -> Result<Self, GitError> {
        let repo = git2::Repository::discover(path).map_err(|_| GitError::NotARepo {
            path: path.to_path_buf(),
        })?;

        Ok(Self { repo })
    }

    /// Whether the repository has no working tree.
    pub fn is_bare(&self) -> bool {
        self.repo.is_bare()
    }

    /// Reject bare repositories before a worktree-dependent operation.
    fn require_worktree(&self) -> Result<(), GitError> {
        if self.repo.is_bare() {
            return Err(GitError::BareRepo);
        }
        Ok(())
    }

    // =========================================================================
    // HEAD and Branches
    // =========================================================================

    /// Resolve HEAD to a branch and commit.
    ///
    /// # Errors
    ///
    /// - [`GitError::RefNotFound`] if HEAD is unborn (no commits yet)
    pub fn head(&self) -> Result<HeadInfo, GitError> {
        let head = self
            .repo
            .head()
            .map_err(|e| GitError::from_git2(e, "HEAD"))?;

        let commit = head
            .peel_to_commit()
            .map_err(|e| GitError::from_git2(e, "HEAD"))?;
        let detached = self.repo.head_detached().unwrap_or(false);

        let branch = if detached {
            None
        } else {
            head.shorthand()
                .filter(|name| *name != "HEAD")
                .map(BranchName::new)
                .transpose()?
        };

        Ok(HeadInfo {
            branch,
            oid: Oid::new(commit.id().to_string())?,
            detached,
        })
    }

    /// Enumerate branches.
    ///
    /// Symbolic remote entries (`origin/HEAD`) are skipped. The `upstream`
    /// field is populated for local branches with a configured tracking
    /// branch.
    pub fn list_branches(&self, kind: BranchKind) -> Result<Vec<BranchEntry>, GitError> {
        let filter = match kind {
            BranchKind::Local => Some(git2::BranchType::Local),
            BranchKind::Remote => Some(git2::BranchType::Remote),
            BranchKind::All => None,
        };

        let branches = self
            .repo
            .branches(filter)
            .map_err(|e| GitError::from_git2(e, "branches"))?;

        let mut entries = Vec::new();
        for branch in branches {
            let (branch, _branch_type) =
                branch.map_err(|e| GitError::from_git2(e, "branches"))?;

            let name = match branch.name() {
                Ok(Some(name)) => name.to_string(),
                // Non-UTF-8 names cannot round-trip through the value model.
                _ => continue,
            };
            let target = match branch.get().target() {
                Some(oid) => oid,
                None => continue,
            };

            let upstream = branch
                .upstream()
                .ok()
                .and_then(|up| up.name().ok().flatten().map(String::from));

            entries.push(BranchEntry {
                is_head: branch.is_head(),
                name: BranchName::new(name)?,
                oid: Oid::new(target.to_string())?,
                upstream,
            });
        }

        Ok(entries)
    }

    // =========================================================================
    // Tags and Remotes
    // =========================================================================

    /// Enumerate tags.
    ///
    /// Annotated tags report the tagged object as their target and carry
    /// their message; lightweight tags report the ref target directly.
    pub fn list_tags(&self) -> Result<Vec<TagEntry>, GitError> {
        let names = self
            .repo
            .tag_names(None)
            .map_err(|e| GitError::from_git2(e, "tags"))?;

        let mut entries = Vec::new();
        for name in names.iter().flatten() {
            let refname = format!("refs/tags/{}", name);
            let reference = self
                .repo
                .find_reference(&refname)
                .map_err(|e| GitError::from_git2(e, &refname))?;

            let target = reference.target().ok_or_else(|| GitError::RefNotFound {
                refname: refname.clone(),
            })?;

            let entry = match self.repo.find_tag(target) {
                Ok(tag) => TagEntry {
                    name: name.to_string(),
                    target: Oid::new(tag.target_id().to_string())?,
                    annotated: true,
                    message: tag.message().map(String::from),
                },
                Err(_) => TagEntry {
                    name: name.to_string(),
                    target: Oid::new(target.to_string())?,
                    annotated: false,
                    message: None,
                },
            };
            entries.push(entry);
        }

        Ok(entries)
    }

    /// Enumerate configured remotes with their fetch and push URLs.
    pub fn list_remotes(&self) -> Result<Vec<RemoteEntry>, GitError> {
        let names = self
            .repo
            .remotes()
            .map_err(|e| GitError::from_git2(e, "remotes"))?;

        let mut entries = Vec::new();
        for name in names.iter().flatten() {
            let remote = self
                .repo
                .find_remote(name)
                .map_err(|e| GitError::from_git2(e, name))?;

            entries.push(RemoteEntry {
                name: name.to_string(),
                url: remote.url().map(String::from),
                push_url: remote.pushurl().map(String::from),
            });
        }

        Ok(entries)
    }

    // =========================================================================
    // Revisions and Commits
    // =========================================================================

    /// Resolve a revision spec (`HEAD`, `main~2`, a short OID, a tag) to
    /// the commit it names.
    ///
    /// # Errors
    ///
    /// - [`GitError::RefNotFound`] if the spec names nothing
    /// - [`GitError::InvalidSpec`] if git cannot parse the spec
    /// - [`GitError::ObjectNotFound`] if the spec resolves to a non-commit
    pub fn revparse(&self, spec: &str) -> Result<Oid, GitError> {
        let object = self.repo.revparse_single(spec).map_err(|e| match e.code() {
            git2::ErrorCode::NotFound => GitError::RefNotFound {
                refname: spec.to_string(),
            },
            git2::ErrorCode::InvalidSpec => GitError::InvalidSpec {
                spec: spec.to_string(),
            },
            _ => GitError::Internal {
                message: format!("{}: {}", spec, e.message()),
            },
        })?;

        let commit = object.peel_to_commit().map_err(|_| GitError::ObjectNotFound {
            oid: object.id().to_string(),
        })?;

        Ok(Oid::new(commit.id().to_string())?)
    }

    /// Get information about a commit.
    ///
    /// # Errors
    ///
    /// - [`GitError::ObjectNotFound`] if the commit doesn't exist
    pub fn commit_info(&self, oid: &Oid) -> Result<CommitInfo, GitError> {
        let git_oid =
            git2::Oid::from_str(oid.as_str()).map_err(|e| GitError::from_git2(e, oid.as_str()))?;

        let commit = self
            .repo
            .find_commit(git_oid)
            .map_err(|e| GitError::from_git2(e, oid.as_str()))?;

        let author = commit.author();
        let committer = commit.committer();
        let author_time = chrono::DateTime::from_timestamp(author.when().seconds(), 0)
            .unwrap_or(chrono::DateTime::UNIX_EPOCH)
            .with_timezone(&chrono::Utc);

        let mut parents = Vec::new();
        for parent in commit.parent_ids() {
            parents.push(Oid::new(parent.to_string())?);
        }

        Ok(CommitInfo {
            oid: oid.clone(),
            summary: commit.summary().unwrap_or("").to_string(),
            message: commit.message().unwrap_or("").to_string(),
            author_name: author.name().unwrap_or("").to_string(),
            author_email: author.email().unwrap_or("").to_string(),
            committer_name: committer.name().unwrap_or("").to_string(),
            committer_email: committer.email().unwrap_or("").to_string(),
            author_time,
            parents,
        })
    }

    // =========================================================================
    // Working Tree Status and State
    // =========================================================================

    /// Get working tree status.
    ///
    /// If `include_untracked` is false, untracked files are neither counted
    /// nor listed.
    ///
    /// # Errors
    ///
    /// - [`GitError::BareRepo`] if the repository has no working tree
    pub fn status(&self, include_untracked: bool) -> Result<WorktreeStatus, GitError> {
        self.require_worktree()?;

        let mut opts = git2::StatusOptions::new();
        opts.include_untracked(include_untracked)
            .include_ignored(false);

        let statuses = self
            .repo
            .statuses(Some(&mut opts))
            .map_err(|e| GitError::from_git2(e, "status"))?;

        let mut result = WorktreeStatus::default();

        for entry in statuses.iter() {
            let status = entry.status();
            let path = match entry.path() {
                Some(path) => path.to_string(),
                None => String::from_utf8_lossy(entry.path_bytes()).into_owned(),
            };

            let index = index_change(status);
            let worktree = worktree_change(status);
            let conflicted = status.is_conflicted();

            if index.is_some() {
                result.staged += 1;
            }
            match worktree {
                Some(ChangeKind::New) => result.untracked += 1,
                Some(_) => result.unstaged += 1,
                None => {}
            }
            if conflicted {
                result.conflicted += 1;
            }

            result.files.push(FileStatus {
                path,
                index,
                worktree,
                conflicted,
            });
        }

        Ok(result)
    }

    /// Get the current Git state (rebase, merge, etc.).
    ///
    /// Detects in-progress operations that require user intervention
    /// (usually conflict resolution).
    pub fn state(&self) -> GitState {
        match self.repo.state() {
            git2::RepositoryState::Clean => GitState::Clean,
            git2::RepositoryState::Rebase
            | git2::RepositoryState::RebaseInteractive
            | git2::RepositoryState::RebaseMerge => {
                let (current, total) = self.read_rebase_progress();
                GitState::Rebase { current, total }
            }
            git2::RepositoryState::Merge => GitState::Merge,
            git2::RepositoryState::CherryPick | git2::RepositoryState::CherryPickSequence => {
                GitState::CherryPick
            }
            git2::RepositoryState::Revert | git2::RepositoryState::RevertSequence => {
                GitState::Revert
            }
            git2::RepositoryState::Bisect => GitState::Bisect,
            git2::RepositoryState::ApplyMailbox | git2::RepositoryState::ApplyMailboxOrRebase => {
                GitState::ApplyMailbox
            }
        }
    }

    /// Read rebase progress from .git/rebase-merge or .git/rebase-apply.
    fn read_rebase_progress(&self) -> (Option<usize>, Option<usize>) {
        let git_dir = self.repo.path();

        // rebase-merge is the interactive flavor
        let rebase_merge = git_dir.join("rebase-merge");
        if rebase_merge.exists() {
            let current = std::fs::read_to_string(rebase_merge.join("msgnum"))
                .ok()
                .and_then(|s| s.trim().parse().ok());
            let total = std::fs::read_to_string(rebase_merge.join("end"))
                .ok()
                .and_then(|s| s.trim().parse().ok());
            return (current, total);
        }

        let rebase_apply = git_dir.join("rebase-apply");
        if rebase_apply.exists() {
            let current = std::fs::read_to_string(rebase_apply.join("next"))
                .ok()
                .and_then(|s| s.trim().parse().ok());
            let total = std::fs::read_to_string(rebase_apply.join("last"))
                .ok()
                .and_then(|s| s.trim().parse().ok());
            return (current, total);
        }

        (None, None)
    }

    // =========================================================================
    // Configuration
    // =========================================================================

    /// Read configuration entries from one scope.
    ///
    /// Returns key/value pairs sorted by key; multi-valued keys appear once
    /// per value, in definition order. A scope whose file does not exist
    /// yields an empty list rather than an error.
    pub fn config_entries(&self, scope: ConfigScope) -> Result<Vec<(String, String)>, GitError> {
        let config = self
            .repo
            .config()
            .map_err(|e| GitError::from_git2(e, "config"))?;

        let level = match scope {
            ConfigScope::Local => git2::ConfigLevel::Local,
            ConfigScope::Global => git2::ConfigLevel::Global,
            ConfigScope::System => git2::ConfigLevel::System,
            ConfigScope::Worktree => git2::ConfigLevel::Worktree,
        };

        let scoped = match config.open_level(level) {
            Ok(scoped) => scoped,
            Err(e) if e.code() == git2::ErrorCode::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(GitError::from_git2(e, "config")),
        };

        let mut result = Vec::new();
        let entries = scoped
            .entries(None)
            .map_err(|e| GitError::from_git2(e, "config"))?;
        for entry in &entries {
            let entry = entry.map_err(|e| GitError::from_git2(e, "config"))?;
            if let (Some(name), Some(value)) = (entry.name(), entry.value()) {
                result.push((name.to_string(), value.to_string()));
            }
        }

        // Stable sort keeps multi-valued keys in definition order.
        result.sort_by(|a, b| a.0.cmp(&b.0));
        Ok(result)
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Stage files matching the given pathspecs.
    ///
    /// Returns the repository-relative paths actually added to the index,
    /// sorted.
    ///
    /// # Errors
    ///
    /// - [`GitError::BareRepo`] if the repository has no working tree
    pub fn stage(&self, pathspecs: &[String]) -> Result<Vec<String>, GitError> {
        self.require_worktree()?;

        let mut index = self
            .repo
            .index()
            .map_err(|e| GitError::from_git2(e, "index"))?;

        let mut staged = Vec::new();
        index
            .add_all(
                pathspecs.iter(),
                git2::IndexAddOption::DEFAULT,
                Some(&mut |path: &Path, _matched: &[u8]| {
                    staged.push(path.to_string_lossy().into_owned());
                    0
                }),
            )
            .map_err(|e| GitError::from_git2(e, "add"))?;

        index
            .write()
            .map_err(|e| GitError::from_git2(e, "index"))?;

        staged.sort();
        Ok(staged)
    }

    /// Create a commit from the current index.
    ///
    /// The author signature comes from `opts` overrides, falling back to
    /// repository config; the committer is always the configured identity.
    ///
    /// # Errors
    ///
    /// - [`GitError::BareRepo`] if the repository has no working tree
    /// - [`GitError::NothingToCommit`] if the index tree matches HEAD and
    ///   `allow_empty` is false
    /// - [`GitError::MissingIdentity`] if no author identity can be built
    pub fn create_commit(&self, opts: &CommitOptions) -> Result<Oid, GitError> {
        self.require_worktree()?;

        let author = self.author_signature(opts)?;
        let committer = self.repo.signature().ok();
        let committer = committer.as_ref().unwrap_or(&author);

        let mut index = self
            .repo
            .index()
            .map_err(|e| GitError::from_git2(e, "index"))?;
        let tree_oid = index
            .write_tree()
            .map_err(|e| GitError::from_git2(e, "index"))?;
        let tree = self
            .repo
            .find_tree(tree_oid)
            .map_err(|e| GitError::from_git2(e, "tree"))?;

        // HEAD is absent entirely in a freshly-initialized repository.
        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());

        if !opts.allow_empty {
            let unchanged = match &parent {
                Some(commit) => commit.tree_id() == tree_oid,
                None => tree.len() == 0,
            };
            if unchanged {
                return Err(GitError::NothingToCommit);
            }
        }

        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        let oid = self
            .repo
            .commit(
                Some("HEAD"),
                &author,
                committer,
                &opts.message,
                &tree,
                &parents,
            )
            .map_err(|e| GitError::from_git2(e, "commit"))?;

        Ok(Oid::new(oid.to_string())?)
    }

    /// Build the author signature from overrides and repository config.
    fn author_signature(&self, opts: &CommitOptions) -> Result<git2::Signature<'static>, GitError> {
        if let (Some(name), Some(email)) = (&opts.author_name, &opts.author_email) {
            return git2::Signature::now(name, email)
                .map_err(|e| GitError::from_git2(e, "signature"));
        }

        let configured = self
            .repo
            .signature()
            .map_err(|_| GitError::MissingIdentity)?;
        let name = opts
            .author_name
            .as_deref()
            .or_else(|| configured.name())
            .ok_or(GitError::MissingIdentity)?;
        let email = opts
            .author_email
            .as_deref()
            .or_else(|| configured.email())
            .ok_or(GitError::MissingIdentity)?;

        git2::Signature::now(name, email).map_err(|e| GitError::from_git2(e, "signature"))
    }
}

/// Map a git2 status to the staged change it represents, if any.
fn index_change(status: git2::Status) -> Option<ChangeKind> {
    if status.is_index_new() {
        Some(ChangeKind::New)
    } else if status.is_index_modified() {
        Some(ChangeKind::Modified)
    } else if status.is_index_deleted() {
        Some(ChangeKind::Deleted)
    } else if status.is_index_renamed() {
        Some(ChangeKind::Renamed)
    } else if status.is_index_typechange() {
        Some(ChangeKind::TypeChange)
    } else {
        None
    }
}

/// Map a git2 status to the worktree change it represents, if any.
fn worktree_change(status: git2::Status) -> Option<ChangeKind> {
    if status.is_wt_new() {
        Some(ChangeKind::New)
    } else if status.is_wt_modified() {
        Some(ChangeKind::Modified)
    } else if status.is_wt_deleted() {
        Some(ChangeKind::Deleted)
    } else if status.is_wt_renamed() {
        Some(ChangeKind::Renamed)
    } else if status.is_wt_typechange() {
        Some(ChangeKind::TypeChange)
    } else {
        None
    }
}
