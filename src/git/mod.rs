//! git
//!
//! Single interface for all Git operations.
//!
//! # Architecture
//!
//! This module is the **ONLY doorway** to Git. All repository reads and
//! writes flow through this interface. No other module imports `git2`
//! (test fixtures excepted). This ensures consistent error handling and
//! keeps the rest of the crate working with strong types ([`Oid`],
//! [`BranchName`]) instead of raw strings.
//!
//! # Responsibilities
//!
//! - Repository discovery and opening
//! - Enumerating branches, tags, and remotes
//! - Revision resolution and commit inspection
//! - Working tree status and in-progress state detection
//! - Configuration reads per scope
//! - Staging files and creating commits
//!
//! # Example
//!
//! ```ignore
//! use gitform::git::{BranchKind, Git};
//! use std::path::Path;
//!
//! let git = Git::open(Path::new("."))?;
//! let head = git.head()?;
//! let branches = git.list_branches(BranchKind::Local)?;
//! ```

mod interface;
pub mod types;

pub use interface::{
    BranchEntry, BranchKind, ChangeKind, CommitInfo, CommitOptions, ConfigScope, FileStatus, Git,
    GitError, GitState, HeadInfo, RemoteEntry, TagEntry, WorktreeStatus,
};
pub use types::{BranchName, Oid, TypeError};
