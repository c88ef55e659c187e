//! Integration tests for the Git interface.
//!
//! These tests build real repositories via the shared fixture and verify
//! that the Git interface reads and writes them correctly.

mod common;

use common::TestRepo;
use gitform::git::{BranchKind, CommitOptions, ConfigScope, Git, GitError};

// =============================================================================
// Opening
// =============================================================================

#[test]
fn open_discovers_repository_from_subdirectory() {
    let repo = TestRepo::init();
    repo.commit_file("README.md", "# Test\n", "initial commit");

    let sub = repo.path().join("nested/dir");
    std::fs::create_dir_all(&sub).unwrap();

    let git = Git::open(&sub).unwrap();
    let head = git.head().unwrap();
    assert_eq!(head.branch.unwrap().as_str(), "main");
}

#[test]
fn open_outside_a_repository_fails() {
    let dir = tempfile::TempDir::new().unwrap();
    let err = Git::open(dir.path()).unwrap_err();
    assert!(matches!(err, GitError::NotARepo { .. }));
}

// =============================================================================
// HEAD and Branches
// =============================================================================

#[test]
fn head_reports_branch_and_oid() {
    let repo = TestRepo::init();
    let oid = repo.commit_file("a.txt", "a", "first");

    let git = Git::open(repo.path()).unwrap();
    let head = git.head().unwrap();
    assert_eq!(head.branch.unwrap().as_str(), "main");
    assert_eq!(head.oid.as_str(), oid.to_string());
    assert!(!head.detached);
}

#[test]
fn head_reports_detached_state() {
    let repo = TestRepo::init();
    repo.commit_file("a.txt", "a", "first");
    repo.detach();

    let git = Git::open(repo.path()).unwrap();
    let head = git.head().unwrap();
    assert!(head.detached);
    assert!(head.branch.is_none());
}

#[test]
fn head_on_unborn_branch_is_ref_not_found() {
    let repo = TestRepo::init();

    let git = Git::open(repo.path()).unwrap();
    let err = git.head().unwrap_err();
    assert!(matches!(err, GitError::RefNotFound { .. }));
}

#[test]
fn list_branches_reports_head_flag() {
    let repo = TestRepo::init();
    repo.commit_file("a.txt", "a", "first");
    repo.branch("feature");

    let git = Git::open(repo.path()).unwrap();
    let branches = git.list_branches(BranchKind::Local).unwrap();
    assert_eq!(branches.len(), 2);

    let main = branches.iter().find(|b| b.name.as_str() == "main").unwrap();
    let feature = branches
        .iter()
        .find(|b| b.name.as_str() == "feature")
        .unwrap();
    assert!(main.is_head);
    assert!(!feature.is_head);
    assert_eq!(main.oid, feature.oid);
}

#[test]
fn list_branches_reports_upstream() {
    let repo = TestRepo::init();
    repo.commit_file("a.txt", "a", "first");
    repo.add_remote("origin", "https://example.com/repo.git");
    repo.set_upstream("main", "origin/main");

    let git = Git::open(repo.path()).unwrap();
    let branches = git.list_branches(BranchKind::Local).unwrap();
    let main = branches.iter().find(|b| b.name.as_str() == "main").unwrap();
    assert_eq!(main.upstream.as_deref(), Some("origin/main"));

    let remote = git.list_branches(BranchKind::Remote).unwrap();
    assert_eq!(remote.len(), 1);
    assert_eq!(remote[0].name.as_str(), "origin/main");

    let all = git.list_branches(BranchKind::All).unwrap();
    assert_eq!(all.len(), 2);
}

// =============================================================================
// Tags and Remotes
// =============================================================================

#[test]
fn list_tags_distinguishes_annotated_and_lightweight() {
    let repo = TestRepo::init();
    let oid = repo.commit_file("a.txt", "a", "first");
    repo.light_tag("v0.1.0");
    repo.annotated_tag("v1.0.0", "release 1.0\n");

    let git = Git::open(repo.path()).unwrap();
    let tags = git.list_tags().unwrap();
    assert_eq!(tags.len(), 2);

    let light = tags.iter().find(|t| t.name == "v0.1.0").unwrap();
    assert!(!light.annotated);
    assert!(light.message.is_none());
    assert_eq!(light.target.as_str(), oid.to_string());

    let annotated = tags.iter().find(|t| t.name == "v1.0.0").unwrap();
    assert!(annotated.annotated);
    assert_eq!(annotated.message.as_deref(), Some("release 1.0\n"));
    assert_eq!(annotated.target.as_str(), oid.to_string());
}

#[test]
fn list_remotes_reports_urls() {
    let repo = TestRepo::init();
    repo.commit_file("a.txt", "a", "first");
    repo.add_remote("origin", "https://example.com/repo.git");

    let git = Git::open(repo.path()).unwrap();
    let remotes = git.list_remotes().unwrap();
    assert_eq!(remotes.len(), 1);
    assert_eq!(remotes[0].name, "origin");
    assert_eq!(remotes[0].url.as_deref(), Some("https://example.com/repo.git"));
    assert!(remotes[0].push_url.is_none());
}

// =============================================================================
// Revisions and Commits
// =============================================================================

#[test]
fn revparse_resolves_refs_tags_and_short_oids() {
    let repo = TestRepo::init();
    let first = repo.commit_file("a.txt", "a", "first");
    repo.light_tag("marker");
    let second = repo.commit_file("a.txt", "b", "second");

    let git = Git::open(repo.path()).unwrap();
    assert_eq!(git.revparse("HEAD").unwrap().as_str(), second.to_string());
    assert_eq!(git.revparse("HEAD~1").unwrap().as_str(), first.to_string());
    assert_eq!(git.revparse("marker").unwrap().as_str(), first.to_string());
    assert_eq!(git.revparse("main").unwrap().as_str(), second.to_string());

    let short = &second.to_string()[..7];
    assert_eq!(git.revparse(short).unwrap().as_str(), second.to_string());
}

#[test]
fn revparse_unknown_ref_is_ref_not_found() {
    let repo = TestRepo::init();
    repo.commit_file("a.txt", "a", "first");

    let git = Git::open(repo.path()).unwrap();
    let err = git.revparse("no-such-ref").unwrap_err();
    assert!(matches!(err, GitError::RefNotFound { .. }));
}

#[test]
fn commit_info_reports_metadata_and_parents() {
    let repo = TestRepo::init();
    let first = repo.commit_file("a.txt", "a", "first");
    let second = repo.commit_file("a.txt", "b", "second\n\nwith a body\n");

    let git = Git::open(repo.path()).unwrap();
    let oid = git.revparse(&second.to_string()).unwrap();
    let info = git.commit_info(&oid).unwrap();

    assert_eq!(info.summary, "second");
    assert!(info.message.contains("with a body"));
    assert_eq!(info.author_name, "Test User");
    assert_eq!(info.author_email, "test@example.com");
    assert_eq!(info.parents.len(), 1);
    assert_eq!(info.parents[0].as_str(), first.to_string());
}

#[test]
fn commit_info_root_commit_has_no_parents() {
    let repo = TestRepo::init();
    repo.commit_file("a.txt", "a", "first");

    let git = Git::open(repo.path()).unwrap();
    let oid = git.revparse("HEAD").unwrap();
    assert!(git.commit_info(&oid).unwrap().parents.is_empty());
}

// =============================================================================
// Status
// =============================================================================

#[test]
fn status_of_fresh_commit_is_clean() {
    let repo = TestRepo::init();
    repo.commit_file("a.txt", "a", "first");

    let git = Git::open(repo.path()).unwrap();
    let status = git.status(true).unwrap();
    assert!(status.is_clean());
    assert!(status.files.is_empty());
}

#[test]
fn status_counts_staged_unstaged_and_untracked() {
    let repo = TestRepo::init();
    repo.commit_file("a.txt", "a", "first");
    repo.write_file("a.txt", "changed");
    repo.write_file("staged.txt", "new");
    repo.stage_file("staged.txt");
    repo.write_file("untracked.txt", "x");

    let git = Git::open(repo.path()).unwrap();
    let status = git.status(true).unwrap();
    assert_eq!(status.staged, 1);
    assert_eq!(status.unstaged, 1);
    assert_eq!(status.untracked, 1);
    assert_eq!(status.conflicted, 0);
    assert!(!status.is_clean());

    let modified = status.files.iter().find(|f| f.path == "a.txt").unwrap();
    assert!(modified.index.is_none());
    assert!(modified.worktree.is_some());

    let staged = status.files.iter().find(|f| f.path == "staged.txt").unwrap();
    assert!(staged.index.is_some());
}

#[test]
fn status_can_exclude_untracked_files() {
    let repo = TestRepo::init();
    repo.commit_file("a.txt", "a", "first");
    repo.write_file("untracked.txt", "x");

    let git = Git::open(repo.path()).unwrap();
    let with = git.status(true).unwrap();
    assert_eq!(with.untracked, 1);

    let without = git.status(false).unwrap();
    assert_eq!(without.untracked, 0);
    assert!(without.files.is_empty());
}

#[test]
fn state_of_idle_repository_is_clean() {
    let repo = TestRepo::init();
    repo.commit_file("a.txt", "a", "first");

    let git = Git::open(repo.path()).unwrap();
    assert!(!git.state().is_in_progress());
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn config_entries_reads_local_scope() {
    let repo = TestRepo::init();
    repo.commit_file("a.txt", "a", "first");
    repo.set_config("custom.key", "custom-value");

    let git = Git::open(repo.path()).unwrap();
    let entries = git.config_entries(ConfigScope::Local).unwrap();
    assert!(entries
        .iter()
        .any(|(k, v)| k == "custom.key" && v == "custom-value"));
    assert!(entries.iter().any(|(k, v)| k == "user.name" && v == "Test User"));

    // Sorted by key.
    let keys: Vec<&String> = entries.iter().map(|(k, _)| k).collect();
    let mut sorted = keys.clone();
    sorted.sort();
    assert_eq!(keys, sorted);
}

// =============================================================================
// Mutations
// =============================================================================

#[test]
fn stage_adds_matching_files_to_the_index() {
    let repo = TestRepo::init();
    repo.commit_file("README.md", "# Test\n", "first");
    repo.write_file("one.txt", "1");
    repo.write_file("two.txt", "2");
    repo.write_file("other.rs", "fn main() {}");

    let git = Git::open(repo.path()).unwrap();
    let staged = git.stage(&["*.txt".to_string()]).unwrap();
    assert_eq!(staged, vec!["one.txt".to_string(), "two.txt".to_string()]);
}

#[test]
fn create_commit_from_staged_files() {
    let repo = TestRepo::init();
    repo.commit_file("a.txt", "a", "first");
    repo.write_file("b.txt", "b");
    repo.stage_file("b.txt");

    let git = Git::open(repo.path()).unwrap();
    let oid = git
        .create_commit(&CommitOptions {
            message: "add b\n".to_string(),
            author_name: None,
            author_email: None,
            allow_empty: false,
        })
        .unwrap();

    let info = git.commit_info(&oid).unwrap();
    assert_eq!(info.summary, "add b");
    assert_eq!(info.author_name, "Test User");
    assert_eq!(git.head().unwrap().oid, oid);
}

#[test]
fn create_commit_honors_author_override() {
    let repo = TestRepo::init();
    repo.commit_file("a.txt", "a", "first");
    repo.write_file("b.txt", "b");
    repo.stage_file("b.txt");

    let git = Git::open(repo.path()).unwrap();
    let oid = git
        .create_commit(&CommitOptions {
            message: "override".to_string(),
            author_name: Some("Someone Else".to_string()),
            author_email: Some("else@example.com".to_string()),
            allow_empty: false,
        })
        .unwrap();

    let info = git.commit_info(&oid).unwrap();
    assert_eq!(info.author_name, "Someone Else");
    assert_eq!(info.author_email, "else@example.com");
    // Committer stays the configured identity.
    assert_eq!(info.committer_name, "Test User");
}

#[test]
fn create_commit_with_unchanged_index_is_rejected() {
    let repo = TestRepo::init();
    repo.commit_file("a.txt", "a", "first");

    let git = Git::open(repo.path()).unwrap();
    let err = git
        .create_commit(&CommitOptions {
            message: "empty".to_string(),
            author_name: None,
            author_email: None,
            allow_empty: false,
        })
        .unwrap_err();
    assert!(matches!(err, GitError::NothingToCommit));
}

#[test]
fn create_commit_allow_empty_permits_unchanged_index() {
    let repo = TestRepo::init();
    let first = repo.commit_file("a.txt", "a", "first");

    let git = Git::open(repo.path()).unwrap();
    let oid = git
        .create_commit(&CommitOptions {
            message: "empty on purpose".to_string(),
            author_name: None,
            author_email: None,
            allow_empty: true,
        })
        .unwrap();

    let info = git.commit_info(&oid).unwrap();
    assert_eq!(info.parents.len(), 1);
    assert_eq!(info.parents[0].as_str(), first.to_string());
}

// =============================================================================
// Bare Repositories
// =============================================================================

#[test]
fn bare_repository_rejects_worktree_operations() {
    let repo = TestRepo::init_bare();

    let git = Git::open(repo.path()).unwrap();
    assert!(git.is_bare());
    assert!(matches!(git.status(true), Err(GitError::BareRepo)));
    assert!(matches!(
        git.stage(&["a.txt".to_string()]),
        Err(GitError::BareRepo)
    ));
    assert!(matches!(
        git.create_commit(&CommitOptions {
            message: "x".to_string(),
            author_name: None,
            author_email: None,
            allow_empty: false,
        }),
        Err(GitError::BareRepo)
    ));
}

#[test]
fn bare_repository_still_answers_ref_reads() {
    let repo = TestRepo::init_bare();

    let git = Git::open(repo.path()).unwrap();
    assert!(git.list_branches(BranchKind::Local).unwrap().is_empty());
    assert!(git.list_tags().unwrap().is_empty());
}
