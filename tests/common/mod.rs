//! Shared test fixture for building real git repositories.
//!
//! Drives git2 directly. This is the one place outside `src/git` that
//! touches git2; everything under test goes through the crate's own
//! interfaces.

use std::fs;
use std::path::Path;

use git2::{Repository, Signature};
use tempfile::TempDir;

/// An ephemeral repository rooted in a temp directory.
///
/// The directory is removed when the fixture is dropped.
pub struct TestRepo {
    dir: TempDir,
    pub repo: Repository,
}

#[allow(dead_code)] // not every suite uses every helper
impl TestRepo {
    /// Initialize a repository with `main` as the initial branch and a
    /// configured identity.
    pub fn init() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let repo = Repository::init(dir.path()).expect("failed to init repo");
        repo.set_head("refs/heads/main").unwrap();
        {
            let mut config = repo.config().unwrap();
            config.set_str("user.name", "Test User").unwrap();
            config.set_str("user.email", "test@example.com").unwrap();
        }
        Self { dir, repo }
    }

    /// Initialize a bare repository.
    pub fn init_bare() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let repo = Repository::init_bare(dir.path()).expect("failed to init bare repo");
        Self { dir, repo }
    }

    /// Path to the repository root.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    fn signature(&self) -> Signature<'static> {
        Signature::now("Test User", "test@example.com").unwrap()
    }

    /// Write a file, stage it, and commit it, returning the new commit id.
    pub fn commit_file(&self, name: &str, content: &str, message: &str) -> git2::Oid {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();

        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
        let tree_oid = index.write_tree().unwrap();
        let tree = self.repo.find_tree(tree_oid).unwrap();

        let sig = self.signature();
        let parent = self.repo.head().ok().and_then(|h| h.peel_to_commit().ok());
        let parents: Vec<&git2::Commit<'_>> = parent.iter().collect();
        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .unwrap()
    }

    /// Write a file without staging it.
    pub fn write_file(&self, name: &str, content: &str) {
        fs::write(self.dir.path().join(name), content).unwrap();
    }

    /// Stage one already-written file.
    pub fn stage_file(&self, name: &str) {
        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new(name)).unwrap();
        index.write().unwrap();
    }

    /// Create a branch at HEAD.
    pub fn branch(&self, name: &str) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo.branch(name, &head, false).unwrap();
    }

    /// Check out an existing branch.
    pub fn checkout(&self, name: &str) {
        self.repo
            .set_head(&format!("refs/heads/{}", name))
            .unwrap();
        self.repo
            .checkout_head(Some(git2::build::CheckoutBuilder::new().force()))
            .unwrap();
    }

    /// Detach HEAD at the current commit.
    pub fn detach(&self) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo.set_head_detached(head.id()).unwrap();
    }

    /// Create a lightweight tag at HEAD.
    pub fn light_tag(&self, name: &str) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo
            .tag_lightweight(name, head.as_object(), false)
            .unwrap();
    }

    /// Create an annotated tag at HEAD.
    pub fn annotated_tag(&self, name: &str, message: &str) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        let sig = self.signature();
        self.repo
            .tag(name, head.as_object(), &sig, message, false)
            .unwrap();
    }

    /// Add a remote.
    pub fn add_remote(&self, name: &str, url: &str) {
        self.repo.remote(name, url).unwrap();
    }

    /// Point a remote-tracking ref at HEAD and set it as the upstream of a
    /// local branch. The remote itself must already exist (`add_remote`).
    pub fn set_upstream(&self, branch: &str, upstream: &str) {
        let head = self.repo.head().unwrap().peel_to_commit().unwrap();
        self.repo
            .reference(
                &format!("refs/remotes/{}", upstream),
                head.id(),
                true,
                "fixture upstream",
            )
            .unwrap();
        let mut local = self
            .repo
            .find_branch(branch, git2::BranchType::Local)
            .unwrap();
        local.set_upstream(Some(upstream)).unwrap();
    }

    /// Set a key in the repository-local configuration.
    pub fn set_config(&self, key: &str, value: &str) {
        self.repo.config().unwrap().set_str(key, value).unwrap();
    }
}
