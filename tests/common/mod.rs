#![allow(dead_code)]

use git2::{Oid, Repository, Signature, Time};
use git_vers::git::{CommandOutput, CommandRunner, Git2Repository};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Committer time of the first commit in every test repository
pub const TS: i64 = 1_700_000_000;

/// An on-disk repository with deterministic commit times
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository,
    next_time: i64,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Could not create temp dir");
        let repo = Repository::init(dir.path()).expect("Could not init git repo");
        {
            let mut config = repo.config().expect("Could not get config");
            config
                .set_str("user.name", "Test User")
                .expect("Could not set user.name");
            config
                .set_str("user.email", "test@example.com")
                .expect("Could not set user.email");
        }

        TestRepo {
            dir,
            repo,
            next_time: TS,
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `file`, stage it and commit on HEAD; commit times advance by 60s
    pub fn commit(&mut self, file: &str, content: &str, message: &str) -> Oid {
        fs::write(self.dir.path().join(file), content).expect("Could not write file");

        let mut index = self.repo.index().expect("Could not get index");
        index
            .add_path(Path::new(file))
            .expect("Could not add file to index");
        index.write().expect("Could not write index");

        let tree_id = index.write_tree().expect("Could not write tree");
        let tree = self.repo.find_tree(tree_id).expect("Could not find tree");

        let sig = Signature::new("Test User", "test@example.com", &Time::new(self.next_time, 0))
            .expect("Could not create signature");
        self.next_time += 60;

        let parent = self
            .repo
            .head()
            .ok()
            .and_then(|head| head.peel_to_commit().ok());
        let parents: Vec<&git2::Commit> = parent.iter().collect();

        self.repo
            .commit(Some("HEAD"), &sig, &sig, message, &tree, &parents)
            .expect("Could not create commit")
    }

    pub fn tag(&self, name: &str, target: Oid) {
        let object = self.repo.find_object(target, None).unwrap();
        self.repo
            .tag_lightweight(name, &object, false)
            .expect("Could not create tag");
    }

    pub fn annotated_tag(&self, name: &str, target: Oid) {
        let object = self.repo.find_object(target, None).unwrap();
        let sig = Signature::new("Test User", "test@example.com", &Time::new(TS, 0)).unwrap();
        self.repo
            .tag(name, &object, &sig, "release", false)
            .expect("Could not create annotated tag");
    }

    pub fn write(&self, file: &str, content: &str) {
        fs::write(self.dir.path().join(file), content).expect("Could not write file");
    }

    pub fn open(&self) -> Git2Repository {
        Git2Repository::open(self.path()).expect("Could not open repository")
    }

    pub fn workdir(&self) -> PathBuf {
        self.repo.workdir().unwrap().to_path_buf()
    }
}

/// First 8 hex characters of a commit id
pub fn short(id: Oid) -> String {
    id.to_string()[..8].to_string()
}

/// Pretends the native tool reports a clean tree
pub struct CleanRunner;

impl CommandRunner for CleanRunner {
    fn run(&self, _program: &str, _args: &[&str], _work_dir: &Path) -> io::Result<CommandOutput> {
        Ok(CommandOutput {
            stdout: Vec::new(),
            success: true,
        })
    }
}

/// Whether a `git` binary is on PATH
pub fn git_available() -> bool {
    Command::new("git")
        .arg("--version")
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
