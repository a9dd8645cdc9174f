//! Reading a file's committed (HEAD) version for single-path comparisons.

use git2::Repository;
use std::path::{Path, PathBuf};

/// Error types for HEAD content lookup
#[derive(Debug)]
pub enum GitError {
    /// Path is not inside a git repository
    NotARepo,
    /// File has no version in HEAD (untracked or never committed)
    NotTracked,
    /// Blob content is not valid UTF-8
    BadEncoding,
    /// Other git error
    Git(git2::Error),
}

impl std::fmt::Display for GitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GitError::NotARepo => write!(f, "not a git repository"),
            GitError::NotTracked => write!(f, "file has no committed version in HEAD"),
            GitError::BadEncoding => write!(f, "HEAD version is not valid UTF-8"),
            GitError::Git(e) => write!(f, "git error: {}", e),
        }
    }
}

impl From<git2::Error> for GitError {
    fn from(err: git2::Error) -> Self {
        GitError::Git(err)
    }
}

/// Resolve `path` to an absolute, symlink-free form. Canonicalization matters
/// on macOS where temp paths reach the repo through /var -> /private/var.
fn absolute(path: &str) -> Result<PathBuf, GitError> {
    let path = Path::new(path);
    let abs = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .map_err(|_| GitError::NotARepo)?
    };
    abs.canonicalize().map_err(|_| GitError::NotARepo)
}

/// Content of `path` as committed in HEAD.
pub fn head_content(path: &str) -> Result<String, GitError> {
    let abs_path = absolute(path)?;
    let repo = Repository::discover(&abs_path).map_err(|_| GitError::NotARepo)?;
    let workdir = repo.workdir().ok_or(GitError::NotARepo)?;
    let relative = abs_path
        .strip_prefix(workdir)
        .map_err(|_| GitError::NotARepo)?;

    let head = repo.head().map_err(|_| GitError::NotTracked)?;
    let tree = head.peel_to_commit()?.tree()?;
    let entry = tree.get_path(relative).map_err(|_| GitError::NotTracked)?;

    let blob = repo.find_blob(entry.id())?;
    let content = std::str::from_utf8(blob.content()).map_err(|_| GitError::BadEncoding)?;

    Ok(content.to_string())
}
