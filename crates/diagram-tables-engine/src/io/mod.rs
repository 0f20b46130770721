use crate::models::Article;
use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

/// Glob pattern used when none is configured
pub const DEFAULT_PATTERN: &str = "*.md";

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid content directory: {0}")]
    InvalidContentDir(String),
    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),
    #[error("Unreadable match: {0}")]
    Glob(#[from] glob::GlobError),
    #[error("Path is not relative to the content directory: {0}")]
    InvalidPath(PathBuf),
}

/// Read an article and return its content
pub fn read_file(relative_path: &RelativePath, content_root: &Path) -> Result<String, IoError> {
    let absolute_path = relative_path.to_path(content_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read_to_string(&absolute_path).map_err(IoError::Io)
}

/// Write content to an article
pub fn write_file(
    relative_path: &RelativePath,
    content_root: &Path,
    content: &str,
) -> Result<(), IoError> {
    let absolute_path = relative_path.to_path(content_root);

    // Create parent directories if they don't exist
    if let Some(parent) = absolute_path.parent() {
        fs::create_dir_all(parent).map_err(IoError::Io)?;
    }

    fs::write(&absolute_path, content).map_err(IoError::Io)
}

/// Find the articles matching `pattern` (e.g. `*.md`, `**/*.md`) under the content root
pub fn scan_articles(content_root: &Path, pattern: &str) -> Result<Vec<Article>, IoError> {
    validate_content_dir(content_root)?;

    // Canonical root so every match can be made relative again
    let root = fs::canonicalize(content_root)?;
    let full_pattern = format!(
        "{}/{}",
        glob::Pattern::escape(&root.to_string_lossy()),
        pattern
    );

    let mut articles = Vec::new();
    for entry in glob::glob(&full_pattern)? {
        let path = entry?;
        if !path.is_file() {
            continue;
        }
        let relative = path
            .strip_prefix(&root)
            .ok()
            .and_then(|p| RelativePathBuf::from_path(p).ok())
            .ok_or_else(|| IoError::InvalidPath(path.clone()))?;
        articles.push(Article::new(relative));
    }

    articles.sort();
    Ok(articles)
}

pub fn validate_content_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidContentDir(format!(
            "directory does not exist: {}",
            path.display()
        )));
    }

    Ok(())
}
