use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Create a temporary content directory for articles
pub fn create_test_content_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

/// Create a test article with content
pub fn create_test_file(content_dir: &TempDir, filename: &str, content: &str) -> PathBuf {
    let file_path = content_dir.path().join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&file_path, content).unwrap();
    file_path
}

/// A small article with one flow-graph and one sequence diagram
pub const SAMPLE_ARTICLE: &str = "# Sample\n\nIntro.\n\n```mermaid\ngraph TD\n    A[开始] --> B[结束]\n    C[中间]\n```\n\nMiddle.\n\n```mermaid\nsequenceDiagram\n    A->>B: ping\n```\n\nEnd.\n";
