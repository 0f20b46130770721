use relative_path::{RelativePath, RelativePathBuf};

/// A markdown article under the content root
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Article {
    relative_path: RelativePathBuf,
    id: String,
}

impl Article {
    /// Create a new Article from a path relative to the content root
    pub fn new(relative_path: RelativePathBuf) -> Self {
        let id = Self::extract_id(&relative_path);
        Self { relative_path, id }
    }

    /// Create from a relative path string
    pub fn from_relative_str(path: &str) -> Self {
        Self::new(RelativePathBuf::from(path))
    }

    /// Get the relative path
    pub fn relative_path(&self) -> &RelativePath {
        &self.relative_path
    }

    /// Identifier used to look up overrides and categories: the file name, extension included
    pub fn id(&self) -> &str {
        &self.id
    }

    fn extract_id(path: &RelativePath) -> String {
        path.file_name().unwrap_or_default().to_string()
    }
}

impl From<RelativePathBuf> for Article {
    fn from(path: RelativePathBuf) -> Self {
        Self::new(path)
    }
}

impl From<&str> for Article {
    fn from(path: &str) -> Self {
        Self::from_relative_str(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("algorithm-02-trie.md", "algorithm-02-trie.md")]
    #[case("posts/data-structure-05-stack.md", "data-structure-05-stack.md")]
    #[case("a/b/c/notes.markdown", "notes.markdown")]
    fn id_is_file_name(#[case] path: &str, #[case] id: &str) {
        assert_eq!(Article::from(path).id(), id);
    }

    #[test]
    fn keeps_relative_path() {
        let article = Article::from_relative_str("posts/x.md");
        assert_eq!(article.relative_path().as_str(), "posts/x.md");
    }

    #[test]
    fn empty_path_has_empty_id() {
        assert_eq!(Article::from("").id(), "");
    }
}
