use diagram_tables_engine::{DEFAULT_PATTERN, EnhanceRules};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid article pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: glob::PatternError,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the articles
    pub content_path: PathBuf,
    /// Glob pattern, relative to `content_path`, selecting the articles
    #[serde(default = "default_pattern")]
    pub pattern: String,
    #[serde(default)]
    pub enhance: EnhanceRules,
}

fn default_pattern() -> String {
    DEFAULT_PATTERN.to_string()
}

impl Config {
    pub fn new(content_path: PathBuf) -> Self {
        Self {
            content_path,
            pattern: default_pattern(),
            enhance: EnhanceRules::default(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in the loaded content path
        config.content_path =
            Self::expand_path(&config.content_path).unwrap_or(config.content_path);
        config.validate()?;

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let config_path = Self::config_path();
        self.save_to_path(&config_path)
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/diagram-tables");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    /// Check the article pattern is a valid glob
    pub fn validate(&self) -> Result<(), ConfigError> {
        glob::Pattern::new(&self.pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: self.pattern.clone(),
            source,
        })?;
        Ok(())
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diagram_tables_engine::{ColorScheme, StyledDiagram};
    use std::env;
    use tempfile::TempDir;

    const EXAMPLE: &str = include_str!("../config.example.toml");

    #[test]
    fn test_config_path() {
        let config_path = Config::config_path();
        let path_str = config_path.to_string_lossy();

        assert!(!path_str.starts_with('~'));
        assert!(path_str.ends_with(".config/diagram-tables/config.toml"));
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config: Config = toml::from_str(r#"content_path = "/tmp/posts""#).unwrap();

        assert_eq!(config.content_path, PathBuf::from("/tmp/posts"));
        assert_eq!(config.pattern, "*.md");
        assert_eq!(config.enhance, EnhanceRules::default());
    }

    #[test]
    fn test_example_config_parses() {
        let config: Config = toml::from_str(EXAMPLE).unwrap();

        assert_eq!(config.pattern, "*.md");
        assert_eq!(config.enhance.categories.len(), 3);
        assert_eq!(config.enhance.target, EnhanceRules::default().target);
        assert_eq!(config.enhance.fallback, EnhanceRules::default().fallback);
        assert_eq!(config.enhance.articles.len(), 3);

        let stack = config.enhance.overrides_for("data-structure-05-stack.md");
        assert_eq!(stack.len(), 1);
        let StyledDiagram::Flowchart(chart) = &stack[0] else {
            panic!("expected a flowchart override");
        };
        assert_eq!(chart.title, "栈结构可视化");
        assert_eq!(chart.scheme, ColorScheme::Orange);
        assert_eq!(chart.nodes.len(), 3);
        assert_eq!(chart.nodes[0].data.as_deref(), Some("30"));
        assert_eq!(chart.relationships.len(), 3);
    }

    #[test]
    fn test_sequence_override_defaults() {
        let config: Config = toml::from_str(
            r#"
content_path = "/tmp/posts"

[[enhance.articles."tcp.md"]]
kind = "sequence"
title = "握手"
steps = [{ participant = "Client", target = "Server", desc = "SYN" }]
"#,
        )
        .unwrap();

        let StyledDiagram::Sequence(sequence) = &config.enhance.overrides_for("tcp.md")[0] else {
            panic!("expected a sequence override");
        };
        assert_eq!(sequence.scheme, ColorScheme::Pink);
        assert_eq!(sequence.steps[0].action, "发送");
        // Categories are untouched when only articles are configured
        assert_eq!(config.enhance.categories.len(), 3);
    }

    #[test]
    fn test_expand_path_with_tilde() {
        let expanded = Config::expand_path(&PathBuf::from("~/test/path")).unwrap();

        assert!(!expanded.to_string_lossy().starts_with('~'));
        assert!(expanded.to_string_lossy().contains("test/path"));
    }

    #[test]
    fn test_expand_path_with_env_var() {
        unsafe {
            env::set_var("DIAGRAM_TABLES_TEST_VAR", "/test/env/path");
        }

        let expanded =
            Config::expand_path(&PathBuf::from("$DIAGRAM_TABLES_TEST_VAR/subdir")).unwrap();
        assert_eq!(expanded, PathBuf::from("/test/env/path/subdir"));

        unsafe {
            env::remove_var("DIAGRAM_TABLES_TEST_VAR");
        }
    }

    #[test]
    fn test_expand_path_with_relative_path() {
        let path = PathBuf::from("relative/path");
        assert_eq!(Config::expand_path(&path).unwrap(), path);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let temp_dir = TempDir::new().unwrap();
        let result = Config::load_from_path(temp_dir.path().join("nonexistent.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_rejects_invalid_pattern() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(
            &config_file,
            "content_path = \"/tmp/posts\"\npattern = \"posts/[.md\"\n",
        )
        .unwrap();

        let result = Config::load_from_path(&config_file);
        assert!(matches!(result, Err(ConfigError::InvalidPattern { .. })));
    }

    #[test]
    fn test_load_reports_parse_errors_with_path() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("config.toml");
        std::fs::write(&config_file, "content_path = \n").unwrap();

        let err = Config::load_from_path(&config_file).unwrap_err();
        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("config.toml"));
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_file = temp_dir.path().join("nested/config.toml");
        let mut test_config: Config = toml::from_str(EXAMPLE).unwrap();
        test_config.content_path = PathBuf::from("/tmp/test-posts");

        test_config.save_to_path(&config_file).unwrap();
        let loaded_config = Config::load_from_path(&config_file).unwrap().unwrap();

        assert_eq!(loaded_config, test_config);
    }
}
