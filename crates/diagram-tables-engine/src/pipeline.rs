//! Read-transform-write cycles over the articles of a content directory.
//!
//! Each article is handled on its own: a failure to read or write one article
//! is recorded in the [`RunSummary`] and the run moves on. Only a failure to
//! list the articles aborts the run.

use crate::blocks::{Replacement, contains_diagram, locate_and_replace};
use crate::enhance::{EnhanceRules, enhance_document};
use crate::io::{self, IoError};
use crate::models::Article;
use crate::render;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Converted { blocks: usize },
    Enhanced { replacements: usize },
    /// Nothing to do; the file was not written
    Unchanged,
}

impl FileOutcome {
    pub fn is_changed(&self) -> bool {
        !matches!(self, FileOutcome::Unchanged)
    }
}

#[derive(Debug, Default)]
pub struct RunSummary {
    pub outcomes: Vec<(Article, FileOutcome)>,
    pub failures: Vec<(Article, IoError)>,
}

impl RunSummary {
    pub fn changed_count(&self) -> usize {
        self.outcomes.iter().filter(|(_, o)| o.is_changed()).count()
    }

    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }
}

/// Convert every diagram block of a document into markdown
pub fn convert_document(text: &str) -> Replacement {
    if !contains_diagram(text) {
        return Replacement::NoBlocks;
    }
    locate_and_replace(text, render::render)
}

pub fn convert_article(content_root: &Path, article: &Article) -> Result<FileOutcome, IoError> {
    let text = io::read_file(article.relative_path(), content_root)?;

    match convert_document(&text) {
        Replacement::NoBlocks => {
            log::debug!("Skipping {}: no diagram blocks", article.relative_path());
            Ok(FileOutcome::Unchanged)
        }
        Replacement::Replaced { text, blocks } => {
            io::write_file(article.relative_path(), content_root, &text)?;
            log::info!(
                "Converted {} diagram block(s) in {}",
                blocks,
                article.relative_path()
            );
            Ok(FileOutcome::Converted { blocks })
        }
    }
}

pub fn enhance_article(
    content_root: &Path,
    article: &Article,
    rules: &EnhanceRules,
) -> Result<FileOutcome, IoError> {
    let text = io::read_file(article.relative_path(), content_root)?;
    let replacements = rules.count_targets(&text);

    match enhance_document(article.id(), &text, rules) {
        None => {
            log::debug!("Skipping {}: nothing to enhance", article.relative_path());
            Ok(FileOutcome::Unchanged)
        }
        Some(enhanced) => {
            io::write_file(article.relative_path(), content_root, &enhanced)?;
            log::info!(
                "Enhanced {} diagram(s) in {}",
                replacements,
                article.relative_path()
            );
            Ok(FileOutcome::Enhanced { replacements })
        }
    }
}

pub fn convert_all(content_root: &Path, pattern: &str) -> Result<RunSummary, IoError> {
    run_all(content_root, pattern, |article| {
        convert_article(content_root, article)
    })
}

pub fn enhance_all(
    content_root: &Path,
    pattern: &str,
    rules: &EnhanceRules,
) -> Result<RunSummary, IoError> {
    run_all(content_root, pattern, |article| {
        enhance_article(content_root, article, rules)
    })
}

fn run_all<F>(content_root: &Path, pattern: &str, mut process: F) -> Result<RunSummary, IoError>
where
    F: FnMut(&Article) -> Result<FileOutcome, IoError>,
{
    let articles = io::scan_articles(content_root, pattern)?;
    log::debug!(
        "Found {} article(s) matching {pattern} in {}",
        articles.len(),
        content_root.display()
    );

    let mut summary = RunSummary::default();
    for article in articles {
        match process(&article) {
            Ok(outcome) => summary.outcomes.push((article, outcome)),
            Err(e) => {
                log::warn!("Failed to process {}: {e}", article.relative_path());
                summary.failures.push((article, e));
            }
        }
    }

    Ok(summary)
}
