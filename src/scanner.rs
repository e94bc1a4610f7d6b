use std::{fmt, fs, io, path::Path};

use color_eyre::{eyre::WrapErr, Result};
use serde_json::error::Category;

use crate::{models::QuizFile, names};

/// A quiz file that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizEntry {
    pub id: String,
    pub title: Option<String>,
    pub category: Option<String>,
    pub question_count: usize,
}

#[derive(Debug)]
pub enum SkipReason {
    Unreadable(io::Error),
    InvalidJson(serde_json::Error),
    InvalidStructure(serde_json::Error),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Unreadable(e) => write!(f, "could not be read: {e}"),
            SkipReason::InvalidJson(e) => write!(f, "is not valid JSON: {e}"),
            SkipReason::InvalidStructure(e) => {
                write!(f, "has an invalid structure (expected config/questions): {e}")
            }
        }
    }
}

#[derive(Debug)]
pub struct SkippedFile {
    pub file_name: String,
    pub reason: SkipReason,
}

/// Outcome of one pass over a data directory, in file name order.
#[derive(Debug, Default)]
pub struct QuizScan {
    pub entries: Vec<QuizEntry>,
    pub skipped: Vec<SkippedFile>,
}

impl QuizScan {
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.id.as_str())
    }
}

/// Returns the quiz id for a directory entry name, or `None` when the entry is
/// not a quiz candidate.
pub fn quiz_id(file_name: &str) -> Option<&str> {
    if file_name == names::INDEX_FILE_NAME {
        return None;
    }
    file_name
        .strip_suffix(names::QUIZ_FILE_EXTENSION)
        .filter(|stem| !stem.is_empty())
}

/// Validate a single quiz document.
pub fn parse_quiz(id: &str, bytes: &[u8]) -> Result<QuizEntry, SkipReason> {
    let quiz = serde_json::from_slice::<QuizFile>(bytes).map_err(|e| match e.classify() {
        Category::Syntax | Category::Eof => SkipReason::InvalidJson(e),
        Category::Data => SkipReason::InvalidStructure(e),
        Category::Io => SkipReason::Unreadable(e.into()),
    })?;

    Ok(QuizEntry {
        id: id.to_string(),
        title: quiz.config.title,
        category: quiz.config.category.filter(|c| !c.is_empty()),
        question_count: quiz.questions.len(),
    })
}

/// Scan `dir` for quiz files. A file that cannot be read or validated is
/// recorded in [`QuizScan::skipped`] and never stops the scan; only failing to
/// list the directory itself is an error.
pub fn scan_directory(dir: &Path) -> Result<QuizScan> {
    let mut file_names = fs::read_dir(dir)
        .wrap_err_with(|| format!("failed to list {}", dir.display()))?
        .map(|entry| entry.map(|e| e.file_name()))
        .collect::<io::Result<Vec<_>>>()
        .wrap_err_with(|| format!("failed to list {}", dir.display()))?
        .into_iter()
        .filter_map(|name| name.into_string().ok())
        .collect::<Vec<_>>();
    file_names.sort();

    let mut scan = QuizScan::default();
    for file_name in file_names {
        let Some(id) = quiz_id(&file_name) else {
            continue;
        };

        let parsed = fs::read(dir.join(&file_name))
            .map_err(SkipReason::Unreadable)
            .and_then(|bytes| parse_quiz(id, &bytes));

        match parsed {
            Ok(entry) => {
                tracing::debug!("accepted quiz {}", entry.id);
                scan.entries.push(entry);
            }
            Err(reason) => {
                tracing::debug!("skipped {file_name}: {reason}");
                scan.skipped.push(SkippedFile { file_name, reason });
            }
        }
    }

    Ok(scan)
}

/// Like [`scan_directory`], but a missing directory yields an empty scan.
pub fn scan_if_present(dir: &Path) -> Result<QuizScan> {
    if !dir.exists() {
        tracing::warn!("data directory {} does not exist", dir.display());
        return Ok(QuizScan::default());
    }
    scan_directory(dir)
}
