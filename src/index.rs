use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use chrono::{DateTime, Utc};
use color_eyre::{
    eyre::{eyre, WrapErr},
    Result,
};

use crate::{
    models::{ApiIndex, QuizIndex, QuizSummary},
    names,
    scanner::{self, QuizScan},
};

pub fn build_index(
    scan: &QuizScan,
    generated_by: &str,
    generated_at: DateTime<Utc>,
) -> QuizIndex {
    let quizzes: Vec<String> = scan.ids().map(str::to_string).collect();
    let categories: BTreeSet<&str> = scan
        .entries
        .iter()
        .filter_map(|e| e.category.as_deref())
        .collect();

    QuizIndex {
        count: quizzes.len(),
        quizzes,
        categories: categories.into_iter().map(str::to_string).collect(),
        last_updated: generated_at,
        generated_by: generated_by.to_string(),
    }
}

pub fn build_api_index(
    scan: &QuizScan,
    generated_by: &str,
    generated_at: DateTime<Utc>,
) -> ApiIndex {
    let details: Vec<QuizSummary> = scan
        .entries
        .iter()
        .map(|e| QuizSummary {
            id: e.id.clone(),
            title: e.title.clone().unwrap_or_else(|| names::UNTITLED.to_string()),
            count: e.question_count,
        })
        .collect();

    ApiIndex {
        quizzes: details.iter().map(|d| d.id.clone()).collect(),
        count: details.len(),
        details,
        last_updated: generated_at,
        generated_by: generated_by.to_string(),
    }
}

pub struct GenerateReport {
    pub path: PathBuf,
    pub index: QuizIndex,
}

/// Scan `data_dir` and write its index to `data_dir/index.json`, replacing any
/// previous index. Nothing is written when the directory does not exist.
pub fn generate_index_file(data_dir: &Path) -> Result<GenerateReport> {
    if !data_dir.is_dir() {
        return Err(eyre!("data directory {} not found", data_dir.display()));
    }

    let scan = scanner::scan_directory(data_dir)?;
    for entry in &scan.entries {
        tracing::info!(
            "indexed {}: {}",
            entry.id,
            entry.title.as_deref().unwrap_or(names::UNTITLED)
        );
    }
    for skipped in &scan.skipped {
        tracing::warn!("skipped {} which {}", skipped.file_name, skipped.reason);
    }

    let index = build_index(&scan, names::GENERATED_BY_CLI, Utc::now());
    let path = data_dir.join(names::INDEX_FILE_NAME);
    let json = serde_json::to_string_pretty(&index).wrap_err("failed to serialize index")?;
    fs::write(&path, json).wrap_err_with(|| format!("failed to write {}", path.display()))?;

    Ok(GenerateReport { path, index })
}
