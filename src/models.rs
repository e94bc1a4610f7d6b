use chrono::{DateTime, Utc};
use serde::{de::IgnoredAny, Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// A quiz definition file as stored in the data directory. Only the parts the
/// index needs are decoded; question bodies are skipped.
#[derive(Deserialize)]
pub struct QuizFile {
    pub config: QuizConfig,
    pub questions: Vec<IgnoredAny>,
}

/// Only the presence of `config` decides whether a quiz is indexed, so a
/// malformed `title` or `category` never rejects the file.
#[derive(Deserialize)]
pub struct QuizConfig {
    #[serde(default, deserialize_with = "deserialize_scalar_as_string")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_scalar_as_string")]
    pub category: Option<String>,
}

/// Strings pass through, numbers and booleans keep their JSON text, anything
/// else is treated as absent.
fn deserialize_scalar_as_string<'de, D: Deserializer<'de>>(
    d: D,
) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(d)? {
        Some(Value::String(s)) => Some(s),
        Some(v @ (Value::Number(_) | Value::Bool(_))) => Some(v.to_string()),
        _ => None,
    })
}

/// The index written to `index.json` by the `generate-index` command.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizIndex {
    pub quizzes: Vec<String>,
    pub categories: Vec<String>,
    pub count: usize,
    pub last_updated: DateTime<Utc>,
    #[serde(rename = "generated_by")]
    pub generated_by: String,
}

/// The index served over HTTP, with per-quiz details in place of categories.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiIndex {
    pub quizzes: Vec<String>,
    pub details: Vec<QuizSummary>,
    pub count: usize,
    pub last_updated: DateTime<Utc>,
    #[serde(rename = "generated_by")]
    pub generated_by: String,
}

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct QuizSummary {
    pub id: String,
    pub title: String,
    pub count: usize,
}
