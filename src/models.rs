use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub date: String,
    pub category: String,
    pub duration: u32,
}

/// Aggregate workout history, persisted as a single JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRecord {
    pub total_workouts: u64,
    pub total_minutes: u64,
    pub streak: u32,
    pub last_workout_date: Option<NaiveDate>,
    pub category_stats: IndexMap<String, u64>,
    pub logs: VecDeque<LogEntry>,
}

#[derive(Debug, Deserialize)]
pub struct CompleteRequest {
    pub category: String,
    pub duration: u32,
}

#[derive(Debug, Deserialize)]
pub struct WorkoutQuery {
    pub category: String,
    pub level: String,
    pub duration: String,
}

#[derive(Debug, Serialize)]
pub struct WorkoutResponse {
    pub title: String,
    pub category: String,
    pub level: String,
    pub duration: String,
    pub exercises: Vec<String>,
    pub video: Option<String>,
    pub thumbnail: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub streak: u32,
    pub total_workouts: u64,
    pub total_minutes: u64,
    pub favorite_category: Option<String>,
    pub logs: Vec<LogEntry>,
}

impl From<&HistoryRecord> for ProfileResponse {
    fn from(record: &HistoryRecord) -> Self {
        Self {
            streak: record.streak,
            total_workouts: record.total_workouts,
            total_minutes: record.total_minutes,
            favorite_category: record.favorite_category().map(str::to_owned),
            logs: record.logs.iter().cloned().collect(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CompleteResponse {
    pub message: String,
    pub profile: ProfileResponse,
}
