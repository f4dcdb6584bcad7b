use crate::errors::AppError;
use crate::models::{HistoryRecord, LogEntry};
use crate::storage::{load_record, persist_record};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use std::path::{Path, PathBuf};
use tracing::info;

pub const LOG_CAPACITY: usize = 10;

impl HistoryRecord {
    /// Applies one completed workout at local wall-clock time `now`.
    ///
    /// Totals and category counts always move by exactly one workout. The
    /// streak only moves on the first workout of a calendar day: it grows
    /// when the previous workout was yesterday and restarts at 1 otherwise,
    /// including when `now` is earlier than the last recorded day.
    pub fn with_workout(mut self, category: &str, duration: u32, now: NaiveDateTime) -> Self {
        self.total_workouts = self.total_workouts.saturating_add(1);
        self.total_minutes = self.total_minutes.saturating_add(u64::from(duration));

        let count = self.category_stats.entry(category.to_owned()).or_insert(0);
        *count = count.saturating_add(1);

        let today = now.date();
        if self.last_workout_date != Some(today) {
            self.streak = if self.last_workout_date == Some(today - Duration::days(1)) {
                self.streak.saturating_add(1)
            } else {
                1
            };
            self.last_workout_date = Some(today);
        }

        self.logs.push_front(LogEntry {
            date: display_date(today),
            category: category.to_owned(),
            duration,
        });
        self.logs.truncate(LOG_CAPACITY);

        self
    }

    /// Most practiced category; the first one to reach the top count wins ties.
    pub fn favorite_category(&self) -> Option<&str> {
        let mut favorite = None;
        let mut max = 0;
        for (category, &count) in &self.category_stats {
            if count > max {
                max = count;
                favorite = Some(category.as_str());
            }
        }
        favorite
    }
}

fn display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// File-backed home of the single [`HistoryRecord`].
///
/// Every call goes back to the file, so nothing is cached between requests.
/// Callers that share a store must serialize `record_workout` themselves;
/// two processes writing the same file race and the last writer wins.
#[derive(Debug, Clone)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> HistoryRecord {
        load_record(&self.path).await
    }

    pub async fn save(&self, record: &HistoryRecord) -> Result<(), AppError> {
        persist_record(&self.path, record).await
    }

    pub async fn record_workout(
        &self,
        category: &str,
        duration: u32,
        now: NaiveDateTime,
    ) -> Result<HistoryRecord, AppError> {
        let category = category.trim();
        if category.is_empty() {
            return Err(AppError::bad_request("category must not be empty"));
        }
        if duration == 0 {
            return Err(AppError::bad_request("duration must be positive"));
        }

        let record = self.load().await.with_workout(category, duration, now);
        self.save(&record).await?;

        info!(
            category,
            duration,
            streak = record.streak,
            total = record.total_workouts,
            "workout recorded"
        );
        Ok(record)
    }
}
