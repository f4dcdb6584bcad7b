use crate::errors::AppError;
use crate::models::HistoryRecord;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub const HISTORY_KEY: &str = "dailyfit_user_data";

pub fn resolve_data_path() -> PathBuf {
    if let Ok(path) = env::var("APP_DATA_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from(format!("data/{HISTORY_KEY}.json"))
}

pub fn resolve_workouts_path() -> PathBuf {
    if let Ok(path) = env::var("APP_WORKOUTS_PATH") {
        return PathBuf::from(path);
    }

    PathBuf::from("data/workouts.json")
}

/// Reads the stored record. Missing, unreadable and corrupted files all fall
/// back to the empty record.
pub async fn load_record(path: &Path) -> HistoryRecord {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(record) => record,
            Err(err) => {
                error!("failed to parse history file {}: {err}", path.display());
                HistoryRecord::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => HistoryRecord::default(),
        Err(err) => {
            error!("failed to read history file {}: {err}", path.display());
            HistoryRecord::default()
        }
    }
}

pub async fn persist_record(path: &Path, record: &HistoryRecord) -> Result<(), AppError> {
    let payload = serde_json::to_vec_pretty(record).map_err(AppError::internal)?;
    fs::write(path, payload).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unique_path(name: &str) -> PathBuf {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("dailyfit_storage_{name}_{}_{}.json", std::process::id(), nanos));
        path
    }

    #[tokio::test]
    async fn corrupted_file_falls_back_to_default() {
        let path = unique_path("corrupt");
        fs::write(&path, b"{ not json").await.unwrap();

        assert_eq!(load_record(&path).await, HistoryRecord::default());

        fs::write(&path, br#"{"totalWorkouts": "many"}"#).await.unwrap();
        assert_eq!(load_record(&path).await, HistoryRecord::default());

        let _ = fs::remove_file(&path).await;
    }

    #[tokio::test]
    async fn persisted_record_uses_camel_case_keys() {
        let path = unique_path("keys");
        persist_record(&path, &HistoryRecord::default()).await.unwrap();

        let raw: serde_json::Value =
            serde_json::from_slice(&fs::read(&path).await.unwrap()).unwrap();
        assert_eq!(
            raw,
            serde_json::json!({
                "totalWorkouts": 0,
                "totalMinutes": 0,
                "streak": 0,
                "lastWorkoutDate": null,
                "categoryStats": {},
                "logs": []
            })
        );

        let _ = fs::remove_file(&path).await;
    }

    #[test]
    fn default_data_path_is_namespaced() {
        if env::var("APP_DATA_PATH").is_err() {
            assert_eq!(resolve_data_path(), PathBuf::from("data/dailyfit_user_data.json"));
        }
    }
}
