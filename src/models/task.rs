use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TodoTask {
    pub id: i64,
    pub task: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub done: bool,
    pub created_at: DateTime<Utc>,
}

impl TodoTask {
    /// Start and end rendered as local wall-clock times, e.g. `09:00 - 10:30`.
    pub fn time_range(&self) -> String {
        format!(
            "{} - {}",
            self.start_time.with_timezone(&Local).format("%H:%M"),
            self.end_time.with_timezone(&Local).format("%H:%M"),
        )
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end_time - self.start_time).num_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> TodoTask {
        TodoTask {
            id: 7,
            task: "Write weekly report".to_string(),
            start_time: Utc.with_ymd_and_hms(2024, 3, 4, 9, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 3, 4, 10, 30, 0).unwrap(),
            done: false,
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap(),
        }
    }

    #[test]
    fn deserializes_backend_record() {
        let json = r#"{
            "id": 7,
            "task": "Write weekly report",
            "start_time": "2024-03-04T09:00:00Z",
            "end_time": "2024-03-04T10:30:00+00:00",
            "done": false,
            "created_at": "2024-03-01T08:00:00Z"
        }"#;
        let parsed: TodoTask = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn duration_is_measured_in_minutes() {
        assert_eq!(sample().duration_minutes(), 90);
    }
}
