use chrono::{DateTime, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DraftError {
    #[error("task description is required")]
    EmptyTask,
    #[error("'{0}' is not a valid date")]
    InvalidDate(String),
    #[error("'{0}' is not a valid time")]
    InvalidTime(String),
    #[error("end time must be after start time")]
    EndBeforeStart,
}

/// Payload for the `add_todo` host command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTodo {
    pub task: String,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub done: bool,
}

/// Raw form values from the task editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub task: String,
    pub date: String,
    pub start: String,
    pub end: String,
}

impl TaskDraft {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            task: String::new(),
            date: date.format("%Y-%m-%d").to_string(),
            start: "09:00".to_string(),
            end: "10:00".to_string(),
        }
    }

    pub fn validate(&self) -> Result<NewTodo, DraftError> {
        let task = self.task.trim();
        if task.is_empty() {
            return Err(DraftError::EmptyTask);
        }
        let date = NaiveDate::parse_from_str(self.date.trim(), "%Y-%m-%d")
            .map_err(|_| DraftError::InvalidDate(self.date.clone()))?;
        let start = parse_time(&self.start)?;
        let end = parse_time(&self.end)?;
        if end <= start {
            return Err(DraftError::EndBeforeStart);
        }

        Ok(NewTodo {
            task: task.to_string(),
            start_time: local_to_utc(date, start)?,
            end_time: local_to_utc(date, end)?,
            done: false,
        })
    }
}

fn parse_time(raw: &str) -> Result<NaiveTime, DraftError> {
    NaiveTime::parse_from_str(raw.trim(), "%H:%M").map_err(|_| DraftError::InvalidTime(raw.to_string()))
}

fn local_to_utc(date: NaiveDate, time: NaiveTime) -> Result<DateTime<Utc>, DraftError> {
    Local
        .from_local_datetime(&date.and_time(time))
        .earliest()
        .map(|at| at.with_timezone(&Utc))
        .ok_or_else(|| DraftError::InvalidTime(time.format("%H:%M").to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn draft(task: &str, start: &str, end: &str) -> TaskDraft {
        TaskDraft { task: task.into(), date: "2024-03-04".into(), start: start.into(), end: end.into() }
    }

    #[test]
    fn valid_draft_becomes_new_todo() {
        let todo = draft("  Plan sprint ", "09:00", "10:30").validate().unwrap();
        assert_eq!(todo.task, "Plan sprint");
        assert!(!todo.done);
        assert_eq!((todo.end_time - todo.start_time).num_minutes(), 90);
    }

    #[test]
    fn blank_task_is_rejected() {
        assert_eq!(draft("   ", "09:00", "10:00").validate(), Err(DraftError::EmptyTask));
    }

    #[test]
    fn end_must_follow_start() {
        assert_eq!(draft("x", "10:00", "10:00").validate(), Err(DraftError::EndBeforeStart));
        assert_eq!(draft("x", "11:00", "10:00").validate(), Err(DraftError::EndBeforeStart));
    }

    #[test]
    fn malformed_fields_are_reported() {
        assert_eq!(draft("x", "9am", "10:00").validate(), Err(DraftError::InvalidTime("9am".into())));
        let mut bad_date = draft("x", "09:00", "10:00");
        bad_date.date = "04/03/2024".into();
        assert_eq!(bad_date.validate(), Err(DraftError::InvalidDate("04/03/2024".into())));
    }

    #[test]
    fn draft_defaults_to_selected_date() {
        let draft = TaskDraft::for_date(NaiveDate::from_ymd_opt(2024, 3, 4).unwrap());
        assert_eq!(draft.date, "2024-03-04");
        assert_eq!(draft.start, "09:00");
    }
}
