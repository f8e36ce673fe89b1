use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A persisted to-do item. `id`, `status`, and `alert_level` are
/// caller-defined; this layer stores them without validating uniqueness,
/// vocabulary, or range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    pub id: String,

    pub title: String,

    pub deadline: DateTime<Utc>,

    pub status: String,

    #[serde(rename = "alertLevel")]
    pub alert_level: i64,
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};

    use super::Task;

    #[test]
    fn wire_format_matches_the_frontend() {
        let task = Task {
            id: "1".to_string(),
            title: "Ship it".to_string(),
            deadline: Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap(),
            status: "open".to_string(),
            alert_level: 2,
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["alertLevel"], 2);
        assert_eq!(json["deadline"], "2025-01-01T00:00:00Z");

        let back: Task = serde_json::from_value(json).unwrap();
        assert_eq!(back, task);
    }
}
