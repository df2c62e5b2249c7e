use chrono::Utc;
use serde::{Deserialize, Serialize};

/// Outcome of one finished game.
///
/// Field names on the wire are `name`, `score` and `time`, the layout the
/// browser build of the game keeps in local storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultRecord {
    #[serde(rename = "name")]
    pub player_name: String,
    #[serde(rename = "score")]
    pub final_score: u64,
    #[serde(rename = "time")]
    pub timestamp: String,
}

impl ResultRecord {
    /// Record stamped with the current UTC time.
    pub fn new(player_name: &str, final_score: u64) -> Self {
        Self::with_timestamp(player_name, final_score, Utc::now().to_rfc3339())
    }

    pub fn with_timestamp(player_name: &str, final_score: u64, timestamp: String) -> Self {
        Self {
            player_name: player_name.to_string(),
            final_score,
            timestamp,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_field_names() {
        let record = ResultRecord::with_timestamp("ada", 1024, "2025-01-01T00:00:00+00:00".into());
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["name"], "ada");
        assert_eq!(json["score"], 1024);
        assert_eq!(json["time"], "2025-01-01T00:00:00+00:00");
    }

    #[test]
    fn test_reads_browser_document() {
        let raw = r#"{"name":"Moctezuma","score":2312,"time":"3/14/2025, 9:26:53 PM"}"#;
        let record: ResultRecord = serde_json::from_str(raw).unwrap();
        assert_eq!(record.player_name, "Moctezuma");
        assert_eq!(record.final_score, 2312);
        assert_eq!(record.timestamp, "3/14/2025, 9:26:53 PM");
    }

    #[test]
    fn test_new_uses_rfc3339() {
        let record = ResultRecord::new("ada", 0);
        assert!(chrono::DateTime::parse_from_rfc3339(&record.timestamp).is_ok());
    }
}
