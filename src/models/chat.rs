use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A persisted chat message.
///
/// `from`, `to` and `created_at` never change after insertion; only `msg` is
/// editable and every edit stamps `updated_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Chat {
    pub id: Uuid,
    #[sqlx(rename = "from_name")]
    pub from: String,
    #[sqlx(rename = "to_name")]
    pub to: String,
    pub msg: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

/// A chat that has not been stored yet. The store assigns the id.
#[derive(Debug, Clone, PartialEq)]
pub struct NewChat {
    pub from: String,
    pub to: String,
    pub msg: String,
    pub created_at: DateTime<Utc>,
}

impl NewChat {
    pub fn new(from: &str, to: &str, msg: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            from: from.trim().to_string(),
            to: to.trim().to_string(),
            msg: msg.trim().to_string(),
            created_at,
        }
    }

    /// Name of the first required field that is blank, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        [("from", &self.from), ("to", &self.to), ("msg", &self.msg)]
            .into_iter()
            .find(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| name)
    }
}
