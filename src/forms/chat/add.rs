use crate::errors::ChatError;
use crate::models;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_valid::Validate;

/// Body of `POST /chats/create`. Absent fields deserialize as "" so that
/// presence is checked by `validate`, not by the extractor.
#[derive(Serialize, Deserialize, Debug, Default, Validate)]
pub struct AddChat {
    #[serde(default, deserialize_with = "super::trimmed")]
    #[validate(min_length = 1)]
    pub from: String,
    #[serde(default, deserialize_with = "super::trimmed")]
    #[validate(min_length = 1)]
    pub to: String,
    #[serde(default, deserialize_with = "super::trimmed")]
    #[validate(min_length = 1)]
    pub msg: String,
}

impl AddChat {
    pub fn into_new_chat(self, created_at: DateTime<Utc>) -> Result<models::NewChat, ChatError> {
        if let Err(errors) = self.validate() {
            tracing::debug!("Invalid chat form: {}", errors);
            return Err(ChatError::Validation("All fields are required".to_string()));
        }

        Ok(models::NewChat::new(&self.from, &self.to, &self.msg, created_at))
    }
}
