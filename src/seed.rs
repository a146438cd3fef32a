//! Development data. `reset` wipes the chats and stores the same four samples
//! on every run.

use crate::db::{ChatStore, StoreError};
use crate::models;
use chrono::Utc;

const SAMPLES: [(&str, &str, &str); 4] = [
    ("neha", "priy", "send your exam sheets"),
    ("Amit", "Sudheer", "How are you ?"),
    ("Kamal", "Deepak", "When will you come in college ?"),
    ("Himanshu", "Gulshan", "All are okay!"),
];

pub fn sample_chats() -> Vec<models::NewChat> {
    SAMPLES
        .iter()
        .map(|(from, to, msg)| models::NewChat::new(from, to, msg, Utc::now()))
        .collect()
}

pub async fn reset(store: &dyn ChatStore) -> Result<Vec<models::Chat>, StoreError> {
    let removed = store.delete_all().await?;
    tracing::info!(removed, "Cleared existing chats");

    let inserted = store.insert_many(sample_chats()).await?;
    tracing::info!(inserted = inserted.len(), "Inserted sample chats");

    Ok(inserted)
}
