//! Data access for chats.
//!
//! Handlers only see the [`ChatStore`] trait. The server and the seed loader
//! construct a [`PgChatStore`]; tests use [`MemoryChatStore`].

use crate::models;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub mod chat;
pub mod memory;

pub use chat::PgChatStore;
pub use memory::MemoryChatStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("malformed chat id: {0:?}")]
    MalformedId(String),
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

#[async_trait]
pub trait ChatStore: Send + Sync {
    /// Every chat, newest `created_at` first.
    async fn list_newest_first(&self) -> Result<Vec<models::Chat>, StoreError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<models::Chat>, StoreError>;

    async fn insert(&self, chat: models::NewChat) -> Result<models::Chat, StoreError>;

    async fn insert_many(
        &self,
        chats: Vec<models::NewChat>,
    ) -> Result<Vec<models::Chat>, StoreError>;

    /// Sets `msg` and `updated_at` in one step and returns the updated record,
    /// or `None` when the id matches nothing.
    async fn update_msg(
        &self,
        id: &str,
        msg: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<models::Chat>, StoreError>;

    /// Removes the record in one step and returns it, or `None` when the id
    /// matches nothing.
    async fn delete_by_id(&self, id: &str) -> Result<Option<models::Chat>, StoreError>;

    async fn delete_all(&self) -> Result<u64, StoreError>;

    async fn close(&self);
}

pub fn parse_id(id: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(id).map_err(|_| StoreError::MalformedId(id.to_string()))
}
