use super::{parse_id, ChatStore, StoreError};
use crate::models;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use tracing::Instrument;

const CHAT_COLUMNS: &str = "id, from_name, to_name, msg, created_at, updated_at";

/// Postgres-backed store. Every single-record write is one statement, so
/// find-and-update and find-and-delete are atomic per row.
#[derive(Debug, Clone)]
pub struct PgChatStore {
    pool: PgPool,
}

impl PgChatStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens the pool and applies pending migrations.
    pub async fn connect(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .acquire_timeout(Duration::from_secs(30))
            .connect(database_url)
            .await?;

        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(Self::new(pool))
    }
}

fn log_query_error(err: sqlx::Error) -> StoreError {
    tracing::error!("Failed to execute query: {:?}", err);
    StoreError::Database(err)
}

#[async_trait]
impl ChatStore for PgChatStore {
    async fn list_newest_first(&self) -> Result<Vec<models::Chat>, StoreError> {
        let query_span = tracing::info_span!("Fetch all chats.");
        sqlx::query_as::<_, models::Chat>(&format!(
            "SELECT {CHAT_COLUMNS} FROM chats ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .instrument(query_span)
        .await
        .map_err(log_query_error)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<models::Chat>, StoreError> {
        let id = parse_id(id)?;
        let query_span = tracing::info_span!("Fetch chat by id.", %id);
        sqlx::query_as::<_, models::Chat>(&format!(
            "SELECT {CHAT_COLUMNS} FROM chats WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .instrument(query_span)
        .await
        .map_err(log_query_error)
    }

    async fn insert(&self, chat: models::NewChat) -> Result<models::Chat, StoreError> {
        let query_span = tracing::info_span!("Saving new chat into the database.");
        sqlx::query_as::<_, models::Chat>(&format!(
            "INSERT INTO chats (from_name, to_name, msg, created_at)
             VALUES ($1, $2, $3, $4)
             RETURNING {CHAT_COLUMNS}"
        ))
        .bind(chat.from)
        .bind(chat.to)
        .bind(chat.msg)
        .bind(chat.created_at)
        .fetch_one(&self.pool)
        .instrument(query_span)
        .await
        .map_err(log_query_error)
    }

    async fn insert_many(
        &self,
        chats: Vec<models::NewChat>,
    ) -> Result<Vec<models::Chat>, StoreError> {
        let query_span = tracing::info_span!("Saving chats batch.", count = chats.len());
        async move {
            let mut tx = self.pool.begin().await.map_err(log_query_error)?;
            let mut inserted = Vec::with_capacity(chats.len());
            for chat in chats {
                let row = sqlx::query_as::<_, models::Chat>(&format!(
                    "INSERT INTO chats (from_name, to_name, msg, created_at)
                     VALUES ($1, $2, $3, $4)
                     RETURNING {CHAT_COLUMNS}"
                ))
                .bind(chat.from)
                .bind(chat.to)
                .bind(chat.msg)
                .bind(chat.created_at)
                .fetch_one(&mut *tx)
                .await
                .map_err(log_query_error)?;
                inserted.push(row);
            }
            tx.commit().await.map_err(log_query_error)?;
            Ok(inserted)
        }
        .instrument(query_span)
        .await
    }

    async fn update_msg(
        &self,
        id: &str,
        msg: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<models::Chat>, StoreError> {
        let id = parse_id(id)?;
        let query_span = tracing::info_span!("Updating chat message.", %id);
        sqlx::query_as::<_, models::Chat>(&format!(
            "UPDATE chats SET msg = $2, updated_at = $3 WHERE id = $1 RETURNING {CHAT_COLUMNS}"
        ))
        .bind(id)
        .bind(msg.trim())
        .bind(updated_at)
        .fetch_optional(&self.pool)
        .instrument(query_span)
        .await
        .map_err(log_query_error)
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<models::Chat>, StoreError> {
        let id = parse_id(id)?;
        let query_span = tracing::info_span!("Deleting chat.", %id);
        sqlx::query_as::<_, models::Chat>(&format!(
            "DELETE FROM chats WHERE id = $1 RETURNING {CHAT_COLUMNS}"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .instrument(query_span)
        .await
        .map_err(log_query_error)
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let query_span = tracing::info_span!("Deleting all chats.");
        sqlx::query("DELETE FROM chats")
            .execute(&self.pool)
            .instrument(query_span)
            .await
            .map(|result| result.rows_affected())
            .map_err(log_query_error)
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
