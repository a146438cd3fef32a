use super::{parse_id, ChatStore, StoreError};
use crate::models;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-process store with the same semantics as [`super::PgChatStore`].
/// Each write holds the lock for its whole find-and-modify step.
#[derive(Debug, Default)]
pub struct MemoryChatStore {
    chats: RwLock<Vec<models::Chat>>,
}

impl MemoryChatStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.chats.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.chats.read().await.is_empty()
    }
}

fn to_record(chat: models::NewChat) -> Result<models::Chat, StoreError> {
    if let Some(field) = chat.missing_field() {
        return Err(StoreError::MissingField(field));
    }

    Ok(models::Chat {
        id: Uuid::new_v4(),
        from: chat.from,
        to: chat.to,
        msg: chat.msg,
        created_at: chat.created_at,
        updated_at: None,
    })
}

#[async_trait]
impl ChatStore for MemoryChatStore {
    async fn list_newest_first(&self) -> Result<Vec<models::Chat>, StoreError> {
        let mut chats = self.chats.read().await.clone();
        chats.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(chats)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<models::Chat>, StoreError> {
        let id = parse_id(id)?;
        let chats = self.chats.read().await;
        Ok(chats.iter().find(|chat| chat.id == id).cloned())
    }

    async fn insert(&self, chat: models::NewChat) -> Result<models::Chat, StoreError> {
        let record = to_record(chat)?;
        self.chats.write().await.push(record.clone());
        Ok(record)
    }

    async fn insert_many(
        &self,
        chats: Vec<models::NewChat>,
    ) -> Result<Vec<models::Chat>, StoreError> {
        // validate the whole batch first so a bad record inserts nothing
        let records = chats
            .into_iter()
            .map(to_record)
            .collect::<Result<Vec<_>, _>>()?;
        self.chats.write().await.extend(records.iter().cloned());
        Ok(records)
    }

    async fn update_msg(
        &self,
        id: &str,
        msg: &str,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<models::Chat>, StoreError> {
        let id = parse_id(id)?;
        let msg = msg.trim();
        if msg.is_empty() {
            return Err(StoreError::MissingField("msg"));
        }

        let mut chats = self.chats.write().await;
        Ok(chats.iter_mut().find(|chat| chat.id == id).map(|chat| {
            chat.msg = msg.to_string();
            chat.updated_at = Some(updated_at);
            chat.clone()
        }))
    }

    async fn delete_by_id(&self, id: &str) -> Result<Option<models::Chat>, StoreError> {
        let id = parse_id(id)?;
        let mut chats = self.chats.write().await;
        Ok(chats
            .iter()
            .position(|chat| chat.id == id)
            .map(|index| chats.remove(index)))
    }

    async fn delete_all(&self) -> Result<u64, StoreError> {
        let mut chats = self.chats.write().await;
        let count = chats.len() as u64;
        chats.clear();
        Ok(count)
    }

    async fn close(&self) {}
}
