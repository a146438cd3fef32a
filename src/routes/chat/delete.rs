use crate::db::ChatStore;
use crate::errors::ChatError;
use crate::views::Views;
use actix_web::{delete, web, HttpResponse};
use std::sync::Arc;

/// DELETE /chats/{id}
/// Permanent, there is no soft delete.
#[tracing::instrument(name = "Delete chat.", skip(store, views))]
#[delete("/{id}")]
pub async fn delete_handler(
    path: web::Path<(String,)>,
    store: web::Data<Arc<dyn ChatStore>>,
    views: web::Data<Views>,
) -> HttpResponse {
    let id = path.into_inner().0;
    let result = store
        .delete_by_id(&id)
        .await
        .map_err(ChatError::from)
        .and_then(|chat| chat.ok_or(ChatError::NotFound))
        .map(|chat| {
            tracing::info!(chat_id = %chat.id, "Chat deleted");
            Views::redirect("/chats")
        });

    views.respond(result)
}
