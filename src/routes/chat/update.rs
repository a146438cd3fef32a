use crate::db::ChatStore;
use crate::errors::ChatError;
use crate::forms;
use crate::views::Views;
use actix_web::{put, web, HttpResponse};
use chrono::Utc;
use std::sync::Arc;

/// PUT /chats/{id}
/// Only `msg` (and `updated_at`) change. An empty message touches nothing.
#[tracing::instrument(name = "Update chat.", skip(form, store, views))]
#[put("/{id}")]
pub async fn update_handler(
    path: web::Path<(String,)>,
    form: web::Form<forms::chat::Edit>,
    store: web::Data<Arc<dyn ChatStore>>,
    views: web::Data<Views>,
) -> HttpResponse {
    let id = path.into_inner().0;
    views.respond(update(store.get_ref().as_ref(), &id, form.into_inner()).await)
}

async fn update(
    store: &dyn ChatStore,
    id: &str,
    form: forms::chat::Edit,
) -> Result<HttpResponse, ChatError> {
    let msg = form.into_msg()?;
    let chat = store
        .update_msg(id, &msg, Utc::now())
        .await?
        .ok_or(ChatError::NotFound)?;
    tracing::info!(chat_id = %chat.id, "Chat updated");

    Ok(Views::redirect("/chats"))
}
