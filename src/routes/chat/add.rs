use crate::db::ChatStore;
use crate::errors::ChatError;
use crate::forms;
use crate::views::Views;
use actix_web::{post, web, HttpResponse};
use chrono::Utc;
use std::sync::Arc;

/// POST /chats/create
/// Redirects to the list on success so a refresh does not resubmit.
#[tracing::instrument(name = "Add chat.", skip(form, store, views))]
#[post("/create")]
pub async fn add_handler(
    form: web::Form<forms::chat::Add>,
    store: web::Data<Arc<dyn ChatStore>>,
    views: web::Data<Views>,
) -> HttpResponse {
    views.respond(add(store.get_ref().as_ref(), form.into_inner()).await)
}

async fn add(store: &dyn ChatStore, form: forms::chat::Add) -> Result<HttpResponse, ChatError> {
    let chat = form.into_new_chat(Utc::now())?;
    let chat = store.insert(chat).await?;
    tracing::info!(chat_id = %chat.id, "Chat created");

    Ok(Views::redirect("/chats"))
}
