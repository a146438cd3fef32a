use crate::db::ChatStore;
use crate::errors::ChatError;
use crate::views::Views;
use actix_web::{get, web, HttpResponse};
use std::sync::Arc;
use tera::Context;

/// GET /chats
/// Every chat, newest first. No paging.
#[tracing::instrument(name = "List chats.", skip(store, views))]
#[get("")]
pub async fn list_handler(
    store: web::Data<Arc<dyn ChatStore>>,
    views: web::Data<Views>,
) -> HttpResponse {
    views.respond(list(store.get_ref().as_ref(), &views).await)
}

async fn list(store: &dyn ChatStore, views: &Views) -> Result<HttpResponse, ChatError> {
    let chats = store.list_newest_first().await?;

    let mut context = Context::new();
    context.insert("title", "All Chats");
    context.insert("chats", &chats);
    views.render("index.html", &context)
}

/// GET /chats/new
#[tracing::instrument(name = "New chat form.", skip(views))]
#[get("/new")]
pub async fn new_handler(views: web::Data<Views>) -> HttpResponse {
    let mut context = Context::new();
    context.insert("title", "Create New Chat");

    views.respond(views.render("new.html", &context))
}

/// GET /chats/{id}/edit
/// A malformed id is a store error (500), an unknown one is a 404.
#[tracing::instrument(name = "Edit chat form.", skip(store, views))]
#[get("/{id}/edit")]
pub async fn edit_handler(
    path: web::Path<(String,)>,
    store: web::Data<Arc<dyn ChatStore>>,
    views: web::Data<Views>,
) -> HttpResponse {
    let id = path.into_inner().0;
    views.respond(edit_form(store.get_ref().as_ref(), &views, &id).await)
}

async fn edit_form(
    store: &dyn ChatStore,
    views: &Views,
    id: &str,
) -> Result<HttpResponse, ChatError> {
    let chat = store.find_by_id(id).await?.ok_or(ChatError::NotFound)?;

    let mut context = Context::new();
    context.insert("title", "Edit Chat");
    context.insert("chat", &chat);
    views.render("edit.html", &context)
}
