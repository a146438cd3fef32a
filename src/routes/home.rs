use crate::views::Views;
use actix_web::{get, web, HttpResponse};
use tera::Context;

#[tracing::instrument(name = "Home page.", skip(views))]
#[get("/")]
pub async fn home_handler(views: web::Data<Views>) -> HttpResponse {
    let mut context = Context::new();
    context.insert("title", "Welcome to Mini WhatsApp");

    views.respond(views.render("home.html", &context))
}
