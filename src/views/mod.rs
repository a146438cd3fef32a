//! HTML rendering. Templates are compiled into the binary and share
//! `layout.html`.

use crate::errors::ChatError;
use actix_web::http::header::{self, ContentType};
use actix_web::HttpResponse;
use tera::{Context, Tera};

const TEMPLATES: [(&str, &str); 6] = [
    ("layout.html", include_str!("../../templates/layout.html")),
    ("home.html", include_str!("../../templates/home.html")),
    ("index.html", include_str!("../../templates/index.html")),
    ("new.html", include_str!("../../templates/new.html")),
    ("edit.html", include_str!("../../templates/edit.html")),
    ("error.html", include_str!("../../templates/error.html")),
];

pub struct Views {
    tera: Tera,
}

impl Views {
    pub fn new() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES)?;

        Ok(Self { tera })
    }

    /// Renders `name` as a 200 page.
    pub fn render(&self, name: &str, context: &Context) -> Result<HttpResponse, ChatError> {
        let body = self.tera.render(name, context)?;

        Ok(HttpResponse::Ok()
            .content_type(ContentType::html())
            .body(body))
    }

    pub fn redirect(location: &str) -> HttpResponse {
        HttpResponse::Found()
            .insert_header((header::LOCATION, location))
            .finish()
    }

    /// Turns a handler result into the final response, sending every error
    /// through [`Views::error_page`].
    pub fn respond(&self, result: Result<HttpResponse, ChatError>) -> HttpResponse {
        result.unwrap_or_else(|err| self.error_page(&err))
    }

    /// The error boundary: logs and renders `error.html` with the status of
    /// the error variant.
    pub fn error_page(&self, err: &ChatError) -> HttpResponse {
        match err {
            ChatError::Validation(_) | ChatError::NotFound => {
                tracing::info!("Request rejected: {}", err)
            }
            ChatError::Store(_) | ChatError::Render(_) => {
                tracing::error!("Request failed: {:?}", err)
            }
        }

        let status = err.status_code();
        let mut context = Context::new();
        context.insert("title", "Error");
        context.insert("message", err.public_message());

        match self.tera.render("error.html", &context) {
            Ok(body) => HttpResponse::build(status)
                .content_type(ContentType::html())
                .body(body),
            Err(render_err) => {
                tracing::error!("Failed to render error page: {:?}", render_err);
                HttpResponse::build(status)
                    .content_type(ContentType::plaintext())
                    .body(err.public_message().to_string())
            }
        }
    }
}
