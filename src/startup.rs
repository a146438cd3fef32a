use crate::db::ChatStore;
use crate::errors::ChatError;
use crate::middleware;
use crate::routes;
use crate::views::Views;
use actix_web::{dev::Server, error, web, App, HttpServer};
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

/// Undecodable form bodies get the 400 error page. `FormConfig` is not
/// `Send`, so each worker builds its own.
fn form_config() -> web::FormConfig {
    web::FormConfig::default().error_handler(|err, req| {
        tracing::info!("Malformed form payload: {}", err);
        let chat_error = ChatError::Validation("Malformed form data".to_string());
        let response = match req.app_data::<web::Data<Views>>() {
            Some(views) => views.error_page(&chat_error),
            None => actix_web::HttpResponse::BadRequest().finish(),
        };
        error::InternalError::from_response(err, response).into()
    })
}

/// Builds the HTTP server on `listener`. The store is created by the caller
/// and shared by every worker.
pub fn run(listener: TcpListener, store: Arc<dyn ChatStore>) -> Result<Server, std::io::Error> {
    let views = Views::new().map_err(|err| {
        tracing::error!("Failed to load templates: {:?}", err);
        std::io::Error::new(std::io::ErrorKind::Other, err)
    })?;
    let views = web::Data::new(views);
    let store = web::Data::new(store);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(middleware::MethodOverride::new())
            .wrap(TracingLogger::default())
            .service(routes::home_handler)
            .service(routes::health_check)
            .service(
                web::scope("/chats")
                    .service(routes::chat::list_handler)
                    .service(routes::chat::new_handler)
                    .service(routes::chat::add_handler)
                    .service(routes::chat::edit_handler)
                    .service(routes::chat::update_handler)
                    .service(routes::chat::delete_handler),
            )
            .service(actix_files::Files::new("/public", "./public"))
            .app_data(form_config())
            .app_data(store.clone())
            .app_data(views.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
