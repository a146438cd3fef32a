use minichat::configuration::get_configuration;
use minichat::db::PgChatStore;
use minichat::startup::run;
use minichat::telemetry::{get_subscriber, init_subscriber};
use std::net::TcpListener;
use std::sync::Arc;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let subscriber = get_subscriber("minichat".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let settings = match get_configuration() {
        Ok(settings) => settings,
        Err(err) => {
            tracing::error!("Failed to read configuration: {}", err);
            std::process::exit(1);
        }
    };

    let store = match PgChatStore::connect(&settings.database_url).await {
        Ok(store) => store,
        Err(err) => {
            tracing::error!("Database connection error: {:?}", err);
            std::process::exit(1);
        }
    };
    tracing::info!("Connected to database");

    let address = settings.address();
    tracing::info!("Start server at {:?}", &address);
    let listener = TcpListener::bind(&address)?;

    run(listener, Arc::new(store))?.await
}
