use clap::Parser;
use minichat::configuration::get_configuration;
use minichat::db::{ChatStore, PgChatStore};
use minichat::seed;
use minichat::telemetry::{get_subscriber, init_subscriber};

/// Wipe the chats table and load the sample chats. Development only.
#[derive(Debug, Parser)]
#[command(name = "seed", version, about)]
struct Args {
    /// Postgres connection string, defaults to the server configuration
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let subscriber = get_subscriber("minichat-seed".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    dotenvy::dotenv().ok();
    let args = Args::parse();
    let database_url = match args.database_url {
        Some(url) => url,
        None => get_configuration()?.database_url,
    };

    let store = PgChatStore::connect(&database_url).await?;
    tracing::info!("Connected to database");

    let result = seed::reset(&store).await;
    store.close().await;
    tracing::info!("Database connection closed");

    for chat in result? {
        tracing::info!(chat_id = %chat.id, from = %chat.from, to = %chat.to, "Inserted chat");
    }

    Ok(())
}
