use minichat::db::{ChatStore, MemoryChatStore, PgChatStore};
use std::net::TcpListener;
use std::sync::Arc;

pub struct TestApp<S> {
    pub address: String,
    pub store: Arc<S>,
}

impl<S> TestApp<S> {
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}

fn start<S: ChatStore + 'static>(store: Arc<S>) -> TestApp<S> {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    let port = listener.local_addr().unwrap().port();
    let address = format!("http://127.0.0.1:{}", port);

    let server = minichat::startup::run(listener, store.clone()).expect("Failed to bind address.");
    let _ = tokio::spawn(server);
    println!("Used Port: {}", port);

    TestApp { address, store }
}

pub fn spawn_app() -> TestApp<MemoryChatStore> {
    start(Arc::new(MemoryChatStore::new()))
}

/// Runs the app against the Postgres at `DATABASE_URL`, or returns `None`
/// when it is not reachable.
pub async fn spawn_pg_app() -> Option<TestApp<PgChatStore>> {
    dotenvy::dotenv().ok();
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Skipping tests: DATABASE_URL is not set");
            return None;
        }
    };

    let store = match PgChatStore::connect(&database_url).await {
        Ok(store) => store,
        Err(err) => {
            eprintln!("Skipping tests: failed to connect to postgres: {}", err);
            return None;
        }
    };

    Some(start(Arc::new(store)))
}

/// A client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}
